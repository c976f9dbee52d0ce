//! refsig: extract function signatures from a DocBook reference manual.
//!
//! Reads the PHP manual's `.manual.xml` (or any DocBook document laid out the
//! same way) in a single streaming pass and renders every function entry of
//! the allowed books:
//!
//! - **stdout mode**: `refsig .manual.xml > stubs.php`
//! - **directory mode**: `refsig -o stubs/ -f markdown .manual.xml`

mod config;
mod error;
mod extract;
mod model;
mod output;
mod render;
mod source;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::Config;
use extract::Extractor;
use render::Renderer;
use source::xml::XmlSource;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "refsig",
    about = "Extract function signatures from a DocBook reference manual"
)]
struct Cli {
    /// Path to the manual XML, or `-` to read stdin
    manual: PathBuf,

    /// Output directory; one file per function. Prints to stdout if omitted.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: stub (default), markdown, json
    #[arg(short = 'f', long, default_value = "stub")]
    format: String,

    /// Book id to extract from. Can be given multiple times; replaces the
    /// built-in list of maintained extensions.
    #[arg(long = "allow", value_name = "ID")]
    allow: Vec<String>,

    /// File with additional book ids, one per line
    #[arg(long, value_name = "PATH")]
    allow_file: Option<PathBuf>,

    /// xml:id of the set holding the function reference
    #[arg(long, value_name = "ID", default_value = config::FUNCTION_SET)]
    function_set: String,

    /// Log skipped entries and names
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let renderer = render::create_renderer(&cli.format)?;

    let mut config = Config::new(&cli.allow, &cli.function_set);
    if let Some(ref path) = cli.allow_file {
        config.extend_from_file(path)?;
    }

    let emitted = if cli.manual.as_os_str() == "-" {
        let stdin = io::stdin();
        let source = XmlSource::new(stdin.lock());
        run(&config, source, renderer.as_ref(), cli.output.as_deref())
            .context("failed to process stdin")?
    } else {
        if !cli.manual.is_file() {
            bail!("documentation file not found: {}", cli.manual.display());
        }
        let file = File::open(&cli.manual)
            .with_context(|| format!("failed to open {}", cli.manual.display()))?;
        let source = XmlSource::new(BufReader::new(file));
        run(&config, source, renderer.as_ref(), cli.output.as_deref())
            .with_context(|| format!("failed to process {}", cli.manual.display()))?
    };

    if emitted == 0 {
        warn!("no functions extracted");
    }
    info!(emitted, "done");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Extract every record from `source` into the selected output.
fn run<R: BufRead>(
    config: &Config,
    mut source: XmlSource<R>,
    renderer: &dyn Renderer,
    out_dir: Option<&Path>,
) -> Result<usize> {
    let mut extractor = Extractor::new(config);
    match out_dir {
        Some(dir) => {
            let mut sink = output::Directory::create(renderer, dir).with_context(|| {
                format!("failed to create output directory: {}", dir.display())
            })?;
            Ok(extractor.run(&mut source, &mut sink)?)
        }
        None => {
            let stdout = io::stdout();
            let mut sink = output::Stream::new(renderer, BufWriter::new(stdout.lock()));
            let emitted = extractor.run(&mut source, &mut sink)?;
            sink.into_inner().flush().context("failed to write stdout")?;
            Ok(emitted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["refsig", "manual.xml"]).unwrap();
        assert_eq!(cli.format, "stub");
        assert_eq!(cli.function_set, "funcref");
        assert!(cli.allow.is_empty());
        assert!(cli.output.is_none());
    }

    #[test]
    fn repeated_allow() {
        let cli = Cli::try_parse_from([
            "refsig",
            "--allow",
            "book.array",
            "--allow",
            "book.strings",
            "-",
        ])
        .unwrap();
        assert_eq!(cli.allow, vec!["book.array", "book.strings"]);
        assert_eq!(cli.manual, PathBuf::from("-"));
    }

    #[test]
    fn manual_is_required() {
        assert!(Cli::try_parse_from(["refsig"]).is_err());
    }
}
