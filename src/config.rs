//! Extraction settings resolved before the document is read.

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// `xml:id` of the `<set>` holding the function reference.
pub const FUNCTION_SET: &str = "funcref";

/// PHP itself plus the bundled and actively maintained external extensions.
pub const DEFAULT_ALLOW_LIST: &[&str] = &[
    // Core
    "book.array",
    "book.classobj",
    "book.csprng",
    "book.datetime",
    "book.dir",
    "book.errorfunc",
    "book.exec",
    "book.filesystem",
    "book.filter",
    "book.funchand",
    "book.hash",
    "book.info",
    "book.mail",
    "book.math",
    "book.misc",
    "book.network",
    "book.outcontrol",
    "book.password",
    "book.phar",
    "book.reflection",
    "book.session",
    "book.sodium",
    "book.spl",
    "book.stream",
    "book.strings",
    "book.tokenizer",
    "book.url",
    "book.var",
    // Bundled
    "book.apache",
    "book.bc",
    "book.calendar",
    "book.com",
    "book.ctype",
    "book.dba",
    "book.exif",
    "book.fileinfo",
    "book.ftp",
    "book.iconv",
    "book.image",
    "book.intl",
    "book.json",
    "book.mbstring",
    "book.nsapi",
    "book.opcache",
    "book.pcntl",
    "book.pcre",
    "book.pdo",
    "book.posix",
    "book.sem",
    "book.shmop",
    "book.sockets",
    "book.sqlite3",
    "book.xmlrpc",
    "book.zlib",
    // External
    "book.bzip2",
    "book.curl",
    "book.libxml",
    "book.openssl",
    "book.simplexml",
    "book.xml",
    "book.xmlreader",
    "book.xmlwriter",
    "book.xsl",
    "book.zip",
];

#[derive(Debug, Clone)]
pub struct Config {
    /// Book ids whose entries may be emitted
    pub allow_list: HashSet<String>,
    pub function_set: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_list: DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect(),
            function_set: FUNCTION_SET.to_string(),
        }
    }
}

impl Config {
    /// Built-in allow-list, or `allow` when any ids were given explicitly.
    pub fn new(allow: &[String], function_set: &str) -> Self {
        let mut config = Self {
            function_set: function_set.to_string(),
            ..Self::default()
        };
        if !allow.is_empty() {
            config.allow_list = allow.iter().cloned().collect();
        }
        config
    }

    /// Add the ids listed in a file, one per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read allow-list: {}", path.display()))?;
        self.allow_list.extend(parse_allow_list(&content));
        Ok(())
    }

    pub fn is_allowed(&self, id: &str) -> bool {
        self.allow_list.contains(id)
    }
}

fn parse_allow_list(content: &str) -> impl Iterator<Item = String> + '_ {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_allows_core_books() {
        let config = Config::default();
        assert!(config.is_allowed("book.array"));
        assert!(config.is_allowed("book.zip"));
        assert!(!config.is_allowed("book.mysql"));
        assert_eq!(config.function_set, "funcref");
    }

    #[test]
    fn explicit_ids_replace_defaults() {
        let config = Config::new(&["book.custom".to_string()], "funcs");
        assert!(config.is_allowed("book.custom"));
        assert!(!config.is_allowed("book.array"));
        assert_eq!(config.function_set, "funcs");
    }

    #[test]
    fn reads_ids_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"# extras\nbook.mysqli\n\n  book.redis  \n").unwrap();

        let mut config = Config::new(&["book.array".to_string()], FUNCTION_SET);
        config.extend_from_file(file.path()).unwrap();
        assert!(config.is_allowed("book.mysqli"));
        assert!(config.is_allowed("book.redis"));
        assert!(config.is_allowed("book.array"));
        assert!(!config.is_allowed("# extras"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = Config::default();
        let err = config
            .extend_from_file(Path::new("/nonexistent/allow.txt"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to read allow-list"));
    }
}
