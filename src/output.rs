//! Output sinks: where rendered records end up.

use crate::error::{Error, Result};
use crate::extract::Sink;
use crate::model::Function;
use crate::render::Renderer;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// All records concatenated onto one writer (stdout in practice).
pub struct Stream<'r, W: Write> {
    renderer: &'r dyn Renderer,
    writer: W,
    started: bool,
}

impl<'r, W: Write> Stream<'r, W> {
    pub fn new(renderer: &'r dyn Renderer, writer: W) -> Self {
        Self {
            renderer,
            writer,
            started: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for Stream<'_, W> {
    fn emit(&mut self, function: Function) -> Result<()> {
        if self.started {
            self.writer.write_all(self.renderer.separator().as_bytes())?;
        } else {
            self.writer.write_all(self.renderer.header().as_bytes())?;
            self.started = true;
        }
        self.writer
            .write_all(self.renderer.render(&function).as_bytes())?;
        Ok(())
    }
}

/// One file per record, `<name>.<ext>`, in an output directory.
pub struct Directory<'r> {
    renderer: &'r dyn Renderer,
    dir: PathBuf,
}

impl<'r> Directory<'r> {
    /// Create the directory if it does not exist yet.
    pub fn create(renderer: &'r dyn Renderer, dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|source| Error::Write {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(Self {
            renderer,
            dir: dir.to_path_buf(),
        })
    }
}

/// Whether `name` stays a single file inside the output directory.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\'])
}

impl Sink for Directory<'_> {
    fn emit(&mut self, function: Function) -> Result<()> {
        if !is_plain_file_name(&function.name) {
            return Err(Error::UnsafeFileName(function.name));
        }
        let path = self
            .dir
            .join(format!("{}.{}", function.name, self.renderer.file_extension()));
        let mut content = String::from(self.renderer.header());
        content.push_str(&self.renderer.render(&function));
        fs::write(&path, content).map_err(|source| Error::Write { path, source })
    }
}
