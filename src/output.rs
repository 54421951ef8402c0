//! The output sink: stdout or a named file, with buffered, checked writes.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

use crate::error::Error;

/// Buffered output destination that remembers its name for error reporting.
pub struct Output {
    /// `None` means stdout.
    name: Option<String>,
    writer: BufWriter<Box<dyn Write>>,
}

impl Output {
    pub fn stdout() -> Self {
        Self {
            name: None,
            writer: BufWriter::new(Box::new(io::stdout())),
        }
    }

    /// Open `path` for writing, truncating any existing content.
    pub fn create(path: &str) -> Result<Self, Error> {
        Self::open(path, false)
    }

    /// Open `path` for writing in append mode.
    pub fn append(path: &str) -> Result<Self, Error> {
        Self::open(path, true)
    }

    fn open(path: &str, append: bool) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(|source| Error::OpenOutput {
                path: path.to_string(),
                source,
            })?;
        Ok(Self {
            name: Some(path.to_string()),
            writer: BufWriter::new(Box::new(file)),
        })
    }

    /// Destination name for error messages.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("stdout")
    }

    /// Flush buffered output. A failure here after all tokens were written is
    /// reported as a close failure for files, a write error for stdout.
    pub fn finish(mut self) -> Result<(), Error> {
        self.writer.flush().map_err(|source| match self.name.take() {
            Some(path) => Error::Close { path, source },
            None => Error::Write {
                dest: "stdout".to_string(),
                source,
            },
        })
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
