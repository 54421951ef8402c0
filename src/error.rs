//! Error taxonomy. Every variant is fatal: `main` reports it on stderr and
//! exits non-zero; nothing is retried or recovered.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The `-o`/`-a` destination could not be opened.
    #[error("cannot open {path} for writing: {source}")]
    OpenOutput { path: String, source: io::Error },

    /// A write to the output sink failed. `dest` is the file path or "stdout".
    #[error("write error on {dest}: {source}")]
    Write { dest: String, source: io::Error },

    /// Flushing/closing an opened output file failed after all tokens were
    /// written.
    #[error("failure when closing {path}: {source}")]
    Close { path: String, source: io::Error },

    /// Reading the NUL-delimited stream from standard input failed.
    #[error("read error on standard input: {source}")]
    Stdin { source: io::Error },

    /// The user config file exists but could not be read.
    #[error("cannot read config file {path}: {source}")]
    ConfigRead { path: String, source: io::Error },

    /// The user config file is not valid TOML for the expected schema.
    #[error("invalid config file {path}: {source}")]
    ConfigParse { path: String, source: toml::de::Error },
}
