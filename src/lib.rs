//! evalquote: quote byte strings for reuse with POSIX shell `eval`.
//!
//! Turns arbitrary byte strings into tokens that a POSIX `sh` parses back to
//! the original bytes exactly. Each byte is classified once; a single
//! left-to-right scan per token decides between no quoting, one backslash
//! escape, or `'...'` framing, with three verbosity tiers.
//!
//! # Architecture
//!
//! - **[`quote`]** — The core: per-byte classification and the scan-and-emit
//!   engine ([`quote::Quoter`]).
//! - **[`input`]** — NUL-delimited record splitting over any `Read`.
//! - **[`output`]** — Named output sink: stdout, create, or append.
//! - **[`config`]** — Embedded defaults + user overlay merge.
//! - **[`logging`]** — Stderr diagnostics via `log`/`simplelog`.
//! - **[`error`]** — Fatal error taxonomy.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Error taxonomy; every variant is fatal.
pub mod error;
/// NUL-delimited record splitting.
pub mod input;
/// Stderr logging setup.
pub mod logging;
/// Named, buffered output destinations.
pub mod output;
/// Byte classification and the quoting engine.
pub mod quote;

use quote::{Delimiter, Quoter, Verbosity};

/// Quote a sequence of tokens into a byte buffer, space-delimited, with no
/// trailing newline.
///
/// This is the main entry point for tests and simple usage. For streaming
/// output or other delimiters, drive a [`quote::Quoter`] directly.
pub fn quote_tokens<'a, I>(tokens: I, verbosity: Verbosity) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut quoter = Quoter::new(Vec::new(), verbosity, Delimiter::Space);
    for token in tokens {
        quoter.push(token).expect("writes to Vec<u8> cannot fail");
    }
    quoter.finish(false).expect("writes to Vec<u8> cannot fail")
}

/// Quote a single token, space-delimiter form.
pub fn quote_one(token: &[u8], verbosity: Verbosity) -> Vec<u8> {
    quote_tokens([token], verbosity)
}
