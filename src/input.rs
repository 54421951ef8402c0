//! NUL-delimited record splitting over any `Read`.
//!
//! The splitter keeps an explicit accumulator of unconsumed bytes and refills
//! it in fixed-size chunks, so a record that straddles a refill boundary is
//! just more accumulation, not a special case. The already-scanned prefix
//! length is remembered across refills to avoid rescanning.

use std::io::{self, Read};
use std::mem;

/// Refill granularity.
const CHUNK: usize = 0x1000;

/// Splits a byte stream into NUL-delimited records.
///
/// NUL is a separator: `x\0y` yields `x` then `y`, and a final record with no
/// trailing NUL is still emitted. When the stream's last byte is a NUL, the
/// implied empty record after it is suppressed unless `trailing_empty` is set.
pub struct RecordSplitter<R> {
    inner: R,
    chunk: Vec<u8>,
    /// Unconsumed tail of the stream.
    buf: Vec<u8>,
    /// Prefix of `buf` already scanned for a NUL.
    scanned: usize,
    eof: bool,
    /// Whether every byte consumed so far ended on a record separator.
    ends_on_separator: bool,
    trailing_empty: bool,
}

impl<R: Read> RecordSplitter<R> {
    pub fn new(inner: R, trailing_empty: bool) -> Self {
        Self::with_chunk_size(inner, trailing_empty, CHUNK)
    }

    fn with_chunk_size(inner: R, trailing_empty: bool, chunk: usize) -> Self {
        Self {
            inner,
            chunk: vec![0; chunk],
            buf: Vec::new(),
            scanned: 0,
            eof: false,
            ends_on_separator: false,
            trailing_empty,
        }
    }

    /// Return the next record, or `None` once the stream is exhausted.
    pub fn next_record(&mut self) -> io::Result<Option<Vec<u8>>> {
        loop {
            if let Some(offset) = self.buf[self.scanned..].iter().position(|&b| b == 0) {
                let nul = self.scanned + offset;
                let record = self.buf[..nul].to_vec();
                self.buf.drain(..=nul);
                self.scanned = 0;
                self.ends_on_separator = true;
                return Ok(Some(record));
            }
            self.scanned = self.buf.len();
            if self.eof {
                if !self.buf.is_empty() {
                    self.scanned = 0;
                    self.ends_on_separator = false;
                    return Ok(Some(mem::take(&mut self.buf)));
                }
                if self.ends_on_separator && self.trailing_empty {
                    self.ends_on_separator = false;
                    return Ok(Some(Vec::new()));
                }
                return Ok(None);
            }
            let n = self.inner.read(&mut self.chunk)?;
            if n == 0 {
                self.eof = true;
            } else {
                self.buf.extend_from_slice(&self.chunk[..n]);
            }
        }
    }
}
