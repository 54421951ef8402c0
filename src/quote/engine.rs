//! The scan-and-emit quoting engine.
//!
//! A [`Quoter`] owns the output sink and the run-wide state (verbosity,
//! delimiter style, whether anything has been emitted yet). Each call to
//! [`Quoter::push`] quotes one token; tokens come out in call order, bytes
//! within a token in scan order.

use std::io::{self, Write};

use serde::Deserialize;

use crate::quote::classify::{Category, classify};

/// How aggressively to quote.
///
/// All three tiers produce output that `eval` parses back to the original
/// bytes; they differ in how much quoting they spend doing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Prefer a single backslash escape over `'...'` framing when one
    /// escape covers the whole segment.
    Short,
    /// Frame greedily; backslash only the single quote itself.
    #[default]
    Unshort,
    /// Frame every byte that is not strictly safe. Never escapes.
    Long,
}

/// Inter-token separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// A single space.
    #[default]
    Space,
    /// ` \` followed by a newline, keeping the output one logical shell line.
    BackslashNewline,
}

impl Delimiter {
    const fn as_bytes(self) -> &'static [u8] {
        match self {
            Delimiter::Space => b" ",
            Delimiter::BackslashNewline => b" \\\n",
        }
    }
}

/// Quoting engine context. Constructed once per run; owns the sink.
pub struct Quoter<W: Write> {
    sink: W,
    verbosity: Verbosity,
    delimiter: Delimiter,
    started: bool,
}

impl<W: Write> Quoter<W> {
    pub fn new(sink: W, verbosity: Verbosity, delimiter: Delimiter) -> Self {
        Self {
            sink,
            verbosity,
            delimiter,
            started: false,
        }
    }

    /// Emit one quoted token, preceded by the delimiter for every token
    /// after the first.
    ///
    /// The token is scanned per framing segment: single quotes close a
    /// segment (a literal `'` cannot appear inside a `'...'` frame) and are
    /// emitted as `\'` between segments. Within a segment the scan tracks a
    /// "needs framing" flag and, in [`Verbosity::Short`], at most one pending
    /// escape position; a second escapable byte escalates to framing.
    pub fn push(&mut self, token: &[u8]) -> io::Result<()> {
        self.delimit()?;
        let mut start = 0;
        loop {
            let mut frame = false;
            let mut escape: Option<usize> = None;
            let mut end = start;
            let hit_quote = loop {
                if end == token.len() {
                    break false;
                }
                let cat = classify(token[end]);
                if cat == Category::QuoteBoundary {
                    break true;
                }
                if self.verbosity == Verbosity::Long {
                    if cat != Category::Safe {
                        frame = true;
                    }
                } else {
                    match cat {
                        Category::Safe | Category::SafeUnlessStrict => {}
                        // ~ and = are only special as the token's first byte,
                        // not the segment's.
                        Category::BadAtStart if end > 0 => {}
                        Category::BadAtStart | Category::Escapable => {
                            if self.verbosity == Verbosity::Unshort || escape.is_some() {
                                frame = true;
                            } else {
                                escape = Some(end);
                            }
                        }
                        Category::MustFrame => frame = true,
                        Category::QuoteBoundary => unreachable!(),
                    }
                }
                end += 1;
            };
            self.emit_segment(&token[start..end], frame, escape.map(|p| p - start))?;
            if !hit_quote {
                if token.is_empty() {
                    self.sink.write_all(b"''")?;
                }
                return Ok(());
            }
            self.sink.write_all(b"\\'")?;
            start = end + 1;
        }
    }

    /// Emit one segment in exactly one of the three forms: framed, escaped,
    /// or raw. Framing wins if both were requested (a `MustFrame` byte can
    /// land after an escape marker was already recorded).
    fn emit_segment(&mut self, segment: &[u8], frame: bool, escape: Option<usize>) -> io::Result<()> {
        if frame {
            self.sink.write_all(b"'")?;
            self.sink.write_all(segment)?;
            self.sink.write_all(b"'")
        } else if let Some(pos) = escape {
            self.sink.write_all(&segment[..pos])?;
            self.sink.write_all(b"\\")?;
            self.sink.write_all(&segment[pos..])
        } else {
            self.sink.write_all(segment)
        }
    }

    fn delimit(&mut self) -> io::Result<()> {
        if self.started {
            self.sink.write_all(self.delimiter.as_bytes())
        } else {
            self.started = true;
            Ok(())
        }
    }

    /// Finish the run: write the trailing newline unless suppressed, then
    /// hand the sink back for flushing and close handling.
    pub fn finish(mut self, trailing_newline: bool) -> io::Result<W> {
        if trailing_newline {
            self.sink.write_all(b"\n")?;
        }
        Ok(self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quoted(verbosity: Verbosity, token: &[u8]) -> String {
        let mut quoter = Quoter::new(Vec::new(), verbosity, Delimiter::Space);
        quoter.push(token).unwrap();
        String::from_utf8(quoter.finish(false).unwrap()).unwrap()
    }

    #[test]
    fn safe_token_passes_through() {
        for mode in [Verbosity::Short, Verbosity::Unshort, Verbosity::Long] {
            assert_eq!(quoted(mode, b"hello_world-1/2.txt"), "hello_world-1/2.txt");
        }
    }

    #[test]
    fn empty_token_is_two_quotes() {
        for mode in [Verbosity::Short, Verbosity::Unshort, Verbosity::Long] {
            assert_eq!(quoted(mode, b""), "''");
        }
    }

    #[test]
    fn lone_single_quote() {
        for mode in [Verbosity::Short, Verbosity::Unshort, Verbosity::Long] {
            assert_eq!(quoted(mode, b"'"), "\\'");
        }
    }

    #[test]
    fn unshort_frames_a_space() {
        assert_eq!(quoted(Verbosity::Unshort, b"a b"), "'a b'");
    }

    #[test]
    fn short_escapes_a_single_space() {
        assert_eq!(quoted(Verbosity::Short, b"a b"), "a\\ b");
    }

    #[test]
    fn short_frames_on_second_escapable() {
        assert_eq!(quoted(Verbosity::Short, b"a b c"), "'a b c'");
    }

    #[test]
    fn short_frames_on_control_byte() {
        // The escape marker never survives a MustFrame byte in the segment.
        assert_eq!(quoted(Verbosity::Short, b"a b\n"), "'a b\n'");
        assert_eq!(quoted(Verbosity::Short, b"a\nb c"), "'a\nb c'");
    }

    #[test]
    fn quote_splits_segments_independently() {
        // Segments around the quote are quiet on their own, so they stay raw.
        assert_eq!(quoted(Verbosity::Unshort, b"c'd"), "c\\'d");
        assert_eq!(quoted(Verbosity::Unshort, b"a b'c d"), "'a b'\\''c d'");
        assert_eq!(quoted(Verbosity::Short, b"a b'c d"), "a\\ b\\'c\\ d");
    }

    #[test]
    fn escape_marker_resets_per_segment() {
        // One escapable byte on each side of the quote: two single escapes,
        // not an escalation to framing.
        assert_eq!(quoted(Verbosity::Short, b"a b'c"), "a\\ b\\'c");
    }

    #[test]
    fn adjacent_quotes() {
        assert_eq!(quoted(Verbosity::Unshort, b"''"), "\\'\\'");
        assert_eq!(quoted(Verbosity::Unshort, b"a''b"), "a\\'\\'b");
    }

    #[test]
    fn tilde_only_special_at_token_start() {
        assert_eq!(quoted(Verbosity::Unshort, b"~user"), "'~user'");
        assert_eq!(quoted(Verbosity::Short, b"~user"), "\\~user");
        assert_eq!(quoted(Verbosity::Unshort, b"a~b"), "a~b");
        assert_eq!(quoted(Verbosity::Short, b"a~b"), "a~b");
    }

    #[test]
    fn equals_only_special_at_token_start() {
        assert_eq!(quoted(Verbosity::Unshort, b"=x"), "'=x'");
        assert_eq!(quoted(Verbosity::Short, b"=x"), "\\=x");
        assert_eq!(quoted(Verbosity::Unshort, b"FOO=bar"), "FOO=bar");
    }

    #[test]
    fn mid_token_position_counts_from_token_not_segment() {
        // The ~ after the quote sits at token position 2: still mid-token.
        assert_eq!(quoted(Verbosity::Unshort, b"a'~b"), "a\\'~b");
    }

    #[test]
    fn long_mode_never_escapes() {
        assert_eq!(quoted(Verbosity::Long, b"a b"), "'a b'");
        assert_eq!(quoted(Verbosity::Long, b"a+b"), "'a+b'");
        assert_eq!(quoted(Verbosity::Long, b"~user"), "'~user'");
        assert_eq!(quoted(Verbosity::Long, b"a~b"), "'a~b'");
        assert!(!quoted(Verbosity::Long, b"x y").contains("\\ "));
    }

    #[test]
    fn strict_only_bytes_pass_in_short_and_unshort() {
        assert_eq!(quoted(Verbosity::Short, b"a+b:c@d"), "a+b:c@d");
        assert_eq!(quoted(Verbosity::Unshort, b"a+b:c@d"), "a+b:c@d");
        assert_eq!(quoted(Verbosity::Long, b"a+b:c@d"), "'a+b:c@d'");
    }

    #[test]
    fn high_bytes_are_framed() {
        let mut quoter = Quoter::new(Vec::new(), Verbosity::Short, Delimiter::Space);
        quoter.push(&[b'a', 0xc3, 0xa9]).unwrap();
        assert_eq!(quoter.finish(false).unwrap(), b"'a\xc3\xa9'");
    }

    #[test]
    fn delimiter_suppressed_before_first_token() {
        let mut quoter = Quoter::new(Vec::new(), Verbosity::Unshort, Delimiter::Space);
        quoter.push(b"a").unwrap();
        quoter.push(b"b").unwrap();
        quoter.push(b"").unwrap();
        assert_eq!(quoter.finish(true).unwrap(), b"a b ''\n");
    }

    #[test]
    fn backslash_newline_delimiter() {
        let mut quoter = Quoter::new(Vec::new(), Verbosity::Unshort, Delimiter::BackslashNewline);
        quoter.push(b"a").unwrap();
        quoter.push(b"b c").unwrap();
        assert_eq!(quoter.finish(true).unwrap(), b"a \\\n'b c'\n");
    }

    #[test]
    fn no_tokens_still_honors_trailing_newline() {
        let quoter = Quoter::new(Vec::new(), Verbosity::Unshort, Delimiter::Space);
        assert_eq!(quoter.finish(true).unwrap(), b"\n");
        let quoter = Quoter::new(Vec::new(), Verbosity::Unshort, Delimiter::Space);
        assert_eq!(quoter.finish(false).unwrap(), b"");
    }
}
