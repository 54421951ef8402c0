//! Byte classification for POSIX shell quoting.
//!
//! Every byte value 0–255 maps to exactly one [`Category`]. The mapping is
//! fixed: it depends only on `sh` lexical rules, never on input or options.

/// Quoting category of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Usable anywhere unquoted: alphanumerics and `_ - / .`.
    Safe,
    /// Safe except under [`Verbosity::Long`]: `+ : , % @`.
    ///
    /// [`Verbosity::Long`]: crate::quote::Verbosity::Long
    SafeUnlessStrict,
    /// `~` and `=`: need quoting as the first byte of a token, harmless
    /// at any later position.
    BadAtStart,
    /// Space and shell metacharacters that a single backslash neutralizes.
    Escapable,
    /// The single quote. A literal `'` can never sit inside a `'...'` frame,
    /// so it splits a token into independently framed segments.
    QuoteBoundary,
    /// Everything else (control bytes, NUL, all bytes >= 0x80): only safe
    /// inside a `'...'` frame.
    MustFrame,
}

/// Classify one byte. Total over all 256 values.
pub const fn classify(byte: u8) -> Category {
    match byte {
        b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'/' | b'.' => Category::Safe,
        b'+' | b':' | b',' | b'%' | b'@' => Category::SafeUnlessStrict,
        b'~' | b'=' => Category::BadAtStart,
        b' ' | b'?' | b'*' | b'"' | b'`' | b'#' | b';' | b'<' | b'>' | b'|' | b'^' | b'\\'
        | b'&' | b'$' | b'{' | b'}' | b'(' | b')' | b'[' | b']' => Category::Escapable,
        b'\'' => Category::QuoteBoundary,
        _ => Category::MustFrame,
    }
}
