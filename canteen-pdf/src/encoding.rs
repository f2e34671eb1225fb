//! WinAnsi encoding utilities for the standard PDF fonts
//!
//! The base-14 Type1 fonts are addressed through `WinAnsiEncoding`
//! (windows-1252). This module provides utilities for:
//! - Converting UTF-8 text to windows-1252 bytes
//! - Substituting symbols the base fonts cannot draw
//! - Escaping bytes for PDF literal strings

use tracing::instrument;

/// Replacement drawn for the Indian rupee sign, which WinAnsi lacks
pub const RUPEE_FALLBACK: &str = "Rs.";

/// Convert UTF-8 text to WinAnsi bytes
///
/// ASCII passes through unchanged. `₹` becomes [`RUPEE_FALLBACK`] and any
/// other character outside windows-1252 becomes `?`.
#[instrument(level = "trace", skip(s), fields(len = s.len()))]
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut buf = [0u8; 4];

    for c in s.chars() {
        if c.is_ascii() {
            out.push(c as u8);
            continue;
        }
        if c == '₹' {
            out.extend_from_slice(RUPEE_FALLBACK.as_bytes());
            continue;
        }
        let (bytes, _, had_errors) = encoding_rs::WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if had_errors {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Escape bytes for use inside a PDF literal string `( ... )`
pub fn escape_literal(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 8);
    for &b in bytes {
        match b {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(b),
        }
    }
    out
}

/// Encode text as a complete PDF literal string, parentheses included
pub(crate) fn literal(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() + 2);
    out.push(b'(');
    out.extend(escape_literal(&to_win_ansi(s)));
    out.push(b')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(to_win_ansi("Samosa x2"), b"Samosa x2");
    }

    #[test]
    fn test_rupee_substitution() {
        assert_eq!(to_win_ansi("₹21.00"), b"Rs.21.00");
    }

    #[test]
    fn test_latin1_characters() {
        // é is 0xE9 in windows-1252
        assert_eq!(to_win_ansi("Caf\u{e9}"), b"Caf\xe9");
        // € lives at 0x80
        assert_eq!(to_win_ansi("\u{20ac}"), vec![0x80]);
    }

    #[test]
    fn test_unmappable_becomes_question_mark() {
        assert_eq!(to_win_ansi("Tea \u{8336}"), b"Tea ?");
    }

    #[test]
    fn test_escape_literal() {
        assert_eq!(escape_literal(b"a(b)c\\d"), b"a\\(b\\)c\\\\d");
        assert_eq!(escape_literal(b"x\ny"), b"x\\ny");
    }

    #[test]
    fn test_literal_wraps_in_parentheses() {
        assert_eq!(literal("Price (₹)"), b"(Price \\(Rs.\\))");
    }
}
