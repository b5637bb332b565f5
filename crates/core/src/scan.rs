//! Primitive token scanning over buffered file text

use std::path::Path;

use log::trace;

use crate::error::{Error, Result};

/// Bytes that may appear inside a numeric token
fn is_numeric_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'.' | b'-' | b'+' | b'e' | b'E')
}

/// Cursor over fully-buffered text with float and line primitives
///
/// The result files mix free-form comments (`#` to end of line),
/// whitespace-insensitive tokens, and marker lines whose occurrence count
/// locates each data section. The locator rescans from the start of the
/// content, so the whole file is buffered rather than streamed.
///
/// ```rust
/// # use ltools_core::Scanner;
/// let mut scanner = Scanner::new("x: 1.5e-1 42");
/// assert_eq!(scanner.read_float().unwrap(), 0.15);
/// assert_eq!(scanner.read_float().unwrap(), 42.0);
/// ```
#[derive(Debug)]
pub struct Scanner {
    text: String,
    cursor: usize,
}

impl Scanner {
    /// Scanner over text already in memory
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
        }
    }

    /// Buffer the entire file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(std::fs::read_to_string(path)?))
    }

    /// Reset the cursor to the start of the content
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Compare the leading bytes of the content without moving the cursor
    pub fn starts_with(&self, marker: &str) -> bool {
        self.text.starts_with(marker)
    }

    /// First `n` characters of the content, for error context
    pub fn leading(&self, n: usize) -> String {
        self.text.chars().take(n).collect()
    }

    /// Scan the next float token
    ///
    /// Skips anything that cannot be part of a number, then accumulates
    /// digits, signs, a decimal point, and an exponent marker until a blank
    /// or unrelated byte terminates the token. The terminator is consumed.
    ///
    /// Fails with [Error::NoNumber] when the content ends before anything
    /// was accumulated, and [Error::MalformedNumber] when the accumulated
    /// token does not parse (e.g. `1.2.3`).
    pub fn read_float(&mut self) -> Result<f64> {
        let bytes = self.text.as_bytes();
        let mut token = String::new();

        while self.cursor < bytes.len() {
            let byte = bytes[self.cursor];
            self.cursor += 1;
            if is_numeric_byte(byte) {
                token.push(byte as char);
            } else if !token.is_empty() {
                break;
            }
        }

        if token.is_empty() {
            return Err(Error::NoNumber);
        }
        token.parse().map_err(|_| Error::MalformedNumber(token))
    }

    /// Scan exactly `n` float tokens
    ///
    /// Fails with [Error::TruncatedData] when the content is exhausted
    /// before `n` values were produced.
    pub fn read_floats(&mut self, n: usize) -> Result<Vec<f64>> {
        let mut values = Vec::with_capacity(n);
        for found in 0..n {
            match self.read_float() {
                Ok(value) => values.push(value),
                Err(Error::NoNumber) => {
                    return Err(Error::TruncatedData { expected: n, found })
                }
                Err(e) => return Err(e),
            }
        }
        Ok(values)
    }

    /// Next physical line, without any comment or whitespace handling
    ///
    /// Returns `None` once the content is exhausted. Trailing `\r` is
    /// dropped so CRLF files read the same as LF files.
    pub fn read_raw_line(&mut self) -> Option<&str> {
        if self.cursor >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.cursor..];
        let (line, advance) = match rest.find('\n') {
            Some(index) => (&rest[..index], index + 1),
            None => (rest, rest.len()),
        };
        self.cursor += advance;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Skip `n` physical lines
    pub fn skip_raw_lines(&mut self, n: usize) {
        for _ in 0..n {
            if self.read_raw_line().is_none() {
                break;
            }
        }
    }

    /// Next data line: comments stripped, whitespace collapsed to single
    /// spaces, leading/trailing whitespace trimmed, blank results skipped
    ///
    /// Fails with [Error::EndOfInput] when the content ends without
    /// producing a non-empty line.
    pub fn next_line(&mut self) -> Result<String> {
        loop {
            let Some(raw) = self.read_raw_line() else {
                return Err(Error::EndOfInput);
            };
            let stripped = raw.split('#').next().unwrap_or("");
            let line = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }

    /// Rewind, then leave the cursor just after the `occurrence`-th line
    /// containing `marker`
    ///
    /// Lines are comment-stripped before the substring check. Occurrences
    /// always count from the start of the content, never from the current
    /// cursor, so callers walking several sequential sections must request
    /// increasing occurrence numbers. Returns false with the cursor at the
    /// end of the content when the marker is not found `occurrence` times.
    pub fn skip_to_line_after(&mut self, marker: &str, occurrence: usize) -> bool {
        self.rewind();
        let mut count = 0;
        while let Some(raw) = self.read_raw_line() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.contains(marker) {
                count += 1;
                if count == occurrence {
                    trace!("\"{marker}\" occurrence {occurrence} located");
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_lexing() {
        let mut scanner = Scanner::new("  x= 12.5, also -3e-2;");
        assert_eq!(scanner.read_float().unwrap(), 12.5);
        assert_eq!(scanner.read_float().unwrap(), -0.03);
        assert!(matches!(scanner.read_float(), Err(Error::NoNumber)));
    }

    #[test]
    fn float_terminates_on_unrelated_byte() {
        let mut scanner = Scanner::new("42,7");
        assert_eq!(scanner.read_float().unwrap(), 42.0);
        assert_eq!(scanner.read_float().unwrap(), 7.0);
    }

    #[test]
    fn malformed_token_is_reported() {
        let mut scanner = Scanner::new("1.2.3 ");
        assert!(matches!(
            scanner.read_float(),
            Err(Error::MalformedNumber(token)) if token == "1.2.3"
        ));
    }

    #[test]
    fn fixed_count_blocks_fail_when_truncated() {
        let mut scanner = Scanner::new("1 2");
        assert!(matches!(
            scanner.read_floats(3),
            Err(Error::TruncatedData { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn data_lines_are_normalised() {
        let mut scanner = Scanner::new("# header only\n\n  1.0 \t 2.0  # trailing\nnext\n");
        assert_eq!(scanner.next_line().unwrap(), "1.0 2.0");
        assert_eq!(scanner.next_line().unwrap(), "next");
        assert!(matches!(scanner.next_line(), Err(Error::EndOfInput)));
    }

    #[test]
    fn marker_occurrences_count_from_the_start() {
        let text = "MARK one\nfiller\nMARK two\nafter second\n";
        let mut scanner = Scanner::new(text);

        assert!(scanner.skip_to_line_after("MARK", 1));
        assert_eq!(scanner.next_line().unwrap(), "filler");

        // repeated occurrence=1 requests land in the same place
        assert!(scanner.skip_to_line_after("MARK", 1));
        assert_eq!(scanner.next_line().unwrap(), "filler");

        assert!(scanner.skip_to_line_after("MARK", 2));
        assert_eq!(scanner.next_line().unwrap(), "after second");

        assert!(!scanner.skip_to_line_after("MARK", 3));
        assert!(scanner.read_raw_line().is_none());
    }

    #[test]
    fn commented_markers_are_not_counted() {
        let mut scanner = Scanner::new("# MARK in a comment\nMARK real\npayload\n");
        assert!(scanner.skip_to_line_after("MARK", 1));
        assert_eq!(scanner.next_line().unwrap(), "payload");
    }

    #[test]
    fn magic_check_does_not_consume() {
        let mut scanner = Scanner::new("A1 \t# version\n1000\n");
        assert!(scanner.starts_with("A1"));
        assert!(!scanner.starts_with("mcmloA2.0"));
        assert_eq!(scanner.next_line().unwrap(), "A1");
    }
}
