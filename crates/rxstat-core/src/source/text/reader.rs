use super::error::TextSourceError;
use super::layout;

/// Classification of one trimmed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Skip,
    Ascii(&'a str),
    Hex(&'a str),
}

/// Classify a line as sentence, hex frame or skippable.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use crate::source::text::reader::{LineKind, classify_line};
///
/// assert_eq!(classify_line("  // note"), LineKind::Skip);
/// assert_eq!(classify_line("#RXSTATUSA;1"), LineKind::Ascii("#RXSTATUSA;1"));
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(layout::COMMENT_PREFIX) {
        LineKind::Skip
    } else if line.starts_with(layout::SENTENCE_START) {
        LineKind::Ascii(line)
    } else {
        LineKind::Hex(line)
    }
}

/// Decode a hex frame, ignoring embedded whitespace.
///
/// # Errors
/// Returns `TextSourceError::InvalidHex` for an odd digit count or a
/// non-hex character.
pub fn decode_hex(text: &str, line: usize) -> Result<Vec<u8>, TextSourceError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits).map_err(|source| TextSourceError::InvalidHex { line, source })
}
