use thiserror::Error;

/// Errors returned while splitting raw input into frames and sentences.
///
/// No checksum is verified here; these only cover structure needed to locate
/// the header and body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    #[error("missing binary sync bytes")]
    InvalidSync,
    #[error("invalid binary header length: {length}")]
    InvalidHeaderLength { length: u8 },
    #[error("frame too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("sentence does not start with '#'")]
    MissingSentenceStart,
    #[error("sentence has no ';' between header and body")]
    MissingHeaderSeparator,
}
