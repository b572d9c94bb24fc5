mod text;

pub use text::TextLogSource;

use thiserror::Error;

use crate::Encoding;
use text::error::TextSourceError;

/// Raw content of one input message, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    /// Complete binary frame: header, body and (unverified) CRC.
    Binary(Vec<u8>),
    /// ASCII sentence text, starting with `#`.
    Ascii(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEvent {
    /// 1-based position of the message in its input.
    pub line: usize,
    pub payload: MessagePayload,
}

/// Producer of raw messages in input order.
///
/// An `InvalidLine` error affects that line only; callers may keep calling
/// `next_message` afterwards. Any other error ends the input.
pub trait MessageSource {
    fn next_message(&mut self) -> Result<Option<MessageEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid {encoding} input on line {line}: {message}")]
    InvalidLine {
        line: usize,
        encoding: Encoding,
        message: String,
    },
}

impl From<TextSourceError> for SourceError {
    fn from(value: TextSourceError) -> Self {
        match value {
            TextSourceError::Io(err) => SourceError::Io(err),
            TextSourceError::InvalidHex { line, source } => SourceError::InvalidLine {
                line,
                encoding: Encoding::Binary,
                message: format!("invalid hex: {source}"),
            },
            TextSourceError::InvalidUtf8 { line } => SourceError::InvalidLine {
                line,
                encoding: Encoding::Ascii,
                message: "sentence is not valid UTF-8".to_string(),
            },
        }
    }
}
