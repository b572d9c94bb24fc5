use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex on line {line}: {source}")]
    InvalidHex {
        line: usize,
        source: hex::FromHexError,
    },
    #[error("sentence on line {line} is not valid UTF-8")]
    InvalidUtf8 { line: usize },
}
