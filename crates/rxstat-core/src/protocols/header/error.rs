use thiserror::Error;

/// Errors returned by header decoding.
///
/// # Examples
/// ```
/// use rxstat_core::protocols::header::error::HeaderError;
///
/// let err = HeaderError::InvalidField { field: "gps_seconds" };
/// assert!(err.to_string().contains("gps_seconds"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("header too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("unexpected number of header fields: expected {expected}, got {actual}")]
    FieldCount { expected: usize, actual: usize },
    #[error("invalid header field: {field}")]
    InvalidField { field: &'static str },
}
