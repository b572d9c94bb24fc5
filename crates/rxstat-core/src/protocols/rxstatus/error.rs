use thiserror::Error;

use crate::protocols::header::HeaderError;

/// Errors returned by RXSTATUS decoding.
///
/// # Examples
/// ```
/// use rxstat_core::protocols::rxstatus::error::RxStatusError;
///
/// let err = RxStatusError::LengthMismatch { expected: 88, actual: 40 };
/// assert!(err.to_string().contains("expected 88 bytes, got 40"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RxStatusError {
    #[error("unexpected RXSTATUS message length: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("unexpected number of RXSTATUS message fields: expected {expected}, got {actual}")]
    FieldCountMismatch { expected: usize, actual: usize },
    /// Every malformed field is listed, in body order.
    #[error("invalid field in RXSTATUS message: {}", fields.join(", "))]
    InvalidField { fields: Vec<&'static str> },
    #[error(transparent)]
    Header(#[from] HeaderError),
}
