use crate::protocols::common::reader;

use super::error::RxStatusError;
use super::layout;

pub struct RxStatusReader<'a> {
    data: &'a [u8],
}

impl<'a> RxStatusReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn require_exact_len(&self, expected: usize) -> Result<(), RxStatusError> {
        if self.data.len() != expected {
            return Err(RxStatusError::LengthMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Read a status word. Callers run `require_exact_len` first, so a
    /// failed read only happens on a body that is not `BINARY_LENGTH` long.
    pub fn read_u32_le(&self, offset: usize) -> Result<u32, RxStatusError> {
        reader::read_u32_le(self.data, offset).ok_or(RxStatusError::LengthMismatch {
            expected: layout::BINARY_LENGTH,
            actual: self.data.len(),
        })
    }
}

/// Token reader that keeps going past malformed fields so the final error
/// names all of them.
pub struct RxStatusFields<'a> {
    body: &'a [String],
    invalid: Vec<&'static str>,
}

impl<'a> RxStatusFields<'a> {
    pub fn new(body: &'a [String]) -> Self {
        Self {
            body,
            invalid: Vec::new(),
        }
    }

    pub fn require_count(&self, expected: usize) -> Result<(), RxStatusError> {
        if self.body.len() != expected {
            return Err(RxStatusError::FieldCountMismatch {
                expected,
                actual: self.body.len(),
            });
        }
        Ok(())
    }

    pub fn read_u32(&mut self, index: usize, field: &'static str) -> Option<u32> {
        let value = self
            .body
            .get(index)
            .and_then(|token| reader::parse_u32(token));
        if value.is_none() {
            self.invalid.push(field);
        }
        value
    }

    pub fn into_error(self) -> RxStatusError {
        RxStatusError::InvalidField {
            fields: self.invalid,
        }
    }
}
