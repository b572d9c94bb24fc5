use crate::protocols::common::reader;

use super::error::HeaderError;
use super::layout;

pub struct BinaryHeaderReader<'a> {
    header: &'a [u8],
}

impl<'a> BinaryHeaderReader<'a> {
    pub fn new(header: &'a [u8]) -> Self {
        Self { header }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), HeaderError> {
        if self.header.len() < needed {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, HeaderError> {
        reader::read_u8(self.header, offset).ok_or_else(|| self.too_short(offset + 1))
    }

    pub fn read_u16_le(&self, offset: usize) -> Result<u16, HeaderError> {
        reader::read_u16_le(self.header, offset).ok_or_else(|| self.too_short(offset + 2))
    }

    pub fn read_u32_le(&self, offset: usize) -> Result<u32, HeaderError> {
        reader::read_u32_le(self.header, offset).ok_or_else(|| self.too_short(offset + 4))
    }

    fn too_short(&self, needed: usize) -> HeaderError {
        HeaderError::TooShort {
            needed,
            actual: self.header.len(),
        }
    }
}

pub struct AsciiHeaderReader<'a> {
    fields: &'a [String],
}

impl<'a> AsciiHeaderReader<'a> {
    pub fn new(fields: &'a [String]) -> Self {
        Self { fields }
    }

    pub fn require_count(&self, expected: usize) -> Result<(), HeaderError> {
        if self.fields.len() != expected {
            return Err(HeaderError::FieldCount {
                expected,
                actual: self.fields.len(),
            });
        }
        Ok(())
    }

    pub fn read_str(&self, index: usize, field: &'static str) -> Result<&'a str, HeaderError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(HeaderError::InvalidField { field })
    }

    pub fn read_u32(&self, index: usize, field: &'static str) -> Result<u32, HeaderError> {
        self.read_with(index, field, reader::parse_u32)
    }

    pub fn read_u32_hex(&self, index: usize, field: &'static str) -> Result<u32, HeaderError> {
        self.read_with(index, field, reader::parse_u32_hex)
    }

    pub fn read_f32(&self, index: usize, field: &'static str) -> Result<f32, HeaderError> {
        self.read_with(index, field, reader::parse_f32)
    }

    pub fn read_f64(&self, index: usize, field: &'static str) -> Result<f64, HeaderError> {
        self.read_with(index, field, reader::parse_f64)
    }

    fn read_with<T>(
        &self,
        index: usize,
        field: &'static str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T, HeaderError> {
        let token = self.read_str(index, field)?;
        parse(token).ok_or(HeaderError::InvalidField { field })
    }
}

/// Map a binary time status code to its name.
///
/// # Examples
/// ```
/// use rxstat_core::protocols::header::reader::time_status_name;
///
/// assert_eq!(time_status_name(180), "FINESTEERING");
/// assert_eq!(time_status_name(1), "UNKNOWN");
/// ```
pub fn time_status_name(code: u8) -> &'static str {
    lookup(layout::TIME_STATUS_NAMES, code).unwrap_or(layout::TIME_STATUS_UNKNOWN)
}

/// Map a binary port address to its name, e.g. `0x20` -> `COM1`,
/// `0x43` -> `COM2_3`.
pub fn port_name(address: u8) -> String {
    let group = address & layout::PORT_GROUP_MASK;
    let virtual_port = address & layout::VIRTUAL_PORT_MASK;
    if group == 0 {
        return lookup(layout::PORT_BROADCAST_NAMES, virtual_port)
            .unwrap_or(layout::PORT_UNKNOWN)
            .to_string();
    }
    match lookup(layout::PORT_GROUP_NAMES, group) {
        Some(name) if virtual_port == 0 => name.to_string(),
        Some(name) => format!("{name}_{virtual_port}"),
        None => layout::PORT_UNKNOWN.to_string(),
    }
}

fn lookup(table: &[(u8, &'static str)], key: u8) -> Option<&'static str> {
    table
        .iter()
        .find(|(value, _)| *value == key)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::{AsciiHeaderReader, BinaryHeaderReader, port_name, time_status_name};
    use crate::protocols::header::error::HeaderError;

    #[test]
    fn binary_reader_reports_needed_bytes() {
        let header = [0u8; 10];
        let reader = BinaryHeaderReader::new(&header);
        assert_eq!(
            reader.read_u32_le(8),
            Err(HeaderError::TooShort {
                needed: 12,
                actual: 10
            })
        );
        assert!(reader.require_len(28).is_err());
    }

    #[test]
    fn ascii_reader_names_invalid_field() {
        let fields = vec!["COM1".to_string(), "x".to_string()];
        let reader = AsciiHeaderReader::new(&fields);
        assert_eq!(reader.read_str(0, "port"), Ok("COM1"));
        assert_eq!(
            reader.read_u32(1, "sequence_num"),
            Err(HeaderError::InvalidField {
                field: "sequence_num"
            })
        );
        assert_eq!(
            reader.read_u32(5, "gps_week_num"),
            Err(HeaderError::InvalidField {
                field: "gps_week_num"
            })
        );
    }

    #[test]
    fn time_status_names() {
        assert_eq!(time_status_name(20), "UNKNOWN");
        assert_eq!(time_status_name(160), "FINE");
        assert_eq!(time_status_name(180), "FINESTEERING");
        assert_eq!(time_status_name(181), "UNKNOWN");
    }

    #[test]
    fn port_names() {
        assert_eq!(port_name(0x20), "COM1");
        assert_eq!(port_name(0x43), "COM2_3");
        assert_eq!(port_name(0xc0), "THISPORT");
        assert_eq!(port_name(0x08), "ALL_PORTS");
        assert_eq!(port_name(0x80), "UNKNOWN");
        assert_eq!(port_name(0x1f), "UNKNOWN");
    }
}
