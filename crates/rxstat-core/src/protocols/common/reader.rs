//! Field primitives shared by every message decoder.
//!
//! Byte reads go through `slice::get`, so an offset past the end of a buffer
//! yields `None` instead of a panic. Token parsers never guess: malformed text
//! is reported as `None` and left to the caller to turn into an error.

pub(crate) fn read_u8(buffer: &[u8], offset: usize) -> Option<u8> {
    buffer.get(offset).copied()
}

pub(crate) fn read_u16_le(buffer: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let bytes: [u8; 2] = buffer.get(offset..end)?.try_into().ok()?;
    Some(u16::from_le_bytes(bytes))
}

/// Read a little-endian `u32` starting at `offset`.
pub(crate) fn read_u32_le(buffer: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let bytes: [u8; 4] = buffer.get(offset..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(bytes))
}

/// Parse a base-10 `u32` token. Only ASCII digits are accepted, so a
/// leading `+` is malformed too.
pub(crate) fn parse_u32(token: &str) -> Option<u32> {
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

pub(crate) fn parse_u32_hex(token: &str) -> Option<u32> {
    u32::from_str_radix(token, 16).ok()
}

pub(crate) fn parse_f32(token: &str) -> Option<f32> {
    token.parse().ok()
}

pub(crate) fn parse_f64(token: &str) -> Option<f64> {
    token.parse().ok()
}
