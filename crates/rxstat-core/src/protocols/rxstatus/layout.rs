//! RXSTATUS wire layout.
//!
//! The binary body holds the receiver error word, a status word count and
//! five status groups. Each group is four little-endian `u32`s: the status
//! word followed by its priority, set and clear masks. Only the status words
//! are decoded; the masks stay in place and must not be compacted away.

pub const MESSAGE_NAME: &str = "RXSTATUS";
/// Sentence id of the ASCII form.
pub const ASCII_SENTENCE_ID: &str = "RXSTATUSA";
pub const MESSAGE_ID: u16 = 93;

/// Body length in bytes, header and CRC excluded.
pub const BINARY_LENGTH: usize = 88;

/// Receiver error word.
pub const ERROR_OFFSET: usize = 0;
// 4: number of status groups that follow.
/// Receiver status word; masks at 12, 16, 20.
pub const RXSTAT_OFFSET: usize = 8;
/// Auxiliary 1 status word; masks at 28, 32, 36.
pub const AUX1STAT_OFFSET: usize = 24;
/// Auxiliary 2 status word; masks at 44, 48, 52.
pub const AUX2STAT_OFFSET: usize = 40;
/// Auxiliary 3 status word; masks at 60, 64, 68.
pub const AUX3STAT_OFFSET: usize = 56;
/// Auxiliary 4 status word; masks at 76, 80, 84.
pub const AUX4STAT_OFFSET: usize = 72;

/// Number of body tokens in the ASCII form.
pub const ASCII_FIELD_COUNT: usize = 20;

pub const ERROR_FIELD: usize = 0;
pub const RXSTAT_FIELD: usize = 1;
pub const AUX1STAT_FIELD: usize = 6;
pub const AUX2STAT_FIELD: usize = 10;
pub const AUX3STAT_FIELD: usize = 14;
pub const AUX4STAT_FIELD: usize = 18;
