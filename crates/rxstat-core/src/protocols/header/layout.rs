//! NovAtel message header layout, binary (little-endian) and ASCII.

use std::ops::Range;

pub const SYNC: [u8; 3] = [0xaa, 0x44, 0x12];
pub const SYNC_RANGE: Range<usize> = 0..3;
pub const HEADER_LENGTH_OFFSET: usize = 3;
pub const MESSAGE_ID_OFFSET: usize = 4;
pub const MESSAGE_TYPE_OFFSET: usize = 6;
pub const PORT_ADDRESS_OFFSET: usize = 7;
/// Body length in bytes, header and CRC excluded.
pub const MESSAGE_LENGTH_OFFSET: usize = 8;
pub const SEQUENCE_OFFSET: usize = 10;
/// Idle time in half-percent units.
pub const IDLE_TIME_OFFSET: usize = 12;
pub const TIME_STATUS_OFFSET: usize = 13;
pub const WEEK_OFFSET: usize = 14;
/// Milliseconds into the GPS week.
pub const GPS_MS_OFFSET: usize = 16;
pub const RECEIVER_STATUS_OFFSET: usize = 20;
pub const RESERVED_OFFSET: usize = 24;
pub const SOFTWARE_VERSION_OFFSET: usize = 26;

pub const BINARY_HEADER_LEN: usize = 28;
pub const CRC_LEN: usize = 4;

pub const IDLE_TIME_SCALE: f32 = 0.5;
pub const MS_PER_SECOND: f64 = 1000.0;

pub const ASCII_NAME_FIELD: usize = 0;
pub const ASCII_PORT_FIELD: usize = 1;
pub const ASCII_SEQUENCE_FIELD: usize = 2;
pub const ASCII_IDLE_FIELD: usize = 3;
pub const ASCII_TIME_STATUS_FIELD: usize = 4;
pub const ASCII_WEEK_FIELD: usize = 5;
pub const ASCII_SECONDS_FIELD: usize = 6;
/// Hex encoded.
pub const ASCII_RECEIVER_STATUS_FIELD: usize = 7;
pub const ASCII_SOFTWARE_VERSION_FIELD: usize = 9;
pub const ASCII_HEADER_FIELDS: usize = 10;

/// GPS reference time status codes, as reported in byte 13.
pub const TIME_STATUS_NAMES: &[(u8, &str)] = &[
    (20, "UNKNOWN"),
    (60, "APPROXIMATE"),
    (80, "COARSEADJUSTING"),
    (100, "COARSE"),
    (120, "COARSESTEERING"),
    (130, "FREEWHEELING"),
    (140, "FINEADJUSTING"),
    (160, "FINE"),
    (170, "FINEBACKUPSTEERING"),
    (180, "FINESTEERING"),
    (200, "SATTIME"),
];
pub const TIME_STATUS_UNKNOWN: &str = "UNKNOWN";

/// Port address groups (upper three bits); the lower five bits select a
/// virtual port within the group.
pub const PORT_GROUP_MASK: u8 = 0xe0;
pub const VIRTUAL_PORT_MASK: u8 = 0x1f;
pub const PORT_GROUP_NAMES: &[(u8, &str)] = &[
    (0x20, "COM1"),
    (0x40, "COM2"),
    (0x60, "COM3"),
    (0xc0, "THISPORT"),
    (0xe0, "FILE"),
];
/// Broadcast identifiers, valid only when the group bits are clear.
pub const PORT_BROADCAST_NAMES: &[(u8, &str)] = &[
    (0x00, "NO_PORTS"),
    (0x01, "COM1_ALL"),
    (0x02, "COM2_ALL"),
    (0x03, "COM3_ALL"),
    (0x06, "THISPORT_ALL"),
    (0x07, "FILE_ALL"),
    (0x08, "ALL_PORTS"),
];
pub const PORT_UNKNOWN: &str = "UNKNOWN";
