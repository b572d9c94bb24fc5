//! rxstat core library for NovAtel RXSTATUS decoding.
//!
//! This crate turns untrusted receiver output into typed status records. A
//! binary frame or an ASCII sentence is split into header and body
//! (`protocols::message`), the shared header is decoded
//! (`protocols::header`), and the RXSTATUS body is validated and decoded
//! (`protocols::rxstatus`). Parsing is byte-oriented and side-effect free;
//! reading logs from disk is isolated in the `source` module and the
//! `decode` layer aggregates results into a deterministic report.
//!
//! Invariants:
//! - The binary body length is checked before any field offset is read.
//! - The ASCII body token count is checked before any token is interpreted.
//! - A record is returned fully populated or not at all.
//!
//! # Examples
//! ```
//! use rxstat_core::{BinaryMessage, parse_rxstatus_binary};
//!
//! let header = [0u8; 28];
//! let mut body = [0u8; 88];
//! body[8..12].copy_from_slice(&2u32.to_le_bytes());
//!
//! let status = parse_rxstatus_binary(&BinaryMessage::new(&header, &body))?;
//! assert_eq!(status.rxstat, 2);
//! assert_eq!(status.header.message_name, "RXSTATUS");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

mod decode;
pub mod protocols;
mod source;

pub use decode::{
    DecodeRunError, MessageDecodeError, decode_log_file, decode_message, decode_source,
};
pub use protocols::header::{HeaderDecoder, HeaderError, MessageHeader, NovatelHeaderDecoder};
pub use protocols::message::{BinaryMessage, FramingError, NovatelSentence};
pub use protocols::rxstatus::layout::{
    ASCII_FIELD_COUNT, ASCII_SENTENCE_ID, BINARY_LENGTH, MESSAGE_ID, MESSAGE_NAME,
};
pub use protocols::rxstatus::{
    RxStatus, RxStatusError, parse_rxstatus_ascii, parse_rxstatus_ascii_with,
    parse_rxstatus_binary, parse_rxstatus_binary_with,
};
pub use source::{MessageEvent, MessagePayload, MessageSource, SourceError, TextLogSource};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Default timestamp used when the caller does not stamp the report.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Decoding report with records and failures in input order.
///
/// # Examples
/// ```
/// use rxstat_core::make_stub_report;
///
/// let report = make_stub_report("receiver.log", 123);
/// assert_eq!(report.report_version, rxstat_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    /// Input log metadata.
    pub input: InputInfo,
    pub summary: DecodeSummary,
    /// Decoded RXSTATUS records.
    pub records: Vec<DecodedRecord>,
    /// RXSTATUS messages that failed to decode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<DecodeFailure>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "rxstat").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Input metadata embedded in reports.
///
/// # Examples
/// ```
/// use rxstat_core::InputInfo;
///
/// let input = InputInfo {
///     path: "receiver.log".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// Message counters for one decode run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeSummary {
    /// Messages read from the input, of any type.
    pub messages_total: u64,
    pub decoded: u64,
    /// Messages of other types.
    pub skipped: u64,
    pub failed: u64,
}

/// Wire encoding a message arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Binary,
    Ascii,
}

impl Encoding {
    pub fn of(payload: &MessagePayload) -> Self {
        match payload {
            MessagePayload::Binary(_) => Encoding::Binary,
            MessagePayload::Ascii(_) => Encoding::Ascii,
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Binary => f.write_str("binary"),
            Encoding::Ascii => f.write_str("ascii"),
        }
    }
}

/// One decoded RXSTATUS record with its input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedRecord {
    /// 1-based input line.
    pub line: usize,
    pub encoding: Encoding,
    pub status: RxStatus,
}

/// One RXSTATUS message that failed to decode.
///
/// # Examples
/// ```
/// use rxstat_core::{DecodeFailure, Encoding};
///
/// let failure = DecodeFailure {
///     line: 4,
///     encoding: Encoding::Binary,
///     error: "unexpected RXSTATUS message length: expected 88 bytes, got 40".to_string(),
/// };
/// assert_eq!(failure.line, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeFailure {
    /// 1-based input line.
    pub line: usize,
    pub encoding: Encoding,
    /// Human-readable decode error.
    pub error: String,
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use rxstat_core::make_stub_report;
///
/// let report = make_stub_report("receiver.log", 123);
/// assert_eq!(report.input.bytes, 123);
/// assert!(report.records.is_empty());
/// ```
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "rxstat".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        summary: DecodeSummary::default(),
        records: vec![],
        failures: vec![],
    }
}
