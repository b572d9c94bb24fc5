use serde::{Deserialize, Serialize};

use crate::protocols::message::{BinaryMessage, NovatelSentence};

use super::error::HeaderError;
use super::layout;
use super::reader::{AsciiHeaderReader, BinaryHeaderReader, port_name, time_status_name};

/// Metadata common to every NovAtel log.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Message name; empty when decoded from a binary header.
    pub message_name: String,
    /// Port the log was emitted on (e.g. `COM1`).
    pub port: String,
    pub sequence_num: u32,
    /// Percentage of time the receiver CPU was idle.
    pub percent_idle_time: f32,
    /// GPS reference time quality (e.g. `FINESTEERING`).
    pub gps_time_status: String,
    pub gps_week_num: u32,
    /// Seconds into the GPS week.
    pub gps_seconds: f64,
    /// Receiver status word, kept as an opaque bitmask.
    pub receiver_status: u32,
    pub receiver_software_version: u32,
}

/// Produces a `MessageHeader` from either encoding.
///
/// Message decoders take this as a seam; failures are propagated by the
/// caller unchanged.
pub trait HeaderDecoder {
    fn parse_binary(&self, msg: &BinaryMessage<'_>) -> Result<MessageHeader, HeaderError>;
    fn parse_ascii(&self, sentence: &NovatelSentence) -> Result<MessageHeader, HeaderError>;
}

/// Header decoder for the standard 28-byte binary header and 10-field ASCII
/// header.
#[derive(Debug, Clone, Copy, Default)]
pub struct NovatelHeaderDecoder;

impl HeaderDecoder for NovatelHeaderDecoder {
    fn parse_binary(&self, msg: &BinaryMessage<'_>) -> Result<MessageHeader, HeaderError> {
        let reader = BinaryHeaderReader::new(msg.header);
        reader.require_len(layout::BINARY_HEADER_LEN)?;

        let port = reader.read_u8(layout::PORT_ADDRESS_OFFSET)?;
        let idle = reader.read_u8(layout::IDLE_TIME_OFFSET)?;
        let time_status = reader.read_u8(layout::TIME_STATUS_OFFSET)?;
        let gps_ms = reader.read_u32_le(layout::GPS_MS_OFFSET)?;

        Ok(MessageHeader {
            message_name: String::new(),
            port: port_name(port),
            sequence_num: u32::from(reader.read_u16_le(layout::SEQUENCE_OFFSET)?),
            percent_idle_time: f32::from(idle) * layout::IDLE_TIME_SCALE,
            gps_time_status: time_status_name(time_status).to_string(),
            gps_week_num: u32::from(reader.read_u16_le(layout::WEEK_OFFSET)?),
            gps_seconds: f64::from(gps_ms) / layout::MS_PER_SECOND,
            receiver_status: reader.read_u32_le(layout::RECEIVER_STATUS_OFFSET)?,
            receiver_software_version: u32::from(
                reader.read_u16_le(layout::SOFTWARE_VERSION_OFFSET)?,
            ),
        })
    }

    fn parse_ascii(&self, sentence: &NovatelSentence) -> Result<MessageHeader, HeaderError> {
        let reader = AsciiHeaderReader::new(&sentence.header);
        reader.require_count(layout::ASCII_HEADER_FIELDS)?;

        Ok(MessageHeader {
            message_name: reader
                .read_str(layout::ASCII_NAME_FIELD, "message_name")?
                .to_string(),
            port: reader.read_str(layout::ASCII_PORT_FIELD, "port")?.to_string(),
            sequence_num: reader.read_u32(layout::ASCII_SEQUENCE_FIELD, "sequence_num")?,
            percent_idle_time: reader.read_f32(layout::ASCII_IDLE_FIELD, "percent_idle_time")?,
            gps_time_status: reader
                .read_str(layout::ASCII_TIME_STATUS_FIELD, "gps_time_status")?
                .to_string(),
            gps_week_num: reader.read_u32(layout::ASCII_WEEK_FIELD, "gps_week_num")?,
            gps_seconds: reader.read_f64(layout::ASCII_SECONDS_FIELD, "gps_seconds")?,
            receiver_status: reader
                .read_u32_hex(layout::ASCII_RECEIVER_STATUS_FIELD, "receiver_status")?,
            receiver_software_version: reader.read_u32(
                layout::ASCII_SOFTWARE_VERSION_FIELD,
                "receiver_software_version",
            )?,
        })
    }
}
