use serde::{Deserialize, Serialize};

use crate::protocols::header::{HeaderDecoder, MessageHeader, NovatelHeaderDecoder};
use crate::protocols::message::{BinaryMessage, NovatelSentence};

use super::error::RxStatusError;
use super::layout;
use super::reader::{RxStatusFields, RxStatusReader};

/// Decoded RXSTATUS log. Status words are opaque bitmasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RxStatus {
    pub header: MessageHeader,
    /// Receiver error word.
    pub error: u32,
    /// Receiver status word.
    pub rxstat: u32,
    pub aux1stat: u32,
    pub aux2stat: u32,
    pub aux3stat: u32,
    pub aux4stat: u32,
}

/// Decode a binary RXSTATUS frame with the standard header decoder.
pub fn parse_rxstatus_binary(msg: &BinaryMessage<'_>) -> Result<RxStatus, RxStatusError> {
    parse_rxstatus_binary_with(&NovatelHeaderDecoder, msg)
}

/// Decode a binary RXSTATUS frame.
///
/// The body length is checked before the header or any field is read.
///
/// # Errors
/// `LengthMismatch` when the body is not exactly `BINARY_LENGTH` bytes;
/// header failures are returned as `Header`.
pub fn parse_rxstatus_binary_with<H: HeaderDecoder + ?Sized>(
    decoder: &H,
    msg: &BinaryMessage<'_>,
) -> Result<RxStatus, RxStatusError> {
    let reader = RxStatusReader::new(msg.data);
    reader.require_exact_len(layout::BINARY_LENGTH)?;

    let mut header = decoder.parse_binary(msg)?;
    header.message_name = layout::MESSAGE_NAME.to_string();

    Ok(RxStatus {
        header,
        error: reader.read_u32_le(layout::ERROR_OFFSET)?,
        rxstat: reader.read_u32_le(layout::RXSTAT_OFFSET)?,
        aux1stat: reader.read_u32_le(layout::AUX1STAT_OFFSET)?,
        aux2stat: reader.read_u32_le(layout::AUX2STAT_OFFSET)?,
        aux3stat: reader.read_u32_le(layout::AUX3STAT_OFFSET)?,
        aux4stat: reader.read_u32_le(layout::AUX4STAT_OFFSET)?,
    })
}

/// Decode an ASCII RXSTATUS sentence with the standard header decoder.
pub fn parse_rxstatus_ascii(sentence: &NovatelSentence) -> Result<RxStatus, RxStatusError> {
    parse_rxstatus_ascii_with(&NovatelHeaderDecoder, sentence)
}

/// Decode an ASCII RXSTATUS sentence.
///
/// All six consumed tokens are parsed even after a failure, so
/// `InvalidField` lists every malformed one. No partial record is returned.
///
/// # Errors
/// `FieldCountMismatch` when the body does not hold `ASCII_FIELD_COUNT`
/// tokens, `InvalidField` when a consumed token is not a base-10 `u32`;
/// header failures are returned as `Header`.
pub fn parse_rxstatus_ascii_with<H: HeaderDecoder + ?Sized>(
    decoder: &H,
    sentence: &NovatelSentence,
) -> Result<RxStatus, RxStatusError> {
    let mut header = decoder.parse_ascii(sentence)?;

    let mut fields = RxStatusFields::new(&sentence.body);
    fields.require_count(layout::ASCII_FIELD_COUNT)?;

    let error = fields.read_u32(layout::ERROR_FIELD, "error");
    let rxstat = fields.read_u32(layout::RXSTAT_FIELD, "rxstat");
    let aux1stat = fields.read_u32(layout::AUX1STAT_FIELD, "aux1stat");
    let aux2stat = fields.read_u32(layout::AUX2STAT_FIELD, "aux2stat");
    let aux3stat = fields.read_u32(layout::AUX3STAT_FIELD, "aux3stat");
    let aux4stat = fields.read_u32(layout::AUX4STAT_FIELD, "aux4stat");

    match (error, rxstat, aux1stat, aux2stat, aux3stat, aux4stat) {
        (
            Some(error),
            Some(rxstat),
            Some(aux1stat),
            Some(aux2stat),
            Some(aux3stat),
            Some(aux4stat),
        ) => {
            header.message_name = layout::MESSAGE_NAME.to_string();
            Ok(RxStatus {
                header,
                error,
                rxstat,
                aux1stat,
                aux2stat,
                aux3stat,
                aux4stat,
            })
        }
        _ => Err(fields.into_error()),
    }
}
