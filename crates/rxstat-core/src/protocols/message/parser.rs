use std::str::FromStr;

use crate::protocols::common::reader;
use crate::protocols::header::layout as header_layout;

use super::error::FramingError;
use super::layout;

/// One binary frame split into header and body bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryMessage<'a> {
    pub header: &'a [u8],
    pub data: &'a [u8],
}

impl<'a> BinaryMessage<'a> {
    pub fn new(header: &'a [u8], data: &'a [u8]) -> Self {
        Self { header, data }
    }

    /// Split a complete frame (`header | body | crc`) into header and body.
    ///
    /// The header length and body length come from the header itself; any
    /// bytes after the body (normally the CRC) are ignored.
    ///
    /// # Errors
    /// Returns `FramingError::InvalidSync` when any available byte differs
    /// from the sync pattern, `TooShort` when the frame ends before its sync,
    /// header or body does.
    pub fn from_frame(frame: &'a [u8]) -> Result<Self, FramingError> {
        let too_short = |needed: usize| FramingError::TooShort {
            needed,
            actual: frame.len(),
        };

        // A frame shorter than the sync pattern is only truncated when the
        // bytes it does have match.
        if frame
            .iter()
            .zip(header_layout::SYNC)
            .any(|(byte, expected)| *byte != expected)
        {
            return Err(FramingError::InvalidSync);
        }
        if frame.len() < header_layout::SYNC_RANGE.end {
            return Err(too_short(header_layout::SYNC_RANGE.end));
        }

        let header_len = reader::read_u8(frame, header_layout::HEADER_LENGTH_OFFSET)
            .ok_or_else(|| too_short(header_layout::HEADER_LENGTH_OFFSET + 1))?;
        if (header_len as usize) < header_layout::BINARY_HEADER_LEN {
            return Err(FramingError::InvalidHeaderLength { length: header_len });
        }
        let header_len = header_len as usize;

        let header = frame
            .get(..header_len)
            .ok_or_else(|| too_short(header_len))?;
        let body_len = reader::read_u16_le(header, header_layout::MESSAGE_LENGTH_OFFSET)
            .ok_or_else(|| too_short(header_layout::MESSAGE_LENGTH_OFFSET + 2))?
            as usize;
        let end = header_len + body_len;
        let data = frame.get(header_len..end).ok_or_else(|| too_short(end))?;

        Ok(Self { header, data })
    }

    /// Message id from the binary header, when the header is long enough.
    pub fn message_id(&self) -> Option<u16> {
        reader::read_u16_le(self.header, header_layout::MESSAGE_ID_OFFSET)
    }
}

/// One tokenized ASCII log: `#NAME,h1,...;b0,b1,...*crc`.
///
/// `id` repeats the first header token (e.g. `RXSTATUSA`); `header` holds all
/// header tokens including the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovatelSentence {
    pub id: String,
    pub header: Vec<String>,
    pub body: Vec<String>,
}

impl NovatelSentence {
    pub fn new(header: Vec<String>, body: Vec<String>) -> Self {
        let id = header.first().cloned().unwrap_or_default();
        Self { id, header, body }
    }
}

impl FromStr for NovatelSentence {
    type Err = FramingError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text
            .trim()
            .strip_prefix(layout::SENTENCE_START)
            .ok_or(FramingError::MissingSentenceStart)?;
        let text = match text.rfind(layout::CHECKSUM_SEPARATOR) {
            Some(index) => &text[..index],
            None => text,
        };
        let (header, body) = text
            .split_once(layout::HEADER_SEPARATOR)
            .ok_or(FramingError::MissingHeaderSeparator)?;

        Ok(Self::new(split_fields(header), split_fields(body)))
    }
}

fn split_fields(text: &str) -> Vec<String> {
    text.split(layout::FIELD_SEPARATOR)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{BinaryMessage, NovatelSentence};
    use crate::protocols::header::layout as header_layout;
    use crate::protocols::message::error::FramingError;

    fn frame(body_len: u16, body_fill: u8) -> Vec<u8> {
        let mut frame = vec![0u8; header_layout::BINARY_HEADER_LEN];
        frame[header_layout::SYNC_RANGE].copy_from_slice(&header_layout::SYNC);
        frame[header_layout::HEADER_LENGTH_OFFSET] = header_layout::BINARY_HEADER_LEN as u8;
        frame[header_layout::MESSAGE_ID_OFFSET..header_layout::MESSAGE_ID_OFFSET + 2]
            .copy_from_slice(&93u16.to_le_bytes());
        frame[header_layout::MESSAGE_LENGTH_OFFSET..header_layout::MESSAGE_LENGTH_OFFSET + 2]
            .copy_from_slice(&body_len.to_le_bytes());
        frame.extend(std::iter::repeat_n(body_fill, body_len as usize));
        frame.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        frame
    }

    #[test]
    fn split_frame_into_header_and_body() {
        let bytes = frame(8, 0x11);
        let msg = BinaryMessage::from_frame(&bytes).unwrap();
        assert_eq!(msg.header.len(), header_layout::BINARY_HEADER_LEN);
        assert_eq!(msg.data, &[0x11; 8]);
        assert_eq!(msg.message_id(), Some(93));
    }

    #[test]
    fn split_frame_without_crc() {
        let mut bytes = frame(4, 0x22);
        bytes.truncate(bytes.len() - header_layout::CRC_LEN);
        let msg = BinaryMessage::from_frame(&bytes).unwrap();
        assert_eq!(msg.data, &[0x22; 4]);
    }

    #[test]
    fn reject_bad_sync() {
        let mut bytes = frame(4, 0);
        bytes[0] = 0x00;
        assert_eq!(
            BinaryMessage::from_frame(&bytes),
            Err(FramingError::InvalidSync)
        );
    }

    #[test]
    fn reject_bad_sync_in_short_frame() {
        assert_eq!(
            BinaryMessage::from_frame(&[0x00, 0x01]),
            Err(FramingError::InvalidSync)
        );
        assert_eq!(
            BinaryMessage::from_frame(&[0xaa, 0x45]),
            Err(FramingError::InvalidSync)
        );
    }

    #[test]
    fn reject_truncated_sync() {
        assert_eq!(
            BinaryMessage::from_frame(&[0xaa, 0x44]),
            Err(FramingError::TooShort {
                needed: 3,
                actual: 2
            })
        );
        assert_eq!(
            BinaryMessage::from_frame(&[]),
            Err(FramingError::TooShort {
                needed: 3,
                actual: 0
            })
        );
    }

    #[test]
    fn reject_truncated_body() {
        let bytes = frame(16, 0);
        let truncated = &bytes[..header_layout::BINARY_HEADER_LEN + 8];
        let err = BinaryMessage::from_frame(truncated).unwrap_err();
        assert_eq!(
            err,
            FramingError::TooShort {
                needed: header_layout::BINARY_HEADER_LEN + 16,
                actual: header_layout::BINARY_HEADER_LEN + 8,
            }
        );
    }

    #[test]
    fn reject_short_header_length() {
        let mut bytes = frame(4, 0);
        bytes[header_layout::HEADER_LENGTH_OFFSET] = 12;
        assert_eq!(
            BinaryMessage::from_frame(&bytes),
            Err(FramingError::InvalidHeaderLength { length: 12 })
        );
    }

    #[test]
    fn parse_sentence_with_checksum() {
        let sentence: NovatelSentence =
            "#RXSTATUSA,COM1,0,60.5,FINESTEERING,1820,160205.900,02000020,4ca6,32768;1,2,3*8c2f6a3e\r\n"
                .parse()
                .unwrap();
        assert_eq!(sentence.id, "RXSTATUSA");
        assert_eq!(sentence.header.len(), 10);
        assert_eq!(sentence.body, vec!["1", "2", "3"]);
    }

    #[test]
    fn parse_sentence_keeps_empty_fields() {
        let sentence: NovatelSentence = "#NAME;,,".parse().unwrap();
        assert_eq!(sentence.header, vec!["NAME"]);
        assert_eq!(sentence.body, vec!["", "", ""]);
    }

    #[test]
    fn reject_malformed_sentences() {
        assert_eq!(
            "RXSTATUSA;1".parse::<NovatelSentence>(),
            Err(FramingError::MissingSentenceStart)
        );
        assert_eq!(
            "#RXSTATUSA,COM1".parse::<NovatelSentence>(),
            Err(FramingError::MissingHeaderSeparator)
        );
    }
}
