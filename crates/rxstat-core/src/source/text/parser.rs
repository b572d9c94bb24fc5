use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::source::{MessageEvent, MessagePayload, MessageSource, SourceError};

use super::error::TextSourceError;
use super::layout;
use super::reader::{LineKind, classify_line, decode_hex};

/// Line-oriented message source.
///
/// A line that cannot be turned into a payload (bad hex, or a sentence that
/// is not UTF-8) is returned as an error for that line only; the next call
/// continues with the following line.
pub struct TextLogSource<R> {
    reader: R,
    line: usize,
    buffer: Vec<u8>,
}

impl TextLogSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TextLogSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: Vec::new(),
        }
    }

    fn next_event(&mut self) -> Result<Option<MessageEvent>, TextSourceError> {
        loop {
            self.buffer.clear();
            if self.reader.read_until(layout::LINE_END, &mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let line = self.line;

            let text = String::from_utf8_lossy(&self.buffer);
            let payload = match classify_line(&text) {
                LineKind::Skip => continue,
                LineKind::Ascii(_) if matches!(text, Cow::Owned(_)) => {
                    return Err(TextSourceError::InvalidUtf8 { line });
                }
                LineKind::Ascii(sentence) => MessagePayload::Ascii(sentence.to_string()),
                LineKind::Hex(digits) => MessagePayload::Binary(decode_hex(digits, line)?),
            };
            return Ok(Some(MessageEvent { line, payload }));
        }
    }
}

impl<R: BufRead> MessageSource for TextLogSource<R> {
    fn next_message(&mut self) -> Result<Option<MessageEvent>, SourceError> {
        self.next_event().map_err(SourceError::from)
    }
}
