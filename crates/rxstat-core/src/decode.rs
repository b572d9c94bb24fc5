use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::protocols::message::{BinaryMessage, FramingError, NovatelSentence};
use crate::protocols::rxstatus::{
    RxStatus, RxStatusError, layout as rxstatus_layout, parse_rxstatus_ascii,
    parse_rxstatus_binary,
};
use crate::source::{MessageEvent, MessagePayload, MessageSource, SourceError, TextLogSource};
use crate::{DecodeFailure, DecodedRecord, Encoding, InputInfo, Report, make_stub_report};

#[derive(Debug, Error)]
pub enum DecodeRunError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Failure to decode a single message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageDecodeError {
    #[error(transparent)]
    Framing(#[from] FramingError),
    #[error(transparent)]
    RxStatus(#[from] RxStatusError),
}

pub fn decode_log_file(path: &Path) -> Result<Report, DecodeRunError> {
    let input = InputInfo {
        path: path.display().to_string(),
        bytes: path.metadata()?.len(),
    };
    let source = TextLogSource::open(path)?;
    decode_source(input, source)
}

/// Decode every RXSTATUS message yielded by `source`.
///
/// Records and failures keep input order. Messages of other types are
/// counted as skipped; lines the source cannot read are counted as failed.
pub fn decode_source<S: MessageSource>(
    input: InputInfo,
    mut source: S,
) -> Result<Report, DecodeRunError> {
    let mut report = make_stub_report(&input.path, input.bytes);

    loop {
        let MessageEvent { line, payload } = match source.next_message() {
            Ok(Some(event)) => event,
            Ok(None) => break,
            Err(SourceError::InvalidLine {
                line,
                encoding,
                message,
            }) => {
                warn!("line {line}: unreadable {encoding} message: {message}");
                report.summary.messages_total += 1;
                report.summary.failed += 1;
                report.failures.push(DecodeFailure {
                    line,
                    encoding,
                    error: message,
                });
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        report.summary.messages_total += 1;
        let encoding = Encoding::of(&payload);
        match decode_message(&payload) {
            Ok(Some(status)) => {
                report.summary.decoded += 1;
                report.records.push(DecodedRecord {
                    line,
                    encoding,
                    status,
                });
            }
            Ok(None) => {
                debug!("line {line}: skipping non-RXSTATUS {encoding} message");
                report.summary.skipped += 1;
            }
            Err(err) => {
                warn!("line {line}: {encoding} RXSTATUS decode failed: {err}");
                report.summary.failed += 1;
                report.failures.push(DecodeFailure {
                    line,
                    encoding,
                    error: err.to_string(),
                });
            }
        }
    }

    info!(
        "{}: {} messages, {} decoded, {} skipped, {} failed",
        report.input.path,
        report.summary.messages_total,
        report.summary.decoded,
        report.summary.skipped,
        report.summary.failed
    );
    Ok(report)
}

/// Decode one raw message.
///
/// Returns `Ok(None)` when the message is not an RXSTATUS log.
pub fn decode_message(payload: &MessagePayload) -> Result<Option<RxStatus>, MessageDecodeError> {
    match payload {
        MessagePayload::Binary(frame) => {
            let msg = BinaryMessage::from_frame(frame)?;
            if msg.message_id() != Some(rxstatus_layout::MESSAGE_ID) {
                return Ok(None);
            }
            Ok(Some(parse_rxstatus_binary(&msg)?))
        }
        MessagePayload::Ascii(text) => {
            let sentence: NovatelSentence = text.parse()?;
            if sentence.id != rxstatus_layout::ASCII_SENTENCE_ID {
                return Ok(None);
            }
            Ok(Some(parse_rxstatus_ascii(&sentence)?))
        }
    }
}
