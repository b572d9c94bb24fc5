use std::thread;

use rxstat_core::{
    ASCII_FIELD_COUNT, BINARY_LENGTH, BinaryMessage, HeaderDecoder, HeaderError, MESSAGE_ID,
    MESSAGE_NAME, MessageHeader, NovatelSentence, RxStatusError, parse_rxstatus_ascii,
    parse_rxstatus_binary, parse_rxstatus_binary_with,
};

const ASCII_HEADER: &str =
    "#RXSTATUSA,COM2,12,35.0,FINE,2001,417600.250,00000000,0000,15000";

fn binary_frame(values: [u32; 6]) -> Vec<u8> {
    let mut frame = vec![0u8; 28];
    frame[..3].copy_from_slice(&[0xaa, 0x44, 0x12]);
    frame[3] = 28;
    frame[4..6].copy_from_slice(&MESSAGE_ID.to_le_bytes());
    frame[7] = 0x40;
    frame[8..10].copy_from_slice(&(BINARY_LENGTH as u16).to_le_bytes());
    frame[13] = 160;

    let mut body = vec![0u8; BINARY_LENGTH];
    for (offset, value) in [0usize, 8, 24, 40, 56, 72].iter().zip(values) {
        body[*offset..*offset + 4].copy_from_slice(&value.to_le_bytes());
    }
    frame.extend(body);
    frame.extend([0u8; 4]);
    frame
}

fn ascii_sentence(tokens: [&str; 6]) -> NovatelSentence {
    let mut body = vec!["7"; ASCII_FIELD_COUNT];
    for (index, token) in [0usize, 1, 6, 10, 14, 18].iter().zip(tokens) {
        body[*index] = token;
    }
    format!("{ASCII_HEADER};{}*ffffffff", body.join(","))
        .parse()
        .expect("sentence")
}

struct FixedHeader;

impl HeaderDecoder for FixedHeader {
    fn parse_binary(&self, _msg: &BinaryMessage<'_>) -> Result<MessageHeader, HeaderError> {
        Ok(MessageHeader {
            message_name: "ignored".to_string(),
            port: "FILE".to_string(),
            ..MessageHeader::default()
        })
    }

    fn parse_ascii(&self, _sentence: &NovatelSentence) -> Result<MessageHeader, HeaderError> {
        Ok(MessageHeader::default())
    }
}

#[test]
fn binary_frame_decodes_end_to_end() {
    let frame = binary_frame([1, 2, 3, 4, 5, 6]);
    let msg = BinaryMessage::from_frame(&frame).unwrap();
    let status = parse_rxstatus_binary(&msg).unwrap();

    assert_eq!(status.header.message_name, MESSAGE_NAME);
    assert_eq!(status.header.port, "COM2");
    assert_eq!(status.header.gps_time_status, "FINE");
    assert_eq!(
        [
            status.error,
            status.rxstat,
            status.aux1stat,
            status.aux2stat,
            status.aux3stat,
            status.aux4stat,
        ],
        [1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn ascii_sentence_decodes_end_to_end() {
    let status = parse_rxstatus_ascii(&ascii_sentence(["1", "2", "3", "4", "5", "6"])).unwrap();

    assert_eq!(status.header.message_name, MESSAGE_NAME);
    assert_eq!(status.header.port, "COM2");
    assert_eq!(status.header.sequence_num, 12);
    assert_eq!(status.header.gps_week_num, 2001);
    assert_eq!(status.header.gps_seconds, 417600.25);
    assert_eq!(status.header.receiver_software_version, 15000);
    assert_eq!(
        [
            status.error,
            status.rxstat,
            status.aux1stat,
            status.aux2stat,
            status.aux3stat,
            status.aux4stat,
        ],
        [1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn both_encodings_yield_the_same_status_words() {
    let values = [0x10, 0x0004_0000, 0, 0x8000_0000, 4_294_967_295, 42];
    let frame = binary_frame(values);
    let binary = parse_rxstatus_binary(&BinaryMessage::from_frame(&frame).unwrap()).unwrap();

    let tokens = values.map(|v| v.to_string());
    let ascii = parse_rxstatus_ascii(&ascii_sentence([
        &tokens[0], &tokens[1], &tokens[2], &tokens[3], &tokens[4], &tokens[5],
    ]))
    .unwrap();

    assert_eq!(
        (binary.error, binary.rxstat, binary.aux1stat),
        (ascii.error, ascii.rxstat, ascii.aux1stat)
    );
    assert_eq!(
        (binary.aux2stat, binary.aux3stat, binary.aux4stat),
        (ascii.aux2stat, ascii.aux3stat, ascii.aux4stat)
    );
}

#[test]
fn custom_header_decoder_is_used_and_renamed() {
    let frame = binary_frame([0; 6]);
    let msg = BinaryMessage::from_frame(&frame).unwrap();
    let status = parse_rxstatus_binary_with(&FixedHeader, &msg).unwrap();
    assert_eq!(status.header.port, "FILE");
    assert_eq!(status.header.message_name, MESSAGE_NAME);
}

#[test]
fn short_body_is_rejected_without_reading_fields() {
    let header = [0u8; 28];
    let body = [0xffu8; 75];
    let err = parse_rxstatus_binary(&BinaryMessage::new(&header, &body)).unwrap_err();
    assert_eq!(
        err,
        RxStatusError::LengthMismatch {
            expected: BINARY_LENGTH,
            actual: 75
        }
    );
}

#[test]
fn non_numeric_token_fails_the_whole_decode() {
    let err = parse_rxstatus_ascii(&ascii_sentence(["1", "2", "3", "4", "five", "6"]))
        .unwrap_err();
    assert_eq!(
        err,
        RxStatusError::InvalidField {
            fields: vec!["aux3stat"]
        }
    );
}

#[test]
fn concurrent_decodes_are_independent() {
    let handles: Vec<_> = (0..8u32)
        .map(|seed| {
            thread::spawn(move || {
                let values = [seed, seed + 1, seed + 2, seed + 3, seed + 4, seed + 5];
                let frame = binary_frame(values);
                let msg = BinaryMessage::from_frame(&frame).unwrap();
                let first = parse_rxstatus_binary(&msg).unwrap();
                let second = parse_rxstatus_binary(&msg).unwrap();
                assert_eq!(first, second);
                (seed, first.error, first.aux4stat)
            })
        })
        .collect();

    for handle in handles {
        let (seed, error, aux4stat) = handle.join().unwrap();
        assert_eq!(error, seed);
        assert_eq!(aux4stat, seed + 5);
    }
}
