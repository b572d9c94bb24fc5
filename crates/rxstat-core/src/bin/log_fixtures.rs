use std::fs;
use std::path::Path;

const SYNC: [u8; 3] = [0xaa, 0x44, 0x12];
const BINARY_HEADER_LEN: u8 = 28;
const PORT_COM1: u8 = 0x20;
const IDLE_HALF_PERCENT: u8 = 121;
const TIME_STATUS_FINESTEERING: u8 = 180;
const GPS_WEEK: u16 = 1820;
const GPS_MS: u32 = 160_205_900;
const RECEIVER_STATUS: u32 = 0x0200_0020;
const RESERVED: u16 = 0x4ca6;
const SOFTWARE_VERSION: u16 = 32768;
const CRC_PLACEHOLDER: [u8; 4] = [0xde, 0xad, 0xbe, 0xef];

const RXSTATUS_ID: u16 = 93;
const BESTPOS_ID: u16 = 42;
const RXSTATUS_LENGTH: usize = 88;
const RXSTATUS_STATUS_COUNT_OFFSET: usize = 4;
const RXSTATUS_OFFSETS: [usize; 6] = [0, 8, 24, 40, 56, 72];
const RXSTATUS_ASCII_FIELDS: usize = 20;
const RXSTATUS_ASCII_INDICES: [usize; 6] = [0, 1, 6, 10, 14, 18];

const ASCII_HEADER: &str =
    "#RXSTATUSA,COM1,0,60.5,FINESTEERING,1820,160205.900,02000020,4ca6,32768";

fn main() -> Result<(), String> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden");
    write_log(&root.join("rxstatus").join("input.log"), &rxstatus_lines())
}

fn rxstatus_lines() -> Vec<String> {
    vec![
        "// RXSTATUS golden log: ASCII and binary, valid and malformed".to_string(),
        format!(
            "{ASCII_HEADER};{}*9a3c51e2",
            ascii_body(["1", "2", "3", "4", "5", "6"])
        ),
        hex::encode(binary_frame(RXSTATUS_ID, 1, &rxstatus_body([1, 2, 3, 4, 5, 6]))),
        format!(
            "{ASCII_HEADER};{}*00000000",
            ascii_body(["1", "2", "3", "x", "5", "6"])
        ),
        hex::encode(binary_frame(RXSTATUS_ID, 2, &[0u8; 40])),
        format!(
            "#BESTPOSA{};SOL_COMPUTED,SINGLE*00000000",
            &ASCII_HEADER["#RXSTATUSA".len()..]
        ),
        String::new(),
        format!("{ASCII_HEADER};1,2,3*00000000"),
        hex::encode(binary_frame(BESTPOS_ID, 3, &[0u8; 8])),
    ]
}

fn binary_frame(message_id: u16, sequence: u16, body: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(BINARY_HEADER_LEN as usize + body.len() + 4);
    frame.extend_from_slice(&SYNC);
    frame.push(BINARY_HEADER_LEN);
    frame.extend_from_slice(&message_id.to_le_bytes());
    frame.push(0);
    frame.push(PORT_COM1);
    frame.extend_from_slice(&(body.len() as u16).to_le_bytes());
    frame.extend_from_slice(&sequence.to_le_bytes());
    frame.push(IDLE_HALF_PERCENT);
    frame.push(TIME_STATUS_FINESTEERING);
    frame.extend_from_slice(&GPS_WEEK.to_le_bytes());
    frame.extend_from_slice(&GPS_MS.to_le_bytes());
    frame.extend_from_slice(&RECEIVER_STATUS.to_le_bytes());
    frame.extend_from_slice(&RESERVED.to_le_bytes());
    frame.extend_from_slice(&SOFTWARE_VERSION.to_le_bytes());
    frame.extend_from_slice(body);
    frame.extend_from_slice(&CRC_PLACEHOLDER);
    frame
}

fn rxstatus_body(values: [u32; 6]) -> Vec<u8> {
    let mut body = vec![0u8; RXSTATUS_LENGTH];
    body[RXSTATUS_STATUS_COUNT_OFFSET..RXSTATUS_STATUS_COUNT_OFFSET + 4]
        .copy_from_slice(&4u32.to_le_bytes());
    for (offset, value) in RXSTATUS_OFFSETS.iter().zip(values) {
        body[*offset..*offset + 4].copy_from_slice(&value.to_le_bytes());
    }
    body
}

fn ascii_body(values: [&str; 6]) -> String {
    let mut fields = vec!["0"; RXSTATUS_ASCII_FIELDS];
    for (index, value) in RXSTATUS_ASCII_INDICES.iter().zip(values) {
        fields[*index] = value;
    }
    fields.join(",")
}

fn write_log(path: &Path, lines: &[String]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }
    let mut text = lines.join("\n");
    text.push('\n');
    fs::write(path, text).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
