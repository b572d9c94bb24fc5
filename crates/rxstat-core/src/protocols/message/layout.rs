pub const SENTENCE_START: char = '#';
pub const HEADER_SEPARATOR: char = ';';
pub const CHECKSUM_SEPARATOR: char = '*';
pub const FIELD_SEPARATOR: char = ',';
