pub const COMMENT_PREFIX: &str = "//";
pub const SENTENCE_START: char = '#';
pub const LINE_END: u8 = b'\n';
