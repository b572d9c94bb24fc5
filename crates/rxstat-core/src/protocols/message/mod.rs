//! Raw message containers handed to the decoders.
//!
//! A `BinaryMessage` borrows the header and body bytes of one frame; a
//! `NovatelSentence` owns the tokens of one ASCII log. Both assume sync and
//! checksum were handled upstream; the helpers in `parser` only locate the
//! header and body and never verify a CRC.

pub mod error;
pub mod layout;
pub mod parser;

pub use error::FramingError;
pub use parser::{BinaryMessage, NovatelSentence};
