//! NovAtel message header decoding.
//!
//! Every log in the family carries the same header: a 28-byte little-endian
//! block in binary frames, ten comma-separated tokens in ASCII sentences.
//! The header is decoded into a `MessageHeader` which message decoders embed
//! in their records. Port and time status codes are mapped to their names;
//! the receiver status word is kept opaque.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::HeaderError;
pub use parser::{HeaderDecoder, MessageHeader, NovatelHeaderDecoder};
