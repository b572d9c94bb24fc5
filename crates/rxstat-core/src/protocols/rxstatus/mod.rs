//! RXSTATUS (receiver status) decoding.
//!
//! The binary path checks the body length against the fixed message length
//! before reading the header or any field; the ASCII path checks the body
//! token count before interpreting any token. Both produce an `RxStatus`
//! holding the header plus the error word and five status words, or a typed
//! error. Nothing is carried between calls.
//!
//! Offsets and token indices are defined in `layout`; bounds-checked reads
//! live in `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::RxStatusError;
pub use parser::{
    RxStatus, parse_rxstatus_ascii, parse_rxstatus_ascii_with, parse_rxstatus_binary,
    parse_rxstatus_binary_with,
};
