//! Text log source.
//!
//! Reads a line-oriented log where each message sits on its own line: an
//! ASCII sentence starting with `#`, or a binary frame written as hex.
//! Blank lines and `//` comments are skipped. Lines are only classified and
//! hex-decoded here; framing and decoding happen downstream.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::TextLogSource;
