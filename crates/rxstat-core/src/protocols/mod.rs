//! Message decoding modules.
//!
//! Each decoder follows a layered structure:
//! - `layout`: byte offsets, token indices and constants (source of truth)
//! - `reader`: safe byte/token access and protocol conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; sources and the decode layer handle
//! file access and aggregation.

pub(crate) mod common;
pub mod header;
pub mod message;
pub mod rxstatus;
