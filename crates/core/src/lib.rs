//! Core types for Lineup.
//!
//! This crate holds the pieces every other crate agrees on:
//! - [`LineupError`] / [`LineupResult`]: the shared error type
//! - [`NodeType`], [`NodeAttributes`], [`EdgeAttributes`]: graph attributes
//! - [`EntityRecord`], [`ConnectionRecord`]: raw tabular input

pub mod error;
pub mod records;
pub mod types;

pub use error::{LineupError, LineupResult, RecordTable};
pub use records::{is_original_marker, ConnectionRecord, EntityRecord, ORIGINAL_MARKER};
pub use types::{EdgeAttributes, NodeAttributes, NodeRole, NodeType};
