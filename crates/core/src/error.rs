//! Error type shared by every Lineup crate.
//!
//! Build-time failures (`InvalidRecord`, `DuplicateRecord`) are fatal: the
//! dataset is trusted and static, so no partial graph is ever produced.
//! Query-time failures (`NodeNotFound`, `EdgeNotFound`, `AmbiguousResolve`)
//! are recoverable and surfaced to the caller unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Which input table a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTable {
    /// The elements table (`Label`, `Type`).
    Entities,
    /// The connections table (`From`, `To`, `Original Member`).
    Connections,
}

impl std::fmt::Display for RecordTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordTable::Entities => write!(f, "entities"),
            RecordTable::Connections => write!(f, "connections"),
        }
    }
}

/// Errors produced while building or querying a Lineup graph.
#[derive(Debug, Error)]
pub enum LineupError {
    /// A required field is missing or empty after trimming.
    #[error("invalid {table} record at row {row}: field '{field}' is missing or empty")]
    InvalidRecord {
        /// Table the record belongs to.
        table: RecordTable,
        /// Zero-based row index within the table.
        row: usize,
        /// Name of the offending column.
        field: &'static str,
    },

    /// A label was declared twice under the strict duplicate policy.
    #[error("duplicate entity label '{label}'")]
    DuplicateRecord {
        /// The repeated label.
        label: String,
    },

    /// No node carries the given label.
    #[error("node not found: {label}")]
    NodeNotFound {
        /// Label (or query text) that failed to match.
        label: String,
    },

    /// No edge connects the given pair.
    #[error("no edge between '{a}' and '{b}'")]
    EdgeNotFound {
        /// First endpoint.
        a: String,
        /// Second endpoint.
        b: String,
    },

    /// Query text matched several labels case-insensitively.
    #[error("'{query}' is ambiguous, matches: {}", candidates.join(", "))]
    AmbiguousResolve {
        /// The query text as typed.
        query: String,
        /// Every label that matched, in insertion order.
        candidates: Vec<String>,
    },

    /// Caller-supplied argument or configuration value is out of range.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Human readable reason.
        message: String,
    },

    /// Reading a dataset or configuration file failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A dataset or configuration file could not be decoded.
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// File being decoded.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },
}

/// Result alias used throughout Lineup.
pub type LineupResult<T> = Result<T, LineupError>;

impl LineupError {
    /// Create a `NodeNotFound` error.
    pub fn node_not_found(label: impl Into<String>) -> Self {
        LineupError::NodeNotFound {
            label: label.into(),
        }
    }

    /// Create an `EdgeNotFound` error.
    pub fn edge_not_found(a: impl Into<String>, b: impl Into<String>) -> Self {
        LineupError::EdgeNotFound {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Create an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        LineupError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an `Io` error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LineupError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a `Parse` error for the given path.
    pub fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        LineupError::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for errors a user can recover from by issuing another query.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LineupError::NodeNotFound { .. }
                | LineupError::EdgeNotFound { .. }
                | LineupError::AmbiguousResolve { .. }
                | LineupError::InvalidInput { .. }
        )
    }
}
