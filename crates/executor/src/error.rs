//! Executor error type.

use thiserror::Error;

/// Errors returned by [`Session::execute`](crate::Session::execute).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A label did not match any node.
    #[error("not found: {label}")]
    NotFound {
        /// Label or query text.
        label: String,
    },

    /// A command argument or input record was rejected.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// Text matched several labels under strict resolution.
    #[error("'{query}' is ambiguous: {}", candidates.join(", "))]
    Ambiguous {
        /// Text as typed.
        query: String,
        /// Matching labels in insertion order.
        candidates: Vec<String>,
    },

    /// A dataset or config file could not be read.
    #[error("I/O error: {reason}")]
    Io {
        /// Underlying failure, including the path.
        reason: String,
    },

    /// Unexpected state; indicates a bug.
    #[error("internal error: {reason}")]
    Internal {
        /// Description.
        reason: String,
    },
}

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
