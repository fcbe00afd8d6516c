//! Error conversion from internal error types.
//!
//! This module provides conversions from [`LineupError`] to the
//! executor's [`Error`] type.

use crate::Error;
use lineup_core::LineupError;

/// Convert a LineupError to an executor Error.
///
/// Every detail is kept in the message; the variant says how a caller
/// should react.
impl From<LineupError> for Error {
    fn from(err: LineupError) -> Self {
        match err {
            LineupError::NodeNotFound { label } => Error::NotFound { label },

            LineupError::EdgeNotFound { a, b } => Error::NotFound {
                label: format!("{} -- {}", a, b),
            },

            LineupError::AmbiguousResolve { query, candidates } => {
                Error::Ambiguous { query, candidates }
            }

            LineupError::InvalidInput { message } => Error::InvalidInput { reason: message },

            // Bad dataset contents
            e @ LineupError::InvalidRecord { .. } => Error::InvalidInput {
                reason: e.to_string(),
            },

            LineupError::DuplicateRecord { label } => Error::InvalidInput {
                reason: format!("duplicate entity label '{}'", label),
            },

            e @ LineupError::Parse { .. } => Error::InvalidInput {
                reason: e.to_string(),
            },

            e @ LineupError::Io { .. } => Error::Io {
                reason: e.to_string(),
            },
        }
    }
}

/// Convert a lineup_core::LineupResult to an executor Result.
pub fn convert_result<T>(result: lineup_core::LineupResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
