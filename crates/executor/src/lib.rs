//! Command execution layer for Lineup.
//!
//! Front ends talk to the graph through [`Command`]s executed by a
//! [`Session`], which keeps per-user navigation state (root, radius,
//! filter, back history) and answers with an [`Output`]. [`Explorer`]
//! offers the same operations as typed methods.

#![warn(missing_docs)]

mod api;
mod command;
mod convert;
mod error;
mod handlers;
mod output;
mod session;

pub use api::Explorer;
pub use command::Command;
pub use convert::convert_result;
pub use error::{Error, Result};
pub use output::{NodeInfo, Output, SessionStats, View};
pub use session::{Context, Session};
