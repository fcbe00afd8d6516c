//! Commands accepted by a [`Session`](crate::Session).

use serde::{Deserialize, Serialize};

/// One user interaction.
///
/// Every command that changes what is on screen answers with
/// [`Output::View`](crate::Output::View); the rest return data or `Unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Resolve typed text and center the view on the match.
    Search {
        /// Text as typed; case and surrounding whitespace are ignored.
        text: String,
    },

    /// Re-center on a label taken from the rendered view.
    Click {
        /// Exact node label.
        label: String,
    },

    /// Change the hop limit.
    SetRadius {
        /// New radius, at most the configured maximum.
        radius: usize,
    },

    /// Toggle the originals-only filter.
    SetOriginalsOnly {
        /// Filter state.
        enabled: bool,
    },

    /// Return to the previous root.
    Back,

    /// Current view, if any.
    Show,

    /// Attributes and neighbors of one node.
    Inspect {
        /// Text as typed, resolved like `Search`.
        label: String,
    },

    /// Graph and cache counters.
    Stats,
}

impl Command {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Search { .. } => "search",
            Command::Click { .. } => "click",
            Command::SetRadius { .. } => "set_radius",
            Command::SetOriginalsOnly { .. } => "set_originals_only",
            Command::Back => "back",
            Command::Show => "show",
            Command::Inspect { .. } => "inspect",
            Command::Stats => "stats",
        }
    }
}
