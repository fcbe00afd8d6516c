//! Typed API over a [`Session`].
//!
//! [`Explorer`] wraps the command/output protocol in ordinary methods so
//! callers don't have to match on [`Output`] themselves.

use std::sync::Arc;

use lineup_engine::ExplorerConfig;

use crate::output::{NodeInfo, SessionStats, View};
use crate::session::{Context, Session};
use crate::{Command, Error, Output, Result};

/// High-level handle on one exploration session.
#[derive(Debug)]
pub struct Explorer {
    session: Session,
}

impl Explorer {
    /// Load the configured dataset and start a session.
    pub fn open(config: &ExplorerConfig) -> Result<Self> {
        let ctx = Context::open(config)?;
        tracing::info!(
            target: "lineup::session",
            nodes = ctx.store().node_count(),
            edges = ctx.store().edge_count(),
            "Explorer ready"
        );
        Ok(Self::with_context(Arc::new(ctx)))
    }

    /// Start a session over an existing context.
    pub fn with_context(ctx: Arc<Context>) -> Self {
        Self {
            session: Session::new(ctx),
        }
    }

    /// Underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run a raw command.
    pub fn execute(&mut self, command: Command) -> Result<Output> {
        self.session.execute(command)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Center on the node matching `text`; `None` if nothing matches.
    pub fn search(&mut self, text: &str) -> Result<Option<View>> {
        match self.session.execute(Command::Search {
            text: text.to_string(),
        })? {
            Output::View(v) => Ok(Some(v)),
            Output::NotFound { .. } => Ok(None),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Search".into(),
            }),
        }
    }

    /// Center on an exact label from the current view.
    pub fn click(&mut self, label: &str) -> Result<View> {
        match self.session.execute(Command::Click {
            label: label.to_string(),
        })? {
            Output::View(v) => Ok(v),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Click".into(),
            }),
        }
    }

    /// Change the radius; returns the refreshed view if one is active.
    pub fn set_radius(&mut self, radius: usize) -> Result<Option<View>> {
        self.view_or_unit(Command::SetRadius { radius }, "SetRadius")
    }

    /// Toggle the originals-only filter.
    pub fn set_originals_only(&mut self, enabled: bool) -> Result<Option<View>> {
        self.view_or_unit(Command::SetOriginalsOnly { enabled }, "SetOriginalsOnly")
    }

    /// Go back one root.
    pub fn back(&mut self) -> Result<Option<View>> {
        self.view_or_unit(Command::Back, "Back")
    }

    /// Current view.
    pub fn show(&mut self) -> Result<Option<View>> {
        self.view_or_unit(Command::Show, "Show")
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Details of the node matching `text`.
    pub fn inspect(&mut self, text: &str) -> Result<NodeInfo> {
        match self.session.execute(Command::Inspect {
            label: text.to_string(),
        })? {
            Output::Node(info) => Ok(info),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Inspect".into(),
            }),
        }
    }

    /// Graph and cache counters.
    pub fn stats(&mut self) -> Result<SessionStats> {
        match self.session.execute(Command::Stats)? {
            Output::Stats(stats) => Ok(stats),
            _ => Err(Error::Internal {
                reason: "Unexpected output for Stats".into(),
            }),
        }
    }

    fn view_or_unit(&mut self, command: Command, name: &str) -> Result<Option<View>> {
        match self.session.execute(command)? {
            Output::View(v) => Ok(Some(v)),
            Output::Unit => Ok(None),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {}", name),
            }),
        }
    }
}
