//! Results returned by a [`Session`](crate::Session).

use std::sync::Arc;

use serde::Serialize;

use lineup_core::{NodeRole, NodeType};
use lineup_engine::Subgraph;

/// What the explorer is showing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    /// Exact label of the center node.
    pub root: String,
    /// Hop limit used.
    pub radius: usize,
    /// Whether the originals-only filter was on.
    pub originals_only: bool,
    /// The neighborhood itself.
    pub subgraph: Arc<Subgraph>,
}

/// Details of a single node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    /// Exact label.
    pub label: String,
    /// Entity kind.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Promoted original member.
    pub original_member: bool,
    /// Presentation role.
    pub role: NodeRole,
    /// Direct neighbors in edge insertion order.
    pub neighbors: Vec<String>,
}

impl NodeInfo {
    /// Number of direct neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Graph and cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Nodes in the graph.
    pub nodes: usize,
    /// Edges in the graph.
    pub edges: usize,
    /// Query cache hits.
    pub cache_hits: u64,
    /// Query cache misses.
    pub cache_misses: u64,
    /// Results currently cached.
    pub cache_entries: usize,
    /// Roots on the back stack.
    pub history_depth: usize,
}

/// Output of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Output {
    /// Nothing to show.
    Unit,
    /// A neighborhood view.
    View(View),
    /// Search text matched no node; the current view is unchanged.
    NotFound {
        /// Text as typed.
        query: String,
    },
    /// One node's details.
    Node(NodeInfo),
    /// Counters.
    Stats(SessionStats),
}

impl Output {
    /// The view, if this output carries one.
    pub fn view(&self) -> Option<&View> {
        match self {
            Output::View(v) => Some(v),
            _ => None,
        }
    }
}
