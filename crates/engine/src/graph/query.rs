//! Bounded-radius neighborhood queries.
//!
//! A query runs BFS from the root, keeps every node within `radius` hops,
//! optionally narrows that set to bands and promoted original members, and
//! returns the induced subgraph.

use serde::{Deserialize, Serialize};

use lineup_core::{LineupError, LineupResult};

use super::types::{NodeId, Subgraph};
use super::GraphStore;

/// Whether the root survives the originals-only filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootRetention {
    /// Keep the root even if the filter would drop it (default).
    #[default]
    Always,
    /// Apply the filter to the root like any other node; the result may be
    /// empty.
    Filtered,
}

/// Parameters of a neighborhood query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighborhoodQuery {
    /// Inclusive hop limit. `0` yields the root alone.
    pub radius: usize,
    /// Keep only bands and promoted original members.
    pub originals_only: bool,
    /// Root handling under the filter.
    pub root_retention: RootRetention,
}

impl Default for NeighborhoodQuery {
    fn default() -> Self {
        Self::new(1)
    }
}

impl NeighborhoodQuery {
    /// Unfiltered query with the given radius.
    pub fn new(radius: usize) -> Self {
        Self {
            radius,
            originals_only: false,
            root_retention: RootRetention::Always,
        }
    }

    /// Enable or disable the originals-only filter.
    pub fn originals_only(mut self, enabled: bool) -> Self {
        self.originals_only = enabled;
        self
    }

    /// Choose the root retention policy.
    pub fn root_retention(mut self, retention: RootRetention) -> Self {
        self.root_retention = retention;
        self
    }

    /// Run against `store` from the exact label `root`.
    ///
    /// Fails with `NodeNotFound` if `root` is not a node; nothing else is
    /// an error.
    pub fn run(&self, store: &GraphStore, root: &str) -> LineupResult<Subgraph> {
        let root_id = store.require(root)?;
        let reached = store.bfs_ids(root_id, self.radius);

        let members: Vec<(NodeId, Option<usize>)> = reached
            .into_iter()
            .filter(|&(id, _)| self.keeps(store, root_id, id))
            .map(|(id, depth)| (id, Some(depth)))
            .collect();

        let subgraph = store.induced(&members);
        tracing::debug!(
            target: "lineup::query",
            root = %root,
            radius = self.radius,
            originals_only = self.originals_only,
            nodes = subgraph.node_count(),
            edges = subgraph.edge_count(),
            "Neighborhood computed"
        );
        Ok(subgraph)
    }

    /// Resolve `text` case-insensitively, then run from the matched label.
    pub fn run_text(&self, store: &GraphStore, text: &str) -> LineupResult<Subgraph> {
        let root = store
            .resolve(text)
            .ok_or_else(|| LineupError::node_not_found(text.trim()))?;
        self.run(store, root)
    }

    fn keeps(&self, store: &GraphStore, root: NodeId, id: NodeId) -> bool {
        if !self.originals_only {
            return true;
        }
        if id == root && self.root_retention == RootRetention::Always {
            return true;
        }
        store.attrs(id).passes_originals_filter()
    }
}

impl GraphStore {
    /// Neighborhood of `root` within `radius` hops, with the default root
    /// retention policy.
    pub fn query(
        &self,
        root: &str,
        radius: usize,
        originals_only: bool,
    ) -> LineupResult<Subgraph> {
        NeighborhoodQuery::new(radius)
            .originals_only(originals_only)
            .run(self, root)
    }
}
