//! Undirected adjacency index.
//!
//! One neighbor list per node handle, in edge insertion order. Lists are
//! deduplicated on insert, so the index never holds parallel edges.

use smallvec::SmallVec;

use super::types::NodeId;

/// Most nodes in a band/musician network have only a handful of neighbors.
type NeighborList = SmallVec<[NodeId; 4]>;

/// In-memory undirected adjacency index.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    lists: Vec<NeighborList>,
}

impl AdjacencyIndex {
    /// Create a new empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make room for `id`, giving it an empty neighbor list.
    pub fn add_node(&mut self, id: NodeId) {
        if self.lists.len() <= id.index() {
            self.lists.resize_with(id.index() + 1, NeighborList::new);
        }
    }

    /// Connect `a` and `b` in both directions.
    ///
    /// Returns `false` if the pair was already connected. A self-loop is
    /// recorded once in the node's own list.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        self.add_node(a);
        self.add_node(b);
        if self.lists[a.index()].contains(&b) {
            return false;
        }
        self.lists[a.index()].push(b);
        if a != b {
            self.lists[b.index()].push(a);
        }
        true
    }

    /// Neighbors of `id` in insertion order (empty for unknown handles).
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.lists
            .get(id.index())
            .map(|l| l.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct neighbors of `id`.
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Number of node slots in the index.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// True if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
