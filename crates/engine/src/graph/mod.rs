//! Graph module for Lineup.
//!
//! Holds the attributed undirected graph of bands and musicians. A
//! [`GraphStore`] is populated exactly once by [`GraphBuilder`] and is
//! read-only afterward, so it can be shared freely (`Arc<GraphStore>`)
//! between sessions without locking.

pub mod adjacency;
pub mod builder;
pub mod keys;
pub mod query;
pub mod traversal;
pub mod types;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use lineup_core::{EdgeAttributes, LineupError, LineupResult, NodeAttributes};

use adjacency::AdjacencyIndex;
use keys::EdgeKey;
use types::NodeId;

pub use builder::{DuplicatePolicy, GraphBuilder};
pub use query::{NeighborhoodQuery, RootRetention};

#[derive(Debug, Clone)]
struct NodeEntry {
    label: String,
    attrs: NodeAttributes,
}

#[derive(Debug, Clone)]
struct EdgeEntry {
    a: NodeId,
    b: NodeId,
    attrs: EdgeAttributes,
}

/// Attributed undirected graph.
///
/// Nodes are identified by exact, case-sensitive labels. A second index
/// keyed by the case-folded label serves user queries; when several labels
/// fold to the same key, the first one inserted wins.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<NodeEntry>,
    index: FxHashMap<String, NodeId>,
    folded: FxHashMap<String, SmallVec<[NodeId; 1]>>,
    adjacency: AdjacencyIndex,
    edges: Vec<EdgeEntry>,
    edge_index: FxHashMap<EdgeKey, usize>,
}

impl GraphStore {
    /// Create an empty store. Use [`GraphBuilder`] to populate one.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Exact-match membership test.
    pub fn has_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Resolve user-typed text to a stored label, ignoring case.
    ///
    /// Surrounding whitespace in `query` is ignored. If several labels
    /// differ only by case, the one inserted first is returned.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        self.folded
            .get(&keys::fold_case(query))
            .and_then(|ids| ids.first())
            .map(|&id| self.label(id))
    }

    /// Like [`resolve`](Self::resolve), but reports case-insensitive
    /// collisions instead of picking one.
    pub fn resolve_strict(&self, query: &str) -> LineupResult<Option<&str>> {
        match self.folded.get(&keys::fold_case(query)) {
            None => Ok(None),
            Some(ids) if ids.len() == 1 => Ok(Some(self.label(ids[0]))),
            Some(ids) => Err(LineupError::AmbiguousResolve {
                query: query.to_string(),
                candidates: ids.iter().map(|&id| self.label(id).to_string()).collect(),
            }),
        }
    }

    /// Labels directly connected to `label`, in edge insertion order.
    pub fn neighbors(&self, label: &str) -> LineupResult<Vec<&str>> {
        let id = self.require(label)?;
        Ok(self
            .adjacency
            .neighbors(id)
            .iter()
            .map(|&n| self.label(n))
            .collect())
    }

    /// Number of distinct neighbors of `label`.
    pub fn degree(&self, label: &str) -> LineupResult<usize> {
        let id = self.require(label)?;
        Ok(self.adjacency.degree(id))
    }

    /// Attributes of the node with the given label.
    pub fn node_attributes(&self, label: &str) -> LineupResult<&NodeAttributes> {
        let id = self.require(label)?;
        Ok(self.attrs(id))
    }

    /// Attributes of the edge between `a` and `b` (order irrelevant).
    pub fn edge_attributes(&self, a: &str, b: &str) -> LineupResult<&EdgeAttributes> {
        let found = match (self.node_id(a), self.node_id(b)) {
            (Some(x), Some(y)) => self.edge_index.get(&EdgeKey::new(x, y)),
            _ => None,
        };
        found
            .map(|&i| &self.edges[i].attrs)
            .ok_or_else(|| LineupError::edge_not_found(a, b))
    }

    /// All labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|n| n.label.as_str())
    }

    /// All edges in insertion order: (a, b, attributes).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &EdgeAttributes)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.label(e.a), self.label(e.b), &e.attrs))
    }

    // =========================================================================
    // Handle access (used by traversal.rs and query.rs)
    // =========================================================================

    pub(crate) fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub(crate) fn require(&self, label: &str) -> LineupResult<NodeId> {
        self.node_id(label)
            .ok_or_else(|| LineupError::node_not_found(label))
    }

    pub(crate) fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].label
    }

    pub(crate) fn attrs(&self, id: NodeId) -> &NodeAttributes {
        &self.nodes[id.index()].attrs
    }

    pub(crate) fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.neighbors(id)
    }

    /// Index of the edge between `a` and `b` in insertion order.
    pub(crate) fn edge_position(&self, a: NodeId, b: NodeId) -> Option<usize> {
        self.edge_index.get(&EdgeKey::new(a, b)).copied()
    }

    pub(crate) fn edge_at(&self, position: usize) -> (NodeId, NodeId, &EdgeAttributes) {
        let e = &self.edges[position];
        (e.a, e.b, &e.attrs)
    }

    // =========================================================================
    // Mutation (build time only, see builder.rs)
    // =========================================================================

    /// Insert a node or overwrite the attributes of an existing one.
    ///
    /// Returns the handle and whether an existing node was overwritten.
    /// An overwritten node keeps its handle and insertion position.
    pub(crate) fn upsert_node(&mut self, label: String, attrs: NodeAttributes) -> (NodeId, bool) {
        if let Some(id) = self.node_id(&label) {
            self.nodes[id.index()].attrs = attrs;
            return (id, true);
        }
        (self.insert_node(label, attrs), false)
    }

    /// Return the handle for `label`, creating an `Unknown` node if absent.
    ///
    /// Existing attributes are never touched.
    pub(crate) fn ensure_node(&mut self, label: &str) -> (NodeId, bool) {
        match self.node_id(label) {
            Some(id) => (id, false),
            None => (
                self.insert_node(label.to_string(), NodeAttributes::default()),
                true,
            ),
        }
    }

    fn insert_node(&mut self, label: String, attrs: NodeAttributes) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.folded
            .entry(keys::fold_case(&label))
            .or_default()
            .push(id);
        self.index.insert(label.clone(), id);
        self.adjacency.add_node(id);
        self.nodes.push(NodeEntry { label, attrs });
        id
    }

    /// Add the edge `{a, b}` or overwrite the attributes of the existing one.
    ///
    /// Returns `true` if the edge is new.
    pub(crate) fn set_edge(&mut self, a: NodeId, b: NodeId, attrs: EdgeAttributes) -> bool {
        let key = EdgeKey::new(a, b);
        if let Some(&i) = self.edge_index.get(&key) {
            self.edges[i].attrs = attrs;
            return false;
        }
        self.edge_index.insert(key, self.edges.len());
        self.edges.push(EdgeEntry { a, b, attrs });
        self.adjacency.add_edge(a, b);
        true
    }

    /// Set `original_member` on a musician node.
    ///
    /// Non-musicians are left alone. Returns `true` only when the flag
    /// actually flipped; the flag is never cleared.
    pub(crate) fn promote_if_musician(&mut self, id: NodeId) -> bool {
        let attrs = &mut self.nodes[id.index()].attrs;
        if attrs.node_type.is_musician() && !attrs.original_member {
            attrs.original_member = true;
            true
        } else {
            false
        }
    }
}
