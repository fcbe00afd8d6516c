//! Graph value types: node handles and subgraphs.

use serde::{Deserialize, Serialize};
use std::io;

use lineup_core::{NodeRole, NodeType, ORIGINAL_MARKER};

/// Dense handle of a node inside a [`GraphStore`](super::GraphStore).
///
/// Handles are assigned in insertion order and stay valid for the life of
/// the store, which is never mutated after build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in insertion order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphNode {
    /// Node label.
    pub label: String,
    /// Entity kind.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Promoted original-member flag.
    pub original_member: bool,
    /// Hop distance from the query root, when the subgraph came from a query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    /// Presentation role (band / original member / member).
    pub role: NodeRole,
}

/// An undirected edge as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubgraphEdge {
    /// First endpoint, as it appeared in the first record for the pair.
    pub a: String,
    /// Second endpoint.
    pub b: String,
    /// Original-member flag of the connection.
    pub original_member: bool,
}

impl SubgraphEdge {
    /// True if this edge joins `x` and `y` in either order.
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// True if `label` is one of the endpoints.
    pub fn touches(&self, label: &str) -> bool {
        self.a == label || self.b == label
    }
}

/// Induced subgraph: a node subset plus every graph edge between members.
///
/// Nodes are in BFS discovery order; edges are in graph insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    /// Included nodes.
    pub nodes: Vec<SubgraphNode>,
    /// Edges whose endpoints are both included.
    pub edges: Vec<SubgraphEdge>,
}

impl Subgraph {
    /// Number of nodes in the subgraph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the subgraph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when no node survived.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up an included node by exact label.
    pub fn node(&self, label: &str) -> Option<&SubgraphNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// True if `label` is included.
    pub fn contains_node(&self, label: &str) -> bool {
        self.node(label).is_some()
    }

    /// True if an edge between `a` and `b` is included.
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Included labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    /// Write the edges as CSV with the connections-table header, so the
    /// export loads back as a connections file.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(["From", "To", "Original Member"])?;
        for e in &self.edges {
            let marker = if e.original_member { ORIGINAL_MARKER } else { "NO" };
            out.write_record([e.a.as_str(), e.b.as_str(), marker])?;
        }
        out.flush()?;
        Ok(())
    }
}
