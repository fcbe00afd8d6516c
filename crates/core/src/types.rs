//! Node and edge attribute types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of entity a node represents.
///
/// Only `Band` and `Musician` carry meaning for propagation and filtering.
/// Type strings outside that set are kept verbatim in `Other` and behave
/// exactly like `Unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    /// A band (structural hub).
    Band,
    /// A musician (member node).
    Musician,
    /// Type column absent or blank.
    #[default]
    Unknown,
    /// Any other type string, stored as given.
    Other(String),
}

impl NodeType {
    /// Parse an optional raw `Type` cell.
    ///
    /// The value is trimmed; an absent or blank cell yields `Unknown`.
    /// Matching of `Band` and `Musician` is exact.
    pub fn from_cell(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("Unknown") => NodeType::Unknown,
            Some("Band") => NodeType::Band,
            Some("Musician") => NodeType::Musician,
            Some(other) => NodeType::Other(other.to_string()),
        }
    }

    /// True for `Band`.
    pub fn is_band(&self) -> bool {
        matches!(self, NodeType::Band)
    }

    /// True for `Musician`.
    pub fn is_musician(&self) -> bool {
        matches!(self, NodeType::Musician)
    }

    /// String form of the type.
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Band => "Band",
            NodeType::Musician => "Musician",
            NodeType::Unknown => "Unknown",
            NodeType::Other(s) => s,
        }
    }
}

impl From<String> for NodeType {
    fn from(s: String) -> Self {
        NodeType::from_cell(Some(&s))
    }
}

impl From<NodeType> for String {
    fn from(t: NodeType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes stored on a graph node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Entity kind.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Promoted to `true` when a musician touches an original-member edge.
    pub original_member: bool,
}

impl NodeAttributes {
    /// Fresh attributes for a node of the given type.
    pub fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            original_member: false,
        }
    }

    /// Whether the node survives the "original members only" filter.
    ///
    /// Bands are always kept; everything else only once promoted.
    pub fn passes_originals_filter(&self) -> bool {
        self.node_type.is_band() || self.original_member
    }

    /// Presentation role derived from type and promotion.
    pub fn role(&self) -> NodeRole {
        if self.node_type.is_band() {
            NodeRole::Band
        } else if self.original_member {
            NodeRole::OriginalMember
        } else {
            NodeRole::Member
        }
    }
}

/// Attributes stored on an undirected edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeAttributes {
    /// Whether the connection is flagged as founding-era membership.
    pub original_member: bool,
}

/// How a renderer should encode a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// A band.
    Band,
    /// A promoted musician.
    OriginalMember,
    /// Any other node.
    Member,
}
