//! Label normalization and edge key construction.
//!
//! Labels are identities: two labels are the same node only if they are
//! byte-equal after trimming. Case folding is used solely for the lookup
//! index that serves user-typed queries.

use super::types::NodeId;

// =============================================================================
// Labels
// =============================================================================

/// Trim a raw label cell, returning `None` if nothing is left.
pub fn normalize_label(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Key used by the case-insensitive lookup index.
pub fn fold_case(label: &str) -> String {
    label.trim().to_lowercase()
}

// =============================================================================
// Edge keys
// =============================================================================

/// Canonical key for an unordered node pair.
///
/// `EdgeKey::new(a, b) == EdgeKey::new(b, a)`, so an undirected graph keeps
/// at most one edge per pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    /// Build the key for the pair `{a, b}`.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            EdgeKey(a, b)
        } else {
            EdgeKey(b, a)
        }
    }

    /// The two endpoints, lower handle first.
    pub fn endpoints(self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }

    /// True for a self-loop.
    pub fn is_loop(self) -> bool {
        self.0 == self.1
    }
}
