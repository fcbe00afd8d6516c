//! Graph traversal operations: BFS and induced subgraph extraction.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::types::*;
use super::GraphStore;

impl GraphStore {
    /// BFS over node handles, returning `(node, depth)` in discovery order.
    ///
    /// Nodes deeper than `max_depth` are neither returned nor expanded.
    pub(crate) fn bfs_ids(&self, start: NodeId, max_depth: usize) -> Vec<(NodeId, usize)> {
        let mut out: Vec<(NodeId, usize)> = Vec::new();
        let mut seen: FxHashSet<NodeId> = FxHashSet::default();
        let mut queue: VecDeque<(NodeId, usize)> = VecDeque::new();

        queue.push_back((start, 0));
        seen.insert(start);

        while let Some((current, depth)) = queue.pop_front() {
            out.push((current, depth));

            // Don't explore further if at max depth
            if depth >= max_depth {
                continue;
            }

            for &next in self.neighbor_ids(current) {
                if seen.insert(next) {
                    queue.push_back((next, depth + 1));
                }
            }
        }

        out
    }

    /// Build a subgraph from handles, deduplicating repeated handles.
    pub(crate) fn induced(&self, members: &[(NodeId, Option<usize>)]) -> Subgraph {
        let mut included: FxHashSet<NodeId> = FxHashSet::default();
        let mut nodes = Vec::with_capacity(members.len());

        for &(id, distance) in members {
            if !included.insert(id) {
                continue;
            }
            let attrs = self.attrs(id);
            nodes.push(SubgraphNode {
                label: self.label(id).to_string(),
                node_type: attrs.node_type.clone(),
                original_member: attrs.original_member,
                distance,
                role: attrs.role(),
            });
        }

        // Walk adjacency of included nodes only, then restore insertion order.
        let mut positions: Vec<usize> = Vec::new();
        let mut taken: FxHashSet<usize> = FxHashSet::default();
        for &(id, _) in members {
            for &next in self.neighbor_ids(id) {
                if !included.contains(&next) {
                    continue;
                }
                if let Some(pos) = self.edge_position(id, next) {
                    if taken.insert(pos) {
                        positions.push(pos);
                    }
                }
            }
        }
        positions.sort_unstable();

        let edges = positions
            .into_iter()
            .map(|pos| {
                let (a, b, attrs) = self.edge_at(pos);
                SubgraphEdge {
                    a: self.label(a).to_string(),
                    b: self.label(b).to_string(),
                    original_member: attrs.original_member,
                }
            })
            .collect();

        Subgraph { nodes, edges }
    }
}
