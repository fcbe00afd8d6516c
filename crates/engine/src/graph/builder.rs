//! One-shot graph ingestion.
//!
//! Entity rows become nodes, connection rows become undirected edges, and
//! original-member status is propagated from edges onto musician nodes as
//! each edge is added.

use serde::{Deserialize, Serialize};

use lineup_core::{
    ConnectionRecord, EdgeAttributes, EntityRecord, LineupError, LineupResult, NodeAttributes,
    NodeType, RecordTable,
};

use super::keys::normalize_label;
use super::GraphStore;

/// What to do when the elements table declares the same label twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The later record replaces the earlier one (default).
    #[default]
    LastWriteWins,
    /// Fail the build with `DuplicateRecord`.
    Reject,
}

/// Counters gathered during a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Entity rows whose label was already present.
    pub overwritten_nodes: usize,
    /// Nodes created only because a connection referenced them.
    pub auto_created_nodes: usize,
    /// Connection rows that hit an already-connected pair.
    pub overwritten_edges: usize,
    /// Musicians promoted to original member.
    pub promotions: usize,
}

/// Builds a [`GraphStore`] from raw records.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    duplicates: DuplicatePolicy,
}

impl GraphBuilder {
    /// Builder with last-write-wins duplicate handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how repeated entity labels are handled.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Build the graph.
    ///
    /// Fails with `InvalidRecord` on the first row whose required field is
    /// missing or blank; no partial graph is returned.
    pub fn build(
        &self,
        entities: &[EntityRecord],
        connections: &[ConnectionRecord],
    ) -> LineupResult<GraphStore> {
        self.build_with_stats(entities, connections)
            .map(|(store, _)| store)
    }

    /// Build the graph and report what happened along the way.
    pub fn build_with_stats(
        &self,
        entities: &[EntityRecord],
        connections: &[ConnectionRecord],
    ) -> LineupResult<(GraphStore, BuildStats)> {
        let mut store = GraphStore::new();
        let mut stats = BuildStats::default();

        for (row, record) in entities.iter().enumerate() {
            let label = required(record.label.as_deref(), RecordTable::Entities, row, "Label")?;
            let attrs = NodeAttributes::new(NodeType::from_cell(record.node_type.as_deref()));

            if store.has_node(&label) {
                if self.duplicates == DuplicatePolicy::Reject {
                    return Err(LineupError::DuplicateRecord { label });
                }
                tracing::debug!(target: "lineup::build", label = %label, row, "Entity label repeated, later record wins");
            }
            let (_, replaced) = store.upsert_node(label, attrs);
            if replaced {
                stats.overwritten_nodes += 1;
            }
        }

        for (row, record) in connections.iter().enumerate() {
            let from = required(record.from.as_deref(), RecordTable::Connections, row, "From")?;
            let to = required(record.to.as_deref(), RecordTable::Connections, row, "To")?;
            let original_member = record.is_original();

            let (a, created_a) = store.ensure_node(&from);
            let (b, created_b) = store.ensure_node(&to);
            stats.auto_created_nodes += usize::from(created_a) + usize::from(created_b);

            if !store.set_edge(a, b, EdgeAttributes { original_member }) {
                tracing::debug!(target: "lineup::build", from = %from, to = %to, row, "Connection repeated, later record wins");
                stats.overwritten_edges += 1;
            }

            if original_member {
                stats.promotions += usize::from(store.promote_if_musician(a));
                if b != a {
                    stats.promotions += usize::from(store.promote_if_musician(b));
                }
            }
        }

        tracing::info!(
            target: "lineup::build",
            nodes = store.node_count(),
            edges = store.edge_count(),
            auto_created = stats.auto_created_nodes,
            promotions = stats.promotions,
            "Graph built"
        );

        Ok((store, stats))
    }
}

/// Build with default settings.
pub fn build(
    entities: &[EntityRecord],
    connections: &[ConnectionRecord],
) -> LineupResult<GraphStore> {
    GraphBuilder::new().build(entities, connections)
}

fn required(
    raw: Option<&str>,
    table: RecordTable,
    row: usize,
    field: &'static str,
) -> LineupResult<String> {
    normalize_label(raw).ok_or(LineupError::InvalidRecord { table, row, field })
}
