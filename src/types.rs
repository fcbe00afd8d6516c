//! Public types for the Lineup API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Records and attributes
// ============================================================================

pub use lineup_core::{ConnectionRecord, EntityRecord};
pub use lineup_core::{EdgeAttributes, NodeAttributes, NodeRole, NodeType};

// ============================================================================
// Graph and queries
// ============================================================================

pub use lineup_engine::{DuplicatePolicy, GraphBuilder, GraphStore, RootRetention};
pub use lineup_engine::{NeighborhoodQuery, Subgraph, SubgraphEdge, SubgraphNode};

// ============================================================================
// Loading and configuration
// ============================================================================

pub use lineup_engine::{Dataset, DatasetSource, ExplorerConfig, QueryCache};

// ============================================================================
// Sessions
// ============================================================================

pub use lineup_executor::{Command, Explorer, NodeInfo, Output, Session, View};
