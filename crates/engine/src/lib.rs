//! Graph engine for Lineup.
//!
//! Builds the band/musician graph from tabular records, answers
//! bounded-radius neighborhood queries over it, and loads datasets and
//! configuration from disk.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod graph;
pub mod loader;

pub use cache::{CacheStats, QueryCache};
pub use config::{BuildConfig, DatasetConfig, ExplorerConfig, QueryConfig};
pub use graph::builder::BuildStats;
pub use graph::types::{Subgraph, SubgraphEdge, SubgraphNode};
pub use graph::{DuplicatePolicy, GraphBuilder, GraphStore, NeighborhoodQuery, RootRetention};
pub use loader::{load_csv, load_json, Dataset, DatasetSource};
