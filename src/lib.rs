//! Lineup: explore band and musician lineups as a graph.
//!
//! Entities (bands, musicians) and their connections are loaded from two
//! tables, built once into an immutable [`GraphStore`], and explored by
//! bounded-radius neighborhood queries, optionally narrowed to bands and
//! original members.
//!
//! ```no_run
//! use lineup::{ExplorerConfig, Explorer};
//!
//! let config = ExplorerConfig::load(std::path::Path::new("lineup.toml"))?;
//! let mut explorer = Explorer::open(&config)?;
//! if let Some(view) = explorer.search("queen")? {
//!     println!("{} nodes around {}", view.subgraph.node_count(), view.root);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod types;

pub use types::*;

pub use lineup_core::{LineupError, LineupResult};
pub use lineup_executor::{Error, Result};

/// Build a graph from in-memory records with default settings.
pub fn build(entities: &[EntityRecord], connections: &[ConnectionRecord]) -> LineupResult<GraphStore> {
    GraphBuilder::new().build(entities, connections)
}
