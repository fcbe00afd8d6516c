//! Inspection command handlers.

use crate::convert::convert_result;
use crate::output::{NodeInfo, SessionStats};
use crate::session::{Context, ViewState};
use crate::{Error, Output, Result};

/// Handle Inspect command: attributes and neighbors of one node.
pub(crate) fn inspect(ctx: &Context, label: String) -> Result<Output> {
    let store = &ctx.store;
    let resolved = store.resolve(&label).ok_or_else(|| Error::NotFound {
        label: label.trim().to_string(),
    })?;
    let attrs = convert_result(store.node_attributes(resolved))?;
    let neighbors = convert_result(store.neighbors(resolved))?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Output::Node(NodeInfo {
        label: resolved.to_string(),
        node_type: attrs.node_type.clone(),
        original_member: attrs.original_member,
        role: attrs.role(),
        neighbors,
    }))
}

/// Handle Stats command.
pub(crate) fn stats(ctx: &Context, state: &ViewState) -> Result<Output> {
    let cache = ctx.cache.stats();
    Ok(Output::Stats(SessionStats {
        nodes: ctx.store.node_count(),
        edges: ctx.store.edge_count(),
        cache_hits: cache.hits,
        cache_misses: cache.misses,
        cache_entries: cache.entries,
        history_depth: state.history.len(),
    }))
}
