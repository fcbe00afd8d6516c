//! Navigation command handlers.
//!
//! Handles Search, Click, SetRadius, SetOriginalsOnly, Back and Show.

use crate::session::{render, Context, ViewState};
use crate::{Error, Output, Result};

/// Handle Search command: resolve the text and re-center on the match.
pub(crate) fn search(ctx: &Context, state: &mut ViewState, text: String) -> Result<Output> {
    let root = match ctx.resolve(&text)? {
        Some(label) => label,
        None => {
            tracing::info!(target: "lineup::session", query = %text.trim(), "No node matches search");
            return Ok(Output::NotFound {
                query: text.trim().to_string(),
            });
        }
    };
    state.navigate(root);
    render(ctx, state)
}

/// Handle Click command: re-center on an exact label.
pub(crate) fn click(ctx: &Context, state: &mut ViewState, label: String) -> Result<Output> {
    if !ctx.store.has_node(&label) {
        return Err(Error::NotFound { label });
    }
    state.navigate(label);
    render(ctx, state)
}

/// Handle SetRadius command.
pub(crate) fn set_radius(ctx: &Context, state: &mut ViewState, radius: usize) -> Result<Output> {
    state.radius = ctx.check_radius(radius)?;
    render(ctx, state)
}

/// Handle SetOriginalsOnly command.
pub(crate) fn set_originals_only(ctx: &Context, state: &mut ViewState, enabled: bool) -> Result<Output> {
    state.originals_only = enabled;
    render(ctx, state)
}

/// Handle Back command: pop the previous root, or `Unit` if there is none.
pub(crate) fn back(ctx: &Context, state: &mut ViewState) -> Result<Output> {
    match state.history.pop() {
        Some(prev) => {
            state.root = Some(prev);
            render(ctx, state)
        }
        None => Ok(Output::Unit),
    }
}

/// Handle Show command.
pub(crate) fn show(ctx: &Context, state: &ViewState) -> Result<Output> {
    render(ctx, state)
}
