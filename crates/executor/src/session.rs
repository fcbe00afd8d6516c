//! Explorer session.
//!
//! A [`Session`] holds the view state of one user: the current root, the
//! radius, the filter flag and a stack of earlier roots. The graph and the
//! query cache live in a shared [`Context`], so any number of sessions can
//! explore the same dataset.

use std::sync::Arc;

use lineup_engine::{Dataset, ExplorerConfig, GraphStore, QueryCache, QueryConfig};

use crate::convert::convert_result;
use crate::handlers;
use crate::output::View;
use crate::{Command, Output, Result};

/// Shared, read-only state behind every session.
#[derive(Debug)]
pub struct Context {
    pub(crate) store: Arc<GraphStore>,
    pub(crate) cache: QueryCache,
    pub(crate) query: QueryConfig,
}

impl Context {
    /// Wrap an already built graph.
    pub fn new(store: Arc<GraphStore>, query: QueryConfig) -> Self {
        Self {
            cache: QueryCache::new(query.cache_capacity),
            store,
            query,
        }
    }

    /// Load the configured dataset and build the graph.
    pub fn open(config: &ExplorerConfig) -> Result<Self> {
        convert_result(config.validate())?;
        let source = convert_result(config.dataset_source())?;
        let dataset = convert_result(Dataset::load(&source))?;
        let store = convert_result(dataset.build(&config.graph_builder()))?;
        Ok(Self::new(Arc::new(store), config.query.clone()))
    }

    /// The graph.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Query settings.
    pub fn query_config(&self) -> &QueryConfig {
        &self.query
    }

    pub(crate) fn check_radius(&self, radius: usize) -> Result<usize> {
        convert_result(self.query.check_radius(radius))
    }

    /// Map search text to a label, honoring `strict_resolve`.
    pub(crate) fn resolve(&self, text: &str) -> Result<Option<String>> {
        if self.query.strict_resolve {
            let found = convert_result(self.store.resolve_strict(text))?;
            return Ok(found.map(str::to_string));
        }
        Ok(self.store.resolve(text).map(str::to_string))
    }
}

/// Per-user navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewState {
    pub(crate) root: Option<String>,
    pub(crate) radius: usize,
    pub(crate) originals_only: bool,
    pub(crate) history: Vec<String>,
}

impl ViewState {
    fn new(query: &QueryConfig) -> Self {
        Self {
            root: None,
            radius: query.default_radius,
            originals_only: query.originals_only,
            history: Vec::new(),
        }
    }

    /// Make `root` current, remembering the previous root.
    pub(crate) fn navigate(&mut self, root: String) {
        if let Some(prev) = self.root.take() {
            if prev != root {
                self.history.push(prev);
            }
        }
        self.root = Some(root);
    }
}

/// One user's walk through the graph.
#[derive(Debug)]
pub struct Session {
    ctx: Arc<Context>,
    state: ViewState,
}

impl Session {
    /// Start a session with the configured defaults and no root.
    pub fn new(ctx: Arc<Context>) -> Self {
        let state = ViewState::new(&ctx.query);
        Self { ctx, state }
    }

    /// Shared context.
    pub fn context(&self) -> &Arc<Context> {
        &self.ctx
    }

    /// Current root, if any.
    pub fn root(&self) -> Option<&str> {
        self.state.root.as_deref()
    }

    /// Current radius.
    pub fn radius(&self) -> usize {
        self.state.radius
    }

    /// Current filter state.
    pub fn originals_only(&self) -> bool {
        self.state.originals_only
    }

    /// Execute one command.
    pub fn execute(&mut self, command: Command) -> Result<Output> {
        tracing::debug!(target: "lineup::session", command = command.name(), "Executing");
        let ctx = &self.ctx;
        let state = &mut self.state;
        match command {
            Command::Search { text } => handlers::navigation::search(ctx, state, text),
            Command::Click { label } => handlers::navigation::click(ctx, state, label),
            Command::SetRadius { radius } => handlers::navigation::set_radius(ctx, state, radius),
            Command::SetOriginalsOnly { enabled } => {
                handlers::navigation::set_originals_only(ctx, state, enabled)
            }
            Command::Back => handlers::navigation::back(ctx, state),
            Command::Show => handlers::navigation::show(ctx, state),
            Command::Inspect { label } => handlers::inspect::inspect(ctx, label),
            Command::Stats => handlers::inspect::stats(ctx, state),
        }
    }
}

/// Run the query for the current state, or `Unit` if nothing is selected.
pub(crate) fn render(ctx: &Context, state: &ViewState) -> Result<Output> {
    let root = match &state.root {
        Some(root) => root,
        None => return Ok(Output::Unit),
    };
    let query = ctx.query.neighborhood(state.radius, state.originals_only);
    let subgraph = convert_result(ctx.cache.get_or_run(&ctx.store, root, &query))?;
    Ok(Output::View(View {
        root: root.clone(),
        radius: state.radius,
        originals_only: state.originals_only,
        subgraph,
    }))
}
