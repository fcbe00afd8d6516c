//! Rendering of session outputs for the terminal.

use std::fmt::Write as _;

use clap::ValueEnum;

use lineup_executor::{NodeInfo, Output, SessionStats, View};

/// How `query` prints its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable listing.
    #[default]
    Text,
    /// The view as JSON.
    Json,
    /// Edge list as CSV.
    Csv,
}

/// Render a view in the requested format.
pub fn render_view(view: &View, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => view_text(view),
        OutputFormat::Json => serde_json::to_string_pretty(view)?,
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            view.subgraph.write_csv(&mut buf)?;
            String::from_utf8(buf)?
        }
    })
}

/// Render any output as text.
pub fn render_output(output: &Output) -> String {
    match output {
        Output::Unit => String::new(),
        Output::View(v) => view_text(v),
        Output::NotFound { query } => format!("No artist or band named '{}'.\n", query),
        Output::Node(info) => node_text(info),
        Output::Stats(stats) => stats_text(stats),
    }
}

fn view_text(view: &View) -> String {
    let sg = &view.subgraph;
    let mut out = String::new();
    let filter = if view.originals_only {
        ", originals only"
    } else {
        ""
    };
    let _ = writeln!(out, "{} (radius {}{})", view.root, view.radius, filter);

    if sg.is_empty() {
        out.push_str("  (nothing to show)\n");
        return out;
    }

    let width = sg.nodes.iter().map(|n| n.label.len()).max().unwrap_or(0);
    let _ = writeln!(out, "  nodes ({}):", sg.node_count());
    for n in &sg.nodes {
        let marker = if n.original_member { " *" } else { "" };
        let distance = n.distance.map(|d| format!("  d={}", d)).unwrap_or_default();
        let _ = writeln!(
            out,
            "    {:<width$}  {}{}{}",
            n.label,
            n.node_type,
            marker,
            distance,
            width = width
        );
    }

    let _ = writeln!(out, "  edges ({}):", sg.edge_count());
    for e in &sg.edges {
        let tag = if e.original_member { "  [original]" } else { "" };
        let _ = writeln!(out, "    {} -- {}{}", e.a, e.b, tag);
    }
    out
}

fn node_text(info: &NodeInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", info.label);
    let _ = writeln!(out, "  type:            {}", info.node_type);
    let _ = writeln!(out, "  original member: {}", info.original_member);
    let _ = writeln!(out, "  degree:          {}", info.degree());
    for n in &info.neighbors {
        let _ = writeln!(out, "    - {}", n);
    }
    out
}

fn stats_text(stats: &SessionStats) -> String {
    format!(
        "nodes: {}\nedges: {}\ncache: {} hits, {} misses, {} entries\nhistory: {}\n",
        stats.nodes,
        stats.edges,
        stats.cache_hits,
        stats.cache_misses,
        stats.cache_entries,
        stats.history_depth
    )
}
