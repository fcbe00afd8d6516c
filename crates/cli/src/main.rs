//! Lineup command-line explorer.
//!
//! Loads a band/musician dataset and shows the neighborhood of an artist,
//! either once (`query`, `inspect`) or interactively (`repl`).

mod format;
mod repl;

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lineup_engine::ExplorerConfig;
use lineup_executor::Explorer;

use format::{render_output, render_view, OutputFormat};

#[derive(Parser)]
#[command(name = "lineup")]
#[command(version)]
#[command(about = "Explore who played in which band", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Elements CSV (Label, Type)
    #[arg(long, value_name = "FILE", global = true, requires = "connections")]
    entities: Option<PathBuf>,

    /// Connections CSV (From, To, Original Member)
    #[arg(long, value_name = "FILE", global = true, requires = "entities")]
    connections: Option<PathBuf>,

    /// JSON dataset with elements and connections
    #[arg(long, value_name = "FILE", global = true, conflicts_with_all = ["entities", "connections"])]
    json: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the neighborhood of an artist or band
    Query {
        /// Name to search for (case-insensitive)
        name: String,

        /// Hop radius (defaults to the configured value)
        #[arg(short, long)]
        radius: Option<usize>,

        /// Show only bands and original members
        #[arg(long)]
        originals: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the attributes and neighbors of one node
    Inspect {
        /// Name to look up (case-insensitive)
        name: String,
    },

    /// Start the interactive explorer
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mut explorer = Explorer::open(&config).context("Failed to load dataset")?;

    match cli.command {
        Commands::Query {
            name,
            radius,
            originals,
            format,
        } => {
            if let Some(r) = radius {
                explorer.set_radius(r)?;
            }
            if originals {
                explorer.set_originals_only(true)?;
            }
            match explorer.search(&name)? {
                Some(view) => print!("{}", render_view(&view, format)?),
                None => bail!("No artist or band named '{}'", name.trim()),
            }
        }
        Commands::Inspect { name } => {
            let info = explorer.inspect(&name)?;
            print!("{}", render_output(&lineup_executor::Output::Node(info)));
        }
        Commands::Repl => repl::run(explorer)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Config file first, then command-line dataset overrides.
fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = ExplorerConfig::load_or_default(cli.config.as_deref())?;

    if let Some(json) = &cli.json {
        config.dataset.json = Some(json.clone());
    } else if let (Some(entities), Some(connections)) = (&cli.entities, &cli.connections) {
        config.dataset.json = None;
        config.dataset.entities = Some(entities.clone());
        config.dataset.connections = Some(connections.clone());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_args() {
        let cli = Cli::try_parse_from([
            "lineup",
            "--entities",
            "e.csv",
            "--connections",
            "c.csv",
            "query",
            "Queen",
            "--radius",
            "1",
            "--originals",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Query {
                name,
                radius,
                originals,
                format,
            } => {
                assert_eq!(name, "Queen");
                assert_eq!(radius, Some(1));
                assert!(originals);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Query"),
        }
    }

    #[test]
    fn test_entities_requires_connections() {
        assert!(Cli::try_parse_from(["lineup", "--entities", "e.csv", "repl"]).is_err());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("lineup.toml");
        std::fs::write(&path, "[dataset]\njson = \"a.json\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "lineup",
            "--config",
            path.to_str().unwrap(),
            "--entities",
            "e.csv",
            "--connections",
            "c.csv",
            "repl",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.dataset.json, None);
        assert_eq!(config.dataset.entities, Some(PathBuf::from("e.csv")));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let cli = Cli::try_parse_from(["lineup", "--config", "/nonexistent/lineup.toml", "repl"])
            .unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.query.default_radius, 2);
    }
}
