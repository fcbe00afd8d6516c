//! Interactive explorer prompt.
//!
//! Each line is split with shell quoting rules, so labels with spaces can
//! be quoted (`go "Brian May"`) or typed bare (`search brian may`).

use std::path::PathBuf;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lineup_executor::{Command, Explorer};

use crate::format::render_output;

const HISTORY_FILE: &str = ".lineup_history";

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Run a session command.
    Execute(Command),
    /// Print the command list.
    Help,
    /// Leave the prompt.
    Quit,
}

/// Parse one prompt line. `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> std::result::Result<Option<ReplAction>, String> {
    let parts = shlex::split(line).ok_or_else(|| "unbalanced quotes".to_string())?;
    let (cmd, args) = match parts.split_first() {
        Some((cmd, args)) => (cmd.to_lowercase(), args),
        None => return Ok(None),
    };

    let action = match cmd.as_str() {
        "quit" | "exit" | "q" => ReplAction::Quit,
        "help" | "h" | "?" => ReplAction::Help,
        "search" | "s" => ReplAction::Execute(Command::Search {
            text: joined(args, "search <name>")?,
        }),
        "go" | "click" => ReplAction::Execute(Command::Click {
            label: joined(args, "go <label>")?,
        }),
        "radius" | "r" => {
            let value = single(args, "radius <n>")?;
            let radius = value
                .parse::<usize>()
                .map_err(|_| format!("'{}' is not a valid radius", value))?;
            ReplAction::Execute(Command::SetRadius { radius })
        }
        "originals" | "o" => {
            let enabled = match single(args, "originals on|off")?.to_lowercase().as_str() {
                "on" | "true" | "1" => true,
                "off" | "false" | "0" => false,
                _ => return Err("Usage: originals on|off".to_string()),
            };
            ReplAction::Execute(Command::SetOriginalsOnly { enabled })
        }
        "back" | "b" => ReplAction::Execute(Command::Back),
        "show" => ReplAction::Execute(Command::Show),
        "inspect" | "i" => ReplAction::Execute(Command::Inspect {
            label: joined(args, "inspect <name>")?,
        }),
        "stats" => ReplAction::Execute(Command::Stats),
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(Some(action))
}

fn joined(args: &[String], usage: &str) -> std::result::Result<String, String> {
    if args.is_empty() {
        return Err(format!("Usage: {}", usage));
    }
    Ok(args.join(" "))
}

fn single<'a>(args: &'a [String], usage: &str) -> std::result::Result<&'a str, String> {
    match args {
        [one] => Ok(one.as_str()),
        _ => Err(format!("Usage: {}", usage)),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <name>       center on an artist or band (case-insensitive)");
    println!("  go <label>          re-center on a label from the current view");
    println!("  radius <n>          set the hop radius");
    println!("  originals on|off    show only bands and original members");
    println!("  back                return to the previous center");
    println!("  show                print the current view");
    println!("  inspect <name>      details of one node");
    println!("  stats               graph and cache counters");
    println!("  help                this message");
    println!("  quit                exit");
    println!();
}

fn history_path() -> PathBuf {
    history_in(dirs::data_local_dir())
}

fn history_in(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(HISTORY_FILE)
}

/// Run the prompt until `quit` or end of input.
pub fn run(mut explorer: Explorer) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let history = history_path();
    let _ = rl.load_history(&history);

    let stats = explorer.stats()?;
    println!(
        "Lineup explorer: {} nodes, {} edges. Type 'help' for commands.\n",
        stats.nodes, stats.edges
    );

    loop {
        let prompt = match explorer.session().root() {
            Some(root) => format!("lineup [{}]> ", root),
            None => "lineup> ".to_string(),
        };
        match rl.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match parse_line(line) {
                    Ok(None) => {}
                    Ok(Some(ReplAction::Quit)) => break,
                    Ok(Some(ReplAction::Help)) => print_help(),
                    Ok(Some(ReplAction::Execute(command))) => match explorer.execute(command) {
                        Ok(output) => print!("{}", render_output(&output)),
                        Err(e) => println!("Error: {}", e),
                    },
                    Err(msg) => println!("{}", msg),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("Use 'quit' to exit");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                tracing::error!(error = %err, "Readline failed");
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
    Ok(())
}
