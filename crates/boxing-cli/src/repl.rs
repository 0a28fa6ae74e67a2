//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! One ring lives for the whole session, so boxers can be entered one at a
//! time and inspected before the bout is settled.

use crate::cli::{CreateArgs, DeleteArgs, GetArgs, LeaderboardArgs, UpdateStatsArgs};
use crate::commands::{self, resolve_boxer};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use boxing_domain::traits::RandomSource;
use boxing_ring::RingModel;
use boxing_store::SqliteStore;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl<R>(
    store: &mut SqliteStore,
    random: R,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    R: RandomSource,
    R::Error: Display,
{
    println!("{}", formatter.info("Boxing REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Readline(e.to_string()))?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)
        .map_err(|e| CliError::Readline(format!("Failed to initialize editor: {}", e)))?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut ring = RingModel::new(random);

    loop {
        let prompt = format!("boxing [{}/2]> ", ring.len());

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Usage(text)) => {
                        println!("{}", text);
                    }
                    Ok(ReplCommand::Action(action)) => {
                        if let Err(e) = execute_repl_action(action, store, &mut ring, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// A parsed REPL line.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    /// Help or usage text produced by the argument parser
    Usage(String),
    Action(ReplAction),
}

#[derive(Debug, Parser)]
#[command(name = "boxing", no_binary_name = true, disable_help_subcommand = true)]
struct ReplLine {
    #[command(subcommand)]
    action: ReplAction,
}

/// Commands available inside the REPL.
#[derive(Debug, Subcommand)]
enum ReplAction {
    /// Register a new boxer
    Create(CreateArgs),
    /// Remove a boxer
    Delete(DeleteArgs),
    /// Show one boxer by ID or name
    Get(GetArgs),
    /// List all boxers
    List,
    /// Show the leaderboard
    Leaderboard(LeaderboardArgs),
    /// Record a win or loss for a boxer
    UpdateStats(UpdateStatsArgs),
    /// Put a boxer in the ring (numeric: ID first, then name)
    Enter { boxer: String },
    /// Show the boxers in the ring
    Ring,
    /// Empty the ring
    Clear,
    /// Show a boxer's fighting skill (numeric: ID first, then name)
    Skill { boxer: String },
    /// Settle the bout between the two boxers in the ring
    Fight,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let words = split_words(line)?;

    match words.first().map(String::as_str) {
        None => Err(CliError::InvalidInput("Empty command".to_string())),
        Some("exit" | "quit" | "q") => Ok(ReplCommand::Exit),
        Some("help" | "?") => Ok(ReplCommand::Help),
        Some(_) => match ReplLine::try_parse_from(words) {
            Ok(parsed) => Ok(ReplCommand::Action(parsed.action)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand) => {
                Ok(ReplCommand::Usage(e.to_string()))
            }
            Err(e) => Err(CliError::InvalidInput(e.to_string().trim_end().to_string())),
        },
    }
}

/// Split a line on whitespace, keeping double- or single-quoted runs together.
fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CliError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Execute a REPL action against the session's store and ring.
fn execute_repl_action<R>(
    action: ReplAction,
    store: &mut SqliteStore,
    ring: &mut RingModel<R>,
    formatter: &Formatter,
) -> Result<()>
where
    R: RandomSource,
    R::Error: Display,
{
    match action {
        ReplAction::Create(args) => {
            commands::execute_create(args, store, formatter)?;
        }
        ReplAction::Delete(args) => {
            commands::execute_delete(args, store, formatter)?;
        }
        ReplAction::Get(args) => {
            commands::execute_get(args, store, formatter)?;
        }
        ReplAction::List => {
            commands::execute_list(store, formatter)?;
        }
        ReplAction::Leaderboard(args) => {
            commands::execute_leaderboard(args, store, formatter)?;
        }
        ReplAction::UpdateStats(args) => {
            commands::execute_update_stats(args, store, formatter)?;
        }
        ReplAction::Enter { boxer } => {
            let boxer = resolve_boxer(store, &boxer)?;
            let name = boxer.name().to_string();
            ring.enter_ring(boxer)?;
            println!("{}", formatter.success(&format!("{} entered the ring", name)));
        }
        ReplAction::Ring => {
            if ring.is_empty() {
                println!("{}", formatter.info("The ring is empty"));
            } else {
                println!("{}", formatter.format_boxers(ring.get_boxers()?)?);
            }
        }
        ReplAction::Clear => {
            ring.clear_ring();
            println!("{}", formatter.success("Ring cleared"));
        }
        ReplAction::Skill { boxer } => {
            let boxer = resolve_boxer(store, &boxer)?;
            let skill = ring.get_fighting_skill(&boxer);
            println!("{}", formatter.skill(&boxer, skill));
        }
        ReplAction::Fight => {
            let winner = ring.fight(store)?;
            println!("{}", formatter.fight_result(&winner));
        }
    }

    Ok(())
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  create <name> -w <weight> --height <h> -r <reach> -a <age>");
    println!("                                 - Register a boxer");
    println!("  delete <id> [-y]               - Remove a boxer");
    println!("  get --id <id> | --name <name>  - Show one boxer");
    println!("  list                           - List all boxers");
    println!("  leaderboard [-s wins|win_pct]  - Show the leaderboard");
    println!("  update-stats <id> win|loss     - Record a result");
    println!();
    println!("  enter <id|name>                - Put a boxer in the ring");
    println!("  ring                           - Show the boxers in the ring");
    println!("  clear                          - Empty the ring");
    println!("  skill <id|name>                - Show a boxer's fighting skill");
    println!("  fight                          - Settle the bout in the ring");
    println!();
    println!("  A numeric <id|name> is tried as an ID first, then as a name.");
    println!();
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
    println!("  Quote names that contain spaces: enter \"Muhammad Ali\"");
    println!("  Append --help to any command for its options.");
}
