//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Boxing CLI - Manage boxers and settle bouts in the ring.
#[derive(Debug, Parser)]
#[command(name = "boxing")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database path (overrides the configuration file)
    #[arg(short, long, global = true, env = "BOXING_DATABASE")]
    pub database: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
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

    /// Put two boxers in the ring and settle the bout
    Fight(FightArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the create command.
#[derive(Debug, Clone, Parser)]
pub struct CreateArgs {
    /// Unique display name
    pub name: String,

    /// Weight in pounds (at least 125)
    #[arg(short, long, allow_negative_numbers = true)]
    pub weight: i64,

    /// Height (greater than 0)
    #[arg(long, allow_negative_numbers = true)]
    pub height: i64,

    /// Arm reach (greater than 0)
    #[arg(short, long, allow_negative_numbers = true)]
    pub reach: f64,

    /// Age (18 to 40)
    #[arg(short, long, allow_negative_numbers = true)]
    pub age: i64,
}

/// Arguments for the delete command.
#[derive(Debug, Clone, Parser)]
pub struct DeleteArgs {
    /// Boxer ID
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Arguments for the get command.
#[derive(Debug, Clone, Parser)]
#[command(group(clap::ArgGroup::new("lookup").required(true).args(["id", "name"])))]
pub struct GetArgs {
    /// Look up by ID
    #[arg(short, long)]
    pub id: Option<i64>,

    /// Look up by exact name
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments for the leaderboard command.
#[derive(Debug, Clone, Parser)]
pub struct LeaderboardArgs {
    /// Sort key: wins or win_pct
    #[arg(short, long, default_value = "wins")]
    pub sort: String,
}

/// Arguments for the update-stats command.
#[derive(Debug, Clone, Parser)]
pub struct UpdateStatsArgs {
    /// Boxer ID
    pub id: i64,

    /// Result to record: win or loss
    pub result: String,
}

/// Arguments for the fight command.
///
/// A numeric reference is tried as an ID first, then as a name.
#[derive(Debug, Clone, Parser)]
pub struct FightArgs {
    /// First boxer (ID or name); favoured by the scoring formula
    pub first: String,

    /// Second boxer (ID or name)
    pub second: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
