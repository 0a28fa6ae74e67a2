//! Boxing CLI - Command-line interface for the boxer registry and the ring.

use boxing_cli::commands;
use boxing_cli::config::OutputFormat;
use boxing_cli::repl;
use boxing_cli::{Cli, Command, Config, Formatter};
use boxing_random::RandomOrgClient;
use boxing_store::SqliteStore;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> boxing_cli::Result<()> {
    let config = load_config(&cli)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let database_path = match cli.database {
        Some(path) => path,
        None => config.database_path()?,
    };
    let mut store = SqliteStore::new(&database_path)?;

    match cli.command {
        None | Some(Command::Repl) => {
            let random = random_client(&config)?;
            repl::run_repl(&mut store, random, &config, &formatter)?;
        }
        Some(Command::Create(args)) => {
            commands::execute_create(args, &mut store, &formatter)?;
        }
        Some(Command::Delete(args)) => {
            commands::execute_delete(args, &mut store, &formatter)?;
        }
        Some(Command::Get(args)) => {
            commands::execute_get(args, &store, &formatter)?;
        }
        Some(Command::List) => {
            commands::execute_list(&store, &formatter)?;
        }
        Some(Command::Leaderboard(args)) => {
            commands::execute_leaderboard(args, &store, &formatter)?;
        }
        Some(Command::UpdateStats(args)) => {
            commands::execute_update_stats(args, &mut store, &formatter)?;
        }
        Some(Command::Fight(args)) => {
            let random = random_client(&config)?;
            commands::execute_fight(args, &mut store, random, &formatter)?;
        }
    }

    Ok(())
}

/// Load the explicit config file, or the default one, writing defaults on first run.
fn load_config(cli: &Cli) -> boxing_cli::Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load_from(path);
    }

    if !Config::path()?.exists() {
        let config = Config::default();
        config.save().ok();
        return Ok(config);
    }

    Ok(Config::load().unwrap_or_else(|e| {
        let formatter = Formatter::new(OutputFormat::Table, !cli.no_color);
        eprintln!(
            "{}",
            formatter.warning(&format!("Ignoring unreadable configuration: {}", e))
        );
        Config::default()
    }))
}

fn random_client(config: &Config) -> boxing_cli::Result<RandomOrgClient> {
    let client = RandomOrgClient::with_timeout(
        config.random_url(),
        Duration::from_secs(config.random.timeout_secs),
    )?;
    Ok(client)
}
