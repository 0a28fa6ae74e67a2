//! Leaderboard command implementation.

use crate::cli::LeaderboardArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerStore;
use boxing_domain::{LeaderboardEntry, LeaderboardSort};
use boxing_store::SqliteStore;

/// Execute the leaderboard command.
pub fn execute_leaderboard(
    args: LeaderboardArgs,
    store: &SqliteStore,
    formatter: &Formatter,
) -> Result<Vec<LeaderboardEntry>> {
    let sort: LeaderboardSort = args.sort.parse()?;
    let entries = store.get_leaderboard(sort)?;

    println!("{}", formatter.format_leaderboard(&entries)?);

    Ok(entries)
}
