//! Fight command implementation.

use super::resolve_boxer;
use crate::cli::FightArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::RandomSource;
use boxing_ring::RingModel;
use boxing_store::SqliteStore;
use std::fmt::Display;
use tracing::{info, warn};

/// Execute the fight command.
///
/// Both boxers enter a fresh ring in argument order and the bout is settled
/// immediately. Returns the winner's name.
pub fn execute_fight<R>(
    args: FightArgs,
    store: &mut SqliteStore,
    random: R,
    formatter: &Formatter,
) -> Result<String>
where
    R: RandomSource,
    R::Error: Display,
{
    info!("Fight requested: '{}' vs '{}'", args.first, args.second);
    let first = resolve_boxer(store, &args.first)?;
    let second = resolve_boxer(store, &args.second)?;

    let mut ring = RingModel::new(random);
    ring.enter_ring(first)?;
    ring.enter_ring(second)?;

    let winner = ring.fight(store).map_err(|e| {
        warn!("Fight between '{}' and '{}' failed: {}", args.first, args.second, e);
        e
    })?;
    println!("{}", formatter.fight_result(&winner));

    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use boxing_domain::traits::BoxerStore;
    use boxing_domain::BoxerProfile;
    use boxing_random::MockRandom;
    use boxing_ring::RingError;

    fn seeded_store() -> SqliteStore {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store
            .create_boxer(&BoxerProfile::new("Muhammad Ali", 236, 191, 198.0, 38).unwrap())
            .unwrap();
        store
            .create_boxer(&BoxerProfile::new("Mike Tyson", 220, 178, 180.0, 34).unwrap())
            .unwrap();
        store
    }

    fn fight(first: &str, second: &str) -> FightArgs {
        FightArgs {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    #[test]
    fn test_fight_by_name_records_result() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let winner = execute_fight(
            fight("Muhammad Ali", "Mike Tyson"),
            &mut store,
            MockRandom::constant(1.0),
            &formatter,
        )
        .unwrap();

        assert_eq!(winner, "Muhammad Ali");
        let ali = store.get_boxer_by_name("Muhammad Ali").unwrap();
        let tyson = store.get_boxer_by_name("Mike Tyson").unwrap();
        assert_eq!((ali.fights(), ali.wins()), (1, 1));
        assert_eq!((tyson.fights(), tyson.wins()), (1, 0));
    }

    #[test]
    fn test_fight_by_id_with_unknown_boxer() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = execute_fight(fight("1", "99"), &mut store, MockRandom::constant(1.0), &formatter)
            .unwrap_err();
        assert!(matches!(err, CliError::Store(_)));
    }

    #[test]
    fn test_random_failure_leaves_records_untouched() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = execute_fight(fight("1", "2"), &mut store, MockRandom::failing(), &formatter)
            .unwrap_err();

        assert!(matches!(err, CliError::Ring(RingError::Random(_))));
        assert!(store.get_leaderboard(Default::default()).unwrap().is_empty());
    }
}
