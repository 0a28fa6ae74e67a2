//! Update-stats command implementation.

use crate::cli::UpdateStatsArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerStore;
use boxing_domain::{BoxerId, FightResult};
use boxing_store::SqliteStore;

/// Execute the update-stats command.
pub fn execute_update_stats(
    args: UpdateStatsArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<()> {
    let result: FightResult = args.result.parse()?;
    let id = BoxerId(args.id);

    store.update_boxer_stats(id, result)?;
    println!("{}", formatter.success(&format!("Recorded a {} for boxer {}", result, id)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use boxing_domain::{BoxerProfile, DomainError};

    #[test]
    fn test_records_win_and_loss() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let id = store
            .create_boxer(&BoxerProfile::new("Larry Holmes", 215, 191, 206.0, 30).unwrap())
            .unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        for result in ["win", "loss", "win"] {
            let args = UpdateStatsArgs { id: id.value(), result: result.to_string() };
            execute_update_stats(args, &mut store, &formatter).unwrap();
        }

        let boxer = store.get_boxer_by_id(id).unwrap();
        assert_eq!(boxer.fights(), 3);
        assert_eq!(boxer.wins(), 2);
    }

    #[test]
    fn test_rejects_unknown_result_without_touching_record() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let id = store
            .create_boxer(&BoxerProfile::new("Ken Norton", 210, 191, 203.0, 30).unwrap())
            .unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let args = UpdateStatsArgs { id: id.value(), result: "draw".to_string() };
        let err = execute_update_stats(args, &mut store, &formatter).unwrap_err();
        assert!(matches!(err, CliError::Domain(DomainError::InvalidResult(_))));

        let boxer = store.get_boxer_by_id(id).unwrap();
        assert_eq!((boxer.fights(), boxer.wins()), (0, 0));
    }
}
