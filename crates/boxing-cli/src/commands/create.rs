//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerStore;
use boxing_domain::{BoxerId, BoxerProfile};
use boxing_store::SqliteStore;

/// Execute the create command.
pub fn execute_create(
    args: CreateArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<BoxerId> {
    let profile = BoxerProfile::new(args.name, args.weight, args.height, args.reach, args.age)?;
    let id = store.create_boxer(&profile)?;

    println!("{}", formatter.boxer_created(id, profile.name()));

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use boxing_domain::{DomainError, WeightClass};
    use boxing_store::StoreError;

    fn args(name: &str, weight: i64, age: i64) -> CreateArgs {
        CreateArgs {
            name: name.to_string(),
            weight,
            height: 180,
            reach: 185.0,
            age,
        }
    }

    #[test]
    fn test_create_registers_boxer() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let id = execute_create(args("Joe Frazier", 205, 27), &mut store, &formatter).unwrap();

        let boxer = store.get_boxer_by_id(id).unwrap();
        assert_eq!(boxer.weight_class(), WeightClass::Heavyweight);
        assert_eq!(boxer.fights(), 0);
    }

    #[test]
    fn test_create_rejects_invalid_age() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = execute_create(args("Too Young", 150, 17), &mut store, &formatter).unwrap_err();
        assert!(matches!(err, CliError::Domain(DomainError::InvalidAge(17))));
        assert!(store.list_boxers().unwrap().is_empty());
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let mut store = SqliteStore::new(":memory:").unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_create(args("Joe Frazier", 205, 27), &mut store, &formatter).unwrap();
        let err = execute_create(args("Joe Frazier", 210, 30), &mut store, &formatter).unwrap_err();
        assert!(matches!(err, CliError::Store(StoreError::DuplicateName(_))));
    }
}
