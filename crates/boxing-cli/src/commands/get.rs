//! Get command implementation.

use crate::cli::GetArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use boxing_domain::traits::BoxerStore;
use boxing_domain::{Boxer, BoxerId};
use boxing_store::SqliteStore;

/// Execute the get command.
pub fn execute_get(args: GetArgs, store: &SqliteStore, formatter: &Formatter) -> Result<Boxer> {
    let boxer = match (args.id, args.name) {
        (Some(id), _) => store.get_boxer_by_id(BoxerId(id))?,
        (None, Some(name)) => store.get_boxer_by_name(&name)?,
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Must specify either --id or --name".to_string(),
            ))
        }
    };

    println!("{}", formatter.format_boxer(&boxer)?);

    Ok(boxer)
}
