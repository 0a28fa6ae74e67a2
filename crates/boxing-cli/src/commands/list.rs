//! List command implementation.

use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerStore;
use boxing_store::SqliteStore;

/// Execute the list command.
pub fn execute_list(store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let boxers = store.list_boxers()?;
    println!("{}", formatter.format_boxers(&boxers)?);
    Ok(())
}
