//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::Result;
use crate::output::Formatter;
use boxing_domain::traits::BoxerStore;
use boxing_domain::BoxerId;
use boxing_store::SqliteStore;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Execute the delete command.
///
/// Returns `false` if the user declined the confirmation prompt.
pub fn execute_delete(
    args: DeleteArgs,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<bool> {
    let id = BoxerId(args.id);

    if !args.yes {
        let boxer = store.get_boxer_by_id(id)?;
        print!("Delete boxer {} ({})? [y/N] ", boxer.name(), id);
        io::stdout().flush()?;

        if !confirm(io::stdin().lock())? {
            info!("Deletion of boxer {} cancelled", id);
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(false);
        }
    }

    info!("Deleting boxer {}", id);
    store.delete_boxer(id)?;
    println!("{}", formatter.success(&format!("Deleted boxer {}", id)));

    Ok(true)
}

/// Read one line of input and accept only `y`/`Y`.
fn confirm<R: BufRead>(mut input: R) -> Result<bool> {
    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
