//! Command implementations.

pub mod create;
pub mod delete;
pub mod fight;
pub mod get;
pub mod leaderboard;
pub mod list;
pub mod stats;

pub use self::create::execute_create;
pub use self::delete::execute_delete;
pub use self::fight::execute_fight;
pub use self::get::execute_get;
pub use self::leaderboard::execute_leaderboard;
pub use self::list::execute_list;
pub use self::stats::execute_update_stats;

use crate::error::Result;
use boxing_domain::traits::BoxerStore;
use boxing_domain::{Boxer, BoxerId};
use boxing_store::{SqliteStore, StoreError};
use tracing::info;

/// Look a boxer up by ID or exact name.
///
/// A numeric reference is tried as an ID first. If no boxer has that ID it
/// is looked up as a name, so a boxer named "42" is reachable while no ID
/// 42 exists.
pub fn resolve_boxer(store: &SqliteStore, reference: &str) -> Result<Boxer> {
    let name = reference.trim();
    let boxer = match name.parse::<BoxerId>() {
        Ok(id) => match store.get_boxer_by_id(id) {
            Err(StoreError::NotFound(_)) => {
                info!("No boxer with ID {}, trying '{}' as a name", id, name);
                store.get_boxer_by_name(name)?
            }
            found => found?,
        },
        Err(_) => store.get_boxer_by_name(name)?,
    };
    Ok(boxer)
}
