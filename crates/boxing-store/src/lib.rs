//! Boxing Storage Layer
//!
//! Implements the BoxerStore trait on top of SQLite.
//!
//! # Architecture
//!
//! - One owned `rusqlite::Connection` per store
//! - Every mutating operation runs in its own transaction and commits before
//!   returning; an early return drops the transaction, which rolls it back
//! - Weight class is recomputed from weight whenever a row is read
//!
//! # Examples
//!
//! ```no_run
//! use boxing_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for boxer operations
//! ```

#![warn(missing_docs)]

use boxing_domain::traits::BoxerStore;
use boxing_domain::{
    Boxer, BoxerId, BoxerProfile, FightResult, LeaderboardEntry, LeaderboardSort,
};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction};
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Boxer not found
    #[error("Boxer not found: {0}")]
    NotFound(String),

    /// A boxer with this name already exists
    #[error("Boxer with name '{0}' already exists")]
    DuplicateName(String),

    /// Stored row that no longer satisfies the domain rules
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const BOXER_COLUMNS: &str = "id, name, weight, height, reach, age, fights, wins";

/// Column values of one `boxers` row, before domain conversion
struct BoxerRow {
    id: i64,
    name: String,
    weight: i64,
    height: i64,
    reach: f64,
    age: i64,
    fights: u32,
    wins: u32,
}

impl BoxerRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            weight: row.get(2)?,
            height: row.get(3)?,
            reach: row.get(4)?,
            age: row.get(5)?,
            fights: row.get(6)?,
            wins: row.get(7)?,
        })
    }

    fn into_boxer(self) -> Result<Boxer, StoreError> {
        let boxer = Boxer::from_parts(
            BoxerId(self.id),
            self.name,
            self.weight,
            self.height,
            self.reach,
            self.age,
        )
        .map_err(|e| StoreError::InvalidData(format!("boxer {}: {}", self.id, e)))?;

        Ok(boxer.with_record(self.fights, self.wins))
    }
}

/// SQLite-based implementation of BoxerStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use boxing_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("boxers.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Run `f` inside a transaction, committing only if it succeeds
    ///
    /// Any error returned by `f` drops the transaction, which rolls back.
    fn with_transaction<T, F>(&mut self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T, StoreError>,
    {
        let tx = self.conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    fn boxer_exists(tx: &Transaction<'_>, id: BoxerId) -> Result<bool, StoreError> {
        let exists = tx
            .query_row(
                "SELECT 1 FROM boxers WHERE id = ?1",
                params![id.value()],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        Ok(exists)
    }

    fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

impl BoxerStore for SqliteStore {
    type Error = StoreError;

    fn create_boxer(&mut self, profile: &BoxerProfile) -> Result<BoxerId, Self::Error> {
        info!("Received request to create boxer '{}'", profile.name());

        self.with_transaction(|tx| {
            let exists: bool = tx
                .query_row(
                    "SELECT 1 FROM boxers WHERE name = ?1",
                    params![profile.name()],
                    |_| Ok(true),
                )
                .optional()?
                .unwrap_or(false);

            if exists {
                error!("Boxer with name '{}' already exists", profile.name());
                return Err(StoreError::DuplicateName(profile.name().to_string()));
            }

            let inserted = tx.execute(
                "INSERT INTO boxers (name, weight, height, reach, age) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    profile.name(),
                    profile.weight(),
                    profile.height(),
                    profile.reach(),
                    profile.age(),
                ],
            );

            match inserted {
                Ok(_) => {}
                // Another writer inserted the same name after the pre-check
                Err(e) if Self::is_unique_violation(&e) => {
                    error!("Boxer with name '{}' already exists", profile.name());
                    return Err(StoreError::DuplicateName(profile.name().to_string()));
                }
                Err(e) => return Err(e.into()),
            }

            let id = BoxerId(tx.last_insert_rowid());
            info!("Successfully created boxer '{}' with ID {}", profile.name(), id);
            Ok(id)
        })
    }

    fn delete_boxer(&mut self, id: BoxerId) -> Result<(), Self::Error> {
        info!("Received request to remove boxer with ID {}", id);

        self.with_transaction(|tx| {
            if !Self::boxer_exists(tx, id)? {
                warn!("Boxer with ID {} not found", id);
                return Err(StoreError::NotFound(format!("ID {}", id)));
            }

            tx.execute("DELETE FROM boxers WHERE id = ?1", params![id.value()])?;
            info!("Successfully removed boxer with ID {}", id);
            Ok(())
        })
    }

    fn get_boxer_by_id(&self, id: BoxerId) -> Result<Boxer, Self::Error> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM boxers WHERE id = ?1", BOXER_COLUMNS),
                params![id.value()],
                BoxerRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                let boxer = row.into_boxer()?;
                info!("Successfully retrieved boxer with ID {}", id);
                Ok(boxer)
            }
            None => {
                warn!("Boxer with ID {} not found", id);
                Err(StoreError::NotFound(format!("ID {}", id)))
            }
        }
    }

    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer, Self::Error> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM boxers WHERE name = ?1", BOXER_COLUMNS),
                params![name],
                BoxerRow::from_row,
            )
            .optional()?;

        match row {
            Some(row) => {
                let boxer = row.into_boxer()?;
                info!("Successfully retrieved boxer with name '{}'", name);
                Ok(boxer)
            }
            None => {
                warn!("Boxer with name '{}' not found", name);
                Err(StoreError::NotFound(format!("name '{}'", name)))
            }
        }
    }

    fn get_leaderboard(&self, sort_by: LeaderboardSort) -> Result<Vec<LeaderboardEntry>, Self::Error> {
        let order = match sort_by {
            LeaderboardSort::Wins => "wins DESC, id ASC",
            LeaderboardSort::WinPct => "win_pct DESC, id ASC",
        };
        let sql = format!(
            "SELECT {}, (wins * 1.0 / fights) AS win_pct FROM boxers WHERE fights > 0 ORDER BY {}",
            BOXER_COLUMNS, order
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], BoxerRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        let mut leaderboard = Vec::with_capacity(rows.len());
        for row in rows {
            let boxer = row.into_boxer()?;
            if let Some(entry) = LeaderboardEntry::from_boxer(boxer) {
                leaderboard.push(entry);
            }
        }

        info!(
            "Successfully built leaderboard sorted by {} ({} entries)",
            sort_by.as_str(),
            leaderboard.len()
        );
        Ok(leaderboard)
    }

    fn update_boxer_stats(&mut self, id: BoxerId, result: FightResult) -> Result<(), Self::Error> {
        info!("Received request to record a {} for boxer with ID {}", result, id);

        self.with_transaction(|tx| {
            if !Self::boxer_exists(tx, id)? {
                warn!("Boxer with ID {} not found", id);
                return Err(StoreError::NotFound(format!("ID {}", id)));
            }

            let sql = match result {
                FightResult::Win => "UPDATE boxers SET fights = fights + 1, wins = wins + 1 WHERE id = ?1",
                FightResult::Loss => "UPDATE boxers SET fights = fights + 1 WHERE id = ?1",
            };
            tx.execute(sql, params![id.value()])?;

            info!("Successfully recorded a {} for boxer with ID {}", result, id);
            Ok(())
        })
    }

    fn list_boxers(&self) -> Result<Vec<Boxer>, Self::Error> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM boxers ORDER BY id", BOXER_COLUMNS))?;

        let rows = stmt
            .query_map([], BoxerRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(BoxerRow::into_boxer).collect()
    }
}
