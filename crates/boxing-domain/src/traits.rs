//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Boxer, BoxerId, BoxerProfile, FightResult, LeaderboardEntry, LeaderboardSort};

/// Trait for storing and retrieving boxers
///
/// Implemented by the infrastructure layer (boxing-store). Every mutating
/// operation commits before returning.
pub trait BoxerStore {
    /// Error type for store operations
    type Error;

    /// Insert a new boxer with zero fights and wins
    ///
    /// Fails if a boxer with the same name already exists.
    fn create_boxer(&mut self, profile: &BoxerProfile) -> Result<BoxerId, Self::Error>;

    /// Remove a boxer by ID, failing if it does not exist
    fn delete_boxer(&mut self, id: BoxerId) -> Result<(), Self::Error>;

    /// Get a boxer by ID, failing if it does not exist
    fn get_boxer_by_id(&self, id: BoxerId) -> Result<Boxer, Self::Error>;

    /// Get a boxer by exact name, failing if it does not exist
    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer, Self::Error>;

    /// Boxers with at least one fight, ranked descending by `sort_by`
    fn get_leaderboard(&self, sort_by: LeaderboardSort) -> Result<Vec<LeaderboardEntry>, Self::Error>;

    /// Record a fight result for a boxer, failing if it does not exist
    fn update_boxer_stats(&mut self, id: BoxerId, result: FightResult) -> Result<(), Self::Error>;

    /// All boxers ordered by ID
    fn list_boxers(&self) -> Result<Vec<Boxer>, Self::Error>;
}

/// Trait for drawing random numbers from an external source
///
/// Implemented by the infrastructure layer (boxing-random)
pub trait RandomSource {
    /// Error type for random draws
    type Error;

    /// Draw a number uniformly from `[1, max]`
    fn get_random(&self, max: u32) -> Result<f64, Self::Error>;
}
