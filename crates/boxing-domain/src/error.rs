//! Validation errors raised by the domain layer

use thiserror::Error;

/// Minimum weight accepted by any weight class
pub const MIN_WEIGHT: i64 = 125;

/// Youngest age allowed to box
pub const MIN_AGE: i64 = 18;

/// Oldest age allowed to box
pub const MAX_AGE: i64 = 40;

/// Errors produced when input violates a domain rule
///
/// These are always raised before any mutation reaches a store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Name is empty or whitespace only
    #[error("Invalid name: name must not be empty.")]
    InvalidName,

    /// Weight below the featherweight floor
    #[error("Invalid weight: {0}. Must be at least {min}.", min = MIN_WEIGHT)]
    InvalidWeight(i64),

    /// Height not strictly positive
    #[error("Invalid height: {0}. Must be greater than 0.")]
    InvalidHeight(i64),

    /// Reach not strictly positive (or not a number)
    #[error("Invalid reach: {0}. Must be greater than 0.")]
    InvalidReach(f64),

    /// Age outside the allowed range
    #[error("Invalid age: {0}. Must be between {min} and {max}.", min = MIN_AGE, max = MAX_AGE)]
    InvalidAge(i64),

    /// Fight result other than "win" or "loss"
    #[error("Invalid result: {0}. Expected 'win' or 'loss'.")]
    InvalidResult(String),

    /// Leaderboard sort key other than "wins" or "win_pct"
    #[error("Invalid sort_by parameter: {0}")]
    InvalidSort(String),

    /// Boxer id that does not parse as an integer
    #[error("Invalid boxer ID: {0}")]
    InvalidId(String),

    /// Weight class name that is not one of the four bands
    #[error("Invalid weight class: {0}")]
    InvalidWeightClass(String),
}
