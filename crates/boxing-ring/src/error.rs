//! Error types for Ring operations

use thiserror::Error;

/// Errors that can occur during Ring operations
#[derive(Error, Debug)]
pub enum RingError {
    /// Two boxers are already in the ring
    #[error("Ring is full, cannot add more boxers.")]
    RingFull,

    /// No boxers in the ring
    #[error("Ring is empty")]
    Empty,

    /// Fewer than two boxers when a fight was requested
    #[error("There must be two boxers to start a fight.")]
    NotEnoughBoxers,

    /// Random source failure
    #[error("Random source error: {0}")]
    Random(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(String),
}
