//! Boxing Domain Layer
//!
//! This crate contains the core business rules and domain model for the boxing
//! registry. Its only dependency is `thiserror`; it defines the value objects,
//! derived computations, and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Boxer**: A persisted competitor with physical attributes and fight statistics
//! - **Weight class**: Derived from weight alone, recomputed on every read
//! - **Fighting skill**: Deterministic score from weight, name length, reach and age
//! - **Leaderboard**: Boxers with at least one fight, ranked by wins or win percentage
//!
//! ## Architecture
//!
//! - No infrastructure dependencies
//! - Pure business logic only
//! - Infrastructure implementations (SQLite, random.org) live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boxer;
pub mod error;
pub mod fight;
pub mod leaderboard;
pub mod skill;
pub mod traits;
pub mod weight_class;

// Re-exports for convenience
pub use boxer::{Boxer, BoxerId, BoxerProfile};
pub use error::DomainError;
pub use fight::FightResult;
pub use leaderboard::{LeaderboardEntry, LeaderboardSort};
pub use weight_class::WeightClass;
