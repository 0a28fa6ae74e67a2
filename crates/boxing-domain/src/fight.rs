//! Fight result recorded against a boxer's statistics

use crate::error::DomainError;

/// Outcome of a bout from one boxer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FightResult {
    /// Increments both fights and wins
    Win,

    /// Increments fights only
    Loss,
}

impl FightResult {
    /// Get the result name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FightResult::Win => "win",
            FightResult::Loss => "loss",
        }
    }
}

impl std::fmt::Display for FightResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FightResult {
    type Err = DomainError;

    /// Accepts exactly `"win"` or `"loss"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(FightResult::Win),
            "loss" => Ok(FightResult::Loss),
            other => Err(DomainError::InvalidResult(other.to_string())),
        }
    }
}
