//! Weight class module - bands derived from a boxer's weight

use crate::error::{DomainError, MIN_WEIGHT};

/// Weight class of a boxer
///
/// Never stored: always derived from weight with fixed thresholds.
/// - Featherweight: 125..133
/// - Lightweight: 133..166
/// - Middleweight: 166..203
/// - Heavyweight: 203 and up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeightClass {
    /// 125 to 132
    Featherweight,

    /// 133 to 165
    Lightweight,

    /// 166 to 202
    Middleweight,

    /// 203 and above
    Heavyweight,
}

impl WeightClass {
    /// Derive the weight class for a weight
    ///
    /// Fails for anything below 125.
    pub fn from_weight(weight: i64) -> Result<Self, DomainError> {
        match weight {
            w if w >= 203 => Ok(WeightClass::Heavyweight),
            w if w >= 166 => Ok(WeightClass::Middleweight),
            w if w >= 133 => Ok(WeightClass::Lightweight),
            w if w >= MIN_WEIGHT => Ok(WeightClass::Featherweight),
            w => Err(DomainError::InvalidWeight(w)),
        }
    }

    /// Get the weight class name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Featherweight => "FEATHERWEIGHT",
            WeightClass::Lightweight => "LIGHTWEIGHT",
            WeightClass::Middleweight => "MIDDLEWEIGHT",
            WeightClass::Heavyweight => "HEAVYWEIGHT",
        }
    }

    /// Parse a weight class from its name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FEATHERWEIGHT" => Some(WeightClass::Featherweight),
            "LIGHTWEIGHT" => Some(WeightClass::Lightweight),
            "MIDDLEWEIGHT" => Some(WeightClass::Middleweight),
            "HEAVYWEIGHT" => Some(WeightClass::Heavyweight),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeightClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidWeightClass(s.to_string()))
    }
}
