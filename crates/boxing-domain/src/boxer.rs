//! Boxer module - the core entity of the registry

use crate::error::{DomainError, MAX_AGE, MIN_AGE};
use crate::weight_class::WeightClass;

/// Unique identifier for a boxer
///
/// Wraps the integer primary key assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxerId(pub i64);

impl BoxerId {
    /// Get the underlying integer value
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for BoxerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BoxerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(BoxerId)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

/// Validated input for creating a new boxer
///
/// The only way to build one is [`BoxerProfile::new`], so a profile in hand
/// always satisfies the creation bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxerProfile {
    name: String,
    weight: i64,
    height: i64,
    reach: f64,
    age: i64,
    weight_class: WeightClass,
}

impl BoxerProfile {
    /// Validate and build a profile
    ///
    /// Checks run in order name, weight, height, reach, age and the first
    /// violation is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use boxing_domain::{BoxerProfile, DomainError};
    ///
    /// let profile = BoxerProfile::new("Muhammad Ali", 236, 191, 198.0, 38).unwrap();
    /// assert_eq!(profile.name(), "Muhammad Ali");
    ///
    /// let err = BoxerProfile::new("Too Light", 120, 170, 180.0, 25).unwrap_err();
    /// assert_eq!(err, DomainError::InvalidWeight(120));
    /// ```
    pub fn new(
        name: impl Into<String>,
        weight: i64,
        height: i64,
        reach: f64,
        age: i64,
    ) -> Result<Self, DomainError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(DomainError::InvalidName);
        }
        let weight_class = WeightClass::from_weight(weight)?;
        if height <= 0 {
            return Err(DomainError::InvalidHeight(height));
        }
        if !reach.is_finite() || reach <= 0.0 {
            return Err(DomainError::InvalidReach(reach));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(DomainError::InvalidAge(age));
        }

        Ok(Self {
            name,
            weight,
            height,
            reach,
            age,
            weight_class,
        })
    }

    /// Display name, unique across the registry
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in pounds
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Height
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Arm reach
    pub fn reach(&self) -> f64 {
        self.reach
    }

    /// Age in years
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Weight class for this profile's weight
    pub fn weight_class(&self) -> WeightClass {
        self.weight_class
    }
}

/// A persisted boxer
///
/// `weight_class` is computed when the value is built and is never read back
/// from storage. `fights` and `wins` are owned by the store and only change
/// through its stats-update operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxer {
    id: BoxerId,
    name: String,
    weight: i64,
    height: i64,
    reach: f64,
    age: i64,
    weight_class: WeightClass,
    fights: u32,
    wins: u32,
}

impl Boxer {
    /// Build a boxer from stored attributes with zeroed statistics
    ///
    /// Only the weight is checked here, because the weight class cannot be
    /// derived otherwise. Other bounds were enforced at creation time.
    pub fn from_parts(
        id: BoxerId,
        name: impl Into<String>,
        weight: i64,
        height: i64,
        reach: f64,
        age: i64,
    ) -> Result<Self, DomainError> {
        let weight_class = WeightClass::from_weight(weight)?;

        Ok(Self {
            id,
            name: name.into(),
            weight,
            height,
            reach,
            age,
            weight_class,
            fights: 0,
            wins: 0,
        })
    }

    /// Build a boxer for a freshly inserted profile
    pub fn from_profile(id: BoxerId, profile: BoxerProfile) -> Self {
        let weight_class = profile.weight_class;

        Self {
            id,
            name: profile.name,
            weight: profile.weight,
            height: profile.height,
            reach: profile.reach,
            age: profile.age,
            weight_class,
            fights: 0,
            wins: 0,
        }
    }

    /// Attach cumulative fight statistics
    pub fn with_record(mut self, fights: u32, wins: u32) -> Self {
        self.fights = fights;
        self.wins = wins;
        self
    }

    /// Store-assigned identifier
    pub fn id(&self) -> BoxerId {
        self.id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weight in pounds
    pub fn weight(&self) -> i64 {
        self.weight
    }

    /// Height
    pub fn height(&self) -> i64 {
        self.height
    }

    /// Arm reach
    pub fn reach(&self) -> f64 {
        self.reach
    }

    /// Age in years
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Derived weight class
    pub fn weight_class(&self) -> WeightClass {
        self.weight_class
    }

    /// Total fights recorded
    pub fn fights(&self) -> u32 {
        self.fights
    }

    /// Total wins recorded
    pub fn wins(&self) -> u32 {
        self.wins
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any in-range profile is accepted
        #[test]
        fn test_valid_profiles_accepted(
            weight in 125i64..400,
            height in 1i64..300,
            reach in 0.1f64..300.0,
            age in 18i64..=40,
        ) {
            let profile = BoxerProfile::new("Prop", weight, height, reach, age);
            prop_assert!(profile.is_ok());
        }

        /// Property: any out-of-range age is rejected whatever the other fields are
        #[test]
        fn test_out_of_range_age_rejected(age in prop_oneof![i64::MIN..18, 41i64..i64::MAX]) {
            prop_assert_eq!(
                BoxerProfile::new("Prop", 150, 170, 180.0, age),
                Err(DomainError::InvalidAge(age))
            );
        }

        /// Property: non-positive height is rejected
        #[test]
        fn test_non_positive_height_rejected(height in i64::MIN..=0) {
            prop_assert_eq!(
                BoxerProfile::new("Prop", 150, height, 180.0, 25),
                Err(DomainError::InvalidHeight(height))
            );
        }
    }
}
