//! Fighting skill and win probability
//!
//! Both functions are pure. The ring combines them with an external random
//! draw to settle a bout.

use crate::boxer::Boxer;

/// Age below which a boxer loses a point of skill
pub const YOUNG_AGE: i64 = 25;

/// Age above which a boxer loses two points of skill
pub const VETERAN_AGE: i64 = 35;

/// Skill adjustment for age
pub fn age_modifier(age: i64) -> f64 {
    if age < YOUNG_AGE {
        -1.0
    } else if age > VETERAN_AGE {
        -2.0
    } else {
        0.0
    }
}

/// Compute a boxer's fighting skill
///
/// `weight * name_length + reach / 10 + age_modifier`, where the name length
/// counts characters.
///
/// # Examples
///
/// ```
/// use boxing_domain::{Boxer, BoxerId};
/// use boxing_domain::skill::fighting_skill;
///
/// let ali = Boxer::from_parts(BoxerId(1), "Muhammad Ali", 236, 191, 198.0, 38).unwrap();
/// assert!((fighting_skill(&ali) - 2849.8).abs() < 1e-9);
/// ```
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let name_length = boxer.name().chars().count() as f64;
    (boxer.weight() as f64 * name_length) + (boxer.reach() / 10.0) + age_modifier(boxer.age())
}

/// Logistic transform of the absolute skill gap
///
/// The result is always in `[0.5, 1.0]` and is the chance that the boxer who
/// entered the ring first wins, regardless of which of the two is stronger.
/// That asymmetry is part of the scoring rules and is kept as is.
pub fn win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: win probability never drops below one half
        #[test]
        fn test_win_probability_floor(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let p = win_probability(a, b);
            prop_assert!((0.5..=1.0).contains(&p));
        }
    }
}
