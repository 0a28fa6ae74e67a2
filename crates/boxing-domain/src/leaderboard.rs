//! Leaderboard types

use crate::boxer::Boxer;
use crate::error::DomainError;

/// Key the leaderboard is ranked by, always descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeaderboardSort {
    /// Total wins
    #[default]
    Wins,

    /// Wins divided by fights
    WinPct,
}

impl LeaderboardSort {
    /// Get the sort key name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardSort::Wins => "wins",
            LeaderboardSort::WinPct => "win_pct",
        }
    }
}

impl std::str::FromStr for LeaderboardSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            other => Err(DomainError::InvalidSort(other.to_string())),
        }
    }
}

/// One ranked row of the leaderboard
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    /// The ranked boxer, weight class recomputed
    pub boxer: Boxer,

    /// Win percentage rounded to one decimal place (83.3 for 10 of 12)
    pub win_pct: f64,
}

impl LeaderboardEntry {
    /// Build an entry, or `None` when the boxer has never fought
    pub fn from_boxer(boxer: Boxer) -> Option<Self> {
        if boxer.fights() == 0 {
            return None;
        }
        let win_pct = win_percentage(boxer.wins(), boxer.fights());
        Some(Self { boxer, win_pct })
    }
}

/// Percentage of fights won, rounded to one decimal place
///
/// Exact ties at the hundredths digit round to the even tenth, so 1 win in
/// 16 fights (6.25%) reports 6.2.
pub fn win_percentage(wins: u32, fights: u32) -> f64 {
    if fights == 0 {
        return 0.0;
    }
    let percentage = f64::from(wins) / f64::from(fights) * 100.0;
    (percentage * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxer::BoxerId;

    fn boxer_with_record(fights: u32, wins: u32) -> Boxer {
        Boxer::from_parts(BoxerId(1), "Record Holder", 180, 180, 185.0, 30)
            .unwrap()
            .with_record(fights, wins)
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!("wins".parse::<LeaderboardSort>(), Ok(LeaderboardSort::Wins));
        assert_eq!("win_pct".parse::<LeaderboardSort>(), Ok(LeaderboardSort::WinPct));
        assert_eq!(
            "losses".parse::<LeaderboardSort>(),
            Err(DomainError::InvalidSort("losses".to_string()))
        );
        assert_eq!(LeaderboardSort::default(), LeaderboardSort::Wins);
    }

    #[test]
    fn test_win_percentage_rounding() {
        assert_eq!(win_percentage(10, 12), 83.3);
        assert_eq!(win_percentage(2, 3), 66.7);
        assert_eq!(win_percentage(1, 1), 100.0);
        assert_eq!(win_percentage(0, 5), 0.0);
    }

    #[test]
    fn test_win_percentage_ties_round_to_even() {
        assert_eq!(win_percentage(1, 16), 6.2);
        assert_eq!(win_percentage(5, 16), 31.2);
        assert_eq!(win_percentage(1, 80), 1.2);
        assert_eq!(win_percentage(3, 16), 18.8);
    }

    #[test]
    fn test_entry_excludes_unfought() {
        assert!(LeaderboardEntry::from_boxer(boxer_with_record(0, 0)).is_none());

        let entry = LeaderboardEntry::from_boxer(boxer_with_record(12, 10)).unwrap();
        assert_eq!(entry.win_pct, 83.3);
        assert_eq!(entry.boxer.wins(), 10);
    }
}
