//! Ring model: entry, skill, and fight resolution

use crate::RingError;
use boxing_domain::skill::{fighting_skill, win_probability};
use boxing_domain::traits::{BoxerStore, RandomSource};
use boxing_domain::{Boxer, FightResult};
use tracing::{error, info, warn};

/// Most boxers the ring can hold
pub const RING_CAPACITY: usize = 2;

/// Upper bound requested from the random source for each fight
///
/// A draw `n` in `[1, DRAW_RESOLUTION]` maps to `(n - 1) / DRAW_RESOLUTION`,
/// which lies in `[0, 1)`.
pub const DRAW_RESOLUTION: u32 = 1000;

/// The ring during a bout
///
/// Holds at most two boxers in entry order and owns the random source used to
/// settle fights. Not safe for concurrent use; one ring serves one session.
pub struct RingModel<R> {
    ring: Vec<Boxer>,
    random: R,
}

impl<R: RandomSource> RingModel<R> {
    /// Create an empty ring that draws from `random`
    pub fn new(random: R) -> Self {
        Self {
            ring: Vec::with_capacity(RING_CAPACITY),
            random,
        }
    }

    /// Number of boxers currently in the ring
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the ring holds no boxers
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Add a boxer to the ring
    ///
    /// # Errors
    ///
    /// Returns [`RingError::RingFull`] if two boxers are already present.
    pub fn enter_ring(&mut self, boxer: Boxer) -> Result<(), RingError> {
        info!("Received request to add boxer '{}' to the ring", boxer.name());

        if self.ring.len() >= RING_CAPACITY {
            error!("The ring is already full with {} boxers", RING_CAPACITY);
            return Err(RingError::RingFull);
        }

        info!("Successfully added boxer to the ring: {}", boxer.name());
        self.ring.push(boxer);
        Ok(())
    }

    /// The boxers currently in the ring, in entry order
    ///
    /// # Errors
    ///
    /// Returns [`RingError::Empty`] if the ring is empty.
    pub fn get_boxers(&self) -> Result<&[Boxer], RingError> {
        if self.ring.is_empty() {
            error!("Ring is empty");
            return Err(RingError::Empty);
        }
        Ok(&self.ring)
    }

    /// Remove all boxers from the ring; clearing an empty ring is a no-op
    pub fn clear_ring(&mut self) {
        info!("Received request to clear the ring");

        if self.ring.is_empty() {
            return;
        }
        self.ring.clear();
        info!("Successfully cleared the ring");
    }

    /// Fighting skill of a boxer
    pub fn get_fighting_skill(&self, boxer: &Boxer) -> f64 {
        let skill = fighting_skill(boxer);
        info!("Retrieving boxer {}'s skill: {}", boxer.name(), skill);
        skill
    }

    /// Settle the bout between the two boxers in the ring
    ///
    /// The first boxer wins when the draw falls below the logistic of the
    /// skill gap. The winner is credited a win and the loser a loss, in that
    /// order, then the ring is cleared.
    ///
    /// If the draw or either stats update fails the error is returned and the
    /// ring keeps its boxers.
    ///
    /// Returns the winner's name.
    pub fn fight<S: BoxerStore>(&mut self, store: &mut S) -> Result<String, RingError>
    where
        S::Error: std::fmt::Display,
        R::Error: std::fmt::Display,
    {
        if self.ring.len() < RING_CAPACITY {
            warn!("Cannot start a fight with {} boxer(s) in the ring", self.ring.len());
            return Err(RingError::NotEnoughBoxers);
        }

        let (boxer_1, boxer_2) = (&self.ring[0], &self.ring[1]);

        let skill_1 = self.get_fighting_skill(boxer_1);
        let skill_2 = self.get_fighting_skill(boxer_2);

        let normalized_delta = win_probability(skill_1, skill_2);
        info!("Normalized skill difference: {}", normalized_delta);

        let draw = self
            .random
            .get_random(DRAW_RESOLUTION)
            .map_err(|e| RingError::Random(e.to_string()))?;
        let random_number = (draw - 1.0) / f64::from(DRAW_RESOLUTION);

        let (winner, loser) = if random_number < normalized_delta {
            (boxer_1, boxer_2)
        } else {
            (boxer_2, boxer_1)
        };
        let (winner_id, winner_name, loser_id) = (winner.id(), winner.name().to_string(), loser.id());

        info!("The winner is {}!", winner_name);
        store
            .update_boxer_stats(winner_id, FightResult::Win)
            .map_err(|e| RingError::Store(e.to_string()))?;
        store
            .update_boxer_stats(loser_id, FightResult::Loss)
            .map_err(|e| RingError::Store(e.to_string()))?;

        info!("The bout is over, clearing the ring");
        self.clear_ring();

        Ok(winner_name)
    }
}
