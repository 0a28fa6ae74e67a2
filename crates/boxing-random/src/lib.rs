//! Boxing Random Source Layer
//!
//! Implementations of the `RandomSource` trait from `boxing-domain`.
//!
//! # Sources
//!
//! - `MockRandom`: Deterministic scripted draws for testing
//! - `RandomOrgClient`: True random integers from random.org
//!
//! # Examples
//!
//! ```
//! use boxing_random::MockRandom;
//! use boxing_domain::traits::RandomSource;
//!
//! let source = MockRandom::new(vec![3.0, 7.0]);
//! assert_eq!(source.get_random(10).unwrap(), 3.0);
//! assert_eq!(source.get_random(10).unwrap(), 7.0);
//! ```

#![warn(missing_docs)]

pub mod random_org;

use boxing_domain::traits::RandomSource;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use random_org::RandomOrgClient;

/// Errors that can occur while drawing a random number
#[derive(Error, Debug)]
pub enum RandomError {
    /// Requested upper bound is below 1
    #[error("max must be at least 1, got {0}")]
    InvalidMax(u32),

    /// The request did not complete within the timeout
    #[error("Request to random.org timed out.")]
    Timeout,

    /// Network failure or non-success HTTP status
    #[error("Request to random.org failed: {0}")]
    Unavailable(String),

    /// Response body is not a number
    #[error("Invalid response from random.org: {0}")]
    MalformedResponse(String),
}

#[derive(Debug)]
struct MockState {
    draws: VecDeque<f64>,
    last: f64,
    fail: bool,
    call_count: usize,
}

/// Mock random source for deterministic testing
///
/// Returns the scripted values in order, then keeps repeating the last one.
/// No network calls are made.
///
/// # Examples
///
/// ```
/// use boxing_random::MockRandom;
/// use boxing_domain::traits::RandomSource;
///
/// let source = MockRandom::constant(1.0);
/// assert_eq!(source.get_random(100).unwrap(), 1.0);
/// assert_eq!(source.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockRandom {
    state: Arc<Mutex<MockState>>,
}

impl MockRandom {
    /// Create a mock that returns `draws` in order
    pub fn new(draws: Vec<f64>) -> Self {
        let last = draws.last().copied().unwrap_or(1.0);
        Self {
            state: Arc::new(Mutex::new(MockState {
                draws: draws.into(),
                last,
                fail: false,
                call_count: 0,
            })),
        }
    }

    /// Create a mock that always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Create a mock whose every draw fails as unavailable
    pub fn failing() -> Self {
        let mock = Self::default();
        mock.lock().fail = true;
        mock
    }

    /// Queue another value after the scripted ones
    pub fn push(&self, value: f64) {
        let mut state = self.lock();
        state.draws.push_back(value);
        state.last = value;
    }

    /// Get the number of times get_random was called
    pub fn call_count(&self) -> usize {
        self.lock().call_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked mid-draw
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockRandom {
    fn default() -> Self {
        Self::constant(1.0)
    }
}

impl RandomSource for MockRandom {
    type Error = RandomError;

    fn get_random(&self, max: u32) -> Result<f64, Self::Error> {
        let mut state = self.lock();
        state.call_count += 1;

        if max < 1 {
            return Err(RandomError::InvalidMax(max));
        }
        if state.fail {
            return Err(RandomError::Unavailable("Mock failure".to_string()));
        }

        let value = state.draws.pop_front().unwrap_or(state.last);
        Ok(value)
    }
}
