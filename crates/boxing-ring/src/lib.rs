//! Boxing Ring
//!
//! Transient holder of the two boxers contesting a bout, and the simulator
//! that settles it.
//!
//! # Overview
//!
//! The ring moves through a fixed cycle:
//!
//! | State | Operation | Next |
//! |-------|-----------|------|
//! | empty | `enter_ring` | one boxer |
//! | one boxer | `enter_ring` | two boxers |
//! | two boxers | `fight` | empty |
//! | any | `clear_ring` | empty |
//!
//! A fight computes each boxer's skill, turns the gap into a probability with
//! a logistic function, and compares that probability with one draw from a
//! [`RandomSource`](boxing_domain::traits::RandomSource). The result is
//! persisted through a [`BoxerStore`](boxing_domain::traits::BoxerStore).
//!
//! # Usage
//!
//! ```no_run
//! use boxing_domain::traits::BoxerStore;
//! use boxing_random::RandomOrgClient;
//! use boxing_ring::RingModel;
//! use boxing_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("boxers.db")?;
//! let mut ring = RingModel::new(RandomOrgClient::from_env()?);
//!
//! ring.enter_ring(store.get_boxer_by_name("Muhammad Ali")?)?;
//! ring.enter_ring(store.get_boxer_by_name("Mike Tyson")?)?;
//!
//! let winner = ring.fight(&mut store)?;
//! println!("The winner is {}!", winner);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod ring;

pub use error::RingError;
pub use ring::{RingModel, DRAW_RESOLUTION, RING_CAPACITY};
