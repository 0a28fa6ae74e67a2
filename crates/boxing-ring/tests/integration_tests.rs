//! Integration tests for the ring against a real SQLite registry

use boxing_domain::traits::BoxerStore;
use boxing_domain::{BoxerProfile, LeaderboardSort};
use boxing_random::MockRandom;
use boxing_ring::{RingError, RingModel, DRAW_RESOLUTION};
use boxing_store::SqliteStore;

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    store
        .create_boxer(&BoxerProfile::new("Muhammad Ali", 236, 191, 198.0, 38).unwrap())
        .unwrap();
    store
        .create_boxer(&BoxerProfile::new("Mike Tyson", 220, 178, 180.0, 22).unwrap())
        .unwrap();
    store
}

#[test]
fn test_fight_persists_result() {
    let mut store = seeded_store();
    let random = MockRandom::constant(1.0);
    let mut ring = RingModel::new(random.clone());

    ring.enter_ring(store.get_boxer_by_name("Muhammad Ali").unwrap()).unwrap();
    ring.enter_ring(store.get_boxer_by_name("Mike Tyson").unwrap()).unwrap();

    let winner = ring.fight(&mut store).unwrap();
    assert_eq!(winner, "Muhammad Ali");
    assert_eq!(random.call_count(), 1);
    assert!(ring.is_empty());

    let ali = store.get_boxer_by_name("Muhammad Ali").unwrap();
    let tyson = store.get_boxer_by_name("Mike Tyson").unwrap();
    assert_eq!((ali.fights(), ali.wins()), (1, 1));
    assert_eq!((tyson.fights(), tyson.wins()), (1, 0));
}

#[test]
fn test_repeated_bouts_feed_leaderboard() {
    let mut store = seeded_store();
    let mut ring = RingModel::new(MockRandom::constant(1.0));

    for _ in 0..3 {
        // Entry order decides who the formula favours
        ring.enter_ring(store.get_boxer_by_name("Mike Tyson").unwrap()).unwrap();
        ring.enter_ring(store.get_boxer_by_name("Muhammad Ali").unwrap()).unwrap();
        ring.fight(&mut store).unwrap();
    }

    let leaderboard = store.get_leaderboard(LeaderboardSort::WinPct).unwrap();
    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard[0].boxer.name(), "Mike Tyson");
    assert_eq!(leaderboard[0].win_pct, 100.0);
    assert_eq!(leaderboard[1].win_pct, 0.0);
}

#[test]
fn test_high_draw_with_large_gap_still_favours_first() {
    // The skill gap is over 600 points, so the probability rounds to 1.0
    let mut store = seeded_store();
    let mut ring = RingModel::new(MockRandom::constant(f64::from(DRAW_RESOLUTION)));

    ring.enter_ring(store.get_boxer_by_name("Mike Tyson").unwrap()).unwrap();
    ring.enter_ring(store.get_boxer_by_name("Muhammad Ali").unwrap()).unwrap();

    assert_eq!(ring.fight(&mut store).unwrap(), "Mike Tyson");
}

#[test]
fn test_fight_with_deleted_boxer_fails() {
    let mut store = seeded_store();
    let mut ring = RingModel::new(MockRandom::constant(1.0));

    let ali = store.get_boxer_by_name("Muhammad Ali").unwrap();
    ring.enter_ring(ali.clone()).unwrap();
    ring.enter_ring(store.get_boxer_by_name("Mike Tyson").unwrap()).unwrap();
    store.delete_boxer(ali.id()).unwrap();

    let result = ring.fight(&mut store);
    assert!(matches!(result, Err(RingError::Store(_))));
    assert_eq!(ring.len(), 2);
}

#[test]
fn test_unavailable_random_source() {
    let mut store = seeded_store();
    let mut ring = RingModel::new(MockRandom::failing());

    ring.enter_ring(store.get_boxer_by_name("Muhammad Ali").unwrap()).unwrap();
    ring.enter_ring(store.get_boxer_by_name("Mike Tyson").unwrap()).unwrap();

    assert!(matches!(ring.fight(&mut store), Err(RingError::Random(_))));

    let ali = store.get_boxer_by_name("Muhammad Ali").unwrap();
    assert_eq!(ali.fights(), 0);
}
