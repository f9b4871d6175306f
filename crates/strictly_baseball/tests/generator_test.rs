//! Tests for secret generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use strictly_baseball::{PickNumber, RandomPicker, Secret, generate_secret};

/// Replays a fixed list of draws.
struct ScriptedPicks {
    draws: VecDeque<u8>,
    calls: usize,
}

impl ScriptedPicks {
    fn new(draws: &[u8]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            calls: 0,
        }
    }
}

impl PickNumber for ScriptedPicks {
    fn pick_number_in_range(&mut self, lo: u8, hi: u8) -> u8 {
        assert_eq!((lo, hi), (1, 9));
        self.calls += 1;
        self.draws.pop_front().expect("script exhausted")
    }
}

#[test]
fn test_draw_order_preserved() {
    let mut source = ScriptedPicks::new(&[4, 7, 2]);
    let secret = generate_secret(&mut source);
    assert_eq!(secret, Secret::try_from([4u8, 7, 2]).unwrap());
    assert_eq!(source.calls, 3);
}

#[test]
fn test_repeated_draws_discarded() {
    let mut source = ScriptedPicks::new(&[3, 3, 5, 3, 5, 1]);
    let secret = generate_secret(&mut source);
    assert_eq!(secret, Secret::try_from([3u8, 5, 1]).unwrap());
    assert_eq!(source.calls, 6);
}

#[test]
fn test_out_of_range_draws_skipped() {
    let mut source = ScriptedPicks::new(&[0, 9, 10, 8, 7]);
    let secret = generate_secret(&mut source);
    assert_eq!(secret, Secret::try_from([9u8, 8, 7]).unwrap());
}

#[test]
fn test_seeded_rng_is_reproducible() {
    let first = generate_secret(&mut RandomPicker::new(StdRng::seed_from_u64(42)));
    let second = generate_secret(&mut RandomPicker::new(StdRng::seed_from_u64(42)));
    assert_eq!(first, second);
}

#[test]
fn test_random_picker_stays_in_range() {
    let mut picker = RandomPicker::new(StdRng::seed_from_u64(7));
    for _ in 0..1000 {
        let value = picker.pick_number_in_range(1, 9);
        assert!((1..=9).contains(&value));
    }
}
