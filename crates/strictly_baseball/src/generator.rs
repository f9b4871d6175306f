//! Secret number generation.

use crate::digits::{DIGIT_COUNT, Digit, Digits, MAX_DIGIT, MIN_DIGIT, Secret};
use rand::Rng;
use tracing::{debug, instrument, warn};

/// A source of uniformly random integers over a closed range.
pub trait PickNumber {
    /// Returns a value in `lo..=hi`.
    fn pick_number_in_range(&mut self, lo: u8, hi: u8) -> u8;
}

/// Adapts any [`rand::Rng`] into a [`PickNumber`] source.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    /// Wraps the given RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PickNumber for RandomPicker<R> {
    fn pick_number_in_range(&mut self, lo: u8, hi: u8) -> u8 {
        self.rng.random_range(lo..=hi)
    }
}

/// Draws digits until three distinct ones are collected, keeping draw order.
///
/// Repeated draws are discarded. A source that keeps returning values
/// outside `1..=9` is skipped over too, with a warning.
#[instrument(skip(source))]
pub fn generate_secret<P: PickNumber + ?Sized>(source: &mut P) -> Secret {
    let mut digits = [Digit::MIN; DIGIT_COUNT];
    let mut filled = 0;

    while filled < DIGIT_COUNT {
        let drawn = source.pick_number_in_range(MIN_DIGIT, MAX_DIGIT);
        let Some(digit) = Digit::new(drawn) else {
            warn!(drawn, "Random source returned a value outside the digit range");
            continue;
        };
        if digits[..filled].contains(&digit) {
            debug!(%digit, "Discarding repeated draw");
            continue;
        }
        digits[filled] = digit;
        filled += 1;
    }

    let secret = Secret::new(Digits::from_distinct(digits));
    debug!(%secret, "Secret generated");
    secret
}
