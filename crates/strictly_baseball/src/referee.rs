//! Strike and ball counting.

use crate::digits::{DIGIT_COUNT, Guess, Secret};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The referee's verdict on one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Judgment {
    strike_count: u8,
    ball_count: u8,
}

impl Judgment {
    /// Number of digits right in value and position.
    pub fn strike_count(&self) -> u8 {
        self.strike_count
    }

    /// Number of digits right in value only.
    pub fn ball_count(&self) -> u8 {
        self.ball_count
    }

    /// True when every position is a strike.
    pub fn is_complete(&self) -> bool {
        usize::from(self.strike_count) == DIGIT_COUNT
    }

    /// Classifies the counts into the four ways a result is announced.
    pub fn call(&self) -> Call {
        match (self.strike_count, self.ball_count) {
            (0, 0) => Call::Nothing,
            (0, balls) => Call::Balls(balls),
            (strikes, 0) => Call::Strikes(strikes),
            (strikes, balls) => Call::Mixed { balls, strikes },
        }
    }
}

/// How a judgment is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Call {
    /// No digit matched at all.
    Nothing,
    /// Only balls.
    Balls(u8),
    /// Only strikes.
    Strikes(u8),
    /// Both; balls are announced first.
    Mixed {
        /// Ball count.
        balls: u8,
        /// Strike count.
        strikes: u8,
    },
}

/// Judges a guess against the secret.
///
/// A secret digit counts as a ball when it appears anywhere in the guess,
/// unless its own position is already a strike.
#[instrument]
pub fn judge(secret: &Secret, guess: &Guess) -> Judgment {
    let secret = secret.digits();
    let guess = guess.digits();

    let mut strike_count = 0;
    let mut ball_count = 0;
    for (index, digit) in secret.iter().enumerate() {
        if guess.get(index) == Some(digit) {
            strike_count += 1;
        } else if guess.contains(digit) {
            ball_count += 1;
        }
    }

    let judgment = Judgment {
        strike_count,
        ball_count,
    };
    debug!(strike_count, ball_count, "Guess judged");
    judgment
}
