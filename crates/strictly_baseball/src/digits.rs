//! Core domain types: digits, the secret and the guess.
//!
//! A [`Digits`] value can only be built from three distinct digits in
//! `1..=9`, so every [`Secret`] and [`Guess`] upholds that invariant by
//! construction.

use crate::error::{InputError, InputErrorKind};
use serde::{Deserialize, Serialize};

/// Number of digits in a secret or a guess.
pub const DIGIT_COUNT: usize = 3;
/// Smallest allowed digit.
pub const MIN_DIGIT: u8 = 1;
/// Largest allowed digit.
pub const MAX_DIGIT: u8 = 9;

/// A single digit in `1..=9`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The smallest digit, `1`.
    pub const MIN: Self = Self(MIN_DIGIT);

    /// Returns the digit if `value` is in `1..=9`.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_DIGIT..=MAX_DIGIT).contains(&value).then_some(Self(value))
    }

    /// Returns the digit for a character in `'1'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        if !('1'..='9').contains(&c) {
            return None;
        }
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
            .ok_or_else(|| InputError::new(InputErrorKind::OutOfRange(value.to_string())))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// Three pairwise distinct digits in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Digit; 3]", into = "[Digit; 3]")]
pub struct Digits([Digit; DIGIT_COUNT]);

impl Digits {
    /// Wraps digits the caller has already checked for distinctness.
    pub(crate) fn from_distinct(digits: [Digit; DIGIT_COUNT]) -> Self {
        debug_assert!(first_duplicate(&digits).is_none());
        Self(digits)
    }

    /// Returns the digits in order.
    pub fn as_array(&self) -> &[Digit; DIGIT_COUNT] {
        &self.0
    }

    /// Returns the digit at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Digit> {
        self.0.get(index).copied()
    }

    /// Returns true if `digit` appears at any position.
    pub fn contains(&self, digit: Digit) -> bool {
        self.0.contains(&digit)
    }

    /// Iterates over the digits in order.
    pub fn iter(&self) -> impl Iterator<Item = Digit> + '_ {
        self.0.iter().copied()
    }
}

/// Returns the first digit that repeats an earlier one.
fn first_duplicate(digits: &[Digit]) -> Option<Digit> {
    digits
        .iter()
        .enumerate()
        .find(|(i, d)| digits[..*i].contains(d))
        .map(|(_, d)| *d)
}

impl TryFrom<[Digit; DIGIT_COUNT]> for Digits {
    type Error = InputError;

    #[track_caller]
    fn try_from(digits: [Digit; DIGIT_COUNT]) -> Result<Self, Self::Error> {
        match first_duplicate(&digits) {
            Some(dup) => Err(InputError::new(InputErrorKind::DuplicateDigit(dup))),
            None => Ok(Self(digits)),
        }
    }
}

impl TryFrom<[u8; DIGIT_COUNT]> for Digits {
    type Error = InputError;

    #[track_caller]
    fn try_from(values: [u8; DIGIT_COUNT]) -> Result<Self, Self::Error> {
        let [a, b, c] = values;
        Self::try_from([Digit::try_from(a)?, Digit::try_from(b)?, Digit::try_from(c)?])
    }
}

impl From<Digits> for [Digit; DIGIT_COUNT] {
    fn from(digits: Digits) -> Self {
        digits.0
    }
}

impl std::fmt::Display for Digits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.0 {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// The number the player is trying to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(Digits);

impl Secret {
    /// Creates a secret from validated digits.
    pub fn new(digits: Digits) -> Self {
        Self(digits)
    }

    /// Returns the digits.
    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

impl TryFrom<[u8; DIGIT_COUNT]> for Secret {
    type Error = InputError;

    #[track_caller]
    fn try_from(values: [u8; DIGIT_COUNT]) -> Result<Self, Self::Error> {
        Digits::try_from(values).map(Self)
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One validated guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guess(Digits);

impl Guess {
    /// Creates a guess from validated digits.
    pub fn new(digits: Digits) -> Self {
        Self(digits)
    }

    /// Returns the digits.
    pub fn digits(&self) -> &Digits {
        &self.0
    }
}

impl TryFrom<[u8; DIGIT_COUNT]> for Guess {
    type Error = InputError;

    #[track_caller]
    fn try_from(values: [u8; DIGIT_COUNT]) -> Result<Self, Self::Error> {
        Digits::try_from(values).map(Self)
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
