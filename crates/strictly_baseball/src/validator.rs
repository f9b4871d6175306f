//! Parsing raw input lines into guesses.

use crate::digits::{DIGIT_COUNT, Digit, Digits, Guess};
use crate::error::{InputError, InputErrorKind};
use tracing::instrument;

/// Parses one line of input into a [`Guess`].
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. the input is exactly three characters long,
/// 2. walking left to right, each character is in `'1'..='9'`
///    and does not repeat an earlier digit.
///
/// The caller is expected to have stripped the line terminator.
#[instrument]
pub fn parse_guess(raw: &str) -> Result<Guess, InputError> {
    let length = raw.chars().count();
    if length != DIGIT_COUNT {
        return Err(InputError::new(InputErrorKind::WrongLength(length)));
    }

    let mut digits = [Digit::MIN; DIGIT_COUNT];
    for (index, c) in raw.chars().enumerate() {
        let Some(digit) = Digit::from_char(c) else {
            return Err(InputError::new(InputErrorKind::OutOfRange(c.to_string())));
        };
        if digits[..index].contains(&digit) {
            return Err(InputError::new(InputErrorKind::DuplicateDigit(digit)));
        }
        digits[index] = digit;
    }

    Ok(Guess::new(Digits::from_distinct(digits)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_checked_before_range() {
        let err = parse_guess("ab").unwrap_err();
        assert_eq!(err.kind, InputErrorKind::WrongLength(2));
    }

    #[test]
    fn test_range_checked_in_input_order() {
        // '0' comes before the repeated 1, so range wins.
        let err = parse_guess("101").unwrap_err();
        assert_eq!(err.kind, InputErrorKind::OutOfRange("0".to_string()));
    }

    #[test]
    fn test_duplicate_reported_before_later_range_error() {
        let err = parse_guess("11a").unwrap_err();
        assert!(matches!(err.kind, InputErrorKind::DuplicateDigit(d) if d.value() == 1));
    }

    #[test]
    fn test_multibyte_character_counts_once() {
        let err = parse_guess("1가3").unwrap_err();
        assert_eq!(err.kind, InputErrorKind::OutOfRange("가".to_string()));
    }
}
