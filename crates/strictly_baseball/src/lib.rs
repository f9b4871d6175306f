//! Pure number baseball game logic.
//!
//! A secret of three distinct digits is drawn from `1..=9`; each guess is
//! validated and judged into strikes (right digit, right place) and balls
//! (right digit, wrong place). Nothing in this crate performs I/O.
//!
//! ```
//! use strictly_baseball::{judge, parse_guess, Secret};
//!
//! let secret = Secret::try_from([1u8, 2, 3]).unwrap();
//! let guess = parse_guess("321").unwrap();
//! let judgment = judge(&secret, &guess);
//! assert_eq!(judgment.strike_count(), 1);
//! assert_eq!(judgment.ball_count(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod digits;
mod error;
mod generator;
mod menu;
mod referee;
mod validator;

pub use digits::{DIGIT_COUNT, Digit, Digits, Guess, MAX_DIGIT, MIN_DIGIT, Secret};
pub use error::{InputError, InputErrorKind};
pub use generator::{PickNumber, RandomPicker, generate_secret};
pub use menu::MenuChoice;
pub use referee::{Call, Judgment, judge};
pub use validator::parse_guess;
