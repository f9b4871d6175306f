//! Input validation error types.

use crate::Digit;
use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputErrorKind {
    /// The guess did not have exactly three characters.
    #[display("입력된 숫자가 3자리가 아닙니다.")]
    WrongLength(usize),

    /// A character (or value) fell outside `1..=9`.
    #[display("입력이 1에서 9사이가 아닙니다.")]
    OutOfRange(String),

    /// The same digit appeared twice.
    #[display("중복된 숫자가 입력되었습니다.")]
    DuplicateDigit(Digit),

    /// The end-of-round menu got something other than `1` or `2`.
    #[display("1, 2가 아닌 다른 수가 입력되었습니다.")]
    InvalidMenuChoice(String),
}

/// Invalid user input, with the location that rejected it.
#[derive(Debug, Clone, Display, Error)]
#[display("{kind}")]
pub struct InputError {
    /// The rejection reason.
    pub kind: InputErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InputErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the rejection reason.
    pub fn kind(&self) -> &InputErrorKind {
        &self.kind
    }
}
