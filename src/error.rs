//! Game loop error types.

use derive_more::{Display, Error};
use strictly_baseball::InputError;

/// Anything that ends a game early.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// The player typed something the game refuses.
    #[display("{_0}")]
    Input(InputError),

    /// Reading from or writing to the terminal failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// Input ended while a line was still expected.
    #[display("Input closed before the game ended")]
    InputClosed,
}

impl GameError {
    /// Returns the input error, if that is what this is.
    pub fn as_input(&self) -> Option<&InputError> {
        match self {
            GameError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InputError> for GameError {
    fn from(err: InputError) -> Self {
        GameError::Input(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}
