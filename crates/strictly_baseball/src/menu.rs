//! End-of-round menu.

use crate::error::{InputError, InputErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// What the player picked after a strikeout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumString, strum::AsRefStr,
)]
pub enum MenuChoice {
    /// Start a new round with a fresh secret.
    #[strum(serialize = "1")]
    Restart,
    /// Leave the game.
    #[strum(serialize = "2")]
    Quit,
}

impl MenuChoice {
    /// Parses a menu line. Anything but `"1"` or `"2"` is rejected.
    #[track_caller]
    #[instrument]
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        Self::from_str(raw)
            .map_err(|_| InputError::new(InputErrorKind::InvalidMenuChoice(raw.to_string())))
    }
}
