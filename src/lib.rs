//! Number baseball on the terminal.
//!
//! Game rules live in [`strictly_baseball`]; this crate wires them to a
//! line-based terminal: a [`Presenter`] for output and a [`GameLoop`]
//! state machine that reads guesses and menu choices.
//!
//! # Example
//!
//! ```
//! use number_baseball::{GameLoop, LoopOptions};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use strictly_baseball::RandomPicker;
//!
//! let mut game = GameLoop::new(
//!     "12\n".as_bytes(),
//!     Vec::new(),
//!     RandomPicker::new(StdRng::seed_from_u64(1)),
//!     LoopOptions::default(),
//! );
//! // A two-digit guess is fatal by default.
//! assert!(game.run().is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod error;
mod game_loop;
mod presenter;

pub use cli::Cli;
pub use error::GameError;
pub use game_loop::{GameLoop, LoopOptions, Phase, Round, Session};
pub use presenter::{
    END_BANNER, INPUT_PROMPT, Presenter, RESTART_PROMPT, START_BANNER, result_line,
};
