//! Round-by-round game state machine.
//!
//! ```text
//! Standby ──▶ Playing ──(strikeout)──▶ EndPrompt ──"1"──▶ Standby
//!               ▲   │                      │
//!               └───┘ (miss)               └──"2"──▶ Terminated
//! ```
//!
//! Each step consumes the current [`Phase`] and returns the next one. The
//! secret travels inside the phase; nothing is mutated in place.

use crate::error::GameError;
use crate::presenter::Presenter;
use derive_getters::Getters;
use std::io::{BufRead, Write};
use strictly_baseball::{MenuChoice, PickNumber, Secret, generate_secret, judge, parse_guess};
use tracing::{debug, info, instrument, warn};

/// The secret being played and how many guesses it has taken so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Round {
    /// Secret for this round.
    secret: Secret,
    /// Valid guesses made so far.
    guesses: u32,
}

impl Round {
    /// Starts a round on the given secret.
    pub fn new(secret: Secret) -> Self {
        Self { secret, guesses: 0 }
    }
}

/// Where the game is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// About to announce a new round and draw a secret.
    Standby,
    /// Waiting for a guess.
    Playing(Round),
    /// Round won, waiting for restart or quit.
    EndPrompt(Round),
    /// Player quit.
    Terminated,
}

/// Knobs for the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopOptions {
    /// Re-prompt after an invalid guess instead of failing.
    pub lenient: bool,
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Session {
    /// Rounds started.
    rounds: u32,
    /// Valid guesses across all rounds.
    guesses: u32,
}

/// Drives rounds over a line reader, an output sink and a random source.
#[derive(Debug)]
pub struct GameLoop<R, W, P> {
    input: R,
    presenter: Presenter<W>,
    picker: P,
    options: LoopOptions,
    session: Session,
}

impl<R: BufRead, W: Write, P: PickNumber> GameLoop<R, W, P> {
    /// Creates a loop reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, picker: P, options: LoopOptions) -> Self {
        Self {
            input,
            presenter: Presenter::new(output),
            picker,
            options,
            session: Session::default(),
        }
    }

    /// Runs from [`Phase::Standby`] until the player quits.
    ///
    /// Invalid input ends the run with an error unless lenient mode is on,
    /// in which case only an invalid menu choice is fatal.
    #[instrument(skip(self), fields(lenient = self.options.lenient))]
    pub fn run(&mut self) -> Result<Session, GameError> {
        let mut phase = Phase::Standby;
        while phase != Phase::Terminated {
            phase = self.step(phase)?;
        }
        info!(
            rounds = self.session.rounds,
            guesses = self.session.guesses,
            "Session finished"
        );
        Ok(self.session)
    }

    /// Advances one transition.
    #[instrument(level = "debug", skip(self))]
    pub fn step(&mut self, phase: Phase) -> Result<Phase, GameError> {
        match phase {
            Phase::Standby => self.standby(),
            Phase::Playing(round) => self.play_turn(round),
            Phase::EndPrompt(_) => self.end_prompt(),
            Phase::Terminated => Ok(Phase::Terminated),
        }
    }

    /// Returns the totals so far.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Borrows the output sink.
    pub fn output(&self) -> &W {
        self.presenter.get_ref()
    }

    /// Consumes the loop and returns the output sink.
    pub fn into_output(self) -> W {
        self.presenter.into_inner()
    }

    fn standby(&mut self) -> Result<Phase, GameError> {
        self.presenter.show_start()?;
        let secret = generate_secret(&mut self.picker);
        self.session.rounds += 1;
        info!(round = self.session.rounds, "Round started");
        Ok(Phase::Playing(Round::new(secret)))
    }

    fn play_turn(&mut self, round: Round) -> Result<Phase, GameError> {
        self.presenter.show_input_request()?;
        let line = self.read_line()?;

        let guess = match parse_guess(&line) {
            Ok(guess) => guess,
            Err(err) if self.options.lenient => {
                warn!(%err, input = %line, "Guess rejected, asking again");
                self.presenter.show_rejected(&err)?;
                return Ok(Phase::Playing(round));
            }
            Err(err) => return Err(err.into()),
        };

        let judgment = judge(&round.secret, &guess);
        self.presenter.show_judgment(&judgment)?;
        self.session.guesses += 1;

        let round = Round {
            guesses: round.guesses + 1,
            ..round
        };
        if judgment.is_complete() {
            info!(guesses = round.guesses, "Strikeout");
            Ok(Phase::EndPrompt(round))
        } else {
            Ok(Phase::Playing(round))
        }
    }

    fn end_prompt(&mut self) -> Result<Phase, GameError> {
        self.presenter.show_end()?;
        let line = self.read_line()?;
        match MenuChoice::parse(&line)? {
            MenuChoice::Restart => Ok(Phase::Standby),
            MenuChoice::Quit => Ok(Phase::Terminated),
        }
    }

    /// Reads one line without its terminator.
    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        debug!(input = %line, "Line read");
        Ok(line)
    }
}
