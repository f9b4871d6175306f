//! Terminal output.
//!
//! Message text is fixed and reproduced byte-for-byte.

use std::io::{self, Write};
use strictly_baseball::{Call, InputError, Judgment};

/// Printed when a round begins.
pub const START_BANNER: &str = "숫자 야구 게임을 시작합니다.";
/// Printed before each guess, without a newline.
pub const INPUT_PROMPT: &str = "숫자를 입력해주세요 : ";
/// Printed after a strikeout.
pub const END_BANNER: &str = "3개의 숫자를 모두 맞히셨습니다! 게임 종료";
/// Printed after the end banner.
pub const RESTART_PROMPT: &str = "게임을 새로 시작하려면 1, 종료하려면 2를 입력하세요.";

/// Formats the result line for a judgment.
pub fn result_line(judgment: &Judgment) -> String {
    match judgment.call() {
        Call::Nothing => "낫싱".to_string(),
        Call::Balls(balls) => format!("{}볼", balls),
        Call::Strikes(strikes) => format!("{}스트라이크", strikes),
        Call::Mixed { balls, strikes } => format!("{}볼 {}스트라이크", balls, strikes),
    }
}

/// Writes game messages to an output sink.
#[derive(Debug)]
pub struct Presenter<W> {
    out: W,
}

impl<W: Write> Presenter<W> {
    /// Creates a presenter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Shows the start banner.
    pub fn show_start(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", START_BANNER)
    }

    /// Shows the guess prompt and flushes so it appears before input is read.
    pub fn show_input_request(&mut self) -> io::Result<()> {
        write!(self.out, "{}", INPUT_PROMPT)?;
        self.out.flush()
    }

    /// Shows the result of one guess.
    pub fn show_judgment(&mut self, judgment: &Judgment) -> io::Result<()> {
        writeln!(self.out, "{}", result_line(judgment))
    }

    /// Shows the end banner and the restart/quit instructions.
    pub fn show_end(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", END_BANNER)?;
        writeln!(self.out, "{}", RESTART_PROMPT)?;
        self.out.flush()
    }

    /// Shows why a guess was refused (lenient mode only).
    pub fn show_rejected(&mut self, err: &InputError) -> io::Result<()> {
        writeln!(self.out, "{}", err)
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Borrows the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
