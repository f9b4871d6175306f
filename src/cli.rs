//! Command-line interface for number_baseball.

use crate::game_loop::LoopOptions;
use clap::Parser;

/// Number baseball - find the three hidden digits
#[derive(Parser, Debug)]
#[command(name = "number_baseball")]
#[command(about = "Guess three distinct digits from 1 to 9", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the secret generator (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ask again after an invalid guess instead of exiting
    #[arg(long)]
    pub lenient: bool,
}

impl Cli {
    /// Builds game loop options from the flags.
    pub fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            lenient: self.lenient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["number_baseball"]);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.loop_options(), LoopOptions::default());
    }

    #[test]
    fn parse_seed_and_lenient() {
        let cli = Cli::parse_from(["number_baseball", "--seed", "17", "--lenient"]);
        assert_eq!(cli.seed, Some(17));
        assert!(cli.loop_options().lenient);
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Cli::try_parse_from(["number_baseball", "--seed", "abc"]).is_err());
    }
}
