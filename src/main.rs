//! number_baseball - guess the hidden three-digit number.

use anyhow::Result;
use clap::Parser;
use number_baseball::{Cli, GameLoop};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_baseball::RandomPicker;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the game itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rng = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded secret generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = GameLoop::new(
        stdin.lock(),
        stdout.lock(),
        RandomPicker::new(rng),
        cli.loop_options(),
    );
    let session = game.run()?;

    info!(
        rounds = *session.rounds(),
        guesses = *session.guesses(),
        "Goodbye"
    );
    Ok(())
}
