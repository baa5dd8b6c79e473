use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use number_guessing::config::Args;
use number_guessing::shell::Shell;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = args.settings().context("Invalid game settings")?;
    log::info!(
        "Playing in [{}, {}] with {} guesses",
        settings.lower_bound(),
        settings.upper_bound(),
        settings.max_guesses()
    );

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), args.rng());
    let summary = shell.run(settings)?;
    println!(
        "Games: {}, wins: {}, losses: {}",
        summary.games, summary.wins, summary.losses
    );
    Ok(())
}
