use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::GameError;
use crate::settings::Settings;

/// Guess the secret number before you run out of tries.
#[derive(Parser, Debug)]
#[command(name = "number_guessing", version)]
pub struct Args {
    /// Smallest number the secret can be.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min: i32,

    /// Largest number the secret can be.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub max: i32,

    /// Wrong guesses allowed per game.
    #[arg(long, default_value_t = 3)]
    pub guesses: u32,

    /// Seed for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn settings(&self) -> Result<Settings, GameError> {
        Settings::new(self.min, self.max, self.guesses)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
