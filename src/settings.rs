use crate::error::GameError;

/// Fixed parameters of a game: the inclusive range the target is drawn from
/// and how many wrong guesses the player may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    lower_bound: i32,
    upper_bound: i32,
    max_guesses: u32,
}

impl Settings {
    pub fn new(lower_bound: i32, upper_bound: i32, max_guesses: u32) -> Result<Self, GameError> {
        if lower_bound >= upper_bound {
            return Err(GameError::InvalidBounds {
                lower: lower_bound,
                upper: upper_bound,
            });
        }
        if max_guesses == 0 {
            return Err(GameError::NoGuesses);
        }
        Ok(Settings {
            lower_bound,
            upper_bound,
            max_guesses,
        })
    }

    pub fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    pub fn contains(&self, guess: i64) -> bool {
        (self.lower_bound as i64..=self.upper_bound as i64).contains(&guess)
    }

    pub fn prompt(&self) -> String {
        format!(
            "Guess a number between {} and {}",
            self.lower_bound, self.upper_bound
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            lower_bound: 1,
            upper_bound: 10,
            max_guesses: 3,
        }
    }
}
