use rand::Rng;

use crate::error::GameError;
use crate::random::random_target;
use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Won,
    Lost,
}

/// One round of the game. Created fresh on start and on restart; only the
/// evaluator moves it forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    settings: Settings,
    target: i32,
    guesses_remaining: u32,
    status: Status,
}

impl GameSession {
    pub fn start<R: Rng + ?Sized>(settings: Settings, rng: &mut R) -> Self {
        let target = random_target(settings.lower_bound(), settings.upper_bound(), rng);
        log::debug!(
            "Starting session: range [{}, {}], {} guesses",
            settings.lower_bound(),
            settings.upper_bound(),
            settings.max_guesses()
        );
        log::trace!("Session target: {}", target);
        Self::with_target(settings, target)
    }

    pub(crate) fn with_target(settings: Settings, target: i32) -> Self {
        GameSession {
            settings,
            target,
            guesses_remaining: settings.max_guesses(),
            status: Status::Active,
        }
    }

    /// Throws this session away and starts a new one with the same settings.
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        log::info!("Restarting game");
        Self::start(self.settings, rng)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn guesses_remaining(&self) -> u32 {
        self.guesses_remaining
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Active
    }

    pub(crate) fn win(&mut self) {
        self.status = Status::Won;
    }

    /// Spends one guess; the session is lost once none are left.
    pub(crate) fn miss(&mut self) {
        self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        if self.guesses_remaining == 0 {
            self.status = Status::Lost;
        }
    }
}

pub fn start_session<R: Rng + ?Sized>(
    lower_bound: i32,
    upper_bound: i32,
    max_guesses: u32,
    rng: &mut R,
) -> Result<GameSession, GameError> {
    let settings = Settings::new(lower_bound, upper_bound, max_guesses)?;
    Ok(GameSession::start(settings, rng))
}
