use std::fmt;
use std::num::IntErrorKind;

use crate::error::GameError;
use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
}

/// Result of a single guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InvalidInput { lower: i32, upper: i32 },
    OutOfRange { guess: i64, lower: i32, upper: i32 },
    WrongGuess { guess: i32, guesses_remaining: u32 },
    Won { target: i32 },
    Lost { target: i32 },
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Won { .. } | Outcome::Lost { .. })
    }

    pub fn tone(&self) -> Tone {
        match self {
            Outcome::Won { .. } => Tone::Success,
            _ => Tone::Failure,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InvalidInput { lower, upper } | Outcome::OutOfRange { lower, upper, .. } => {
                write!(f, "Please enter a number between {} and {}", lower, upper)
            }
            Outcome::WrongGuess {
                guess,
                guesses_remaining,
            } => write!(
                f,
                "{} is not correct, {} guesses left",
                guess, guesses_remaining
            ),
            Outcome::Won { target } => write!(f, "{} is correct, YOU WIN", target),
            Outcome::Lost { target } => write!(
                f,
                "Game Over, you lost. The correct number was {}",
                target
            ),
        }
    }
}

enum Parsed {
    Number(i64),
    NotANumber,
}

/// Leading-integer parse: skips leading whitespace, takes an optional sign
/// and the digits that follow, ignores whatever comes after. Digit runs
/// beyond `i64` saturate.
fn parse_guess(raw: &str) -> Parsed {
    let s = raw.trim_start();
    let sign_len = match s.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Parsed::NotANumber;
    }
    match s[..sign_len + digits].parse::<i64>() {
        Ok(n) => Parsed::Number(n),
        Err(e) => match e.kind() {
            IntErrorKind::NegOverflow => Parsed::Number(i64::MIN),
            IntErrorKind::PosOverflow => Parsed::Number(i64::MAX),
            _ => Parsed::NotANumber,
        },
    }
}

/// Evaluates one guess against an active session.
///
/// Unparseable and out-of-range input leave the session untouched, so they
/// never cost the player a turn. Calling this on a finished session is an
/// error: the caller has to restart first.
pub fn submit_guess(
    mut session: GameSession,
    raw: &str,
) -> Result<(GameSession, Outcome), GameError> {
    if session.is_over() {
        return Err(GameError::SessionOver(session.status()));
    }
    let settings = *session.settings();
    let (lower, upper) = (settings.lower_bound(), settings.upper_bound());

    let guess = match parse_guess(raw) {
        Parsed::NotANumber => {
            log::debug!("Rejected non-numeric guess {:?}", raw);
            return Ok((session, Outcome::InvalidInput { lower, upper }));
        }
        Parsed::Number(guess) => guess,
    };
    if !settings.contains(guess) {
        log::debug!("Rejected out of range guess {}", guess);
        return Ok((session, Outcome::OutOfRange { guess, lower, upper }));
    }
    let guess = guess as i32;

    let outcome = if guess == session.target() {
        session.win();
        Outcome::Won {
            target: session.target(),
        }
    } else {
        session.miss();
        if session.is_over() {
            Outcome::Lost {
                target: session.target(),
            }
        } else {
            Outcome::WrongGuess {
                guess,
                guesses_remaining: session.guesses_remaining(),
            }
        }
    };
    log::debug!("Guess {} -> {:?}", guess, outcome);
    Ok((session, outcome))
}
