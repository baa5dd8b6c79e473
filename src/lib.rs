pub mod config;
pub mod error;
pub mod evaluator;
pub mod random;
pub mod session;
pub mod settings;
pub mod shell;

pub use error::GameError;
pub use evaluator::{submit_guess, Outcome, Tone};
pub use session::{start_session, GameSession, Status};
pub use settings::Settings;
