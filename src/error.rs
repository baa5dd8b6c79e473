use crate::session::Status;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bounds: lower bound {lower} must be less than upper bound {upper}")]
    InvalidBounds { lower: i32, upper: i32 },
    #[error("A game needs at least one guess")]
    NoGuesses,
    #[error("Session is over ({0:?}), start a new one to keep playing")]
    SessionOver(Status),
}
