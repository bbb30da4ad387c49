use thiserror::Error;

pub use state::GameState;

mod state;

/// Incorrect guesses allowed when an episode doesn't configure its own budget.
pub const DEFAULT_MAX_GUESSES: i32 = 10;
/// Shown in place of letters that haven't been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Failure modes for a single guess.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("guess must be a single letter, got {0:?}")]
    InvalidGuess(String),
}
