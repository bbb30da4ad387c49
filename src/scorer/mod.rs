use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    episode::{Episode, EpisodeMetadata},
    game::GameState,
};

pub use metrics::{EpisodeResult, EvalReport};

mod metrics;

/// Pass/fail outcome of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreValue {
    Correct,
    Incorrect,
}

impl ScoreValue {
    fn from_bool(correct: bool) -> Self {
        if correct {
            ScoreValue::Correct
        } else {
            ScoreValue::Incorrect
        }
    }

    /// 1.0 for correct, 0.0 otherwise.
    pub fn as_f64(&self) -> f64 {
        match self {
            ScoreValue::Correct => 1.0,
            ScoreValue::Incorrect => 0.0,
        }
    }
}

/// The scorer's verdict on a single episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: ScoreValue,
    /// The agent's submitted word for early guesses, otherwise the final board.
    pub answer: String,
    pub explanation: String,
}

/// Which rule decides the outcome. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCase {
    /// Word guesses are allowed and the game is still running, so the final
    /// submission is the agent's guess at the whole word.
    EarlyGuess,
    /// The game never finished.
    Incomplete,
    /// The game finished by winning or running out of guesses.
    Completed,
}

impl ScoreCase {
    pub fn classify(game: &GameState, metadata: &EpisodeMetadata) -> Self {
        if metadata.allow_word_guesses && !game.game_over() {
            ScoreCase::EarlyGuess
        } else if !game.game_over() {
            ScoreCase::Incomplete
        } else {
            ScoreCase::Completed
        }
    }
}

/// Failure modes for scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("no game state found for episode {0:?}")]
    MissingGameState(String),
}

/// Score a finished (or abandoned) episode.
pub fn score(episode: &Episode) -> Result<Score, ScoreError> {
    let game = episode
        .game
        .as_ref()
        .ok_or_else(|| ScoreError::MissingGameState(episode.sample.id.clone()))?;
    let metadata = episode.metadata.unwrap_or_default();
    let details = audit_trail(game, &metadata);

    let score = match ScoreCase::classify(game, &metadata) {
        ScoreCase::EarlyGuess => {
            let guessed_word = episode.completion();
            Score {
                value: ScoreValue::from_bool(guessed_word == game.word()),
                answer: guessed_word.to_owned(),
                explanation: format!("Early guess. Guessed word: {}. {}", guessed_word, details),
            }
        }
        ScoreCase::Incomplete => Score {
            value: ScoreValue::Incorrect,
            answer: game.current_display(),
            explanation: format!("The game did not complete. {}", details),
        },
        ScoreCase::Completed => Score {
            value: ScoreValue::from_bool(game.won()),
            answer: game.current_display(),
            explanation: format!("Game ended. Won: {}. {}", game.won(), details),
        },
    };

    info!(
        "Episode {} scored {:?}: {}",
        episode.sample.id, score.value, score.explanation
    );
    Ok(score)
}

/// Everything needed to review an episode by hand.
fn audit_trail(game: &GameState, metadata: &EpisodeMetadata) -> String {
    format!(
        "Word: {}. Language: {}. Difficulty: {}/5. Guessed letters: {:?}. \
         Final word state: {}. Remaining guesses: {}.",
        game.word(),
        metadata.language,
        metadata.difficulty,
        game.guessed_letters(),
        game.current_display(),
        game.remaining_guesses()
    )
}
