use log::info;
use thiserror::Error;

use super::{Episode, EpisodeMetadata, DEFAULT_DIFFICULTY};
use crate::game::{GameState, DEFAULT_MAX_GUESSES, PLACEHOLDER};

/// Failure modes for setting up an episode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("no word provided in sample {0:?}")]
    MissingWord(String),
}

/// Start the game for an episode, publish it along with the episode metadata and
/// replace the prompt with one showing the masked word.
pub fn initialize(episode: &mut Episode) -> Result<(), SetupError> {
    let sample = &episode.sample;
    let word = match sample.metadata.word.as_deref() {
        Some(word) if !word.is_empty() => word.to_lowercase(),
        _ => return Err(SetupError::MissingWord(sample.id.clone())),
    };
    let max_guesses = sample.metadata.max_guesses.unwrap_or(DEFAULT_MAX_GUESSES);
    let metadata = EpisodeMetadata {
        language: sample.metadata.language.unwrap_or_default(),
        difficulty: sample.metadata.difficulty.unwrap_or(DEFAULT_DIFFICULTY),
        allow_word_guesses: sample.metadata.allow_word_guesses.unwrap_or(false),
    };

    info!(
        "Starting episode {}: {} letters, {}, difficulty {}",
        sample.id,
        word.chars().count(),
        metadata.language,
        metadata.difficulty
    );

    let masked = vec![PLACEHOLDER.to_string(); word.chars().count()].join(" ");
    episode.user_prompt = format!(
        "Let's play hangman in {}! You have {} guesses.\nThe word is {}.\n",
        metadata.language, max_guesses, masked
    );
    episode.game = Some(GameState::start(&word, max_guesses));
    episode.metadata = Some(metadata);
    Ok(())
}
