use serde::{Deserialize, Serialize};

use crate::{dataset::Language, game::GameState};

pub use initializer::{initialize, SetupError};

mod initializer;

/// Difficulty assumed when a sample doesn't carry one.
pub const DEFAULT_DIFFICULTY: u8 = 3;

/// Task parameters for one episode, as supplied by the dataset.
/// Anything left unset falls back to a default when the game is initialised.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleMetadata {
    pub word: Option<String>,
    pub max_guesses: Option<i32>,
    pub difficulty: Option<u8>,
    pub language: Option<Language>,
    pub allow_word_guesses: Option<bool>,
}

/// A single task from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub id: String,
    /// Prompt shown to the agent before the game is set up.
    pub input: String,
    /// The word the agent is expected to find.
    pub target: String,
    pub metadata: SampleMetadata,
}

/// Fixed facts about an episode, published alongside the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeMetadata {
    pub language: Language,
    pub difficulty: u8,
    pub allow_word_guesses: bool,
}

impl Default for EpisodeMetadata {
    fn default() -> Self {
        EpisodeMetadata {
            language: Language::default(),
            difficulty: DEFAULT_DIFFICULTY,
            allow_word_guesses: false,
        }
    }
}

/// Everything belonging to one evaluation run of one game. Owned by whoever is
/// driving the episode and handed by reference to the initializer, the tools and
/// the scorer in turn.
#[derive(Debug, Clone)]
pub struct Episode {
    pub sample: Sample,
    /// The prompt the agent sees first. Rewritten by the initializer.
    pub user_prompt: String,
    /// Set by the initializer, mutated only by the guess tool.
    pub game: Option<GameState>,
    /// Set by the initializer.
    pub metadata: Option<EpisodeMetadata>,
    /// The agent's final submission, if it made one.
    pub output: Option<String>,
}

impl Episode {
    pub fn new(sample: Sample) -> Self {
        Episode {
            user_prompt: sample.input.clone(),
            sample,
            game: None,
            metadata: None,
            output: None,
        }
    }

    /// The agent's final submission, or an empty string if it never submitted.
    pub fn completion(&self) -> &str {
        self.output.as_deref().unwrap_or("")
    }
}
