use log::{trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{Tool, ToolDescriptor, ToolError};
use crate::{dataset::Language, episode::Episode, game::GameState};

pub const GUESS_TOOL_NAME: &str = "hangman_guess";

/// What the agent sees after each guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// The word with guessed letters revealed and the rest shown as `_`.
    pub current_state: String,
    pub remaining_guesses: i32,
    pub incorrect_guesses: Vec<String>,
    pub game_over: bool,
    /// Only meaningful when `game_over` is set.
    pub won: bool,
    pub language: Language,
}

impl StatusSnapshot {
    pub fn new(game: &GameState, language: Language) -> Self {
        StatusSnapshot {
            current_state: game.current_display(),
            remaining_guesses: game.remaining_guesses(),
            incorrect_guesses: game
                .incorrect_guesses()
                .into_iter()
                .map(String::from)
                .collect(),
            game_over: game.game_over(),
            won: game.won(),
            language,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GuessArgs {
    letter: String,
}

/// Lets the agent guess one letter of the episode's word.
#[derive(Debug, Default, Clone, Copy)]
pub struct GuessTool;

impl GuessTool {
    /// Guess a letter. Once the game is over the guess is ignored and the final
    /// state is returned.
    pub fn guess(&self, episode: &mut Episode, letter: &str) -> Result<StatusSnapshot, ToolError> {
        let language = episode
            .metadata
            .map(|metadata| metadata.language)
            .unwrap_or_default();
        let game = episode.game.as_mut().ok_or(ToolError::UninitializedGame)?;

        if !game.game_over() {
            game.guess(letter).map_err(|e| {
                warn!("Rejected guess in episode {}: {}", episode.sample.id, e);
                e
            })?;
        }
        Ok(StatusSnapshot::new(game, language))
    }
}

impl Tool for GuessTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: GUESS_TOOL_NAME.to_owned(),
            description: "Submit a letter guess for the current hangman game.".to_owned(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "letter": {
                        "type": "string",
                        "description": "A single letter to guess",
                    }
                },
                "required": ["letter"],
            }),
            parallel: false,
        }
    }

    fn execute(&self, args: Value, episode: &mut Episode) -> Result<Value, ToolError> {
        trace!("{} arguments: {}", GUESS_TOOL_NAME, args);
        let args: GuessArgs =
            serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))?;
        let snapshot = self.guess(episode, &args.letter)?;
        Ok(json!(snapshot))
    }
}
