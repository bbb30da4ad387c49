use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{episode::Episode, game::GuessError};

pub use guess::{GuessTool, StatusSnapshot, GUESS_TOOL_NAME};

mod guess;

/// Describes a tool to the agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool's arguments.
    pub parameters: Value,
    /// Whether calls may run concurrently with other calls in the same episode.
    pub parallel: bool,
}

/// A request from the agent to run a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Value,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        ToolCall {
            name: name.into(),
            arguments,
        }
    }
}

/// An action the agent can take against an episode.
pub trait Tool {
    fn descriptor(&self) -> ToolDescriptor;

    /// Run the tool. Takes the episode mutably, so calls against one episode can't
    /// overlap.
    fn execute(&self, args: Value, episode: &mut Episode) -> Result<Value, ToolError>;
}

/// Failure modes for tool calls.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    InvalidGuess(#[from] GuessError),
    #[error("no game in progress, the game must be started by the evaluation setup")]
    UninitializedGame,
    #[error("unknown tool {0:?}")]
    UnknownTool(String),
}

impl ToolError {
    /// Fatal errors point at a harness bug rather than an agent mistake, and end
    /// the episode. The rest are reported back to the agent.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ToolError::UninitializedGame | ToolError::UnknownTool(_))
    }
}
