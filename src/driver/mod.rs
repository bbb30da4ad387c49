use log::{debug, error, info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::{
    episode::{initialize, Episode, Sample, SetupError},
    scorer::{score, EpisodeResult, ScoreError},
    solver::{Action, Agent, Observation},
    tool::{GuessTool, Tool, ToolCall, ToolError},
};

#[cfg(test)]
mod tests;

/// Failure modes that abort an episode.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("episode setup failed: {0}")]
    Setup(#[from] SetupError),
    #[error("tool call failed: {0}")]
    Tool(#[from] ToolError),
    #[error("scoring failed: {0}")]
    Score(#[from] ScoreError),
}

/// Drives an agent through an episode: one action per turn, tool calls applied in
/// order, until the agent submits or runs out of turns.
pub struct AgentLoop {
    tools: Vec<Box<dyn Tool>>,
    max_turns: usize,
}

impl AgentLoop {
    /// An agent loop offering only the guess tool.
    pub fn new(max_turns: usize) -> Self {
        AgentLoop {
            tools: vec![Box::new(GuessTool)],
            max_turns,
        }
    }

    pub fn tools(&self) -> impl Iterator<Item = &dyn Tool> {
        self.tools.iter().map(|tool| tool.as_ref())
    }

    /// Set up, play and score a single sample.
    pub fn play(&self, sample: Sample, agent: &mut dyn Agent) -> Result<EpisodeResult, DriverError> {
        let mut episode = Episode::new(sample);
        initialize(&mut episode)?;
        self.run(agent, &mut episode)?;

        let score = score(&episode)?;
        Ok(EpisodeResult {
            sample_id: episode.sample.id.clone(),
            difficulty: episode.metadata.unwrap_or_default().difficulty,
            score,
        })
    }

    /// Run the agent against an initialised episode. On return the episode's output
    /// holds the agent's submission, if it made one.
    pub fn run(&self, agent: &mut dyn Agent, episode: &mut Episode) -> Result<(), DriverError> {
        let mut observation = Observation::Prompt(episode.user_prompt.clone());

        for turn in 1..=self.max_turns {
            match agent.act(&observation) {
                Action::Submit(answer) => {
                    info!(
                        "Episode {} submitted {:?} on turn {}",
                        episode.sample.id, answer, turn
                    );
                    episode.output = Some(answer);
                    return Ok(());
                }
                Action::Call(call) => {
                    observation = match self.call(&call, episode) {
                        Ok(value) => Observation::ToolResult(value),
                        Err(e) if e.is_fatal() => {
                            error!("Episode {} aborted: {}", episode.sample.id, e);
                            return Err(e.into());
                        }
                        Err(e) => {
                            warn!("Tool {} failed: {}", call.name, e);
                            Observation::ToolError(e.to_string())
                        }
                    };
                }
            }
        }

        warn!(
            "Episode {} ran out of turns after {}",
            episode.sample.id, self.max_turns
        );
        Ok(())
    }

    fn call(&self, call: &ToolCall, episode: &mut Episode) -> Result<Value, ToolError> {
        debug!("Calling {} with {}", call.name, call.arguments);
        let tool = self
            .tools
            .iter()
            .find(|tool| tool.descriptor().name == call.name)
            .ok_or_else(|| ToolError::UnknownTool(call.name.clone()))?;
        tool.execute(call.arguments.clone(), episode)
    }
}
