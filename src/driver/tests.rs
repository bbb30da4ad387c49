use serde_json::json;
use std::collections::VecDeque;

use super::{AgentLoop, DriverError};
use crate::{
    dataset::Language,
    episode::{initialize, Episode, Sample, SampleMetadata},
    scorer::ScoreValue,
    solver::{Action, Agent, Observation, Solver},
    tool::{ToolCall, ToolError, GUESS_TOOL_NAME},
};

/// Plays a fixed list of actions, then submits "GG" forever.
#[derive(Default)]
struct ScriptedAgent {
    actions: VecDeque<Action>,
    seen: Vec<Observation>,
}

impl ScriptedAgent {
    fn guessing(letters: &[&str]) -> Self {
        ScriptedAgent {
            actions: letters.iter().map(|l| guess(l)).collect(),
            seen: Vec::new(),
        }
    }

    fn then(mut self, action: Action) -> Self {
        self.actions.push_back(action);
        self
    }
}

impl Agent for ScriptedAgent {
    fn act(&mut self, observation: &Observation) -> Action {
        self.seen.push(observation.clone());
        self.actions
            .pop_front()
            .unwrap_or_else(|| Action::Submit("GG".into()))
    }
}

fn guess(letter: &str) -> Action {
    Action::Call(ToolCall::new(GUESS_TOOL_NAME, json!({ "letter": letter })))
}

fn sample(word: &str, max_guesses: i32, allow_word_guesses: bool) -> Sample {
    Sample {
        id: format!("loop-{word}"),
        input: "Play hangman".into(),
        target: word.into(),
        metadata: SampleMetadata {
            word: Some(word.into()),
            max_guesses: Some(max_guesses),
            difficulty: Some(1),
            language: Some(Language::English),
            allow_word_guesses: Some(allow_word_guesses),
        },
    }
}

fn initialized(word: &str, max_guesses: i32) -> Episode {
    let mut episode = Episode::new(sample(word, max_guesses, false));
    initialize(&mut episode).unwrap();
    episode
}

#[test]
fn playing_to_a_win() {
    let mut agent = ScriptedAgent::guessing(&["a", "t", "c"]);
    let mut episode = initialized("cat", 3);
    AgentLoop::new(10).run(&mut agent, &mut episode).unwrap();

    assert_eq!(episode.output.as_deref(), Some("GG"));
    let game = episode.game.as_ref().unwrap();
    assert!(game.won());
    assert_eq!(game.remaining_guesses(), 3);

    // Prompt, then one result per guess
    assert_eq!(agent.seen.len(), 4);
    assert_eq!(agent.seen[0], Observation::Prompt(episode.user_prompt.clone()));
    match &agent.seen[1] {
        Observation::ToolResult(value) => assert_eq!(value["current_state"], "_ a _"),
        other => panic!("unexpected observation {:?}", other),
    }
    match &agent.seen[3] {
        Observation::ToolResult(value) => {
            assert_eq!(value["current_state"], "c a t");
            assert_eq!(value["game_over"], true);
            assert_eq!(value["won"], true);
        }
        other => panic!("unexpected observation {:?}", other),
    }
}

#[test]
fn invalid_guesses_are_reported_back() {
    let mut agent = ScriptedAgent::guessing(&["ab", "a"]);
    let mut episode = initialized("cat", 3);
    AgentLoop::new(10).run(&mut agent, &mut episode).unwrap();

    assert!(matches!(agent.seen[1], Observation::ToolError(ref e) if e.contains("single letter")));
    assert!(matches!(agent.seen[2], Observation::ToolResult(_)));
    assert_eq!(episode.game.as_ref().unwrap().current_display(), "_ a _");
}

#[test]
fn missing_arguments_are_reported_back() {
    let mut agent = ScriptedAgent::default().then(Action::Call(ToolCall::new(
        GUESS_TOOL_NAME,
        json!({}),
    )));
    let mut episode = initialized("cat", 3);
    AgentLoop::new(10).run(&mut agent, &mut episode).unwrap();
    assert!(matches!(agent.seen[1], Observation::ToolError(ref e) if e.contains("invalid arguments")));
}

#[test]
fn unknown_tool_is_fatal() {
    let mut agent = ScriptedAgent::default().then(Action::Call(ToolCall::new(
        "bash",
        json!({ "command": "cat answer.txt" }),
    )));
    let mut episode = initialized("cat", 3);
    let err = AgentLoop::new(10).run(&mut agent, &mut episode).unwrap_err();
    assert!(matches!(err, DriverError::Tool(ToolError::UnknownTool(ref name)) if name == "bash"));
    assert_eq!(episode.output, None);
}

#[test]
fn uninitialized_game_is_fatal() {
    let mut agent = ScriptedAgent::guessing(&["a"]);
    let mut episode = Episode::new(sample("cat", 3, false));
    let err = AgentLoop::new(10).run(&mut agent, &mut episode).unwrap_err();
    assert!(matches!(err, DriverError::Tool(ToolError::UninitializedGame)));
    assert!(episode.game.is_none());
}

#[test]
fn running_out_of_turns() {
    let mut agent = ScriptedAgent::guessing(&["a", "t", "c"]);
    let mut episode = initialized("cat", 3);
    AgentLoop::new(2).run(&mut agent, &mut episode).unwrap();

    assert_eq!(episode.output, None);
    assert_eq!(episode.completion(), "");
    assert!(!episode.game.as_ref().unwrap().game_over());
}

#[test]
fn unfinished_game_scores_incorrect() {
    let mut agent = ScriptedAgent::guessing(&["a"]);
    let result = AgentLoop::new(10)
        .play(sample("cat", 3, false), &mut agent)
        .unwrap();
    assert_eq!(result.score.value, ScoreValue::Incorrect);
    assert!(result
        .score
        .explanation
        .starts_with("The game did not complete."));
}

#[test]
fn early_word_guess_scores_correct() {
    let mut agent = ScriptedAgent::guessing(&["o"]).then(Action::Submit("dog".into()));
    let result = AgentLoop::new(10)
        .play(sample("dog", 3, true), &mut agent)
        .unwrap();
    assert_eq!(result.score.value, ScoreValue::Correct);
    assert_eq!(result.score.answer, "dog");
    assert_eq!(result.difficulty, 1);
    assert_eq!(result.sample_id, "loop-dog");
}

#[test]
fn missing_word_aborts_before_any_turn() {
    let mut agent = ScriptedAgent::guessing(&["a"]);
    let mut sample = sample("cat", 3, false);
    sample.metadata.word = None;
    let err = AgentLoop::new(10).play(sample, &mut agent).unwrap_err();
    assert!(matches!(err, DriverError::Setup(_)));
    assert!(agent.seen.is_empty());
}

#[test]
fn guess_tool_is_offered() {
    let agent_loop = AgentLoop::new(1);
    let names = agent_loop
        .tools()
        .map(|tool| tool.descriptor().name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec![GUESS_TOOL_NAME.to_string()]);
}

#[test]
fn solver_plays_every_english_word() {
    let agent_loop = AgentLoop::new(60);
    for entry in crate::dataset::words_by_language(Language::English) {
        let mut solver = Solver::new(Language::English, false);
        let result = agent_loop
            .play(sample(entry.word, 10, false), &mut solver)
            .unwrap();
        assert_eq!(
            result.score.value,
            ScoreValue::Correct,
            "{}: {}",
            entry.word,
            result.score.explanation
        );
    }
}
