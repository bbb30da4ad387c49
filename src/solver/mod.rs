use cached::proc_macro::cached;
use log::debug;
use ordered_float::NotNan;
use serde_json::{json, Value};
use std::{cmp::Reverse, collections::HashMap};

use crate::{
    dataset::{words_by_language, Language},
    game::PLACEHOLDER,
    tool::{StatusSnapshot, ToolCall, GUESS_TOOL_NAME},
};


/// Conventional submission for ending a session once the game is over.
pub const END_OF_SESSION: &str = "GG";

/// What the agent is shown before each turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// The episode's opening prompt.
    Prompt(String),
    /// Output of the previous tool call.
    ToolResult(Value),
    /// The previous tool call failed in a way the agent can recover from.
    ToolError(String),
}

/// What the agent decides to do on its turn.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Call(ToolCall),
    /// End the episode with a final answer.
    Submit(String),
}

/// Something that plays an episode one action at a time.
pub trait Agent {
    fn act(&mut self, observation: &Observation) -> Action;
}

/// Plays Hangman by always guessing the letter that appears in the most words still
/// consistent with the board.
pub struct Solver {
    language: Language,
    /// Submit the word as soon as only one candidate is left.
    allow_word_guesses: bool,
    /// Words that could still be the answer.
    candidates: Vec<&'static str>,
    /// Letters already tried, including any the game rejected.
    tried: Vec<char>,
    /// Word lengths are only known after the first snapshot.
    filtered: bool,
}

impl Solver {
    pub fn new(language: Language, allow_word_guesses: bool) -> Self {
        Solver {
            language,
            allow_word_guesses,
            candidates: words_by_language(language)
                .iter()
                .map(|entry| entry.word)
                .collect(),
            tried: Vec::new(),
            filtered: false,
        }
    }

    #[cfg(test)]
    pub fn candidates(&self) -> &[&'static str] {
        &self.candidates
    }

    /// Drop every candidate that doesn't fit the snapshot.
    fn narrow(&mut self, snapshot: &StatusSnapshot) {
        let pattern = snapshot
            .current_state
            .split(' ')
            .map(|token| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c != PLACEHOLDER => Some(c),
                    _ => None,
                }
            })
            .collect::<Vec<_>>();
        let incorrect = snapshot
            .incorrect_guesses
            .iter()
            .filter_map(|s| s.chars().next())
            .collect::<Vec<_>>();
        let revealed = pattern.iter().flatten().copied().collect::<Vec<_>>();

        self.candidates.retain(|word| {
            word.chars().count() == pattern.len()
                && !incorrect.iter().any(|c| word.contains(*c))
                && word.chars().zip(&pattern).all(|(c, slot)| match slot {
                    Some(letter) => c == *letter,
                    None => !revealed.contains(&c),
                })
        });
        self.filtered = true;
        debug!("{} candidates left: {:?}", self.candidates.len(), self.candidates);
    }

    /// The most useful letter not tried yet, if any are left.
    fn next_letter(&self) -> Option<char> {
        let frequencies = letter_frequencies(self.language);
        let total = frequencies.values().sum::<usize>().max(1) as f64;
        let pool = if self.filtered { self.candidates.len() } else { 0 };

        let mut alphabet = frequencies.keys().copied().collect::<Vec<_>>();
        alphabet.extend('a'..='z');
        alphabet.sort_unstable();
        alphabet.dedup();

        alphabet
            .into_iter()
            .filter(|c| !self.tried.contains(c))
            .max_by_key(|c| {
                let coverage = if pool == 0 {
                    0.0
                } else {
                    self.candidates.iter().filter(|w| w.contains(*c)).count() as f64 / pool as f64
                };
                let frequency = *frequencies.get(c).unwrap_or(&0) as f64 / total;
                (
                    NotNan::new(coverage).unwrap_or_default(),
                    NotNan::new(frequency).unwrap_or_default(),
                    Reverse(*c),
                )
            })
    }

    fn guess_next(&mut self) -> Action {
        match self.next_letter() {
            Some(letter) => {
                self.tried.push(letter);
                Action::Call(ToolCall::new(
                    GUESS_TOOL_NAME,
                    json!({ "letter": letter.to_string() }),
                ))
            }
            None => Action::Submit(END_OF_SESSION.to_owned()),
        }
    }
}

impl Agent for Solver {
    fn act(&mut self, observation: &Observation) -> Action {
        let action = match observation {
            Observation::Prompt(_) | Observation::ToolError(_) => self.guess_next(),
            Observation::ToolResult(value) => {
                match serde_json::from_value::<StatusSnapshot>(value.clone()) {
                    Ok(snapshot) if snapshot.game_over => {
                        Action::Submit(END_OF_SESSION.to_owned())
                    }
                    Ok(snapshot) => {
                        self.narrow(&snapshot);
                        if self.allow_word_guesses && self.candidates.len() == 1 {
                            Action::Submit(self.candidates[0].to_owned())
                        } else {
                            self.guess_next()
                        }
                    }
                    Err(_) => self.guess_next(),
                }
            }
        };
        debug!("Solver action: {:?}", action);
        action
    }
}

/// How often each letter appears across a language's word list.
#[cached]
fn letter_frequencies(language: Language) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for entry in words_by_language(language) {
        for c in entry.word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    counts
}
