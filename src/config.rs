use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::{dataset::Language, game::DEFAULT_MAX_GUESSES};

const DEFAULT_MAX_TURNS: usize = 50;

/// Settings for an evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Language words are drawn from.
    pub language: Language,
    /// Only play words of this difficulty (1-5). All difficulties if unset.
    pub difficulty: Option<u8>,
    /// Incorrect guesses allowed per game.
    pub max_guesses: i32,
    /// Shuffle the samples before playing.
    pub shuffle: bool,
    /// Let the agent end a game early by submitting the whole word.
    pub allow_word_guesses: bool,
    /// Agent turns allowed per episode before it's cut off.
    pub max_turns: usize,
    /// Seed for shuffling. Uses the thread RNG if unset.
    pub seed: Option<u64>,
    /// Play at most this many samples.
    pub limit: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            language: Language::default(),
            difficulty: None,
            max_guesses: DEFAULT_MAX_GUESSES,
            shuffle: true,
            allow_word_guesses: false,
            max_turns: DEFAULT_MAX_TURNS,
            seed: None,
            limit: None,
        }
    }
}

/// Failure modes for loading and validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("language {language:?} not supported, supported languages: {supported}")]
    UnsupportedLanguage { language: String, supported: String },
    #[error("difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(u8),
    #[error("invalid value for {key}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: serde_plain::Error,
    },
    #[error("no words match the configured language and difficulty")]
    NoWords,
}

impl EvalConfig {
    /// Load configuration from `HANGMAN_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = EvalConfig::default();

        if let Some(language) = lookup("HANGMAN_LANGUAGE") {
            config.language = serde_plain::from_str(&language.to_lowercase()).map_err(|_| {
                ConfigError::UnsupportedLanguage {
                    language,
                    supported: Language::supported(),
                }
            })?;
        }
        if let Some(difficulty) = parse_var(&lookup, "HANGMAN_DIFFICULTY")? {
            config.difficulty = Some(difficulty);
        }
        if let Some(max_guesses) = parse_var(&lookup, "HANGMAN_MAX_GUESSES")? {
            config.max_guesses = max_guesses;
        }
        if let Some(shuffle) = parse_var(&lookup, "HANGMAN_SHUFFLE")? {
            config.shuffle = shuffle;
        }
        if let Some(allow) = parse_var(&lookup, "HANGMAN_ALLOW_WORD_GUESSES")? {
            config.allow_word_guesses = allow;
        }
        if let Some(max_turns) = parse_var(&lookup, "HANGMAN_MAX_TURNS")? {
            config.max_turns = max_turns;
        }
        if let Some(seed) = parse_var(&lookup, "HANGMAN_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(limit) = parse_var(&lookup, "HANGMAN_LIMIT")? {
            config.limit = Some(limit);
        }

        config.validate()?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.difficulty {
            Some(difficulty) if !(1..=5).contains(&difficulty) => {
                Err(ConfigError::DifficultyOutOfRange(difficulty))
            }
            _ => Ok(()),
        }
    }
}

fn parse_var<T: DeserializeOwned>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(key)
        .map(|value| {
            serde_plain::from_str(value.trim())
                .map_err(|source| ConfigError::InvalidValue { key, source })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<EvalConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EvalConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, EvalConfig::default());
        assert_eq!(config.language, Language::English);
        assert_eq!(config.max_guesses, 10);
        assert!(config.shuffle);
        assert!(!config.allow_word_guesses);
        assert_eq!(config.difficulty, None);
    }

    #[test]
    fn reading_every_variable() {
        let config = load(&[
            ("HANGMAN_LANGUAGE", "Spanish"),
            ("HANGMAN_DIFFICULTY", "4"),
            ("HANGMAN_MAX_GUESSES", "6"),
            ("HANGMAN_SHUFFLE", "false"),
            ("HANGMAN_ALLOW_WORD_GUESSES", "true"),
            ("HANGMAN_MAX_TURNS", "30"),
            ("HANGMAN_SEED", "42"),
            ("HANGMAN_LIMIT", "2"),
        ])
        .unwrap();
        assert_eq!(
            config,
            EvalConfig {
                language: Language::Spanish,
                difficulty: Some(4),
                max_guesses: 6,
                shuffle: false,
                allow_word_guesses: true,
                max_turns: 30,
                seed: Some(42),
                limit: Some(2),
            }
        );
    }

    #[test]
    fn unsupported_language() {
        match load(&[("HANGMAN_LANGUAGE", "klingon")]) {
            Err(ConfigError::UnsupportedLanguage {
                language,
                supported,
            }) => {
                assert_eq!(language, "klingon");
                assert!(supported.contains("english"));
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn bad_values() {
        assert!(matches!(
            load(&[("HANGMAN_MAX_GUESSES", "lots")]),
            Err(ConfigError::InvalidValue {
                key: "HANGMAN_MAX_GUESSES",
                ..
            })
        ));
        assert!(matches!(
            load(&[("HANGMAN_DIFFICULTY", "0")]),
            Err(ConfigError::DifficultyOutOfRange(0))
        ));
    }
}
