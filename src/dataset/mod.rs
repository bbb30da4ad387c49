use lazy_static::lazy_static;
use rand::{rngs::StdRng, seq::SliceRandom, thread_rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    config::{ConfigError, EvalConfig},
    episode::{Sample, SampleMetadata},
};

mod data;

/// Languages words can be drawn from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
    German,
    Spanish,
}

impl Language {
    /// Comma separated list of every supported language.
    pub fn supported() -> String {
        Language::iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A word and its difficulty bucket (1-5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub difficulty: u8,
}

lazy_static! {
    static ref WORDS: HashMap<Language, Vec<WordEntry>> = {
        let mut m = HashMap::new();
        for language in Language::iter() {
            let list: &[(&'static str, u8)] = match language {
                Language::English => &data::ENGLISH,
                Language::French => &data::FRENCH,
                Language::German => &data::GERMAN,
                Language::Spanish => &data::SPANISH,
            };
            m.insert(
                language,
                list.iter()
                    .map(|&(word, difficulty)| WordEntry { word, difficulty })
                    .collect(),
            );
        }
        m
    };
}

/// Every word for the given language.
pub fn words_by_language(language: Language) -> &'static [WordEntry] {
    WORDS.get(&language).map(Vec::as_slice).unwrap_or(&[])
}

/// Words for the given language in a single difficulty bucket.
pub fn words_by_difficulty(language: Language, difficulty: u8) -> Vec<&'static WordEntry> {
    words_by_language(language)
        .iter()
        .filter(|entry| entry.difficulty == difficulty)
        .collect()
}

/// Build one sample per selected word.
pub fn build_samples(config: &EvalConfig) -> Result<Vec<Sample>, ConfigError> {
    config.validate()?;

    let entries: Vec<&WordEntry> = match config.difficulty {
        Some(difficulty) => words_by_difficulty(config.language, difficulty),
        None => words_by_language(config.language).iter().collect(),
    };
    if entries.is_empty() {
        return Err(ConfigError::NoWords);
    }

    let mut samples = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Sample {
            id: format!("{}-{}", config.language, i + 1),
            input: sample_prompt(config.language, config.max_guesses),
            target: entry.word.to_owned(),
            metadata: SampleMetadata {
                word: Some(entry.word.to_owned()),
                max_guesses: Some(config.max_guesses),
                difficulty: Some(entry.difficulty),
                language: Some(config.language),
                allow_word_guesses: Some(config.allow_word_guesses),
            },
        })
        .collect::<Vec<_>>();

    if config.shuffle {
        match config.seed {
            Some(seed) => samples.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => samples.shuffle(&mut thread_rng()),
        }
    }
    if let Some(limit) = config.limit {
        samples.truncate(limit);
    }
    Ok(samples)
}

fn sample_prompt(language: Language, max_guesses: i32) -> String {
    format!(
        "You are playing a game of Hangman in {language}. \
         Try to guess the word one letter at a time. \
         The current state shows '_' for unguessed letters and reveals correctly guessed letters. \
         You lose the game after {max_guesses} incorrect guesses. \
         Make smart guesses based on common letter frequencies and word patterns in {language}."
    )
}
