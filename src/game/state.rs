use log::debug;

use super::{GuessError, PLACEHOLDER};

/// State of a single game of Hangman.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The secret word, lowercase.
    word: String,
    /// Distinct letters guessed so far, in the order they were guessed.
    guessed_letters: Vec<char>,
    /// Incorrect guesses left before the game is lost.
    remaining_guesses: i32,
    /// The game has ended, either by a win or by running out of guesses.
    game_over: bool,
    /// Every letter of the word was guessed. Only meaningful once `game_over` is set.
    won: bool,
}

impl GameState {
    /// Start a new game. The caller is responsible for lower-casing `word`.
    pub fn start(word: &str, max_guesses: i32) -> Self {
        debug_assert!(!word.is_empty());
        GameState {
            word: word.to_owned(),
            guessed_letters: Vec::new(),
            remaining_guesses: max_guesses,
            game_over: false,
            won: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn remaining_guesses(&self) -> i32 {
        self.remaining_guesses
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    /// Apply a single letter guess.
    ///
    /// Guessing on a finished game, or repeating a letter, leaves the state untouched.
    /// A letter not in the word costs one remaining guess. The win check runs before
    /// the loss check, so a guess that completes the word always wins.
    pub fn guess(&mut self, letter: &str) -> Result<(), GuessError> {
        if self.game_over {
            return Ok(());
        }

        let letter = parse_letter(letter)?;
        if self.guessed_letters.contains(&letter) {
            return Ok(());
        }

        self.guessed_letters.push(letter);
        if !self.word.contains(letter) {
            self.remaining_guesses -= 1;
        }

        if self.word.chars().all(|c| self.guessed_letters.contains(&c)) {
            self.game_over = true;
            self.won = true;
        }
        if self.remaining_guesses <= 0 {
            self.game_over = true;
        }

        debug!(
            "Guessed {:?}: {} ({} remaining)",
            letter,
            self.current_display(),
            self.remaining_guesses
        );
        Ok(())
    }

    /// The word with unguessed letters replaced by `_`, one space between each letter.
    pub fn current_display(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Guessed letters that are not in the word, sorted.
    pub fn incorrect_guesses(&self) -> Vec<char> {
        let mut incorrect = self
            .guessed_letters
            .iter()
            .copied()
            .filter(|c| !self.word.contains(*c))
            .collect::<Vec<_>>();
        incorrect.sort_unstable();
        incorrect
    }
}

/// Normalise a guess to a single lowercase alphabetic character.
fn parse_letter(letter: &str) -> Result<char, GuessError> {
    let lower = letter.to_lowercase();
    let mut chars = lower.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(GuessError::InvalidGuess(letter.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_letter;
    use crate::game::GuessError;

    #[test]
    fn parsing_letters() {
        assert_eq!(parse_letter("a").unwrap(), 'a');
        assert_eq!(parse_letter("Q").unwrap(), 'q');
        assert_eq!(parse_letter("é").unwrap(), 'é');
        assert_eq!(parse_letter("Ü").unwrap(), 'ü');

        for bad in ["", "ab", "1", "!", " ", "a "] {
            assert!(matches!(
                parse_letter(bad),
                Err(GuessError::InvalidGuess(ref s)) if s == bad
            ));
        }
    }
}
