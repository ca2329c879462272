//! Answer selection

use super::ANSWERS;
use crate::core::Word;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Supplies the secret word for a new session
pub trait AnswerSource {
    /// Pick a lower-case answer of exactly `word_length` letters
    ///
    /// Returns `None` if the source has no word of that length.
    fn choose_answer(&mut self, word_length: usize) -> Option<Word>;
}

/// Uniform random choice from a word list
pub struct RandomAnswers<'a, R: Rng> {
    words: &'a [&'a str],
    rng: R,
}

impl<R: Rng> RandomAnswers<'static, R> {
    /// Choose from the embedded answer list
    #[must_use]
    pub const fn embedded(rng: R) -> Self {
        Self { words: ANSWERS, rng }
    }
}

impl<'a, R: Rng> RandomAnswers<'a, R> {
    /// Choose from a custom word list
    #[must_use]
    pub const fn new(words: &'a [&'a str], rng: R) -> Self {
        Self { words, rng }
    }
}

impl<R: Rng> AnswerSource for RandomAnswers<'_, R> {
    fn choose_answer(&mut self, word_length: usize) -> Option<Word> {
        let candidates: Vec<Word> = self
            .words
            .iter()
            .filter(|w| w.chars().count() == word_length)
            .filter_map(|&w| Word::new(w).ok())
            .collect();

        debug!(
            "Choosing answer among {} words of length {word_length}",
            candidates.len()
        );

        candidates.choose(&mut self.rng).cloned()
    }
}
