//! Word representation
//!
//! A `Word` is a non-empty run of ASCII letters, normalized to lower-case.
//! Its length is not fixed here; the game configuration decides how long
//! guesses and answers must be.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A lower-case alphabetic word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word must contain only letters")]
    NonAlphabetic,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::Word;
    ///
    /// let word = Word::new("LLama").unwrap();
    /// assert_eq!(word.text(), "llama");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by scoring to cap marks at a letter's multiplicity.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
