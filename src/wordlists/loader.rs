//! Dictionary loading
//!
//! Reads a word list from disk, keeping only words of the configured length.

use crate::core::Lexicon;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default dictionary location
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Failure to load a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary file \"{}\" cannot be opened", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The set of words a guess must belong to
///
/// Words are stored lower-cased, so membership is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    word_length: usize,
}

impl Dictionary {
    /// Load words of `word_length` characters from a file
    ///
    /// One word per line; surrounding whitespace is ignored. Lines of any
    /// other length are skipped.
    ///
    /// # Errors
    /// Returns `DictionaryError::Unreadable` if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_cli::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("/usr/share/dict/words", 5).unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_words(content.lines(), word_length);

        info!(
            "Loaded {} words of length {word_length} from {}",
            dictionary.len(),
            path.display()
        );
        if dictionary.is_empty() {
            warn!(
                "{} has no {word_length} letter words; every guess will be rejected",
                path.display()
            );
        }

        Ok(dictionary)
    }

    /// Build a dictionary from in-memory words
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::Lexicon;
    /// use wordle_cli::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["Llama", "crane", "ant"], 5);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("LLAMA"));
    /// assert!(!dictionary.contains("ant"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let trimmed = word.as_ref().trim();
                (trimmed.chars().count() == word_length).then(|| trimmed.to_lowercase())
            })
            .collect();

        Self { words, word_length }
    }

    /// Number of distinct words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The length every word in this dictionary has
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
