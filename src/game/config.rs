//! Game configuration

use thiserror::Error;

/// Smallest accepted word length and guess budget
pub const MIN_SETTING: usize = 3;

/// Largest accepted word length and guess budget
pub const MAX_SETTING: usize = 9;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Out-of-range configuration value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word length must be between 3 and 9, got {0}")]
    WordLength(usize),
    #[error("max guesses must be between 3 and 9, got {0}")]
    MaxGuesses(usize),
}

/// Validated settings for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_guesses: usize,
}

impl GameConfig {
    /// Create a configuration, checking both values lie in 3..=9
    ///
    /// # Errors
    /// Returns `ConfigError` naming the first out-of-range value.
    pub const fn new(word_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        if word_length < MIN_SETTING || word_length > MAX_SETTING {
            return Err(ConfigError::WordLength(word_length));
        }
        if max_guesses < MIN_SETTING || max_guesses > MAX_SETTING {
            return Err(ConfigError::MaxGuesses(max_guesses));
        }
        Ok(Self {
            word_length,
            max_guesses,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_by_six() {
        let config = GameConfig::default();
        assert_eq!(config.word_length(), 5);
        assert_eq!(config.max_guesses(), 6);
    }

    #[test]
    fn accepts_range_bounds() {
        assert!(GameConfig::new(3, 3).is_ok());
        assert!(GameConfig::new(9, 9).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(GameConfig::new(2, 6), Err(ConfigError::WordLength(2)));
        assert_eq!(GameConfig::new(10, 6), Err(ConfigError::WordLength(10)));
        assert_eq!(GameConfig::new(5, 0), Err(ConfigError::MaxGuesses(0)));
        assert_eq!(GameConfig::new(5, 10), Err(ConfigError::MaxGuesses(10)));
    }

    #[test]
    fn error_message() {
        assert_eq!(
            ConfigError::WordLength(12).to_string(),
            "word length must be between 3 and 9, got 12"
        );
    }
}
