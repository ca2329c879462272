//! Word lists
//!
//! The dictionary guesses are checked against, and the embedded list
//! answers are drawn from.

mod answers;
mod embedded;
pub mod loader;

pub use answers::{AnswerSource, RandomAnswers};
pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use loader::{DEFAULT_DICTIONARY, Dictionary, DictionaryError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MAX_SETTING, MIN_SETTING};

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert!(
                (MIN_SETTING..=MAX_SETTING).contains(&word.len()),
                "Word '{word}' has an unsupported length"
            );
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_are_unique() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }
}
