//! Guess validation
//!
//! A guess is admissible when it has the configured length, consists only
//! of letters and is a dictionary word. Checks run in that order and stop
//! at the first failure.

use super::{Word, WordError};
use thiserror::Error;

/// Case-insensitive word membership
///
/// Implemented by the loaded dictionary; tests can use any small set.
pub trait Lexicon {
    /// Check if `word` is a known word, ignoring case
    fn contains(&self, word: &str) -> bool;
}

/// Why a guess was not accepted
///
/// The `Display` form is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Words must be {expected} letters long - try again.")]
    WrongLength { expected: usize },
    #[error("Words must contain only letters - try again.")]
    NonAlphabetic,
    #[error("Word not found in the dictionary - try again.")]
    NotInDictionary,
}

/// Validate a raw guess
///
/// `guess` is expected to be newline-stripped already. On success the
/// normalized `Word` is returned, ready for scoring.
///
/// # Errors
/// Returns the first `Rejection` that applies.
///
/// # Examples
/// ```
/// use wordle_cli::core::{Lexicon, Rejection, validate};
///
/// struct Only(&'static str);
/// impl Lexicon for Only {
///     fn contains(&self, word: &str) -> bool {
///         self.0.eq_ignore_ascii_case(word)
///     }
/// }
///
/// let lexicon = Only("llama");
/// assert!(validate("llama", 5, &lexicon).is_ok());
/// assert_eq!(validate("lama", 5, &lexicon), Err(Rejection::WrongLength { expected: 5 }));
/// assert_eq!(validate("ll4ma", 5, &lexicon), Err(Rejection::NonAlphabetic));
/// assert_eq!(validate("clamp", 5, &lexicon), Err(Rejection::NotInDictionary));
/// ```
pub fn validate<L: Lexicon + ?Sized>(
    guess: &str,
    word_length: usize,
    lexicon: &L,
) -> Result<Word, Rejection> {
    if guess.chars().count() != word_length {
        return Err(Rejection::WrongLength {
            expected: word_length,
        });
    }

    let word = Word::new(guess).map_err(|e| match e {
        WordError::Empty => Rejection::WrongLength {
            expected: word_length,
        },
        WordError::NonAlphabetic => Rejection::NonAlphabetic,
    })?;

    if !lexicon.contains(word.text()) {
        return Err(Rejection::NotInDictionary);
    }

    Ok(word)
}
