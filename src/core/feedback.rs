//! Guess scoring and feedback representation
//!
//! Each guessed letter receives one of three marks:
//! - `Exact`: right letter, right position
//! - `Present`: letter occurs elsewhere in the answer
//! - `Absent`: letter does not occur, or all its occurrences are already
//!   accounted for by other marks

use super::Word;
use std::fmt;

/// Feedback mark for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Scored feedback for one guess
///
/// Keeps the guessed letters alongside the marks so the feedback can be
/// rendered in letter form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    letters: Vec<u8>,
    marks: Vec<Mark>,
}

impl Feedback {
    /// The marks, one per position
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// The guessed letters, one per position
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Iterate over `(letter, mark)` pairs in position order
    pub fn iter(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        self.letters.iter().copied().zip(self.marks.iter().copied())
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Exact)
    }

    /// Count positions carrying the given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    /// Render in letter form: upper-case for exact, lower-case for present,
    /// `-` for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_cli::core::{Word, score};
    ///
    /// let guess = Word::new("allay").unwrap();
    /// let answer = Word::new("llama").unwrap();
    /// assert_eq!(score(&guess, &answer).to_letters(), "aLla-");
    /// ```
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.iter()
            .map(|(letter, mark)| match mark {
                Mark::Exact => char::from(letter.to_ascii_uppercase()),
                Mark::Present => char::from(letter),
                Mark::Absent => '-',
            })
            .collect()
    }

    /// Render as emoji squares, e.g. "⬜🟩🟩🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_letters())
    }
}

/// Score `guess` against `answer`
///
/// Both words must have the same length; the validator guarantees this
/// before scoring is reached.
///
/// # Algorithm
/// 1. Count every letter of the answer into an availability pool
/// 2. First pass: mark exact matches and take them out of the pool
/// 3. Second pass, left to right: mark a letter present while the pool
///    still holds it, absent otherwise
///
/// Exact marks therefore always win over present marks for the same
/// letter, and a letter is never marked more times than it occurs.
///
/// # Examples
/// ```
/// use wordle_cli::core::{Mark, Word, score};
///
/// let guess = Word::new("mlama").unwrap();
/// let answer = Word::new("llama").unwrap();
/// let feedback = score(&guess, &answer);
///
/// assert_eq!(feedback.marks()[0], Mark::Absent);
/// assert_eq!(feedback.to_letters(), "-LAMA");
/// ```
#[must_use]
pub fn score(guess: &Word, answer: &Word) -> Feedback {
    debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

    let guess_letters = guess.letters();
    let answer_letters = answer.letters();
    let mut marks = vec![Mark::Absent; guess_letters.len()];
    let mut available = answer.letter_counts();

    // First pass: exact position matches
    for (i, (g, a)) in guess_letters.iter().zip(answer_letters).enumerate() {
        if g == a {
            marks[i] = Mark::Exact;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present letters, first come first served
    for (i, letter) in guess_letters.iter().enumerate() {
        if marks[i] == Mark::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(letter)
            && *count > 0
        {
            marks[i] = Mark::Present;
            *count -= 1;
        }
    }

    Feedback {
        letters: guess_letters.to_vec(),
        marks,
    }
}
