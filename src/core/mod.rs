//! Core domain types for Wordle
//!
//! Words, guess validation and feedback scoring. Everything here is pure:
//! no I/O, no randomness, no global state.

mod feedback;
mod validate;
mod word;

pub use feedback::{Feedback, Mark, score};
pub use validate::{Lexicon, Rejection, validate};
pub use word::{Word, WordError};
