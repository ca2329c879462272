//! Wordle
//!
//! A terminal word-guessing game: guess the hidden word within a fixed
//! number of attempts, with letter-by-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::{Word, score};
//!
//! let guess = Word::new("allay").unwrap();
//! let answer = Word::new("llama").unwrap();
//!
//! // Upper-case = right spot, lower-case = wrong spot, '-' = not in word
//! let feedback = score(&guess, &answer);
//! assert_eq!(feedback.to_string(), "aLla-");
//! ```

// Core domain types
pub mod core;

// Configuration and session state machine
pub mod game;

// Dictionary and answer lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
