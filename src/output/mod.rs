//! Terminal output formatting
//!
//! Display utilities for prompts, feedback and verdicts.

pub mod display;
pub mod formatters;

pub use display::{GameDisplay, TerminalDisplay};
pub use formatters::{FeedbackStyle, format_feedback};
