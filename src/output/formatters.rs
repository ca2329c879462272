//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};
use colored::Colorize;

/// How a feedback line is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackStyle {
    /// Upper-case exact, lower-case present, `-` absent
    #[default]
    Letters,
    /// Coloured squares
    Emoji,
}

/// Format feedback in the requested style, optionally with ANSI colour
#[must_use]
pub fn format_feedback(feedback: &Feedback, style: FeedbackStyle, color: bool) -> String {
    match (style, color) {
        (FeedbackStyle::Emoji, _) => feedback.to_emoji(),
        (FeedbackStyle::Letters, false) => feedback.to_letters(),
        (FeedbackStyle::Letters, true) => colored_letters(feedback),
    }
}

fn colored_letters(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(letter, mark)| {
            let ch = char::from(letter);
            let cell = match mark {
                Mark::Exact => ch.to_ascii_uppercase().to_string().black().on_green().bold(),
                Mark::Present => ch.to_string().black().on_yellow(),
                Mark::Absent => "-".dimmed(),
            };
            cell.to_string()
        })
        .collect()
}

/// Prompt text for the next guess
#[must_use]
pub fn prompt_text(word_length: usize, remaining: usize) -> String {
    if remaining > 1 {
        format!("Enter a {word_length} letter word ({remaining} attempts remaining):")
    } else {
        format!("Enter a {word_length} letter word (last attempt):")
    }
}
