//! Game display sink
//!
//! The play loop reports every event through `GameDisplay`; the terminal
//! implementation writes the prompts, feedback and verdicts.

use super::formatters::{FeedbackStyle, format_feedback, prompt_text};
use crate::core::{Feedback, Rejection, Word};
use colored::Colorize;
use std::io::{self, Write};

/// Receiver for everything the player should see
pub trait GameDisplay {
    /// Shown once, before the first prompt
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn welcome(&mut self) -> io::Result<()>;

    /// Ask for the next guess
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn prompt(&mut self, word_length: usize, remaining: usize) -> io::Result<()>;

    /// A guess was not admissible
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn rejected(&mut self, rejection: &Rejection) -> io::Result<()>;

    /// A guess was scored
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn feedback(&mut self, feedback: &Feedback) -> io::Result<()>;

    /// The answer was guessed
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn won(&mut self) -> io::Result<()>;

    /// The session ended without a correct guess
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    fn lost(&mut self, answer: &Word) -> io::Result<()>;
}

/// Writes the game to an output stream, with the loss verdict on an
/// error stream
pub struct TerminalDisplay<O: Write, E: Write> {
    out: O,
    err: E,
    style: FeedbackStyle,
    color: bool,
}

impl<O: Write, E: Write> TerminalDisplay<O, E> {
    #[must_use]
    pub const fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            style: FeedbackStyle::Letters,
            color: false,
        }
    }

    /// Draw feedback as letters or emoji
    #[must_use]
    pub fn with_style(mut self, style: FeedbackStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable ANSI colour
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Recover the underlying streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> GameDisplay for TerminalDisplay<O, E> {
    fn welcome(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", "Welcome to Wordle!".bright_cyan().bold())
        } else {
            writeln!(self.out, "Welcome to Wordle!")
        }
    }

    fn prompt(&mut self, word_length: usize, remaining: usize) -> io::Result<()> {
        writeln!(self.out, "{}", prompt_text(word_length, remaining))?;
        self.out.flush()
    }

    fn rejected(&mut self, rejection: &Rejection) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", rejection.to_string().red())
        } else {
            writeln!(self.out, "{rejection}")
        }
    }

    fn feedback(&mut self, feedback: &Feedback) -> io::Result<()> {
        writeln!(
            self.out,
            "{}",
            format_feedback(feedback, self.style, self.color)
        )
    }

    fn won(&mut self) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{}", "Correct!".green().bold())?;
        } else {
            writeln!(self.out, "Correct!")?;
        }
        self.out.flush()
    }

    fn lost(&mut self, answer: &Word) -> io::Result<()> {
        self.out.flush()?;
        let verdict = format!("Bad luck - the word is \"{answer}\".");
        if self.color {
            writeln!(self.err, "{}", verdict.red())?;
        } else {
            writeln!(self.err, "{verdict}")?;
        }
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn display() -> TerminalDisplay<Vec<u8>, Vec<u8>> {
        TerminalDisplay::new(Vec::new(), Vec::new())
    }

    fn streams(display: TerminalDisplay<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = display.into_inner();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn plain_session_output() {
        let mut d = display();
        d.welcome().unwrap();
        d.prompt(5, 6).unwrap();
        d.rejected(&Rejection::NonAlphabetic).unwrap();
        d.prompt(5, 1).unwrap();
        d.won().unwrap();

        let (out, err) = streams(d);
        assert_eq!(
            out,
            "Welcome to Wordle!\n\
             Enter a 5 letter word (6 attempts remaining):\n\
             Words must contain only letters - try again.\n\
             Enter a 5 letter word (last attempt):\n\
             Correct!\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn feedback_uses_style() {
        let feedback = score(&Word::new("mlama").unwrap(), &Word::new("llama").unwrap());

        let mut letters = display();
        letters.feedback(&feedback).unwrap();
        assert_eq!(streams(letters).0, "-LAMA\n");

        let mut emoji = display().with_style(FeedbackStyle::Emoji);
        emoji.feedback(&feedback).unwrap();
        assert_eq!(streams(emoji).0, "⬜🟩🟩🟩🟩\n");
    }

    #[test]
    fn loss_goes_to_error_stream() {
        let mut d = display();
        d.lost(&Word::new("llama").unwrap()).unwrap();

        let (out, err) = streams(d);
        assert!(out.is_empty());
        assert_eq!(err, "Bad luck - the word is \"llama\".\n");
    }
}
