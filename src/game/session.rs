//! Game session state machine
//!
//! A session owns the answer and the remaining guess budget. Every submitted
//! line produces a `Turn` describing what happened; the caller decides what
//! to print and when to stop.

use super::GameConfig;
use crate::core::{Feedback, Lexicon, Rejection, Word, score, validate};
use log::{debug, trace};
use thiserror::Error;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress { remaining: usize },
    Won,
    Lost,
}

impl SessionState {
    /// True once the session has been won or lost
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// Result of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The guess matched the answer
    Won,
    /// The guess was not admissible; no attempt was used
    Rejected(Rejection),
    /// The guess was scored and one attempt used
    Scored {
        feedback: Feedback,
        state: SessionState,
    },
    /// The session was already over; nothing changed
    Settled(SessionState),
}

/// Error creating a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("answer \"{answer}\" does not have {expected} letters")]
    AnswerLength { answer: Word, expected: usize },
}

/// One game from answer selection to win or loss
#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    config: GameConfig,
    state: SessionState,
    history: Vec<(Word, Feedback)>,
}

impl Session {
    /// Start a session for `answer`
    ///
    /// # Errors
    /// Returns `SessionError::AnswerLength` if the answer does not have the
    /// configured word length.
    pub fn new(answer: Word, config: GameConfig) -> Result<Self, SessionError> {
        if answer.len() != config.word_length() {
            return Err(SessionError::AnswerLength {
                answer,
                expected: config.word_length(),
            });
        }

        Ok(Self {
            answer,
            config,
            state: SessionState::InProgress {
                remaining: config.max_guesses(),
            },
            history: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// The secret answer
    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Attempts left; zero once the session is settled
    #[must_use]
    pub const fn remaining(&self) -> usize {
        match self.state {
            SessionState::InProgress { remaining } => remaining,
            SessionState::Won | SessionState::Lost => 0,
        }
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Submit one raw line of player input
    ///
    /// Trailing newline characters are stripped and the text is lower-cased.
    /// A guess equal to the answer wins immediately. Otherwise the guess is
    /// validated; rejected guesses leave the budget untouched.
    pub fn submit<L: Lexicon + ?Sized>(&mut self, raw: &str, lexicon: &L) -> Turn {
        let SessionState::InProgress { remaining } = self.state else {
            return Turn::Settled(self.state);
        };

        let guess = raw.trim_end_matches(['\n', '\r']).to_lowercase();

        if guess == self.answer.text() {
            debug!("Guess {guess:?} matches the answer");
            self.state = SessionState::Won;
            return Turn::Won;
        }

        let word = match validate(&guess, self.config.word_length(), lexicon) {
            Ok(word) => word,
            Err(rejection) => {
                trace!("Rejected {guess:?}: {rejection:?}");
                return Turn::Rejected(rejection);
            }
        };

        let feedback = score(&word, &self.answer);
        let remaining = remaining - 1;
        self.state = if remaining == 0 {
            SessionState::Lost
        } else {
            SessionState::InProgress { remaining }
        };
        debug!("Scored {word} as {feedback}, {remaining} attempts left");

        self.history.push((word, feedback.clone()));
        Turn::Scored {
            feedback,
            state: self.state,
        }
    }

    /// Input ran out before the session was settled
    ///
    /// Counts as a loss unless the session was already won.
    pub fn end_of_input(&mut self) -> SessionState {
        if self.state != SessionState::Won {
            self.state = SessionState::Lost;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark;

    struct Words(&'static [&'static str]);

    impl Lexicon for Words {
        fn contains(&self, word: &str) -> bool {
            self.0.iter().any(|w| w.eq_ignore_ascii_case(word))
        }
    }

    const LEXICON: Words = Words(&["llama", "mlama", "allay", "crane", "slate"]);

    fn session(max_guesses: usize) -> Session {
        let config = GameConfig::new(5, max_guesses).unwrap();
        Session::new(Word::new("llama").unwrap(), config).unwrap()
    }

    #[test]
    fn starts_in_progress_with_full_budget() {
        let session = session(6);
        assert_eq!(session.state(), SessionState::InProgress { remaining: 6 });
        assert_eq!(session.remaining(), 6);
        assert!(session.history().is_empty());
    }

    #[test]
    fn answer_length_must_match_config() {
        let config = GameConfig::new(6, 6).unwrap();
        let err = Session::new(Word::new("llama").unwrap(), config).unwrap_err();
        assert_eq!(err.to_string(), "answer \"llama\" does not have 6 letters");
    }

    #[test]
    fn correct_guess_wins() {
        let mut session = session(6);
        assert_eq!(session.submit("llama\n", &LEXICON), Turn::Won);
        assert_eq!(session.state(), SessionState::Won);
        assert!(session.state().is_settled());
    }

    #[test]
    fn correct_guess_is_case_insensitive() {
        let mut session = session(6);
        assert_eq!(session.submit("LLaMA", &LEXICON), Turn::Won);
    }

    #[test]
    fn answer_wins_even_if_not_in_dictionary() {
        let mut session = session(6);
        assert_eq!(session.submit("llama", &Words(&[])), Turn::Won);
    }

    #[test]
    fn valid_guess_is_scored_and_uses_an_attempt() {
        let mut session = session(6);
        let Turn::Scored { feedback, state } = session.submit("mlama\n", &LEXICON) else {
            panic!("expected a scored turn");
        };
        assert_eq!(feedback.marks()[0], Mark::Absent);
        assert_eq!(feedback.to_letters(), "-LAMA");
        assert_eq!(state, SessionState::InProgress { remaining: 5 });
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].0.text(), "mlama");
    }

    #[test]
    fn wrong_length_does_not_use_an_attempt() {
        let mut session = session(6);
        assert_eq!(
            session.submit("lama", &LEXICON),
            Turn::Rejected(Rejection::WrongLength { expected: 5 })
        );
        assert_eq!(session.remaining(), 6);
    }

    #[test]
    fn digit_is_rejected() {
        let mut session = session(6);
        assert_eq!(
            session.submit("ll4ma", &LEXICON),
            Turn::Rejected(Rejection::NonAlphabetic)
        );
        assert_eq!(session.remaining(), 6);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let mut session = session(6);
        assert_eq!(
            session.submit("plumb", &LEXICON),
            Turn::Rejected(Rejection::NotInDictionary)
        );
        assert_eq!(session.remaining(), 6);
    }

    #[test]
    fn trailing_space_is_not_stripped() {
        let mut session = session(6);
        assert_eq!(
            session.submit("llama \n", &LEXICON),
            Turn::Rejected(Rejection::WrongLength { expected: 5 })
        );
    }

    #[test]
    fn exhausting_budget_loses() {
        let mut session = session(3);
        for expected_remaining in [2, 1] {
            let Turn::Scored { state, .. } = session.submit("crane", &LEXICON) else {
                panic!("expected a scored turn");
            };
            assert_eq!(
                state,
                SessionState::InProgress {
                    remaining: expected_remaining
                }
            );
        }
        let Turn::Scored { state, .. } = session.submit("slate", &LEXICON) else {
            panic!("expected a scored turn");
        };
        assert_eq!(state, SessionState::Lost);
        assert_eq!(session.remaining(), 0);
        assert_eq!(session.answer().text(), "llama");
    }

    #[test]
    fn settled_session_ignores_input() {
        let mut session = session(3);
        session.submit("llama", &LEXICON);
        assert_eq!(
            session.submit("crane", &LEXICON),
            Turn::Settled(SessionState::Won)
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn end_of_input_loses() {
        let mut session = session(6);
        session.submit("crane", &LEXICON);
        assert_eq!(session.end_of_input(), SessionState::Lost);
    }

    #[test]
    fn end_of_input_after_win_stays_won() {
        let mut session = session(6);
        session.submit("llama", &LEXICON);
        assert_eq!(session.end_of_input(), SessionState::Won);
    }
}
