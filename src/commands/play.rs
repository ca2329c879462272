//! Interactive play loop
//!
//! Reads guesses line by line and drives a `Session` until it is settled
//! or input runs out.

use crate::core::Lexicon;
use crate::game::{Session, SessionState, Turn};
use crate::output::GameDisplay;
use log::info;
use std::io::{self, BufRead};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Play one session to completion
///
/// Every non-terminal turn (rejected or scored) is followed by a fresh
/// prompt. End of input counts as a loss.
///
/// # Errors
///
/// Returns an error if reading input or writing to the display fails.
pub fn run_play<L, R, D>(
    session: &mut Session,
    lexicon: &L,
    mut input: R,
    display: &mut D,
) -> io::Result<Outcome>
where
    L: Lexicon + ?Sized,
    R: BufRead,
    D: GameDisplay + ?Sized,
{
    let word_length = session.config().word_length();

    display.welcome()?;
    display.prompt(word_length, session.remaining())?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input ended with {} attempts left", session.remaining());
            break;
        }

        match session.submit(&line, lexicon) {
            Turn::Won => {
                display.won()?;
                return Ok(Outcome::Won);
            }
            Turn::Rejected(rejection) => display.rejected(&rejection)?,
            Turn::Scored { feedback, state } => {
                display.feedback(&feedback)?;
                if state == SessionState::Lost {
                    break;
                }
            }
            Turn::Settled(SessionState::Won) => return Ok(Outcome::Won),
            Turn::Settled(_) => break,
        }

        display.prompt(word_length, session.remaining())?;
    }

    session.end_of_input();
    display.lost(session.answer())?;
    Ok(Outcome::Lost)
}
