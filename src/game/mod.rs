//! Game configuration and session flow

mod config;
mod session;

pub use config::{
    ConfigError, DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig, MAX_SETTING, MIN_SETTING,
};
pub use session::{Session, SessionError, SessionState, Turn};
