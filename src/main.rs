//! Wordle - CLI
//!
//! Guess the hidden word. Exit status: 0 on a win, 1 on a usage error,
//! 2 if the dictionary cannot be read, 3 when the word was not guessed.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use wordle_cli::{
    commands::{Outcome, run_play},
    game::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, GameConfig, Session},
    output::{FeedbackStyle, TerminalDisplay},
    wordlists::{AnswerSource, DEFAULT_DICTIONARY, Dictionary, RandomAnswers},
};

const EXIT_USAGE: u8 = 1;
const EXIT_DICTIONARY: u8 = 2;
const EXIT_LOST: u8 = 3;
const EXIT_INTERNAL: u8 = 4;

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden word, one letter-scored attempt at a time",
    version,
    author
)]
struct Cli {
    /// Word length (3-9)
    #[arg(
        short,
        long = "len",
        default_value_t = DEFAULT_WORD_LENGTH as u8,
        value_parser = clap::value_parser!(u8).range(3..=9)
    )]
    len: u8,

    /// Number of guesses allowed (3-9)
    #[arg(
        short,
        long = "max",
        default_value_t = DEFAULT_MAX_GUESSES as u8,
        value_parser = clap::value_parser!(u8).range(3..=9)
    )]
    max: u8,

    /// Seed for answer selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Show feedback as coloured squares instead of letters
    #[arg(long)]
    emoji: bool,

    /// Disable ANSI colour
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Word list, one word per line
    #[arg(default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not errors
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    let config = match GameConfig::new(usize::from(cli.len), usize::from(cli.max)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wordle: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let dictionary = match Dictionary::load(&cli.dictionary, config.word_length()) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("wordle: {e}");
            return ExitCode::from(EXIT_DICTIONARY);
        }
    };

    match play(&cli, config, &dictionary) {
        Ok(Outcome::Won) => ExitCode::SUCCESS,
        Ok(Outcome::Lost) => ExitCode::from(EXIT_LOST),
        Err(e) => {
            eprintln!("wordle: {e:#}");
            ExitCode::from(EXIT_INTERNAL)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn play(cli: &Cli, config: GameConfig, dictionary: &Dictionary) -> Result<Outcome> {
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let answer = RandomAnswers::embedded(rng)
        .choose_answer(config.word_length())
        .with_context(|| format!("no answer words of length {}", config.word_length()))?;
    debug!("Answer is {answer}");

    let mut session = Session::new(answer, config)?;

    let style = if cli.emoji {
        FeedbackStyle::Emoji
    } else {
        FeedbackStyle::Letters
    };
    let color = !cli.no_color && io::stdout().is_terminal();
    let mut display = TerminalDisplay::new(io::stdout().lock(), io::stderr().lock())
        .with_style(style)
        .with_color(color);

    run_play(&mut session, dictionary, io::stdin().lock(), &mut display)
        .context("terminal I/O failed")
}
