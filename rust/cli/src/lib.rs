//! # Nim CLI Library
//!
//! The command-line interface for the Nim engine: an interactive,
//! turn-based game of three-pile Nim against the computer or another
//! human at the same console.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments, builds a seeded game, and hands control to
//! the interactive [`session::Session`]. Streams are injected so the
//! whole program can be driven from tests.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let mut input = Cursor::new(b"exit\n".to_vec());
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = nim_cli::run(
//!     vec!["nim", "--seed", "42"],
//!     &mut input,
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! ```
//!
//! ## In-Game Commands
//!
//! - `take [<number>] [from] <pile>`: remove chips (a bare number works too)
//! - `show [pile...]`: display all or selected piles
//! - `name <name>`: rename the side holding the turn
//! - `help [command...]`, `how2play`: documentation
//! - `restart [cpu|human]`: new piles, same or different opponent
//! - `color <name>`: console styling only
//! - `exit` / `rq`: leave the program

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
pub mod console;
pub mod error;
pub mod exit_code;
pub mod help;
pub mod io_utils;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{NimCli, StrategyArg};
use nim_ai::create_strategy;
use nim_engine::game::GameState;
use session::Session;

pub use cli::Vs;
pub use error::{CommandError, ErrorKind};

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and runs the interactive session.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `input` - Line source for the interactive prompts (typically locked stdin)
/// * `out` - Output stream for game display (typically `stdout`)
/// * `err` - Output stream for CLI-level errors (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` on every normal termination path (win, `exit`, `rq`,
/// EOF), `2` for usage errors or stream failures.
pub fn run<I, S>(args: I, input: &mut dyn BufRead, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match NimCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            // Help and version print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            };
        }
    };

    let game = GameState::new(cli.seed);
    let strategy = create_strategy(match cli.strategy {
        StrategyArg::Optimal => "optimal",
        StrategyArg::Random => "random",
    });
    let mut session = Session::new(game, strategy, input, out);
    session.set_transcript(cli.transcript);

    match session.run(cli.vs) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_exit_at_opponent_prompt_returns_zero() {
        let mut input = Cursor::new(b"exit\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["nim", "--seed", "1"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Welcome to the interactive NIM"));
        assert!(output.contains("{cpu|human}"));
    }

    #[test]
    fn test_eof_terminates_cleanly() {
        let mut input = Cursor::new(b"".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["nim"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
    }

    #[test]
    fn test_unknown_flag_is_a_usage_error() {
        let mut input = Cursor::new(b"".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["nim", "--bogus"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        assert!(!err.is_empty());
    }

    #[test]
    fn test_help_flag_prints_to_stdout_and_exits_zero() {
        let mut input = Cursor::new(b"".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["nim", "--help"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("--seed"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_vs_flag_skips_first_opponent_prompt() {
        // With --vs human the session goes straight to the match; the
        // first line is already a game command.
        let mut input = Cursor::new(b"exit\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["nim", "--seed", "1", "--vs", "human"],
            &mut input,
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);

        let output = String::from_utf8(out).unwrap();
        let separator = output.find("----").expect("match separator");
        let prompt = output.find("{cpu|human}");
        assert!(
            prompt.is_none() || prompt.unwrap() > separator,
            "first match must start without an opponent prompt"
        );
    }
}
