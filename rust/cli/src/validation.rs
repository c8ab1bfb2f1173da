//! Input tokenization and argument validation for the console.
//!
//! All user input validation lives here and in the command handlers;
//! the engine below trusts that arguments reaching it are in range.

use nim_engine::game::PILE_COUNT;

use crate::error::CommandError;

/// Split a line on whitespace into owned tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

/// Parse a token as a signed integer, if possible.
///
/// Signed so that out-of-range values like `-3` reach the range checks
/// and get reported with the value the user typed.
pub fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

/// Parse a 1-indexed pile argument into a 0-based index.
pub fn parse_pile_arg(token: &str) -> Result<usize, CommandError> {
    let value = parse_int(token).ok_or_else(|| {
        CommandError::argument(format!("Could not parse '{}' as an integer.", token))
    })?;
    if value < 1 || value > PILE_COUNT as i64 {
        return Err(CommandError::range(format!(
            "Expected <pile> in range [1, {}], got '{}'.",
            PILE_COUNT, value
        )));
    }
    Ok(value as usize - 1)
}

/// Outcome of the opponent-choice prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentChoice {
    Cpu,
    Human,
    /// The user typed `exit` or `rq`; terminate the program.
    Quit,
}

/// Resolve the tokens typed at the opponent-choice prompt.
///
/// `exit`/`rq` quit regardless of trailing tokens, matching the
/// in-game commands. Otherwise exactly one token is accepted and must
/// be `cpu` or `human` (case-insensitive).
pub fn parse_opponent_choice(tokens: &[String]) -> Result<OpponentChoice, CommandError> {
    let first = tokens[0].to_lowercase();
    if first == "exit" || first == "rq" {
        return Ok(OpponentChoice::Quit);
    }
    if tokens.len() > 1 {
        return Err(CommandError::argument(
            "Expected only 1 argument, one of {cpu,human}.",
        ));
    }
    match first.as_str() {
        "cpu" => Ok(OpponentChoice::Cpu),
        "human" => Ok(OpponentChoice::Human),
        _ => Err(CommandError::argument(format!(
            "Expected one of {{cpu,human}}. Got '{}'.",
            first
        ))),
    }
}
