//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Interactive three-pile NIM at the console.
#[derive(Parser, Debug)]
#[command(name = "nim", version, about = "Interactive three-pile NIM at the console")]
pub struct NimCli {
    /// RNG seed for reproducible piles and turn order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pre-select the opponent for the first match instead of prompting
    #[arg(long, value_enum)]
    pub vs: Option<Vs>,

    /// CPU move selection strategy
    #[arg(long, value_enum, default_value = "optimal")]
    pub strategy: StrategyArg,

    /// Append completed matches to this JSONL transcript file
    #[arg(long)]
    pub transcript: Option<PathBuf>,
}

/// Opponent type for a match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Vs {
    /// Play against the computer.
    Cpu,
    /// Both sides are typed at the same console.
    Human,
}

impl Vs {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Cpu => "cpu",
            Vs::Human => "human",
        }
    }
}

/// Which CPU strategy backs the `cpu` opponent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Nim-sum play; never loses a winnable game.
    Optimal,
    /// Uniformly random legal moves.
    Random,
}

impl StrategyArg {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyArg::Optimal => "optimal",
            StrategyArg::Random => "random",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_defaults() {
        let cli = NimCli::try_parse_from(["nim"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.vs, None);
        assert_eq!(cli.strategy, StrategyArg::Optimal);
        assert_eq!(cli.transcript, None);
    }

    #[test]
    fn test_parses_full_surface() {
        let cli = NimCli::try_parse_from([
            "nim",
            "--seed",
            "42",
            "--vs",
            "cpu",
            "--strategy",
            "random",
            "--transcript",
            "games.jsonl",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.vs, Some(Vs::Cpu));
        assert_eq!(cli.strategy, StrategyArg::Random);
        assert_eq!(cli.transcript, Some(PathBuf::from("games.jsonl")));
    }

    #[test]
    fn test_rejects_unknown_opponent() {
        assert!(NimCli::try_parse_from(["nim", "--vs", "robot"]).is_err());
    }

    #[test]
    fn test_value_enum_strings() {
        assert_eq!(Vs::Cpu.as_str(), "cpu");
        assert_eq!(Vs::Human.as_str(), "human");
        assert_eq!(StrategyArg::Optimal.as_str(), "optimal");
        assert_eq!(StrategyArg::Random.as_str(), "random");
    }
}
