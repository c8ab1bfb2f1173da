//! # nim-ai: CPU Opponent Strategies for Nim
//!
//! Provides the CPU move selection used when a match is played against
//! the computer. Strategies share a common interface so the session can
//! swap them without caring which one is behind the box.
//!
//! ## Core Components
//!
//! - [`CpuStrategy`] - Trait defining the interface for move selection
//! - [`optimal`] - The nim-sum (XOR) strategy, provably optimal play
//! - [`random`] - Uniformly random legal moves, a weak baseline
//! - [`create_strategy`] - Factory function for creating strategies
//!
//! ## Quick Start
//!
//! ```rust
//! use nim_ai::create_strategy;
//!
//! let strategy = create_strategy("optimal");
//! let mv = strategy.choose_move([3, 4, 5]);
//! // 3 ^ 4 ^ 5 = 2, so the strategy restores a zero nim-sum
//! assert_eq!((mv.amount, mv.pile), (2, 0));
//! ```
//!
//! ## Strategy Types
//!
//! Currently supported strategy types:
//! - `"optimal"` - Textbook nim-sum play, never loses a won position
//! - `"random"` - Random legal move, for casual games and testing

use nim_engine::game::{Move, PILE_COUNT};

pub mod optimal;
pub mod random;

/// Interface for CPU move selection.
///
/// Implementors receive the current pile counts and must return a legal
/// move: a positive amount no larger than the chosen pile's count. The
/// session applies the move and runs the normal turn-completion logic.
pub trait CpuStrategy: Send + Sync {
    /// Choose the next removal given the current pile counts.
    ///
    /// At least one pile is nonzero when this is called; the session
    /// checks for game over before starting a CPU turn.
    fn choose_move(&self, piles: [u8; PILE_COUNT]) -> Move;

    /// Name/identifier of this strategy implementation.
    fn name(&self) -> &str;
}

/// Factory function to create strategies by type string.
///
/// # Panics
///
/// Panics if an unknown strategy type is requested. Supported types are
/// `"optimal"` and `"random"`.
///
/// # Example
///
/// ```rust
/// use nim_ai::create_strategy;
///
/// let strategy = create_strategy("optimal");
/// assert_eq!(strategy.name(), "OptimalStrategy");
/// ```
pub fn create_strategy(strategy_type: &str) -> Box<dyn CpuStrategy> {
    match strategy_type {
        "optimal" => Box::new(optimal::OptimalStrategy::new()),
        "random" => Box::new(random::RandomStrategy::new()),
        _ => panic!("Unknown strategy type: {}", strategy_type),
    }
}
