//! # nim-engine: Nim Game Engine Core
//!
//! A deterministic engine for three-pile Nim under the normal-play
//! convention (whoever removes the last object wins). Provides pile
//! state management, turn sequencing, win detection, and a match
//! transcript logger with reproducible RNG for replayable games.
//!
//! ## Core Modules
//!
//! - [`pile`] - Bounded pile counter and its randomization
//! - [`game`] - Game state management and turn orchestration
//! - [`logger`] - Move transcript and MatchRecord serialization
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use nim_engine::game::GameState;
//! use nim_engine::pile::{MAX_PILE, MIN_PILE};
//!
//! // Same seed produces the same starting position
//! let game = GameState::new(Some(42));
//! for count in game.piles() {
//!     assert!(count >= MIN_PILE && count < MAX_PILE);
//! }
//! ```
//!
//! ## Taking Objects
//!
//! The engine trusts its callers: input-shape validation belongs to the
//! interpreter layer, and out-of-bound mutations are rejected as
//! [`errors::GameError`] rather than clamped.
//!
//! ```rust
//! use nim_engine::game::GameState;
//!
//! let mut game = GameState::new(Some(42));
//! game.set_piles([5, 7, 9]).unwrap();
//! game.take(1, 7).unwrap();
//! assert_eq!(game.piles(), [5, 0, 9]);
//! assert!(game.take(1, 1).is_err());
//! ```

pub mod errors;
pub mod game;
pub mod logger;
pub mod pile;
