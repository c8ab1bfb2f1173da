use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::pile::Pile;

/// Number of piles in a match. Fixed by the rules, not configurable.
pub const PILE_COUNT: usize = 3;

/// A single removal: `amount` objects from the pile at `pile` (0-indexed).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub amount: u8,
    pub pile: usize,
}

/// State of one Nim match: three piles, turn ownership, opponent mode,
/// and the display names for both sides.
///
/// Owns its RNG so that a seeded game replays identically. Turn and
/// pile randomization both draw from it.
#[derive(Debug, Clone)]
pub struct GameState {
    piles: [Pile; PILE_COUNT],
    player1_turn: bool,
    vs_cpu: bool,
    player1_name: String,
    player2_name: String,
    cpu_name: String,
    seed: u64,
    rng: ChaCha20Rng,
}

impl GameState {
    /// Create a game with randomized piles and a randomly decided first
    /// turn. Passing `None` seeds from entropy; a fixed seed replays
    /// the same match.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let piles = [
            Pile::random(&mut rng),
            Pile::random(&mut rng),
            Pile::random(&mut rng),
        ];
        let player1_turn = rng.random_bool(0.5);
        Self {
            piles,
            player1_turn,
            vs_cpu: false,
            player1_name: "player1".to_string(),
            player2_name: "player2".to_string(),
            cpu_name: "cpu".to_string(),
            seed,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Current counts, pile 0 first.
    pub fn piles(&self) -> [u8; PILE_COUNT] {
        [
            self.piles[0].count(),
            self.piles[1].count(),
            self.piles[2].count(),
        ]
    }

    /// Count of one pile by 0-based index.
    pub fn pile(&self, index: usize) -> Result<u8, GameError> {
        self.piles
            .get(index)
            .map(|p| p.count())
            .ok_or(GameError::NoSuchPile { index })
    }

    /// Assign explicit counts to all piles. Used by tests and restored
    /// positions; each count must satisfy the pile bound.
    pub fn set_piles(&mut self, counts: [u8; PILE_COUNT]) -> Result<(), GameError> {
        for (pile, count) in self.piles.iter_mut().zip(counts) {
            pile.set(count)?;
        }
        Ok(())
    }

    pub fn randomize_piles(&mut self) {
        for pile in &mut self.piles {
            pile.randomize(&mut self.rng);
        }
    }

    /// Uniformly re-decide which side moves first.
    pub fn decide_turn(&mut self) {
        self.player1_turn = self.rng.random_bool(0.5);
    }

    pub fn switch_turn(&mut self) {
        self.player1_turn = !self.player1_turn;
    }

    pub fn is_player1_turn(&self) -> bool {
        self.player1_turn
    }

    /// Force turn ownership. Test hook; interactive play only ever
    /// moves the turn through `decide_turn` and `switch_turn`.
    pub fn set_player1_turn(&mut self, player1_turn: bool) {
        self.player1_turn = player1_turn;
    }

    pub fn vs_cpu(&self) -> bool {
        self.vs_cpu
    }

    pub fn set_vs_cpu(&mut self, vs_cpu: bool) {
        self.vs_cpu = vs_cpu;
    }

    /// Display name of whichever side currently holds the turn.
    pub fn current_player_name(&self) -> &str {
        if self.player1_turn {
            &self.player1_name
        } else {
            &self.player2_name
        }
    }

    /// Rename whichever side currently holds the turn.
    pub fn set_current_player_name(&mut self, name: String) {
        if self.player1_turn {
            self.player1_name = name;
        } else {
            self.player2_name = name;
        }
    }

    pub fn cpu_name(&self) -> &str {
        &self.cpu_name
    }

    /// Remove `amount` objects from the pile at `index` (0-based).
    ///
    /// The interpreter validates range and emptiness before calling;
    /// a failure here signals a defect in that validation layer.
    pub fn take(&mut self, index: usize, amount: u8) -> Result<(), GameError> {
        self.piles
            .get_mut(index)
            .ok_or(GameError::NoSuchPile { index })?
            .decrement_by(amount)
    }

    /// Apply a [`Move`] produced by a strategy.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        self.take(mv.pile, mv.amount)
    }

    /// The match is over exactly when all piles are empty.
    pub fn is_over(&self) -> bool {
        self.piles.iter().all(Pile::is_empty)
    }

    /// Re-randomize all piles and re-decide who goes first.
    pub fn restart(&mut self) {
        self.randomize_piles();
        self.decide_turn();
    }
}
