//! Random baseline strategy.
//!
//! Picks a uniformly random nonempty pile and removes a uniformly
//! random legal amount from it. Useful for casual games and as a
//! sanity baseline when comparing strategies.

use nim_engine::game::{Move, PILE_COUNT};
use rand::Rng;
use rand::seq::IteratorRandom;

use crate::CpuStrategy;

#[derive(Debug, Clone)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStrategy for RandomStrategy {
    fn choose_move(&self, piles: [u8; PILE_COUNT]) -> Move {
        let mut rng = rand::rng();
        let (pile, &count) = piles
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .choose(&mut rng)
            .expect("CPU turn starts only while a pile is nonempty");
        Move {
            amount: rng.random_range(1..=count),
            pile,
        }
    }

    fn name(&self) -> &str {
        "RandomStrategy"
    }
}
