//! Optimal nim-sum strategy.
//!
//! A Nim position is losing for the player to move exactly when the
//! XOR of all pile counts (the nim-sum) is zero. From any nonzero
//! position there is a removal that restores a zero nim-sum, and this
//! strategy always plays it. From a zero position no winning move
//! exists, so it falls back to a stalling heuristic.

use nim_engine::game::{Move, PILE_COUNT};
use nim_engine::pile::MAX_PILE;

use crate::CpuStrategy;

/// Bits needed to represent any legal pile count. Derived from the pile
/// bound rather than hard-coded so the scan stays correct if the bound
/// is ever reconfigured.
const BIT_WIDTH: u32 = u8::BITS - MAX_PILE.leading_zeros();

/// XOR of all pile counts.
pub fn nim_sum(piles: [u8; PILE_COUNT]) -> u8 {
    piles.iter().fold(0, |acc, &count| acc ^ count)
}

/// Textbook optimal Nim play under the normal-play convention.
///
/// With a nonzero nim-sum it reduces one pile so the position XORs to
/// zero, which forces a win with continued optimal play. With a zero
/// nim-sum (already a lost position against perfect play) it removes a
/// single object from the largest pile, ties broken by lowest index.
#[derive(Debug, Clone)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Find the winning removal, if the position admits one.
    ///
    /// Scans the parity vector from the most significant bit down; the
    /// first pile whose count has the highest odd-parity bit set can be
    /// reduced to `count ^ parity`, which is strictly smaller.
    fn winning_move(piles: [u8; PILE_COUNT]) -> Option<Move> {
        let parity = nim_sum(piles);
        for bit in (0..BIT_WIDTH).rev() {
            if (parity >> bit) & 1 == 0 {
                continue;
            }
            for (index, &count) in piles.iter().enumerate() {
                if (count >> bit) & 1 == 1 {
                    let target = count ^ parity;
                    return Some(Move {
                        amount: count - target,
                        pile: index,
                    });
                }
            }
            // The highest odd-parity bit is set in some pile by
            // construction, so this point is unreachable.
            break;
        }
        None
    }

    /// Remove one object from the largest pile, lowest index on ties.
    fn fallback_move(piles: [u8; PILE_COUNT]) -> Move {
        let mut max_index = 0;
        for (index, &count) in piles.iter().enumerate().skip(1) {
            if count > piles[max_index] {
                max_index = index;
            }
        }
        Move {
            amount: 1,
            pile: max_index,
        }
    }
}

impl Default for OptimalStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuStrategy for OptimalStrategy {
    fn choose_move(&self, piles: [u8; PILE_COUNT]) -> Move {
        Self::winning_move(piles).unwrap_or_else(|| Self::fallback_move(piles))
    }

    fn name(&self) -> &str {
        "OptimalStrategy"
    }
}
