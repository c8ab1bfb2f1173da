use std::fmt;

use rand::Rng;

use crate::errors::GameError;

/// Smallest count a randomized pile starts with.
pub const MIN_PILE: u8 = 10;
/// Largest count a pile may ever hold.
pub const MAX_PILE: u8 = 20;

/// A bounded counter for one heap of objects.
///
/// The invariant `0 <= count <= MAX_PILE` always holds. Mutators reject
/// any operation whose result would leave that range and never clamp;
/// callers are expected to have validated user input beforehand, so in
/// correct operation the error paths are unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pile {
    count: u8,
}

impl Pile {
    /// Create a pile with an explicit count.
    pub fn new(count: u8) -> Result<Self, GameError> {
        if count > MAX_PILE {
            return Err(GameError::PileOverflow {
                requested: count as i64,
                max: MAX_PILE,
            });
        }
        Ok(Self { count })
    }

    /// Create a pile with a uniformly random count in `[MIN_PILE, MAX_PILE)`.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut pile = Self { count: 0 };
        pile.randomize(rng);
        pile
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Reassign the count. Fails if `n` exceeds the pile bound.
    pub fn set(&mut self, n: u8) -> Result<(), GameError> {
        if n > MAX_PILE {
            return Err(GameError::PileOverflow {
                requested: n as i64,
                max: MAX_PILE,
            });
        }
        self.count = n;
        Ok(())
    }

    /// Remove `n` objects. Fails if the pile holds fewer than `n`.
    pub fn decrement_by(&mut self, n: u8) -> Result<(), GameError> {
        match self.count.checked_sub(n) {
            Some(rest) => {
                self.count = rest;
                Ok(())
            }
            None => Err(GameError::PileUnderflow {
                requested: n,
                available: self.count,
            }),
        }
    }

    /// Add `n` objects. Fails if the result exceeds `MAX_PILE`.
    pub fn increment_by(&mut self, n: u8) -> Result<(), GameError> {
        let total = self.count as i64 + n as i64;
        if total > MAX_PILE as i64 {
            return Err(GameError::PileOverflow {
                requested: total,
                max: MAX_PILE,
            });
        }
        self.count += n;
        Ok(())
    }

    /// Assign a uniformly random count in `[MIN_PILE, MAX_PILE)`.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.count = rng.random_range(MIN_PILE..MAX_PILE);
    }
}

impl fmt::Display for Pile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}

impl PartialEq<u8> for Pile {
    fn eq(&self, other: &u8) -> bool {
        self.count == *other
    }
}

impl PartialOrd<u8> for Pile {
    fn partial_cmp(&self, other: &u8) -> Option<std::cmp::Ordering> {
        self.count.partial_cmp(other)
    }
}

impl From<Pile> for u8 {
    fn from(pile: Pile) -> u8 {
        pile.count
    }
}
