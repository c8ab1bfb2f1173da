use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Pile cannot hold {requested} objects, maximum: {max}")]
    PileOverflow { requested: i64, max: u8 },
    #[error("Cannot remove {requested} objects from a pile of {available}")]
    PileUnderflow { requested: u8, available: u8 },
    #[error("No pile at index {index} (piles are 0..3)")]
    NoSuchPile { index: usize },
}
