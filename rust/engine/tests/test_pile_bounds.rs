use nim_engine::errors::GameError;
use nim_engine::pile::{Pile, MAX_PILE, MIN_PILE};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn new_rejects_counts_above_max() {
    assert!(Pile::new(MAX_PILE).is_ok());
    assert!(matches!(
        Pile::new(MAX_PILE + 1),
        Err(GameError::PileOverflow { .. })
    ));
}

#[test]
fn set_never_clamps() {
    let mut pile = Pile::new(5).unwrap();
    let err = pile.set(MAX_PILE + 1);
    assert!(err.is_err());
    assert_eq!(pile.count(), 5, "failed set must not mutate");
}

#[test]
fn decrement_rejects_underflow_without_mutating() {
    let mut pile = Pile::new(3).unwrap();
    assert_eq!(
        pile.decrement_by(4),
        Err(GameError::PileUnderflow {
            requested: 4,
            available: 3
        })
    );
    assert_eq!(pile.count(), 3);
    pile.decrement_by(3).unwrap();
    assert!(pile.is_empty());
}

#[test]
fn increment_rejects_overflow() {
    let mut pile = Pile::new(MAX_PILE - 1).unwrap();
    pile.increment_by(1).unwrap();
    assert!(pile.increment_by(1).is_err());
    assert_eq!(pile.count(), MAX_PILE);
}

#[test]
fn randomize_stays_in_half_open_range() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let mut pile = Pile::new(0).unwrap();
    for _ in 0..200 {
        pile.randomize(&mut rng);
        assert!(pile.count() >= MIN_PILE);
        assert!(pile.count() < MAX_PILE);
    }
}

#[test]
fn compares_by_count() {
    let a = Pile::new(4).unwrap();
    let b = Pile::new(7).unwrap();
    assert!(a < b);
    assert!(b == 7u8);
    assert_eq!(u8::from(b), 7);
    assert_eq!(format!("{}", a), "4");
}
