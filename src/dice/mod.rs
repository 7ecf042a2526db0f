//! Throwing sticks.
//!
//! A throw yields 1, 2, 3 or 4 steps with equal weight. The table below is
//! the whole distribution; nothing else in the engine assumes its shape
//! beyond "small positive integers".

use crate::core::{GameRng, GameRngState};

/// Possible throw values.
pub const FACES: [u8; 4] = [1, 2, 3, 4];

/// Relative weight of each entry in `FACES`.
pub const WEIGHTS: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Largest value a throw can produce.
pub const MAX_THROW: u8 = 4;

/// Seeded source of throws.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Throw the sticks.
    pub fn throw(&mut self) -> u8 {
        // WEIGHTS is non-empty with positive entries, so a face is always chosen.
        self.rng
            .choose_weighted(&WEIGHTS)
            .map_or(FACES[0], |i| FACES[i])
    }

    /// RNG position, for snapshots.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self::new(GameRng::from_state(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throws_stay_in_range() {
        let mut dice = Dice::seeded(3);
        for _ in 0..1000 {
            let value = dice.throw();
            assert!((1..=MAX_THROW).contains(&value));
        }
    }

    #[test]
    fn test_every_face_appears() {
        let mut dice = Dice::seeded(11);
        let mut seen = [0u32; 4];
        for _ in 0..4000 {
            seen[usize::from(dice.throw() - 1)] += 1;
        }
        // Uniform: each face expected ~1000 times
        for count in seen {
            assert!((800..1200).contains(&count), "skewed face count {count}");
        }
    }

    #[test]
    fn test_same_seed_same_throws() {
        let mut a = Dice::seeded(99);
        let mut b = Dice::seeded(99);
        for _ in 0..50 {
            assert_eq!(a.throw(), b.throw());
        }
    }

    #[test]
    fn test_state_resumes_sequence() {
        let mut dice = Dice::seeded(5);
        dice.throw();
        let state = dice.state();
        let expected: Vec<_> = (0..20).map(|_| dice.throw()).collect();

        let mut resumed = Dice::from_state(&state);
        let actual: Vec<_> = (0..20).map(|_| resumed.throw()).collect();
        assert_eq!(expected, actual);
    }
}
