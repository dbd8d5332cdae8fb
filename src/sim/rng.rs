//! Random source capability
//!
//! Every spawn roll, spawn row and spawn speed is drawn through
//! [`RandomSource`], so a run is fully reproducible from its seed and tests
//! can script exact outcomes.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform integer draws
pub trait RandomSource {
    /// Uniform integer in `[low, high)`. Returns `low` for an empty range.
    fn range(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..high)
    }
}

/// Seeded generator used by the game
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of values, for tests that need exact outcomes
///
/// Each value is clamped into the requested range. Once the script runs out
/// every draw returns `high - 1`, which never passes a spawn roll.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn push(&mut self, value: i32) {
        self.values.push_back(value);
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        match self.values.pop_front() {
            Some(v) => v.clamp(low, high - 1),
            None => high - 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_reproducibility() {
        let mut a = seeded(12345);
        let mut b = seeded(12345);
        let xs: Vec<i32> = (0..16).map(|_| a.range(0, 255)).collect();
        let ys: Vec<i32> = (0..16).map(|_| b.range(0, 255)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_range_is_half_open() {
        let mut rng = seeded(7);
        for _ in 0..500 {
            let v = rng.range(8, 48);
            assert!((8..48).contains(&v));
        }
        assert_eq!(rng.range(5, 5), 5);
    }

    #[test]
    fn test_scripted_clamps_and_exhausts() {
        let mut rng = ScriptedRng::new([0, 300, -4]);
        assert_eq!(rng.range(0, 255), 0);
        assert_eq!(rng.range(0, 255), 254);
        assert_eq!(rng.range(1, 3), 1);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.range(0, 255), 254);
    }
}
