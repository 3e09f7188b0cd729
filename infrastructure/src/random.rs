//! System-backed randomness source.

use gavel_domain::RandomSource;
use rand::Rng;

/// [`RandomSource`] drawing from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_between(&mut self, lo: i32, hi: i32) -> i32 {
        rand::rng().random_range(lo..=hi)
    }

    fn coin_flip(&mut self) -> bool {
        rand::rng().random_bool(0.5)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_between_stays_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            let v = rng.int_between(5, 12);
            assert!((5..=12).contains(&v));
        }
    }

    #[test]
    fn test_pick_index_stays_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            assert!(rng.pick_index(4) < 4);
        }
    }
}
