//! Injectable randomness source.
//!
//! Score deltas, objection rulings, and zero-hit category fallbacks all
//! draw from a [`RandomSource`] instead of calling an RNG inline, so
//! deterministic tests can supply fixed sequences. The production
//! implementation lives in the infrastructure layer.

use std::collections::VecDeque;

/// Source of randomness for the simulation.
pub trait RandomSource: Send {
    /// Uniform integer in the inclusive range `[lo, hi]`.
    fn int_between(&mut self, lo: i32, hi: i32) -> i32;

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Deterministic [`RandomSource`] fed from pre-recorded sequences.
///
/// Intended for tests. Each method pops from its own queue; when a
/// queue runs dry the method falls back to the lowest legal value, so
/// a partially scripted source stays usable.
#[derive(Debug, Default)]
pub struct SequenceRandom {
    ints: VecDeque<i32>,
    flips: VecDeque<bool>,
    indices: VecDeque<usize>,
}

impl SequenceRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }
}

impl RandomSource for SequenceRandom {
    fn int_between(&mut self, lo: i32, hi: i32) -> i32 {
        self.ints.pop_front().map(|v| v.clamp(lo, hi)).unwrap_or(lo)
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.indices
            .pop_front()
            .map(|i| i.min(len - 1))
            .unwrap_or(0)
    }
}
