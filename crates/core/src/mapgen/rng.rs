//! Seeded pseudo-random stream shared by every phase of a single generation run.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub(super) struct MapRng {
    rng: ChaCha8Rng,
}

impl MapRng {
    pub(super) fn from_seed(seed: i32) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(i64::from(seed) as u64) }
    }

    /// Uniform draw from `min..=max`. Always consumes exactly one word from the stream,
    /// so the draw sequence never depends on the bounds; an empty range yields `min`.
    pub(super) fn range_inclusive(&mut self, min_value: i32, max_value: i32) -> i32 {
        let draw = self.rng.next_u64();
        if max_value < min_value {
            return min_value;
        }
        let span = (i64::from(max_value) - i64::from(min_value) + 1) as u64;
        (i64::from(min_value) + (draw % span) as i64) as i32
    }

    pub(super) fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.range_inclusive(0, len as i32 - 1) as usize
    }
}
