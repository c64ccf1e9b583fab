use ordered_float::OrderedFloat;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over a random permutation of the keys `0..num`.
/// The same seed always gives the same permutation
pub struct RandomKeys {
    // Shuffled lazily: `keys[..position]` were already returned
    keys: Vec<u32>,
    position: usize,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(num: usize, seed: u64) -> RandomKeys {
        assert!(num <= u32::MAX as usize, "too many keys: {}", num);
        RandomKeys {
            keys: (0..num as u32).collect(),
            position: 0,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.keys.len() {
            return None;
        }

        // One Fisher-Yates step
        let chosen = self.rng.gen_range(self.position, self.keys.len());
        self.keys.swap(self.position, chosen);
        self.position += 1;
        Some(self.keys[self.position - 1])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.keys.len() - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}

/// Like `RandomKeys`, but with `num` distinct floating point keys spread
/// around zero, some of them negative
pub struct RandomFloatKeys {
    inner: RandomKeys,
    offset: f64,
}

impl RandomFloatKeys {
    pub fn new(num: usize, seed: u64) -> RandomFloatKeys {
        RandomFloatKeys {
            inner: RandomKeys::new(num, seed),
            offset: num as f64 / 2.,
        }
    }
}

impl Iterator for RandomFloatKeys {
    type Item = OrderedFloat<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        self.inner
            .next()
            .map(|key| OrderedFloat((key as f64 - offset) / 8.))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for RandomFloatKeys {}

impl ExactSizeIterator for RandomFloatKeys {}
