use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Insert(u32),
    Delete(u32),
    Find(u32),
}

/// An iterator over `num` random operations on keys drawn from
/// `0..key_space`. Insertions are the most frequent so that a tree fed with
/// the workload grows until roughly half of the key space is present
pub struct Workload {
    remaining: usize,
    key_space: u32,
    rng: Pcg64,
}

impl Workload {
    pub fn new(num: usize, key_space: u32, seed: u64) -> Workload {
        assert!(key_space > 0);
        Workload {
            remaining: num,
            key_space,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for Workload {
    type Item = Operation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let key = self.rng.gen_range(0, self.key_space);
        let dice: f64 = self.rng.gen();
        Some(if dice < 0.5 {
            Operation::Insert(key)
        } else if dice < 0.8 {
            Operation::Delete(key)
        } else {
            Operation::Find(key)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for Workload {}

impl ExactSizeIterator for Workload {}
