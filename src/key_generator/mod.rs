//! Seeded key sequences and operation mixes used to exercise trees in tests
//! and benchmarks
mod random;
mod sequential;
mod workload;

pub use random::*;
pub use sequential::*;
pub use workload::*;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn all_generators_yield_permutations() {
        for num in vec![0, 1, 2, 10, 1000] {
            let expected: Vec<u32> = (0..num as u32).collect();

            let ascending: Vec<_> = SequentialKeys::new(num, SequentialOrder::Ascending).collect();
            assert_eq!(ascending, expected);

            let mut descending: Vec<_> =
                SequentialKeys::new(num, SequentialOrder::Descending).collect();
            descending.reverse();
            assert_eq!(descending, expected);

            let mut random: Vec<_> = RandomKeys::new(num, 17).collect();
            random.sort();
            assert_eq!(random, expected);
        }
    }

    #[test]
    fn exact_sizes() {
        let mut it = SequentialKeys::new(3, SequentialOrder::Descending);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));

        let mut it = RandomKeys::new(5, 1);
        it.next();
        assert_eq!(it.len(), 4);

        assert_eq!(RandomFloatKeys::new(7, 1).len(), 7);
        assert_eq!(Workload::new(9, 4, 1).len(), 9);
    }
}
