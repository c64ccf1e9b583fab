use crate::key_generator::*;
use crate::RedBlackTree;
use ordered_float::OrderedFloat;
use simplelog::{Config, LevelFilter, TestLogger};
use std::collections::BTreeMap;

fn init_logging() {
    // Several tests race to install it, only the first one wins
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

fn assert_ascending<K: Ord + std::fmt::Debug, I>(tree: &RedBlackTree<K, I>) {
    let keys: Vec<_> = tree.iter().map(|(key, _)| key).collect();
    assert_eq!(keys.len(), tree.len());
    for pair in keys.windows(2) {
        assert!(pair[0] < pair[1], "{:?} >= {:?}", pair[0], pair[1]);
    }
}

#[test]
fn round_trip() {
    init_logging();
    let mut tree = RedBlackTree::new();
    for &key in &[5, 3, 8, 1, 4, 7, 9] {
        assert!(tree.insert(key, key));
        assert_eq!(tree.validate(), Ok(()));
    }
    for &key in &[3, 8] {
        assert!(tree.delete(&key));
        assert_eq!(tree.validate(), Ok(()));
    }
    let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec![1, 4, 5, 7, 9]);
}

#[test]
fn fill_and_drain() {
    init_logging();
    fn check<T: Iterator<Item = u32>>(insert_order: T, delete_order: Vec<u32>) {
        let mut tree = RedBlackTree::new();
        for key in insert_order {
            assert!(tree.insert(key, key as u64 * 3));
            assert_eq!(tree.validate(), Ok(()));
        }
        assert_ascending(&tree);
        assert_eq!(tree.len(), delete_order.len());

        for key in delete_order {
            assert_eq!(tree.find(&key), Some(&(key as u64 * 3)));
            assert!(tree.delete(&key));
            assert!(!tree.delete(&key));
            assert_eq!(tree.validate(), Ok(()));
        }
        assert!(tree.is_empty());
        assert_eq!(tree.iter().next(), None);
    }

    for &num in &[1, 2, 3, 10, 100, 1000] {
        let ascending: Vec<_> = SequentialKeys::new(num, SequentialOrder::Ascending).collect();
        let descending: Vec<_> = SequentialKeys::new(num, SequentialOrder::Descending).collect();
        let random: Vec<_> = RandomKeys::new(num, num as u64).collect();

        check(RandomKeys::new(num, 17), ascending.clone());
        check(RandomKeys::new(num, 17), descending.clone());
        check(RandomKeys::new(num, 17), random.clone());
        check(SequentialKeys::new(num, SequentialOrder::Ascending), random.clone());
        check(SequentialKeys::new(num, SequentialOrder::Descending), ascending);
        check(random.clone().into_iter(), descending);
    }
}

#[test]
fn matches_std_map() {
    init_logging();
    for seed in 0..8 {
        let mut tree = RedBlackTree::new();
        let mut oracle = BTreeMap::new();

        for (step, op) in Workload::new(2000, 64, seed).enumerate() {
            match op {
                Operation::Insert(key) => {
                    let expected = !oracle.contains_key(&key);
                    if expected {
                        oracle.insert(key, step);
                    }
                    assert_eq!(tree.insert(key, step), expected);
                }
                Operation::Delete(key) => {
                    assert_eq!(tree.remove(&key), oracle.remove(&key));
                }
                Operation::Find(key) => {
                    assert_eq!(tree.find(&key), oracle.get(&key));
                }
            }
            assert_eq!(tree.validate(), Ok(()));
            assert_eq!(tree.len(), oracle.len());
        }

        let entries: Vec<_> = tree.iter().collect();
        let expected: Vec<_> = oracle.iter().collect();
        assert_eq!(entries, expected);
    }
}

#[test]
fn duplicate_insert_leaves_tree_unchanged() {
    init_logging();
    let mut tree: RedBlackTree<u32, u32> = RandomKeys::new(200, 4).map(|k| (k, k)).collect();
    for key in RandomKeys::new(200, 5) {
        assert!(!tree.insert(key, 0));
        assert_eq!(tree.find(&key), Some(&key));
    }
    assert_eq!(tree.len(), 200);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn float_keys() {
    init_logging();
    let mut tree = RedBlackTree::new();
    for key in RandomFloatKeys::new(500, 9) {
        assert!(tree.insert(key, key.into_inner().to_string()));
    }
    assert_eq!(tree.validate(), Ok(()));
    assert_ascending(&tree);
    assert_eq!(
        tree.first().map(|(key, _)| *key),
        Some(OrderedFloat(-250. / 8.))
    );

    for key in RandomFloatKeys::new(500, 10).step_by(2) {
        assert!(tree.delete(&key));
    }
    assert_eq!(tree.len(), 250);
    assert_eq!(tree.validate(), Ok(()));
    assert_ascending(&tree);
}

#[test]
fn transfer_keeps_everything() {
    init_logging();
    let mut source: RedBlackTree<u32, ()> = RandomKeys::new(300, 8).map(|k| (k, ())).collect();
    let mut target = RedBlackTree::new();
    source.transfer_to(&mut target);

    assert_eq!(source.len(), 0);
    assert_eq!(target.len(), 300);
    assert_eq!(target.validate(), Ok(()));
    assert!(target.iter().map(|(k, _)| *k).eq(0..300));

    // Transfers can go back and forth
    target.transfer_to(&mut source);
    assert_eq!(source.len(), 300);
    assert!(target.is_empty());
}
