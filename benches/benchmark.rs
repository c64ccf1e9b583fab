#[macro_use]
extern crate criterion;
extern crate red_black_tree;

use criterion::{BenchmarkId, Criterion};
use red_black_tree::key_generator::*;
use red_black_tree::RedBlackTree;
use std::collections::BTreeMap;

pub fn insert_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let nums: Vec<usize> = vec![1_000, 10_000, 100_000];
    for num in nums {
        group.bench_with_input(BenchmarkId::new("Random", num), &num, |b, &num| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for key in RandomKeys::new(num, 17) {
                    tree.insert(key, ());
                }
                assert_eq!(tree.len(), num);
            })
        });
        group.bench_with_input(BenchmarkId::new("Sequential", num), &num, |b, &num| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for key in SequentialKeys::new(num, SequentialOrder::Ascending) {
                    tree.insert(key, ());
                }
                assert_eq!(tree.len(), num);
            })
        });
        group.bench_with_input(BenchmarkId::new("BTreeMap", num), &num, |b, &num| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for key in RandomKeys::new(num, 17) {
                    map.insert(key, ());
                }
                assert_eq!(map.len(), num);
            })
        });
    }
}

pub fn workload_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("workload");
    let nums: Vec<usize> = vec![1_000, 10_000, 100_000];
    for num in nums {
        let key_space = (num / 2) as u32;
        group.bench_with_input(BenchmarkId::new("RedBlackTree", num), &num, |b, &num| {
            b.iter(|| {
                let mut tree = RedBlackTree::new();
                for op in Workload::new(num, key_space, 17) {
                    match op {
                        Operation::Insert(key) => {
                            tree.insert(key, key);
                        }
                        Operation::Delete(key) => {
                            tree.delete(&key);
                        }
                        Operation::Find(key) => {
                            criterion::black_box(tree.find(&key));
                        }
                    }
                }
                tree
            })
        });
        group.bench_with_input(BenchmarkId::new("BTreeMap", num), &num, |b, &num| {
            b.iter(|| {
                let mut map = BTreeMap::new();
                for op in Workload::new(num, key_space, 17) {
                    match op {
                        Operation::Insert(key) => {
                            map.entry(key).or_insert(key);
                        }
                        Operation::Delete(key) => {
                            map.remove(&key);
                        }
                        Operation::Find(key) => {
                            criterion::black_box(map.get(&key));
                        }
                    }
                }
                map
            })
        });
    }
}

pub fn iter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    let nums: Vec<usize> = vec![1_000, 100_000];
    for num in nums {
        let tree: RedBlackTree<u32, u32> = RandomKeys::new(num, 17).map(|k| (k, k)).collect();
        group.bench_with_input(BenchmarkId::new("Sum", num), &tree, |b, tree| {
            b.iter(|| tree.iter().map(|(_, item)| *item as u64).sum::<u64>())
        });
        group.bench_with_input(BenchmarkId::new("Validate", num), &tree, |b, tree| {
            b.iter(|| tree.validate())
        });
    }
}

criterion_group!(benches, insert_benchmark, workload_benchmark, iter_benchmark);
criterion_main!(benches);
