//! A red-black tree: an ordered map from unique keys to items with
//! logarithmic insertion, lookup and deletion.
//!
//! ```
//! use red_black_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for &key in &[5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key * 100);
//! }
//! tree.delete(&3);
//! tree.delete(&8);
//!
//! let keys: Vec<_> = tree.iter().map(|(key, _)| *key).collect();
//! assert_eq!(keys, vec![1, 4, 5, 7, 9]);
//! assert_eq!(tree.validate(), Ok(()));
//! ```
#[cfg(test)]
mod tests;

pub mod rbtree;

pub use rbtree::{Iter, IterMut, RedBlackTree, Violation};

#[cfg(any(test, feature = "key-generator"))]
pub mod key_generator;
