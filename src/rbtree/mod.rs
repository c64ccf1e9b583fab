mod delete;
mod insert;
mod node;
mod rotate;
mod tree;
mod tree_iter;
mod validate;

pub use tree::RedBlackTree;
pub use tree_iter::{Iter, IterMut};
pub use validate::Violation;

// Node handles are u32, so a tree holds less than 2^32 nodes and a valid one
// is at most 2 * log2(n + 1) levels tall
const MAX_HEIGHT: usize = 64;
