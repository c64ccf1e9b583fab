use super::node::{NodeId, NodeStore};
use super::RedBlackTree;

/// In-order cursor over the entries of a tree, in ascending key order.
///
/// The iterator borrows the tree, so the tree cannot be mutated while it is
/// alive: any structural change would leave the cursor pointing at a moved or
/// released node. To start over, create a new iterator
pub struct Iter<'a, K, I> {
    store: &'a NodeStore<K, I>,
    /// The node to return next
    next: Option<NodeId>,
    len: usize,
}

impl<'a, K, I> Iter<'a, K, I> {
    pub(super) fn new(tree: &'a RedBlackTree<K, I>) -> Self {
        Iter {
            store: &tree.store,
            next: tree.root.map(|root| tree.store.leftmost(root)),
            len: tree.len(),
        }
    }
}

impl<'a, K, I> Iterator for Iter<'a, K, I> {
    type Item = (&'a K, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let store = self.store;
        self.next = store.successor(current);
        self.len -= 1;
        let node = &store[current];
        Some((&node.key, &node.item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, I> ExactSizeIterator for Iter<'a, K, I> {}
impl<'a, K, I> std::iter::FusedIterator for Iter<'a, K, I> {}

impl<'a, K, I> Clone for Iter<'a, K, I> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            next: self.next,
            len: self.len,
        }
    }
}

/// In-order iterator handing out mutable items, in ascending key order.
/// Keys stay shared: changing one could break the tree order
pub struct IterMut<'a, K, I> {
    entries: std::vec::IntoIter<(&'a K, &'a mut I)>,
}

impl<'a, K, I> IterMut<'a, K, I> {
    pub(super) fn new(tree: &'a mut RedBlackTree<K, I>) -> Self {
        IterMut {
            entries: tree.store.entries_mut(tree.root).into_iter(),
        }
    }
}

impl<'a, K, I> Iterator for IterMut<'a, K, I> {
    type Item = (&'a K, &'a mut I);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<'a, K, I> ExactSizeIterator for IterMut<'a, K, I> {}
impl<'a, K, I> std::iter::FusedIterator for IterMut<'a, K, I> {}
