use super::node::{Node, NodeId, NodeStore};
use super::tree_iter::{Iter, IterMut};
use log::debug;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// An ordered map from unique keys to items, kept balanced with the
/// red-black coloring rules.
///
/// Nodes live in an arena owned by the tree and are linked by handles.
/// Lookup, insertion and deletion take `O(log n)`; iteration visits the
/// entries in ascending key order.
///
/// ```
/// use red_black_tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// assert!(tree.insert(3, "three"));
/// assert!(tree.insert(1, "one"));
/// assert!(!tree.insert(3, "again"));
///
/// assert_eq!(tree.find(&3), Some(&"three"));
/// assert!(tree.delete(&1));
/// assert_eq!(tree.len(), 1);
/// assert_eq!(tree.validate(), Ok(()));
/// ```
#[derive(Clone)]
pub struct RedBlackTree<K, I> {
    pub(super) store: NodeStore<K, I>,
    pub(super) root: Option<NodeId>,
    pub(super) len: usize,
}

impl<K, I> RedBlackTree<K, I> {
    pub fn new() -> Self {
        RedBlackTree {
            store: NodeStore::new(),
            root: None,
            len: 0,
        }
    }

    /// Return the total number of entries in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a sorted iterator over the entries of the tree
    pub fn iter(&self) -> Iter<K, I> {
        Iter::new(self)
    }

    /// Iterate in key order with mutable access to the items
    pub fn iter_mut(&mut self) -> IterMut<K, I> {
        IterMut::new(self)
    }

    /// Entry with the smallest key
    pub fn first(&self) -> Option<(&K, &I)> {
        self.root.map(|root| self.entry(self.store.leftmost(root)))
    }

    /// Entry with the largest key
    pub fn last(&self) -> Option<(&K, &I)> {
        self.root.map(|root| self.entry(self.store.rightmost(root)))
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        debug!("clearing {} entries", self.len);
        self.store.clear();
        self.root = None;
        self.len = 0;
    }

    /// Move all the entries into `other`, leaving this tree empty.
    /// No node is touched: the whole arena changes hands.
    ///
    /// Panics if `other` is not empty
    pub fn transfer_to(&mut self, other: &mut Self) {
        assert!(
            other.root.is_none() && other.len == 0,
            "transfer destination holds {} entries",
            other.len
        );
        debug!("transferring {} entries", self.len);
        *other = std::mem::replace(self, RedBlackTree::new());
    }

    fn entry(&self, id: NodeId) -> (&K, &I) {
        let node = &self.store[id];
        (&node.key, &node.item)
    }
}

impl<K: Ord, I> RedBlackTree<K, I> {
    /// Descend from the root looking for `key`.
    /// Return `Ok` with the matching node, or `Err` with the last node visited,
    /// that is, the parent a new node for `key` would be attached to
    pub(super) fn search<Q>(&self, key: &Q) -> Result<NodeId, Option<NodeId>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut last = None;
        let mut next = self.root;
        while let Some(id) = next {
            let node = &self.store[id];
            last = Some(id);
            next = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Ok(id),
            };
        }
        Err(last)
    }

    pub(super) fn find_node<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).ok()
    }

    /// Return the item stored under `key`
    pub fn find<Q>(&self, key: &Q) -> Option<&I>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| &self.store[id].item)
    }

    /// Return the item stored under `key`, for in-place mutation
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut I>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find_node(key)?;
        Some(&mut self.store[id].item)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Insert `key` unless it is already present, by following these steps:
    /// 1. find where `key` would be attached
    /// 2. if it is absent, call `make_item` to build the item
    /// 3. link the new node and rebalance
    ///
    /// Return the freshly stored item, or `None` (without calling `make_item`)
    /// when the key already exists
    pub fn insert_with<F>(&mut self, key: K, make_item: F) -> Option<&mut I>
    where
        F: FnOnce() -> I,
    {
        let parent = match self.search(&key) {
            Ok(_) => return None,
            Err(parent) => parent,
        };
        let id = self.attach(parent, key, make_item());
        Some(&mut self.store[id].item)
    }

    /// Insert a new entry. Return `false` and leave the tree untouched if
    /// `key` is already present
    pub fn insert(&mut self, key: K, item: I) -> bool {
        self.insert_with(key, || item).is_some()
    }

    /// Remove the entry stored under `key` and return its item
    pub fn remove<Q>(&mut self, key: &Q) -> Option<I>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let id = self.find_node(key)?;
        let Node { item, .. } = self.remove_node(id);
        Some(item)
    }

    /// Remove the entry stored under `key`. Return `false` if it was absent
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove(key).is_some()
    }
}

impl<K, I> Default for RedBlackTree<K, I> {
    fn default() -> Self {
        RedBlackTree::new()
    }
}

impl<K: fmt::Debug, I: fmt::Debug> fmt::Debug for RedBlackTree<K, I> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, I> IntoIterator for &'a RedBlackTree<K, I> {
    type Item = (&'a K, &'a I);
    type IntoIter = Iter<'a, K, I>;

    fn into_iter(self) -> Iter<'a, K, I> {
        self.iter()
    }
}

impl<'a, K, I> IntoIterator for &'a mut RedBlackTree<K, I> {
    type Item = (&'a K, &'a mut I);
    type IntoIter = IterMut<'a, K, I>;

    fn into_iter(self) -> IterMut<'a, K, I> {
        self.iter_mut()
    }
}

impl<K: Ord, I> Extend<(K, I)> for RedBlackTree<K, I> {
    /// Insert every entry in turn. For a repeated key the first one wins
    fn extend<T: IntoIterator<Item = (K, I)>>(&mut self, iter: T) {
        for (key, item) in iter {
            self.insert(key, item);
        }
    }
}

impl<K: Ord, I> std::iter::FromIterator<(K, I)> for RedBlackTree<K, I> {
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

#[cfg(test)]
impl<K: fmt::Debug, I> RedBlackTree<K, I> {
    /// Compact picture of the shape, like `B2(R1,.)`: color, key and, for
    /// inner nodes, both children with `.` for nil
    pub(super) fn render(&self) -> String {
        use super::node::Color;

        fn render_node<K: fmt::Debug, I>(store: &NodeStore<K, I>, id: Option<NodeId>) -> String {
            match id {
                None => ".".to_string(),
                Some(id) => {
                    let node = &store[id];
                    let color = match node.color {
                        Color::Red => 'R',
                        Color::Black => 'B',
                    };
                    if node.left.is_none() && node.right.is_none() {
                        format!("{}{:?}", color, node.key)
                    } else {
                        format!(
                            "{}{:?}({},{})",
                            color,
                            node.key,
                            render_node(store, node.left),
                            render_node(store, node.right)
                        )
                    }
                }
            }
        }
        render_node(&self.store, self.root)
    }
}
