use super::node::{NodeId, Side};
use super::RedBlackTree;
use log::trace;

impl<K, I> RedBlackTree<K, I> {
    /// Move `x` down to the left, promoting its right child
    pub(super) fn rotate_left(&mut self, x: NodeId) {
        self.rotate_towards(x, Side::Left);
    }

    /// Move `x` down to the right, promoting its left child
    pub(super) fn rotate_right(&mut self, x: NodeId) {
        self.rotate_towards(x, Side::Right);
    }

    /// Rotate `x` down towards `side`
    pub(super) fn rotate(&mut self, x: NodeId, side: Side) {
        match side {
            Side::Left => self.rotate_left(x),
            Side::Right => self.rotate_right(x),
        }
    }

    /// The child of `x` on the other side takes its place and hands its
    /// inner subtree over to `x`. Colors are left untouched
    fn rotate_towards(&mut self, x: NodeId, side: Side) {
        trace!("rotate {:?} {:?}", x, side);
        let promoted = self.store[x]
            .child(side.opposite())
            .expect("rotation needs a child to promote");

        let inner = self.store[promoted].child(side);
        self.store[x].set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.store[inner].parent = Some(x);
        }

        let parent = self.store[x].parent;
        self.store[promoted].parent = parent;
        self.replace_child(parent, x, Some(promoted));

        self.store[promoted].set_child(side, Some(x));
        self.store[x].parent = Some(promoted);
    }

    /// Redirect the link that pointed to `old`, either from `parent` or from
    /// the root when there is no parent, to `new`.
    /// The back-reference of `new` is the caller's business
    pub(super) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => {
                debug_assert_eq!(self.root, Some(old));
                self.root = new;
            }
            Some(parent) => {
                let side = self.store[parent].side_of(old);
                self.store[parent].set_child(side, new);
            }
        }
    }
}
