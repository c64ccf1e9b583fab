use super::node::{Color, Node, NodeId, Side};
use super::RedBlackTree;
use log::trace;

impl<K: Ord, I> RedBlackTree<K, I> {
    /// Link a new node below `parent`, or as the root when there is none,
    /// then restore the coloring rules. Return the handle of the new node.
    ///
    /// `parent` must be the result of a failed search for `key`
    pub(super) fn attach(&mut self, parent: Option<NodeId>, key: K, item: I) -> NodeId {
        let id = match parent {
            None => {
                debug_assert!(self.root.is_none() && self.len == 0);
                let id = self.store.allocate(Node::new(key, item, Color::Black, None));
                self.root = Some(id);
                id
            }
            Some(parent) => {
                let side = if key < self.store[parent].key {
                    Side::Left
                } else {
                    Side::Right
                };
                debug_assert!(self.store[parent].child(side).is_none());
                let id = self
                    .store
                    .allocate(Node::new(key, item, Color::Red, Some(parent)));
                self.store[parent].set_child(side, Some(id));
                self.fix_after_insert(id);
                id
            }
        };
        self.len += 1;
        id
    }

    /// Walk up from a new red node until no red node has a red parent
    fn fix_after_insert(&mut self, mut n: NodeId) {
        while let Some(parent) = self.store[n].parent {
            if self.store[parent].color == Color::Black {
                break;
            }

            // A red node is never the root, so there is a grandparent
            let grandparent = self.store[parent]
                .parent
                .expect("red node without parent");
            let side = self.store[grandparent].side_of(parent);
            let uncle = self.store[grandparent].child(side.opposite());

            match self.store.if_red(uncle) {
                Some(uncle) => {
                    trace!("insert fixup: recolor below {:?}", grandparent);
                    self.store[parent].color = Color::Black;
                    self.store[uncle].color = Color::Black;
                    self.store[grandparent].color = Color::Red;
                    n = grandparent;
                }
                None => {
                    trace!("insert fixup: rotate at {:?}", grandparent);
                    let mut parent = parent;
                    if self.store[parent].child(side.opposite()) == Some(n) {
                        // Inner child: turn it into an outer one first
                        self.rotate(parent, side);
                        parent = n;
                    }
                    self.store[parent].color = Color::Black;
                    self.store[grandparent].color = Color::Red;
                    self.rotate(grandparent, side.opposite());
                    break;
                }
            }
        }

        if let Some(root) = self.root {
            self.store[root].color = Color::Black;
        }
    }
}
