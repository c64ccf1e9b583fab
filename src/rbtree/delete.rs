use super::node::{Color, Node, NodeId, Side};
use super::RedBlackTree;
use arrayvec::ArrayVec;
use log::trace;

/// One step of the rebalancing that runs before a black node leaves the tree.
/// Every step carries the node whose paths are about to be one black short.
///
/// The steps are tried in declaration order: each one either finishes, hands
/// over to the next, or (for `BlackFamily`) restarts one level up
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(super) enum DeleteCase {
    /// Case 1: nothing to do at the root
    Root(NodeId),
    /// Case 2: turn a red sibling into a black one
    RedSibling(NodeId),
    /// Case 3: parent, sibling and nephews are black, push the deficit up
    BlackFamily(NodeId),
    /// Case 4: a red parent absorbs the deficit
    RedParent(NodeId),
    /// Case 5: rotate a red near nephew to the far side
    NearNephew(NodeId),
    /// Case 6: a red far nephew absorbs the deficit
    FarNephew(NodeId),
    Done,
}

impl<K: Ord, I> RedBlackTree<K, I> {
    /// Unlink a node from the tree, rebalance and release its storage
    pub(super) fn remove_node(&mut self, target: NodeId) -> Node<K, I> {
        if let (Some(left), Some(_)) = (self.store[target].left, self.store[target].right) {
            // Take over the place of the in-order predecessor, which has at
            // most one child
            let predecessor = self.store.rightmost(left);
            self.swap_nodes(target, predecessor);
        }

        let node = &self.store[target];
        debug_assert!(node.left.is_none() || node.right.is_none());
        let child = node.left.or(node.right);
        if node.color == Color::Black {
            match self.store.if_red(child) {
                Some(child) => self.store[child].color = Color::Black,
                None => self.fix_before_unlink(target),
            }
        }

        let parent = self.store[target].parent;
        if let Some(child) = child {
            self.store[child].parent = parent;
        }
        self.replace_child(parent, target, child);
        if let (None, Some(child)) = (parent, child) {
            self.store[child].color = Color::Black;
        }

        self.len -= 1;
        self.store.release(target)
    }
}

impl<K, I> RedBlackTree<K, I> {
    /// Exchange the places of two nodes in the tree: colors, parents,
    /// children and every link pointing back at them. Keys and items stay
    /// with their node, so handles keep naming the same entries
    pub(super) fn swap_nodes(&mut self, a: NodeId, b: NodeId) {
        trace!("swap {:?} <-> {:?}", a, b);
        let swap = |link: Option<NodeId>| {
            link.map(|id| {
                if id == a {
                    b
                } else if id == b {
                    a
                } else {
                    id
                }
            })
        };

        let Node {
            color: a_color,
            parent: a_parent,
            left: a_left,
            right: a_right,
            ..
        } = self.store[a];
        let Node {
            color: b_color,
            parent: b_parent,
            left: b_left,
            right: b_right,
            ..
        } = self.store[b];

        // Outside nodes linked to either of them
        let mut neighbours = ArrayVec::<[NodeId; 6]>::new();
        for &link in &[a_parent, a_left, a_right, b_parent, b_left, b_right] {
            if let Some(id) = link {
                if id != a && id != b && !neighbours.contains(&id) {
                    neighbours.push(id);
                }
            }
        }

        let node = &mut self.store[a];
        node.color = b_color;
        node.parent = swap(b_parent);
        node.left = swap(b_left);
        node.right = swap(b_right);

        let node = &mut self.store[b];
        node.color = a_color;
        node.parent = swap(a_parent);
        node.left = swap(a_left);
        node.right = swap(a_right);

        for id in neighbours {
            let node = &mut self.store[id];
            node.parent = swap(node.parent);
            node.left = swap(node.left);
            node.right = swap(node.right);
        }
        self.root = swap(self.root);
    }

    /// Rebalance around `n`, a black node without children that is about to
    /// be unlinked, so that its paths keep their black count afterwards
    pub(super) fn fix_before_unlink(&mut self, n: NodeId) {
        let mut step = DeleteCase::Root(n);
        while step != DeleteCase::Done {
            step = self.delete_case(step);
        }
    }

    /// Run one rebalancing step and return the next one
    pub(super) fn delete_case(&mut self, step: DeleteCase) -> DeleteCase {
        trace!("delete fixup: {:?}", step);
        match step {
            DeleteCase::Root(n) => self.delete_case_root(n),
            DeleteCase::RedSibling(n) => self.delete_case_red_sibling(n),
            DeleteCase::BlackFamily(n) => self.delete_case_black_family(n),
            DeleteCase::RedParent(n) => self.delete_case_red_parent(n),
            DeleteCase::NearNephew(n) => self.delete_case_near_nephew(n),
            DeleteCase::FarNephew(n) => self.delete_case_far_nephew(n),
            DeleteCase::Done => DeleteCase::Done,
        }
    }

    fn delete_case_root(&mut self, n: NodeId) -> DeleteCase {
        if self.store[n].parent.is_none() {
            DeleteCase::Done
        } else {
            DeleteCase::RedSibling(n)
        }
    }

    fn delete_case_red_sibling(&mut self, n: NodeId) -> DeleteCase {
        let (parent, side, sibling) = self.family(n);
        if self.store[sibling].color == Color::Red {
            self.store[parent].color = Color::Red;
            self.store[sibling].color = Color::Black;
            self.rotate(parent, side);
        }
        DeleteCase::BlackFamily(n)
    }

    fn delete_case_black_family(&mut self, n: NodeId) -> DeleteCase {
        let (parent, _, sibling) = self.family(n);
        if self.store[parent].color == Color::Black
            && self.store[sibling].color == Color::Black
            && !self.has_red_child(sibling)
        {
            self.store[sibling].color = Color::Red;
            DeleteCase::Root(parent)
        } else {
            DeleteCase::RedParent(n)
        }
    }

    fn delete_case_red_parent(&mut self, n: NodeId) -> DeleteCase {
        let (parent, _, sibling) = self.family(n);
        if self.store[parent].color == Color::Red
            && self.store[sibling].color == Color::Black
            && !self.has_red_child(sibling)
        {
            self.store[sibling].color = Color::Red;
            self.store[parent].color = Color::Black;
            DeleteCase::Done
        } else {
            DeleteCase::NearNephew(n)
        }
    }

    fn delete_case_near_nephew(&mut self, n: NodeId) -> DeleteCase {
        let (_, side, sibling) = self.family(n);
        let near = self.store[sibling].child(side);
        let far = self.store[sibling].child(side.opposite());
        if self.store[sibling].color == Color::Black && !self.store.is_red(far) {
            if let Some(near) = self.store.if_red(near) {
                self.store[sibling].color = Color::Red;
                self.store[near].color = Color::Black;
                self.rotate(sibling, side.opposite());
            }
        }
        DeleteCase::FarNephew(n)
    }

    fn delete_case_far_nephew(&mut self, n: NodeId) -> DeleteCase {
        let (parent, side, sibling) = self.family(n);
        let far = self.store[sibling]
            .child(side.opposite())
            .expect("far nephew must exist");
        debug_assert_eq!(self.store[far].color, Color::Red);

        self.store[sibling].color = self.store[parent].color;
        self.store[parent].color = Color::Black;
        self.store[far].color = Color::Black;
        self.rotate(parent, side);
        DeleteCase::Done
    }

    /// Parent of `n`, the side `n` hangs from it and its sibling.
    /// A node one black short always has a sibling: the other side of the
    /// parent carries at least one black node
    fn family(&self, n: NodeId) -> (NodeId, Side, NodeId) {
        let parent = self.store[n].parent.expect("root has no family");
        let side = self.store[parent].side_of(n);
        let sibling = self.store[parent]
            .child(side.opposite())
            .expect("node short of one black without sibling");
        (parent, side, sibling)
    }

    fn has_red_child(&self, id: NodeId) -> bool {
        let node = &self.store[id];
        self.store.is_red(node.left) || self.store.is_red(node.right)
    }
}
