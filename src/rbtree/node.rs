use std::ops::{Index, IndexMut};

/// Stable handle to a node slot inside a `NodeStore`.
/// A handle stays valid until the node it names is released
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(super) struct NodeId(u32);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(super) enum Color {
    Red,
    Black,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(super) enum Side {
    Left,
    Right,
}

impl Side {
    pub(super) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// `left` and `right` own their subtrees; `parent` is only a back-reference
/// used to walk up during rebalancing and iteration
#[derive(Clone)]
pub(super) struct Node<K, I> {
    pub(super) color: Color,
    pub(super) parent: Option<NodeId>,
    pub(super) left: Option<NodeId>,
    pub(super) right: Option<NodeId>,
    pub(super) key: K,
    pub(super) item: I,
}

impl<K, I> Node<K, I> {
    /// Build an unlinked node
    pub(super) fn new(key: K, item: I, color: Color, parent: Option<NodeId>) -> Self {
        Node {
            color,
            parent,
            left: None,
            right: None,
            key,
            item,
        }
    }

    pub(super) fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(super) fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    /// Return on which side `child` hangs from this node.
    /// It is a logical error to pass a node that is not a child of this one
    pub(super) fn side_of(&self, child: NodeId) -> Side {
        if self.left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.right, Some(child), "{:?} is not a child", child);
            Side::Right
        }
    }
}

#[derive(Clone)]
enum Slot<K, I> {
    Occupied(Node<K, I>),
    /// Free slot, linking to the next free one
    Vacant(Option<NodeId>),
}

/// Arena owning the storage of every node of a tree.
/// Released slots are recycled before the arena grows
#[derive(Clone)]
pub(super) struct NodeStore<K, I> {
    slots: Vec<Slot<K, I>>,
    free: Option<NodeId>,
}

impl<K, I> NodeStore<K, I> {
    pub(super) fn new() -> Self {
        NodeStore {
            slots: Vec::new(),
            free: None,
        }
    }

    /// Obtain storage for one node and move it there
    pub(super) fn allocate(&mut self, node: Node<K, I>) -> NodeId {
        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.0 as usize];
                self.free = match slot {
                    Slot::Vacant(next) => *next,
                    Slot::Occupied(_) => panic!("free list points to live node {:?}", id),
                };
                *slot = Slot::Occupied(node);
                id
            }
            None => {
                assert!(
                    self.slots.len() < u32::MAX as usize,
                    "node store is full"
                );
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Release the storage of one node, handing back its contents.
    /// Panics if the slot is already free
    pub(super) fn release(&mut self, id: NodeId) -> Node<K, I> {
        let slot = std::mem::replace(&mut self.slots[id.0 as usize], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node
            }
            Slot::Vacant(_) => panic!("double release of {:?}", id),
        }
    }

    /// Release every node at once
    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    /// Color of a possibly nil position: nil leaves count as black
    pub(super) fn color_of(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self[id].color)
    }

    pub(super) fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color_of(id) == Color::Red
    }

    /// Keep the handle only if it names a red node
    pub(super) fn if_red(&self, id: Option<NodeId>) -> Option<NodeId> {
        id.filter(|&id| self[id].color == Color::Red)
    }

    /// Follow left links down to the minimum of the subtree
    pub(super) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Follow right links down to the maximum of the subtree
    pub(super) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }

    /// Return the next node in key order
    pub(super) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self[id].right {
            return Some(self.leftmost(right));
        }

        // Climb until we come up from a left child
        let mut current = id;
        while let Some(parent) = self[current].parent {
            if self[parent].left == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// Borrow every entry reachable from `root`, keys shared and items
    /// mutable, in key order. Each slot is borrowed once while walking the
    /// arena, ranked by its in-order position
    pub(super) fn entries_mut(&mut self, root: Option<NodeId>) -> Vec<(&K, &mut I)> {
        const UNREACHABLE: usize = usize::MAX;
        let mut ranks = vec![UNREACHABLE; self.slots.len()];
        let mut count = 0;
        let mut next = root.map(|root| self.leftmost(root));
        while let Some(id) = next {
            ranks[id.0 as usize] = count;
            count += 1;
            next = self.successor(id);
        }

        let mut entries: Vec<Option<(&K, &mut I)>> = (0..count).map(|_| None).collect();
        for (slot, &rank) in self.slots.iter_mut().zip(&ranks) {
            if rank == UNREACHABLE {
                continue;
            }
            if let Slot::Occupied(node) = slot {
                entries[rank] = Some((&node.key, &mut node.item));
            }
        }
        entries.into_iter().flatten().collect()
    }
}

impl<K, I> Index<NodeId> for NodeStore<K, I> {
    type Output = Node<K, I>;

    /// Panics if the handle names a released slot
    fn index(&self, id: NodeId) -> &Node<K, I> {
        match &self.slots[id.0 as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling node handle {:?}", id),
        }
    }
}

impl<K, I> IndexMut<NodeId> for NodeStore<K, I> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<K, I> {
        match &mut self.slots[id.0 as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling node handle {:?}", id),
        }
    }
}
