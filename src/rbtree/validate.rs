use super::node::{Color, NodeId, Side};
use super::{RedBlackTree, MAX_HEIGHT};
use arrayvec::ArrayVec;
use thiserror::Error;

/// A broken tree invariant, as reported by `RedBlackTree::validate`.
/// Depths count from 1 at the root
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("the root is red")]
    RedRoot,
    #[error("the root has a parent")]
    RootWithParent,
    #[error("node at depth {depth} does not point back to its parent")]
    BrokenParentLink { depth: usize },
    #[error("key at depth {depth} is out of order")]
    OutOfOrder { depth: usize },
    #[error("red node at depth {depth} has a red child")]
    ConsecutiveRed { depth: usize },
    #[error("path ending below depth {depth} has {found} black nodes instead of {expected}")]
    UnevenBlackHeight {
        depth: usize,
        expected: usize,
        found: usize,
    },
    #[error("tree is taller than {limit} levels")]
    TooTall { limit: usize },
    #[error("tree records {recorded} entries but {reachable} are reachable")]
    CountMismatch { recorded: usize, reachable: usize },
}

/// A node waiting to be checked, with what its ancestors impose on it
struct Frame<'a, K> {
    id: NodeId,
    depth: usize,
    /// Black nodes above this one
    blacks: usize,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}

impl<K: Ord, I> RedBlackTree<K, I> {
    /// Check every structural invariant of the tree:
    /// 1. keys are ordered: all left descendants < node < all right descendants
    /// 2. the root is black
    /// 3. no red node has a red child
    /// 4. every path down to a nil leaf holds the same number of black nodes
    /// 5. the recorded length matches the reachable nodes
    ///
    /// Children must also point back to their parent. Nothing is repaired:
    /// the first problem found is returned. This is meant for tests and
    /// debugging, it visits the whole tree
    pub fn validate(&self) -> Result<(), Violation> {
        let mut reachable = 0;

        if let Some(root) = self.root {
            let node = &self.store[root];
            if node.color == Color::Red {
                return Err(Violation::RedRoot);
            }
            if node.parent.is_some() {
                return Err(Violation::RootWithParent);
            }

            let mut expected_blacks = None;
            // Depth-first: at most one pending sibling per level
            let mut stack = ArrayVec::<[Frame<K>; 2 * MAX_HEIGHT]>::new();
            stack.push(Frame {
                id: root,
                depth: 1,
                blacks: 0,
                lower: None,
                upper: None,
            });

            while let Some(frame) = stack.pop() {
                reachable += 1;
                let node = &self.store[frame.id];

                let above_lower = frame.lower.map_or(true, |lower| node.key > *lower);
                let below_upper = frame.upper.map_or(true, |upper| node.key < *upper);
                if !above_lower || !below_upper {
                    return Err(Violation::OutOfOrder { depth: frame.depth });
                }

                let blacks = frame.blacks
                    + match node.color {
                        Color::Black => 1,
                        Color::Red => 0,
                    };

                for &side in &[Side::Right, Side::Left] {
                    let child_id = match node.child(side) {
                        Some(child_id) => child_id,
                        None => {
                            // Reached a nil leaf: compare the black count of this path
                            match expected_blacks {
                                None => expected_blacks = Some(blacks),
                                Some(expected) if expected != blacks => {
                                    return Err(Violation::UnevenBlackHeight {
                                        depth: frame.depth,
                                        expected,
                                        found: blacks,
                                    })
                                }
                                Some(_) => {}
                            }
                            continue;
                        }
                    };

                    let child = &self.store[child_id];
                    if child.parent != Some(frame.id) {
                        return Err(Violation::BrokenParentLink {
                            depth: frame.depth + 1,
                        });
                    }
                    if node.color == Color::Red && child.color == Color::Red {
                        return Err(Violation::ConsecutiveRed { depth: frame.depth });
                    }
                    if frame.depth >= MAX_HEIGHT {
                        return Err(Violation::TooTall { limit: MAX_HEIGHT });
                    }

                    let (lower, upper) = match side {
                        Side::Left => (frame.lower, Some(&node.key)),
                        Side::Right => (Some(&node.key), frame.upper),
                    };
                    stack.push(Frame {
                        id: child_id,
                        depth: frame.depth + 1,
                        blacks,
                        lower,
                        upper,
                    });
                }
            }
        }

        if reachable != self.len {
            return Err(Violation::CountMismatch {
                recorded: self.len,
                reachable,
            });
        }
        Ok(())
    }
}
