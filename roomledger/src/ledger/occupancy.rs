//! Ordered tree of occupied room numbers.
//!
//! An unbalanced binary search tree stored in an arena and addressed by
//! index. Inserting an existing key and removing a missing key are no-ops.
//! All walks are iterative, so a degenerate tree built from ascending
//! allocations cannot exhaust the stack.

use crate::room::RoomNumber;

#[cfg(test)]
mod proptests;

#[derive(Debug, Clone)]
struct Node {
    key: RoomNumber,
    left: Option<usize>,
    right: Option<usize>,
}

/// Where a subtree hangs from.
#[derive(Debug, Clone, Copy)]
enum Link {
    Root,
    Left(usize),
    Right(usize),
}

/// Binary search tree over occupied rooms.
///
/// # Examples
///
/// ```
/// use roomledger::ledger::OccupancyTree;
/// use roomledger::RoomNumber;
///
/// let mut tree = OccupancyTree::new();
/// for n in [240, 236, 301] {
///     tree.insert(RoomNumber::try_from(n).unwrap());
/// }
/// tree.remove(RoomNumber::try_from(240).unwrap());
///
/// let rooms: Vec<u32> = tree.in_order().iter().map(|r| r.value()).collect();
/// assert_eq!(rooms, vec![236, 301]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OccupancyTree {
    nodes: Vec<Node>,
    vacant: Vec<usize>,
    root: Option<usize>,
    len: usize,
}

impl OccupancyTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rooms in the tree.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no rooms are in the tree.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[cfg(test)]
    fn contains(&self, key: RoomNumber) -> bool {
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            cur = match key.cmp(&node.key) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
                std::cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: RoomNumber) -> bool {
        let mut link = Link::Root;
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            match key.cmp(&node.key) {
                std::cmp::Ordering::Less => {
                    link = Link::Left(i);
                    cur = node.left;
                }
                std::cmp::Ordering::Greater => {
                    link = Link::Right(i);
                    cur = node.right;
                }
                std::cmp::Ordering::Equal => return false,
            }
        }

        let node = Node {
            key,
            left: None,
            right: None,
        };
        let index = if let Some(slot) = self.vacant.pop() {
            self.nodes[slot] = node;
            slot
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        };

        self.set_link(link, Some(index));
        self.len += 1;
        true
    }

    /// Removes `key`. Returns `false` if it was absent.
    ///
    /// A node with two children takes its in-order successor's key, and the
    /// successor node is spliced out instead.
    pub fn remove(&mut self, key: RoomNumber) -> bool {
        let mut link = Link::Root;
        let mut cur = self.root;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            match key.cmp(&node.key) {
                std::cmp::Ordering::Less => {
                    link = Link::Left(i);
                    cur = node.left;
                }
                std::cmp::Ordering::Greater => {
                    link = Link::Right(i);
                    cur = node.right;
                }
                std::cmp::Ordering::Equal => break,
            }
        }

        let Some(target) = cur else {
            return false;
        };

        match (self.nodes[target].left, self.nodes[target].right) {
            (None, child) | (child, None) => {
                self.set_link(link, child);
                self.vacant.push(target);
            }
            (Some(_), Some(right)) => {
                let mut successor_link = Link::Right(target);
                let mut successor = right;
                while let Some(left) = self.nodes[successor].left {
                    successor_link = Link::Left(successor);
                    successor = left;
                }

                self.nodes[target].key = self.nodes[successor].key;
                let orphan = self.nodes[successor].right;
                self.set_link(successor_link, orphan);
                self.vacant.push(successor);
            }
        }

        self.len -= 1;
        true
    }

    /// Returns the rooms in ascending order.
    #[must_use]
    pub fn in_order(&self) -> Vec<RoomNumber> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut cur = self.root;

        loop {
            while let Some(i) = cur {
                stack.push(i);
                cur = self.nodes[i].left;
            }
            let Some(i) = stack.pop() else {
                break;
            };
            out.push(self.nodes[i].key);
            cur = self.nodes[i].right;
        }

        out
    }

    fn set_link(&mut self, link: Link, child: Option<usize>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.nodes[parent].left = child,
            Link::Right(parent) => self.nodes[parent].right = child,
        }
    }
}

// Arena layout depends on history; two trees are equal when they hold the
// same rooms.
impl PartialEq for OccupancyTree {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.in_order() == other.in_order()
    }
}

impl Eq for OccupancyTree {}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(n: u32) -> RoomNumber {
        RoomNumber::try_from(n).unwrap()
    }

    fn values(tree: &OccupancyTree) -> Vec<u32> {
        tree.in_order().iter().map(|r| r.value()).collect()
    }

    fn tree_of(keys: &[u32]) -> OccupancyTree {
        let mut tree = OccupancyTree::new();
        for &k in keys {
            tree.insert(room(k));
        }
        tree
    }

    #[test]
    fn test_empty() {
        let tree = OccupancyTree::new();
        assert!(tree.is_empty());
        assert!(tree.in_order().is_empty());
    }

    #[test]
    fn test_in_order_sorted() {
        let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80]);
        assert_eq!(values(&tree), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = tree_of(&[236]);
        assert!(!tree.insert(room(236)));
        assert_eq!(tree.len(), 1);
        assert_eq!(values(&tree), vec![236]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut tree = tree_of(&[1, 2]);
        assert!(!tree.remove(room(3)));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = tree_of(&[50, 30, 70]);
        assert!(tree.remove(room(30)));
        assert_eq!(values(&tree), vec![50, 70]);
    }

    #[test]
    fn test_remove_single_child() {
        let mut tree = tree_of(&[50, 30, 20]);
        assert!(tree.remove(room(30)));
        assert_eq!(values(&tree), vec![20, 50]);
    }

    #[test]
    fn test_remove_two_children_root() {
        let mut tree = tree_of(&[50, 30, 70, 60, 80, 65]);
        assert!(tree.remove(room(50)));
        assert_eq!(values(&tree), vec![30, 60, 65, 70, 80]);
        assert!(!tree.contains(room(50)));
        assert!(tree.contains(room(65)));
    }

    #[test]
    fn test_remove_two_children_successor_is_right_child() {
        let mut tree = tree_of(&[50, 30, 70, 80]);
        assert!(tree.remove(room(50)));
        assert_eq!(values(&tree), vec![30, 70, 80]);
    }

    #[test]
    fn test_slots_reused() {
        let mut tree = tree_of(&[1, 2, 3]);
        tree.remove(room(2));
        tree.insert(room(4));
        assert_eq!(tree.nodes.len(), 3);
        assert_eq!(values(&tree), vec![1, 3, 4]);
    }

    #[test]
    fn test_degenerate_chain() {
        let keys: Vec<u32> = (1..=20_000).collect();
        let mut tree = tree_of(&keys);
        assert_eq!(tree.len(), 20_000);
        for k in (1..=20_000).step_by(2) {
            assert!(tree.remove(room(k)));
        }
        assert_eq!(tree.in_order().first(), Some(&room(2)));
        assert_eq!(tree.len(), 10_000);
    }

    #[test]
    fn test_equality_ignores_layout() {
        let a = tree_of(&[1, 2, 3]);
        let b = tree_of(&[3, 1, 2]);
        assert_eq!(a, b);
    }
}
