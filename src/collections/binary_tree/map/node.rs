use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::Deref;

use crate::collections::Entry;
use crate::util::error::DuplicateKey;

pub(crate) struct Branch<K: Ord, V>(pub Option<Box<Node<K, V>>>);

pub(crate) struct Node<K: Ord, V> {
    pub left: Branch<K, V>,
    pub right: Branch<K, V>,
    pub entry: Entry<K, V>,
}

impl<K: Ord, V> Node<K, V> {
    pub const fn leaf(entry: Entry<K, V>) -> Node<K, V> {
        Node {
            left: Branch(None),
            right: Branch(None),
            entry,
        }
    }
}

// All walks down the tree are loops rather than recursion, because without balancing a tree built
// from sorted keys is as deep as it is long.
impl<K: Ord, V> Branch<K, V> {
    /// Attaches `entry` as a new leaf where a search for its key runs out of nodes. Greater keys
    /// route right, lesser keys route left and an equal key rejects the entry.
    pub fn insert(&mut self, entry: Entry<K, V>) -> Result<(), DuplicateKey<K, V>> {
        let mut branch = &mut self.0;

        while let Some(node) = branch {
            match entry.key.cmp(&node.entry.key) {
                Ordering::Less => branch = &mut node.left.0,
                Ordering::Greater => branch = &mut node.right.0,
                Ordering::Equal => return Err(DuplicateKey { entry }),
            }
        }

        *branch = Some(Box::new(Node::leaf(entry)));
        Ok(())
    }

    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut branch = self;

        while let Some(node) = &branch.0 {
            match key.cmp(node.entry.key.borrow()) {
                Ordering::Less => branch = &node.left,
                Ordering::Greater => branch = &node.right,
                Ordering::Equal => return Some(&node.entry),
            }
        }
        None
    }

    pub fn first_entry(&self) -> Option<&Entry<K, V>> {
        let mut node = self.0.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.entry)
    }

    pub fn last_entry(&self) -> Option<&Entry<K, V>> {
        let mut node = self.0.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.entry)
    }

    /// Returns the number of nodes on the longest path from this branch down to a leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = Vec::from_iter(self.as_deref().map(|node| (node, 1)));

        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Detaches the node at this branch along with its subtree.
    pub fn take(&mut self) -> Option<Box<Node<K, V>>> {
        mem::take(&mut self.0)
    }
}

impl<K: Ord + Clone, V: Clone> Clone for Branch<K, V> {
    fn clone(&self) -> Self {
        let mut cloned = Branch(None);
        let mut pending: Vec<(&Node<K, V>, &mut Option<Box<Node<K, V>>>)> = Vec::new();

        if let Some(root) = self.as_deref() {
            pending.push((root, &mut cloned.0));
        }

        // Each source node is copied straight into the matching empty slot, so the clone keeps the
        // source's shape without searching.
        while let Some((source, slot)) = pending.pop() {
            let node = slot.insert(Box::new(Node::leaf(source.entry.clone())));
            let Node { left, right, .. } = &mut **node;

            if let Some(child) = source.left.as_deref() {
                pending.push((child, &mut left.0));
            }
            if let Some(child) = source.right.as_deref() {
                pending.push((child, &mut right.0));
            }
        }
        cloned
    }
}

impl<K: Ord, V> Deref for Branch<K, V> {
    type Target = Option<Box<Node<K, V>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

const ABOVE: &str = "┌    ";
const BELOW: &str = "└    ";

enum DrawStep<'a, K: Ord, V> {
    Branch(&'a Branch<K, V>, Option<&'static str>),
    Entry(&'a Entry<K, V>),
}

// Draws the tree sideways: each left subtree above its parent and each right subtree below it,
// with empty branches shown as `-`.
impl<K: Ord + Debug, V: Debug> Debug for Branch<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // The prefix of the line being drawn. Every step remembers how much of it belongs to its
        // ancestors, which nothing drawn before that step can change.
        let mut prefix = String::new();
        let mut pending = vec![(DrawStep::Branch(self, None), 0)];
        let mut first_line = true;

        while let Some((step, depth)) = pending.pop() {
            prefix.truncate(depth);

            let line: &dyn Display = match step {
                DrawStep::Branch(branch, segment) => {
                    prefix.push_str(segment.unwrap_or_default());
                    match branch.as_deref() {
                        Some(node) => {
                            let depth = prefix.len();
                            pending.push((DrawStep::Branch(&node.right, Some(BELOW)), depth));
                            pending.push((DrawStep::Entry(&node.entry), depth));
                            pending.push((DrawStep::Branch(&node.left, Some(ABOVE)), depth));
                            continue;
                        },
                        None => &"-",
                    }
                },
                DrawStep::Entry(entry) => entry,
            };

            if !first_line {
                writeln!(f)?;
            }
            first_line = false;
            write!(f, "{prefix}{line}")?;
        }
        Ok(())
    }
}
