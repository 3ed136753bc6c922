use std::iter::FusedIterator;

use super::{BinaryTreeMap, Branch, Node};
use crate::collections::Entry;

impl<K: Ord, V> IntoIterator for BinaryTreeMap<K, V> {
    type Item = Entry<K, V>;

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter {
            pending: Vec::new(),
            len: self.len,
        };
        iter.descend_left(self.root.take());
        iter
    }
}

/// An owning iterator over the entries of a [`BinaryTreeMap`], in ascending key order.
pub struct IntoIter<K: Ord, V> {
    // The nodes still to be yielded on the way back up the tree. Each has already had its left
    // subtree pushed above it, but still owns its right subtree.
    pending: Vec<Box<Node<K, V>>>,
    len: usize,
}

impl<K: Ord, V> IntoIter<K, V> {
    fn descend_left(&mut self, mut branch: Option<Box<Node<K, V>>>) {
        while let Some(mut node) = branch {
            branch = node.left.take();
            self.pending.push(node);
        }
    }
}

impl<K: Ord, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.pending.pop()?;
        self.descend_left(node.right.take());
        self.len -= 1;

        let Node { entry, .. } = *node;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K: Ord, V> FusedIterator for IntoIter<K, V> {}

impl<K: Ord, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Ord, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        // Same as BinaryTreeMap, avoid recursing through whatever is left of the tree.
        while let Some(mut node) = self.pending.pop() {
            self.pending.extend(node.left.take());
            self.pending.extend(node.right.take());
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a BinaryTreeMap<K, V> {
    type Item = &'a Entry<K, V>;

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let mut iter = Iter {
            pending: Vec::new(),
            len: self.len,
        };
        iter.descend_left(&self.root);
        iter
    }
}

/// A borrowed iterator over the entries of a [`BinaryTreeMap`], in ascending key order.
pub struct Iter<'a, K: Ord, V> {
    pending: Vec<&'a Node<K, V>>,
    len: usize,
}

impl<'a, K: Ord, V> Iter<'a, K, V> {
    fn descend_left(&mut self, mut branch: &'a Branch<K, V>) {
        while let Some(node) = branch.as_deref() {
            self.pending.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(&node.right);
        self.len -= 1;
        Some(&node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: Ord, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K: Ord, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K: Ord, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            pending: self.pending.clone(),
            len: self.len,
        }
    }
}
