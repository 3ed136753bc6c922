use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use log::trace;

use super::{Branch, Iter};
use crate::collections::Entry;
use crate::collections::traits::OrderedMap;
use crate::util::error::DuplicateKey;
use crate::util::fmt::DebugRaw;

/// An ordered map backed by an unbalanced binary search tree.
///
/// Each node's left subtree holds strictly smaller keys and its right subtree strictly larger ones.
/// Like [`SortedLinkedList`](crate::collections::linked::SortedLinkedList), inserting a key which
/// is already present is refused rather than overwriting the existing entry. There is no way to
/// remove an entry from a BinaryTreeMap, other than consuming the whole map.
///
/// No balancing is performed, so the cost of `add` and `find` depends on the order keys were added
/// in: `O(log n)` for keys arriving in random order, degrading to `O(n)` for sorted input.
pub struct BinaryTreeMap<K: Ord, V> {
    pub(crate) root: Branch<K, V>,
    pub(crate) len: usize,
}

impl<K: Ord, V> BinaryTreeMap<K, V> {
    /// Creates an empty BinaryTreeMap.
    pub const fn new() -> BinaryTreeMap<K, V> {
        BinaryTreeMap {
            root: Branch(None),
            len: 0,
        }
    }

    /// Returns the number of entries in the map.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a new entry at the leaf position found by searching for `key`. Returns false
    /// without modifying the map if `key` is already present.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.try_add(key, value).is_ok()
    }

    /// Inserts a new entry at the leaf position found by searching for `key`. If `key` is already
    /// present, the map isn't modified and the rejected entry is returned as part of the [`Err`].
    pub fn try_add(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        if let Err(duplicate) = self.root.insert(Entry::new(key, value)) {
            trace!("BinaryTreeMap: rejected duplicate key, count stays at {}", self.len);
            return Err(duplicate);
        }

        self.len += 1;
        trace!("BinaryTreeMap: added entry, count is now {}", self.len);
        Ok(())
    }

    /// Returns the entry stored for `key` by walking down from the root, if there is one.
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.root.get_entry(key)
    }

    /// Returns the entry with the smallest key, if the map isn't empty.
    pub fn first(&self) -> Option<&Entry<K, V>> {
        self.root.first_entry()
    }

    /// Returns the entry with the largest key, if the map isn't empty.
    pub fn last(&self) -> Option<&Entry<K, V>> {
        self.root.last_entry()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, which is 0 for an
    /// empty map.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns an iterator over the entries of the map, in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Ord, V> OrderedMap<K, V> for BinaryTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_add(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        BinaryTreeMap::try_add(self, key, value)
    }

    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        BinaryTreeMap::find(self, key)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryTreeMap<K, V> {
    /// Collects the provided pairs into a new map. When a key occurs more than once, the first
    /// occurrence is kept.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BinaryTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for BinaryTreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Ord + Clone, V: Clone> Clone for BinaryTreeMap<K, V> {
    fn clone(&self) -> Self {
        BinaryTreeMap {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<K: Ord, V: PartialEq> PartialEq for BinaryTreeMap<K, V> {
    /// Two maps are equal if they hold the same entries, regardless of the shape of their trees.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Ord, V: Eq> Eq for BinaryTreeMap<K, V> {}

impl<K: Ord, V> Default for BinaryTreeMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Drop for BinaryTreeMap<K, V> {
    fn drop(&mut self) {
        // Dropping the root directly would recurse once per level of the tree.
        let mut pending = Vec::from_iter(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K: Ord + Debug, V: Debug> Debug for BinaryTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTreeMap")
            .field("nodes", &DebugRaw(format!("\n{:?}\n", &self.root)))
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Ord + Debug, V: Debug> Display for BinaryTreeMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(Entry::tuple)).finish()
    }
}
