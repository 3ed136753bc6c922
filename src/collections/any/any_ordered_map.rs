use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, From, IsVariant};

use crate::collections::Entry;
use crate::collections::binary_tree::BinaryTreeMap;
use crate::collections::binary_tree::map::Iter as TreeIter;
use crate::collections::linked::SortedLinkedList;
use crate::collections::linked::list::Iter as ListIter;
use crate::collections::traits::OrderedMap;
use crate::util::error::DuplicateKey;

/// Selects which data structure backs an [`AnyOrderedMap`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Realization {
    /// A [`SortedLinkedList`], which additionally supports removing its smallest entry.
    #[display("sorted linked list")]
    Linked,
    /// A [`BinaryTreeMap`].
    #[display("binary tree")]
    Tree,
}

/// An ordered map whose backing data structure is picked when it is created.
///
/// Both variants implement [`OrderedMap`] themselves; this type only forwards to whichever one it
/// holds. Operations that only one realization supports are reached through
/// [`AnyOrderedMap::as_linked_mut`] and friends.
#[derive(Clone, PartialEq, Eq, From, IsVariant)]
pub enum AnyOrderedMap<K: Ord, V> {
    Linked(SortedLinkedList<K, V>),
    Tree(BinaryTreeMap<K, V>),
}

use AnyOrderedMap::*;

impl<K: Ord, V> AnyOrderedMap<K, V> {
    /// Creates an empty map backed by the provided `realization`.
    pub const fn new(realization: Realization) -> AnyOrderedMap<K, V> {
        match realization {
            Realization::Linked => Linked(SortedLinkedList::new()),
            Realization::Tree => Tree(BinaryTreeMap::new()),
        }
    }

    /// Returns which data structure backs this map.
    pub const fn realization(&self) -> Realization {
        match self {
            Linked(_) => Realization::Linked,
            Tree(_) => Realization::Tree,
        }
    }

    /// Returns the underlying list, if this map is backed by one.
    pub const fn as_linked(&self) -> Option<&SortedLinkedList<K, V>> {
        match self {
            Linked(list) => Some(list),
            Tree(_) => None,
        }
    }

    /// Returns the underlying list, if this map is backed by one. This is the only way to reach
    /// [`SortedLinkedList::pop_front`], since a tree can't remove entries.
    pub const fn as_linked_mut(&mut self) -> Option<&mut SortedLinkedList<K, V>> {
        match self {
            Linked(list) => Some(list),
            Tree(_) => None,
        }
    }

    /// Returns the underlying tree, if this map is backed by one.
    pub const fn as_tree(&self) -> Option<&BinaryTreeMap<K, V>> {
        match self {
            Linked(_) => None,
            Tree(tree) => Some(tree),
        }
    }

    /// Returns an iterator over the entries of the map, in ascending key order regardless of the
    /// realization.
    pub fn iter(&self) -> Iter<'_, K, V> {
        match self {
            Linked(list) => Iter::Linked(list.iter()),
            Tree(tree) => Iter::Tree(tree.iter()),
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> for AnyOrderedMap<K, V> {
    fn count(&self) -> usize {
        match self {
            Linked(list) => list.len(),
            Tree(tree) => tree.len(),
        }
    }

    fn try_add(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        match self {
            Linked(list) => list.try_add(key, value),
            Tree(tree) => tree.try_add(key, value),
        }
    }

    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Linked(list) => list.find(key),
            Tree(tree) => tree.find(key),
        }
    }
}

/// A borrowed iterator over the entries of an [`AnyOrderedMap`], in ascending key order.
pub enum Iter<'a, K: Ord, V> {
    Linked(ListIter<'a, K, V>),
    Tree(TreeIter<'a, K, V>),
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Iter::Linked(iter) => iter.next(),
            Iter::Tree(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Iter::Linked(iter) => iter.size_hint(),
            Iter::Tree(iter) => iter.size_hint(),
        }
    }
}

impl<'a, K: Ord, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K: Ord, V> IntoIterator for &'a AnyOrderedMap<K, V> {
    type Item = &'a Entry<K, V>;

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> Extend<(K, V)> for AnyOrderedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        match self {
            Linked(list) => list.extend(iter),
            Tree(tree) => tree.extend(iter),
        }
    }
}

impl<K: Ord + Debug, V: Debug> Debug for AnyOrderedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Linked(list) => f.debug_tuple("Linked").field(list).finish(),
            Tree(tree) => f.debug_tuple("Tree").field(tree).finish(),
        }
    }
}

impl<K: Ord + Debug, V: Debug> Display for AnyOrderedMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.realization())?;
        f.debug_map().entries(self.iter().map(Entry::tuple)).finish()
    }
}
