use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use derive_more::IsVariant;
use log::trace;

use super::{Iter, Length, Node, NodePtr, ONE};
use crate::collections::Entry;
use crate::collections::traits::OrderedMap;
use crate::util::error::DuplicateKey;
use crate::util::option::OptionExtension;

/// An ordered map backed by a list with links in both directions, which keeps its entries sorted
/// by key at all times.
///
/// Keys are unique, and inserting a key which is already present is refused rather than
/// overwriting the existing entry. Entries can only be removed from the front of the list (the
/// smallest key) via [`SortedLinkedList::pop_front`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SortedLinkedList.
/// - `i`: The position the key in question has (or would have) in the list.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `add` | `O(i)` |
/// | `find` | `O(i)` |
///
/// Because entries are kept in order, both insertion and lookup can stop as soon as they pass the
/// position a key would occupy, but they still walk the list from the front every time.
pub struct SortedLinkedList<K, V> {
    pub(crate) state: ListState<K, V>,
    pub(crate) _phantom: PhantomData<Entry<K, V>>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<K, V> {
    Empty,
    Full(ListContents<K, V>),
}

use ListState::*;

pub(crate) struct ListContents<K, V> {
    pub len: Length,
    pub head: NodePtr<K, V>,
    pub tail: NodePtr<K, V>,
}

impl<K, V> SortedLinkedList<K, V> {
    /// Creates a new SortedLinkedList with no entries.
    pub const fn new() -> SortedLinkedList<K, V> {
        SortedLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of entries in the SortedLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SortedLinkedList contains no entries.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the entry with the smallest key, if the list isn't empty.
    pub fn first(&self) -> Option<&Entry<K, V>> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.entry()),
        }
    }

    /// Returns a reference to the entry with the largest key, if the list isn't empty.
    pub fn last(&self) -> Option<&Entry<K, V>> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.entry()),
        }
    }

    /// Removes the entry with the smallest key and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<Entry<K, V>> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The old head is unlinked below, and nothing else refers to it.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first entry is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unreachable() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                trace!("SortedLinkedList: popped front entry, count is now {}", self.len());
                Some(node.entry)
            },
        }
    }

    /// Returns an iterator over the entries of the list, from front to back.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Appends an entry without checking its key against the rest of the list. Only used when the
    /// entries are known to arrive in ascending order, e.g. while cloning.
    fn push_back_unchecked(&mut self, entry: Entry<K, V>) {
        match &mut self.state {
            Empty => self.state = ListState::single(entry),
            Full(contents) => contents.push_back(entry),
        }
    }
}

impl<K: Ord, V> SortedLinkedList<K, V> {
    /// Inserts a new entry, keeping the list sorted by key. Returns false without modifying the
    /// list if `key` is already present.
    pub fn add(&mut self, key: K, value: V) -> bool {
        self.try_add(key, value).is_ok()
    }

    /// Inserts a new entry, keeping the list sorted by key. If `key` is already present, the list
    /// isn't modified and the rejected entry is returned as part of the [`Err`].
    pub fn try_add(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        let entry = Entry::new(key, value);

        match &mut self.state {
            Empty => self.state = ListState::single(entry),
            Full(contents) => if let Err(duplicate) = contents.insert_sorted(entry) {
                trace!(
                    "SortedLinkedList: rejected duplicate key, count stays at {}",
                    contents.len.get()
                );
                return Err(duplicate);
            },
        }

        trace!("SortedLinkedList: added entry, count is now {}", self.len());
        Ok(())
    }

    /// Returns a reference to the entry stored for `key`, if there is one.
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        };

        while let Some(node) = curr {
            match key.cmp(node.key().borrow()) {
                Ordering::Greater => curr = *node.next(),
                Ordering::Equal => return Some(node.entry()),
                // Every following key is larger still.
                Ordering::Less => return None,
            }
        }
        None
    }

    /// Walks the whole list, asserting that every node is linked back to its predecessor, that
    /// keys strictly ascend and that the stored length matches the number of nodes.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a predecessor.");

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    assert!(*next.prev() == Some(curr), "Each node should link back to its predecessor.");
                    assert!(curr.key() < next.key(), "Keys should be in strictly ascending order.");
                    curr = *next;
                    count += 1;
                }

                assert!(tail == curr, "The tail should be the last node reachable from the head.");
                assert_eq!(count, len.get(), "The stored length should match the number of nodes.");
            },
        }
    }
}

impl<K: Ord, V> ListContents<K, V> {
    /// Splices `entry` in before the first node whose key isn't less than its own.
    pub fn insert_sorted(&mut self, entry: Entry<K, V>) -> Result<(), DuplicateKey<K, V>> {
        let mut curr = Some(self.head);

        while let Some(node) = curr {
            match entry.key.cmp(node.key()) {
                Ordering::Greater => curr = *node.next(),
                Ordering::Equal => return Err(DuplicateKey { entry }),
                Ordering::Less => break,
            }
        }

        match curr {
            None => self.push_back(entry),
            Some(node) if node == self.head => self.push_front(entry),
            Some(node) => self.insert_before(node, entry),
        }
        Ok(())
    }
}

impl<K, V> ListContents<K, V> {
    fn increment_len(&mut self) {
        // SAFETY: Every entry lives in its own allocation of non-zero size, so memory runs out well
        // before the number of nodes could overflow a usize.
        self.len = unsafe { self.len.checked_add(1).unreachable() };
    }

    pub fn push_front(&mut self, entry: Entry<K, V>) {
        self.increment_len();

        let node = NodePtr::from_node(Node {
            entry,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, entry: Entry<K, V>) {
        self.increment_len();

        let node = NodePtr::from_node(Node {
            entry,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Links a new node between `next_node` and its predecessor. `next_node` must not be the head.
    pub fn insert_before(&mut self, next_node: NodePtr<K, V>, entry: Entry<K, V>) {
        // SAFETY: next_node isn't the head, so it is preceded by at least one more node.
        let prev_node = unsafe { next_node.prev().unreachable() };

        self.increment_len();

        let node = NodePtr::from_node(Node {
            entry,
            prev: Some(prev_node),
            next: Some(next_node),
        });

        *prev_node.next_mut() = Some(node);
        *next_node.prev_mut() = Some(node);
    }

    pub fn wrap_one(entry: Entry<K, V>) -> ListContents<K, V> {
        let node = NodePtr::from_node(Node {
            entry,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }
}

impl<K, V> ListState<K, V> {
    pub fn single(entry: Entry<K, V>) -> ListState<K, V> {
        Full(ListContents::wrap_one(entry))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<K, V> Clone for ListContents<K, V> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<K, V> Clone for ListState<K, V> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<K: Ord, V> OrderedMap<K, V> for SortedLinkedList<K, V> {
    fn count(&self) -> usize {
        self.len()
    }

    fn try_add(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>> {
        SortedLinkedList::try_add(self, key, value)
    }

    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        SortedLinkedList::find(self, key)
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedLinkedList<K, V> {
    /// Collects the provided pairs into a new list. When a key occurs more than once, the first
    /// occurrence is kept.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = SortedLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<K: Ord, V> Extend<(K, V)> for SortedLinkedList<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Clone, V: Clone> Clone for SortedLinkedList<K, V> {
    fn clone(&self) -> Self {
        let mut list = SortedLinkedList::new();
        for entry in self.iter() {
            list.push_back_unchecked(entry.clone());
        }
        list
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for SortedLinkedList<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for SortedLinkedList<K, V> {}

impl<K, V> Default for SortedLinkedList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for SortedLinkedList<K, V> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    curr = *ptr.next();
                    // SAFETY: Each node is visited once, and the list is never used again.
                    drop(unsafe { ptr.take_node() });
                }
            },
        }
    }
}

impl<K: Debug, V: Debug> Debug for SortedLinkedList<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedLinkedList")
            .field("entries", &self.iter().map(Entry::tuple).collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for SortedLinkedList<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "()");
        }

        for (index, entry) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
