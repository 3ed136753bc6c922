use std::fmt::{self, Debug, Display, Formatter};

use derive_more::From;

/// A key-value pair stored inside one of the ordered maps.
///
/// Entries are only ever handed out as shared references while they live in a map, so the key of
/// a stored entry can't be changed in a way that breaks the map's ordering. Once an entry has been
/// moved out (e.g. by [`SortedLinkedList::pop_front`](crate::collections::linked::SortedLinkedList::pop_front)),
/// it can be taken apart with [`Entry::into_tuple`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new Entry from the provided `key` and `value`.
    pub const fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    /// Returns a reference to the key of this Entry.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value of this Entry.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns references to both the key and the value, as a tuple.
    pub const fn tuple(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Consumes the Entry, returning the owned key and value.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Debug, V: Debug> Display for Entry<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}: {:?})", self.key, self.value)
    }
}
