use std::borrow::Borrow;
use std::iter::Sum;

use crate::collections::Entry;
use crate::util::error::DuplicateKey;

/// The shared contract of the ordered maps in this crate.
///
/// Implementors store unique keys, refusing to overwrite an entry when a key is inserted twice.
/// Neither a missing key nor a duplicate insertion is treated as exceptional: both are reported
/// through the return value.
pub trait OrderedMap<K: Ord, V> {
    /// Returns the number of entries in the map.
    fn count(&self) -> usize;

    /// Inserts a new entry for `key`, returning the rejected entry as an [`Err`] if the key is
    /// already present. The map isn't modified in the error case.
    fn try_add(&mut self, key: K, value: V) -> Result<(), DuplicateKey<K, V>>;

    /// Returns the entry stored for `key`, if there is one.
    fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Inserts a new entry for `key`, returning false if the key was already present, in which
    /// case the map is left unchanged.
    fn add(&mut self, key: K, value: V) -> bool {
        self.try_add(key, value).is_ok()
    }

    /// Returns true if the map contains no entries.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns true if there is an entry stored for `key`.
    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns the value stored for `key`, if there is one.
    fn get<'a, Q>(&'a self, key: &Q) -> Option<&'a V>
    where
        K: 'a + Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).map(Entry::value)
    }

    /// Returns true if every key yielded by `keys` is present in the map. Stops at the first
    /// missing key.
    fn contains_all<'a, Q, I>(&self, keys: I) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        keys.into_iter().all(|key| self.contains_key(key))
    }

    /// Sums the values stored for each key yielded by `keys`. Keys without an entry are skipped,
    /// contributing nothing to the total.
    fn sum_for_keys<'a, Q, I>(&self, keys: I) -> V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
        V: for<'v> Sum<&'v V>,
    {
        keys.into_iter()
            .filter_map(|key| self.get(key))
            .sum()
    }
}
