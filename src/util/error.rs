use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::Entry;

/// The error returned when inserting a key which is already present in an ordered map.
///
/// Maps in this crate never overwrite an existing entry, so the rejected entry is handed back to
/// the caller instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey<K, V> {
    /// The entry that was refused.
    pub entry: Entry<K, V>,
}

impl<K, V> DuplicateKey<K, V> {
    /// Returns the rejected entry, consuming the error.
    pub fn into_entry(self) -> Entry<K, V> {
        self.entry
    }
}

impl<K, V> Display for DuplicateKey<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key is already present in the map, refusing to overwrite its entry!")
    }
}

impl<K: Debug, V: Debug> Error for DuplicateKey<K, V> {}
