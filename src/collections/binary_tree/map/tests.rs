#![cfg(test)]

use std::fmt::{self, Write};
use std::iter;

use proptest::prelude::*;

use super::*;
use crate::collections::Entry;
use crate::collections::traits::OrderedMap;
use crate::util::alloc::CountedDrop;

#[test]
fn test_insertion_routing() {
    let mut map = BinaryTreeMap::new();
    for key in [50, 30, 70, 20, 40, 60, 80] {
        assert!(map.add(key, key * 10));
    }

    let root = map.root.as_deref().unwrap();
    assert_eq!(root.entry.key, 50, "The first key should stay at the root.");
    assert_eq!(root.left.as_deref().unwrap().entry.key, 30, "Smaller keys should route left.");
    assert_eq!(root.right.as_deref().unwrap().entry.key, 70, "Larger keys should route right.");
    assert_eq!(
        root.left.as_deref().unwrap().right.as_deref().unwrap().entry.key,
        40,
        "Routing should continue below the root."
    );
    assert_eq!(map.depth(), 3);
}

#[test]
fn test_duplicates_refused() {
    let mut map = BinaryTreeMap::new();
    assert!(map.add("b", 2));
    assert!(map.add("a", 1));
    assert!(!map.add("b", 20), "Adding a key which is already present should be refused.");
    assert!(!map.add("a", 10));

    assert_eq!(map.count(), 2);
    assert_eq!(map.get("b"), Some(&2), "A refused add shouldn't overwrite the existing value.");
    assert_eq!(map.try_add("a", 3).unwrap_err().into_entry(), Entry::new("a", 3));
}

#[test]
fn test_empty() {
    let map = BinaryTreeMap::<i32, i32>::new();
    assert_eq!(map.count(), 0);
    assert!(map.is_empty());
    assert_eq!(map.find(&7), None, "Finding in an empty map should give None.");
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.depth(), 0);
    assert_eq!(map.iter().next(), None);
}

#[test]
fn test_find() {
    let map = BinaryTreeMap::from_iter([(8, 'h'), (3, 'c'), (10, 'j'), (1, 'a'), (6, 'f')]);

    for (key, value) in [(8, 'h'), (3, 'c'), (10, 'j'), (1, 'a'), (6, 'f')] {
        assert_eq!(map.find(&key), Some(&Entry::new(key, value)));
    }
    for missing in [0, 2, 7, 9, 11] {
        assert_eq!(map.find(&missing), None, "Keys which were never added shouldn't be found.");
    }

    assert_eq!(map.first(), Some(&Entry::new(1, 'a')));
    assert_eq!(map.last(), Some(&Entry::new(10, 'j')));
}

#[test]
fn test_derived_operations() {
    let map = BinaryTreeMap::from_iter([(String::from("one"), 1), (String::from("three"), 3)]);

    assert_eq!(
        map.sum_for_keys(["three", "two"]),
        3,
        "Missing keys should contribute nothing to the sum."
    );
    assert!(map.contains_all(["one", "three"]));
    assert!(!map.contains_all(["two", "one"]));
    assert!(map.contains_all(iter::empty::<&str>()));
}

#[test]
fn test_sorted_input_degenerates() {
    let map = (0..10_000).map(|k| (k, ())).collect::<BinaryTreeMap<_, _>>();

    assert_eq!(map.depth(), 10_000, "Without balancing, sorted keys should form a single chain.");
    assert_eq!(map.find(&9_999), Some(&Entry::new(9_999, ())));
    assert!(map.iter().map(Entry::key).eq((0..10_000).collect::<Vec<i32>>().iter()));
    // Dropping a chain this long shouldn't overflow the stack.
    drop(map);
}

#[test]
fn test_iteration() {
    let map = BinaryTreeMap::from_iter([(4, "d"), (2, "b"), (6, "f"), (1, "a"), (3, "c"), (5, "e")]);

    assert_eq!(map.iter().len(), 6);
    assert_eq!(
        map.iter().map(|e| *e.key()).collect::<Vec<_>>(),
        [1, 2, 3, 4, 5, 6],
        "Borrowed iteration should be in ascending key order."
    );

    let mut into_iter = map.into_iter();
    assert_eq!(into_iter.next(), Some(Entry::new(1, "a")));
    assert_eq!(into_iter.len(), 5);
    assert_eq!(
        into_iter.map(Entry::into_tuple).collect::<Vec<_>>(),
        [(2, "b"), (3, "c"), (4, "d"), (5, "e"), (6, "f")],
        "Owned iteration should be in ascending key order."
    );
}

#[test]
fn test_clone_and_eq() {
    let map = BinaryTreeMap::from_iter([(2, 'b'), (1, 'a'), (3, 'c')]);
    let clone = map.clone();
    assert_eq!(map, clone);
    assert_eq!(clone.depth(), map.depth(), "Cloning should keep the shape of the tree.");

    let reshaped = BinaryTreeMap::from_iter([(1, 'a'), (2, 'b'), (3, 'c')]);
    assert_ne!(reshaped.depth(), map.depth());
    assert_eq!(map, reshaped, "Equality shouldn't depend on the shape of the tree.");

    let mut bigger = map.clone();
    bigger.add(4, 'd');
    assert_ne!(map, bigger);
}

#[test]
fn test_formatting() {
    let map = BinaryTreeMap::from_iter([(2, 'b'), (1, 'a'), (3, 'c')]);
    assert_eq!(format!("{map}"), "{1: 'a', 2: 'b', 3: 'c'}");
    assert_eq!(
        format!("{:?}", map.root),
        "┌    ┌    -\n┌    (1: 'a')\n┌    └    -\n(2: 'b')\n└    ┌    -\n└    (3: 'c')\n└    └    -"
    );
}

/// Counts the lines written to it without keeping them, since drawing a degenerate tree writes a
/// prefix as long as the tree is deep on every line.
#[derive(Default)]
struct LineCounter {
    lines: usize,
    last_line_len: usize,
}

impl Write for LineCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for (index, line) in s.split('\n').enumerate() {
            if index > 0 {
                self.lines += 1;
                self.last_line_len = 0;
            }
            self.last_line_len += line.len();
        }
        Ok(())
    }
}

#[test]
fn test_formatting_deep_tree() {
    let map = (0..10_000).map(|k| (k, ())).collect::<BinaryTreeMap<_, _>>();
    let mut counter = LineCounter::default();
    write!(counter, "{:?}", map.root).unwrap();

    // Each entry has its own line and an empty left branch above it, then the last entry has an
    // empty right branch too.
    assert_eq!(counter.lines + 1, 2 * 10_000 + 1, "Every node and empty branch should be drawn.");
    assert_eq!(
        counter.last_line_len,
        "└    ".len() * 10_000 + "-".len(),
        "The last line should be indented once per level."
    );
}

#[test]
fn test_clone_deep_tree() {
    let counter = CountedDrop::new(0);
    let mut map = (0..10_000).map(|k| (k, counter.clone())).collect::<BinaryTreeMap<_, _>>();
    for k in [-3, -1, -2, 10_002, 10_001] {
        map.add(k, counter.clone());
    }

    let clone = map.clone();
    assert_eq!(clone.len(), map.len());
    assert_eq!(clone.depth(), map.depth(), "Cloning should keep the shape of the tree.");
    assert!(map.iter().map(Entry::key).eq(clone.iter().map(Entry::key)));

    let small = BinaryTreeMap::from_iter([(4, 'd'), (2, 'b'), (6, 'f'), (1, 'a'), (5, 'e'), (7, 'g')]);
    assert_eq!(
        format!("{:?}", small.clone().root),
        format!("{:?}", small.root),
        "A clone should draw exactly like the source."
    );

    let before = counter.drops();
    drop(clone);
    assert_eq!(counter.drops() - before, 10_005, "Dropping a clone should drop each cloned entry once.");
}

#[test]
fn test_drops() {
    let counter = CountedDrop::new(0);
    let mut map = BinaryTreeMap::from_iter([5, 2, 8, 1, 9].into_iter().zip(iter::repeat_with(|| counter.clone())));

    drop(map.try_add(2, counter.clone()));
    assert_eq!(counter.drops(), 1, "Only the rejected entry should have been dropped.");

    let mut into_iter = map.into_iter();
    let first = into_iter.next();
    drop(into_iter);
    assert_eq!(counter.drops(), 5, "Dropping a partly used iterator should drop the rest.");
    drop(first);
    assert_eq!(counter.drops(), 6);
}

proptest! {
    #[test]
    fn prop_matches_sorted_unique_keys(pairs in prop::collection::vec((any::<i16>(), any::<u8>()), 0..200)) {
        let mut map = BinaryTreeMap::new();
        let mut added = 0;
        for (key, value) in pairs.iter().copied() {
            if map.add(key, value) {
                added += 1;
            }
        }

        let mut expected = pairs.iter().map(|(k, _)| *k).collect::<Vec<_>>();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(map.iter().map(|e| e.key).collect::<Vec<_>>(), expected);
        prop_assert_eq!(map.count(), added);
    }

    #[test]
    fn prop_first_occurrence_wins(pairs in prop::collection::vec((0..30_u8, any::<u32>()), 0..100)) {
        let map = pairs.iter().copied().collect::<BinaryTreeMap<_, _>>();
        for (key, _) in pairs.iter() {
            let first = pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v);
            prop_assert_eq!(map.get(key), first);
        }
    }

    #[test]
    fn prop_contains_all_matches_find(
        stored in prop::collection::vec(0..40_u16, 0..40),
        probe in prop::collection::vec(0..40_u16, 0..10)
    ) {
        let map = stored.iter().map(|k| (*k, 1_u32)).collect::<BinaryTreeMap<_, _>>();
        prop_assert_eq!(
            map.contains_all(&probe),
            probe.iter().all(|k| map.find(k).is_some())
        );
        prop_assert_eq!(
            map.sum_for_keys(&probe),
            probe.iter().filter(|k| stored.contains(*k)).count() as u32
        );
    }
}
