use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{ListContents, ListState, SortedLinkedList};
use crate::collections::Entry;
use crate::util::option::OptionExtension;

impl<K, V> IntoIterator for SortedLinkedList<K, V> {
    type Item = Entry<K, V>;

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owning iterator over the entries of a [`SortedLinkedList`], in ascending key order.
pub struct IntoIter<K, V> {
    // The list already knows how to give up its smallest entry, so the iterator just drains it.
    pub(crate) list: SortedLinkedList<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, K, V> IntoIterator for &'a SortedLinkedList<K, V> {
    type Item = &'a Entry<K, V>;

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowed iterator over the entries of a [`SortedLinkedList`], in ascending key order.
pub struct Iter<'a, K, V> {
    // Although the fields are exactly the same as a list, this structure doesn't modify the
    // underlying nodes and uses len to track the number of entries left to yield.
    pub(crate) state: ListState<K, V>,
    pub(crate) _phantom: PhantomData<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let entry = head.entry();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one entry is left to yield, so the current head is
                        // followed by at least one more.
                        let new_head = unsafe { head.next().unreachable() };
                        *head = new_head;
                        // Never actually modify the node itself.
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(entry)
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let entry = tail.entry();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: More than one entry is left to yield, so the current tail is
                        // preceded by at least one more.
                        let new_tail = unsafe { tail.prev().unreachable() };
                        *tail = new_tail;
                        // Never actually modify the node itself.
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(entry)
            },
        }
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}
