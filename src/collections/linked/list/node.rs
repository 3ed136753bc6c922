use std::ptr::NonNull;

use crate::collections::Entry;

pub(crate) type Link<K, V> = Option<NodePtr<K, V>>;

// NOTE: Nodes are allocated with Box<T> and leaked into a NonNull, so that the list can hand the
// allocation back to a Box when an entry is moved out or the list is dropped.

#[derive(Debug)]
pub(crate) struct NodePtr<K, V>(pub NonNull<Node<K, V>>);

impl<K, V> NodePtr<K, V> {
    pub fn entry<'a>(&self) -> &'a Entry<K, V> {
        // SAFETY: A NodePtr is only ever created from a live allocation, which stays valid until
        // the owning list takes or drops the node.
        unsafe { &(*self.0.as_ptr()).entry }
    }

    pub fn key<'a>(&self) -> &'a K
    where
        K: 'a,
        V: 'a,
    {
        &self.entry().key
    }

    pub fn prev<'a>(&self) -> &'a Link<K, V> {
        // SAFETY: See NodePtr::entry.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<K, V> {
        // SAFETY: See NodePtr::entry. Links are only modified by the owning list, which holds
        // &mut self while doing so.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<K, V> {
        // SAFETY: See NodePtr::entry.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<K, V> {
        // SAFETY: See NodePtr::prev_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<K, V>) -> NodePtr<K, V> {
        NodePtr(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of its allocation, freeing it.
    ///
    /// # Safety
    /// The node must not be reachable from any other link once taken, and must not be taken twice.
    pub unsafe fn take_node(self) -> Node<K, V> {
        // SAFETY: The pointer came from Box::leak in NodePtr::from_node, and the caller guarantees
        // that this is the only time the allocation is reclaimed.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<K, V> Clone for NodePtr<K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodePtr<K, V> {}

impl<K, V> PartialEq for NodePtr<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<K, V> {
    pub entry: Entry<K, V>,
    pub prev: Link<K, V>,
    pub next: Link<K, V>,
}
