//! Linked collection types. Currently this is just [`SortedLinkedList`], an ordered map which keeps
//! its entries in a doubly-linked chain sorted by key.

pub mod list;

#[doc(inline)]
pub use list::SortedLinkedList;
