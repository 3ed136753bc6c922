//! Ordered key-value collection types.
//!
//! # Purpose
//! Both maps here implement the same [`OrderedMap`](traits::OrderedMap) contract with a different
//! data structure underneath, to compare how each one handles ordering and ownership of its nodes.
//!
//! # Method
//! Entries are stored as [`Entry`] values which the maps own exclusively. Lookups hand out shared
//! references, and the only way to take an entry back out is to move it, so keys can never be
//! changed in a way that breaks the ordering of a map.

#[cfg(all(feature = "binary_tree", feature = "linked"))]
pub mod any;
#[cfg(feature = "binary_tree")]
pub mod binary_tree;
#[cfg(feature = "linked")]
pub mod linked;
pub mod traits;

mod entry;

pub use entry::*;
#[doc(inline)]
pub use crate::util::error::DuplicateKey;
