//! This crate is a small collection of ordered maps, written to learn how linked and tree-shaped
//! data structures manage their own nodes.
//!
//! # Purpose
//! There are two maps, [`SortedLinkedList`](collections::linked::SortedLinkedList) and
//! [`BinaryTreeMap`](collections::binary_tree::BinaryTreeMap), which both implement
//! [`OrderedMap`](collections::traits::OrderedMap). Either one can be used directly, or picked at
//! runtime through [`AnyOrderedMap`](collections::any::AnyOrderedMap).
//!
//! Unlike most maps, these never overwrite an entry: adding a key which is already present is
//! refused, and the caller gets told about it.
//!
//! # Error Handling
//! Neither a missing key nor a duplicate one is exceptional here. Lookups return [`Option`]s and
//! [`add`](collections::traits::OrderedMap::add) returns a [`bool`]. When the rejected entry is
//! still wanted, [`try_add`](collections::traits::OrderedMap::try_add) returns a [`Result`] with a
//! [`DuplicateKey`](collections::DuplicateKey) error, which implements
//! [`Error`](std::error::Error) and hands the entry back.
//!
//! # Logging
//! Structural changes (insertions, refused duplicates and removals) are reported at the `trace`
//! level through the [`log`] facade. Nothing is printed unless the application installs a logger.
//!
//! # Dependencies
//! This crate depends on `log` for the above and on some derive macros from `derive_more`, because
//! they're helpful and remove the need for some very repetitive programming.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
