//! Traits shared by the collection types of this crate.

mod map;

pub use map::*;
