//! A closed choice between the ordered map realizations in this crate, see [`AnyOrderedMap`].

mod any_ordered_map;

pub use any_ordered_map::*;
