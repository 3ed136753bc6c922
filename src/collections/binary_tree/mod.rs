//! Binary tree collection types. Currently this is just [`BinaryTreeMap`], an ordered map stored
//! as an unbalanced binary search tree.

pub mod map;

#[doc(inline)]
pub use map::BinaryTreeMap;
