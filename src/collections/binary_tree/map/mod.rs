mod binary_tree_map;
mod iter;
mod node;
mod tests;

pub use binary_tree_map::*;
pub use iter::*;
pub(crate) use node::*;
