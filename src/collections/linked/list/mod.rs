mod iter;
mod length;
mod node;
mod sorted_linked_list;

pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
pub use sorted_linked_list::*;
