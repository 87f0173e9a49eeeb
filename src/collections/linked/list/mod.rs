mod algorithms;
mod iter;
mod length;
mod linked_list;
mod node;
mod position;
mod share;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
pub use position::*;
pub(crate) use share::*;
