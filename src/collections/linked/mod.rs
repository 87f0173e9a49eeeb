//! Linked collection types. Primarily revolves around [`LinkedList`] and its accompanying
//! [`Position`] type.

pub mod list;

#[doc(inline)]
pub use list::{LinkedList, Position};
