//! General-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about each of the data structures themselves, but also concepts
//! such as reference counting, copy-on-write and iterators.

pub mod linked;
