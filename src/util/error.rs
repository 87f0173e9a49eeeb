use derive_more::{Display, Error};

#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("index {index} out of bounds for list with {len} elements")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

#[derive(Debug, Display, Error)]
#[display("list length overflowed usize")]
pub struct CapacityOverflow;
