use std::num::NonZero;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// The number of nodes in a non-empty chain. Empty lists carry no contents at all, so a zero
/// length can't be represented.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

impl Length {
    pub const fn new(value: usize) -> Option<Length> {
        match NonZero::new(value) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Length after linking one more node.
    ///
    /// # Panics
    /// Panics if the length would overflow a `usize`.
    pub fn grow(self) -> Length {
        Length(self.0.checked_add(1).ok_or(CapacityOverflow).throw())
    }

    /// Length after unlinking one node, or `None` if that leaves the chain empty.
    pub const fn shrink(self) -> Option<Length> {
        Length::new(self.0.get() - 1)
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
