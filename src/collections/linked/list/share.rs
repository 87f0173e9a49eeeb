use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Marks the group of list handles that may reference the same nodes.
///
/// Every [`LinkedList`](super::LinkedList) holds one. Cloning a list clones its token, while
/// copying the chain (or starting a new one) hands out a fresh token. Nodes are never moved between
/// chains with different tokens, so a token that isn't shared means that no other list can observe
/// any node in the chain and it's safe to rewrite links in place.
#[derive(Debug, Clone)]
pub(crate) struct ShareToken(Rc<()>);

impl ShareToken {
    pub fn new() -> ShareToken {
        ShareToken(Rc::new(()))
    }

    /// Returns true if no other list handle holds this token.
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.0) == 1
    }
}

/// Identifies a single list handle and counts the changes after which a position can no longer be
/// trusted to name a node in its chain: copying the chain, emptying it, or removing a node that
/// other lists still reference.
///
/// Unlike [`ShareToken`], this is never shared: a cloned list gets a generation of its own.
#[derive(Debug)]
pub(crate) struct Generation(Rc<Cell<u64>>);

impl Generation {
    pub fn new() -> Generation {
        Generation(Rc::new(Cell::new(0)))
    }

    /// Makes every [`Stamp`] taken so far out of date.
    pub fn bump(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }

    pub fn stamp(&self) -> Stamp {
        Stamp {
            handle: Rc::downgrade(&self.0),
            at: self.0.get(),
        }
    }
}

/// Records which list handle a position came from, and when.
///
/// The reference is weak so that positions never keep a handle alive, but the allocation it points
/// to can't be reused by another handle while the stamp exists.
#[derive(Debug, Clone)]
pub(crate) struct Stamp {
    handle: Weak<Cell<u64>>,
    at: u64,
}

impl Stamp {
    /// Returns true if this stamp was taken from `generation`, at any point.
    pub fn is_from(&self, generation: &Generation) -> bool {
        Weak::as_ptr(&self.handle) == Rc::as_ptr(&generation.0)
    }

    /// Returns true if this stamp was taken from `generation` and it hasn't been bumped since.
    pub fn is_current(&self, generation: &Generation) -> bool {
        self.is_from(generation) && self.at == generation.0.get()
    }
}
