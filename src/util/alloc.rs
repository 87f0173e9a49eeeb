#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many instances of itself (including clones) are alive, so that tests
/// can check that shared and copied nodes release every value exactly once.
#[derive(Debug)]
pub struct Tracked {
    pub id: usize,
    live: Rc<Cell<usize>>,
}

#[derive(Debug, Default, Clone)]
pub struct LiveCounter(Rc<Cell<usize>>);

impl LiveCounter {
    pub fn new() -> LiveCounter {
        LiveCounter::default()
    }

    pub fn track(&self, id: usize) -> Tracked {
        self.0.set(self.0.get() + 1);
        Tracked {
            id,
            live: self.0.clone(),
        }
    }

    pub fn live(&self) -> usize {
        self.0.get()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.live.set(self.live.get() + 1);
        Tracked {
            id: self.id,
            live: self.live.clone(),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}
