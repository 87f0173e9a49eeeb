use std::cell::{Cell, UnsafeCell};
use std::mem;
use std::rc::Rc;

pub(crate) type Link<T> = Option<Rc<Node<T>>>;

// NOTE: The link lives in an UnsafeCell because nodes are shared through Rc, so there is never a
// &mut Node available while it is part of a chain. The ShareToken of the owning list decides when
// writing to a link is allowed.

pub(crate) struct Node<T> {
    pub value: T,
    next: UnsafeCell<Link<T>>,
    detached: Cell<bool>,
}

impl<T> Node<T> {
    pub fn new(value: T, next: Link<T>) -> Rc<Node<T>> {
        Rc::new(Node {
            value,
            next: UnsafeCell::new(next),
            detached: Cell::new(false),
        })
    }

    /// Marks a node that has been unlinked from the only chain it was part of, so that positions
    /// still naming it can't link it back in.
    pub fn detach(&self) {
        self.detached.set(true);
    }

    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    pub fn next(&self) -> Option<&Rc<Node<T>>> {
        // SAFETY: Links are only written through set_next / take_next, whose callers guarantee that
        // no reference returned from here is alive at the time.
        unsafe { (*self.next.get()).as_ref() }
    }

    /// Replaces the successor of this node, returning the old one.
    ///
    /// # Safety
    /// The caller must ensure that this node isn't reachable from any list other than the one being
    /// mutated (that list's chain is exclusive) and that no reference obtained from [`Node::next`]
    /// on this node is still alive.
    pub unsafe fn set_next(&self, next: Link<T>) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe { mem::replace(&mut *self.next.get(), next) }
    }

    /// # Safety
    /// See [`Node::set_next`].
    pub unsafe fn take_next(&self) -> Link<T> {
        // SAFETY: Upheld by the caller.
        unsafe { self.set_next(None) }
    }

    /// Moves the value out if this is the last reference to the node, otherwise clones it.
    pub fn into_value(node: Rc<Node<T>>) -> T
    where
        T: Clone,
    {
        match Rc::try_unwrap(node) {
            Ok(mut node) => {
                Node::release(node.next.get_mut().take());
                node.value
            },
            Err(shared) => shared.value.clone(),
        }
    }

    /// Drops a chain one node at a time, stopping at the first node that is still referenced
    /// elsewhere. Letting the compiler drop a long chain would recurse once per node.
    pub fn release(mut link: Link<T>) {
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.get_mut().take(),
                Err(_) => break,
            }
        }
    }
}
