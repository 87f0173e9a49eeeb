use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Index;
use std::rc::Rc;

use derive_more::IsVariant;

use super::{Generation, Iter, Length, Link, Node, ONE, Position, ShareToken};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A singly linked list with value semantics. Cloning a list is `O(1)`: both lists share the same
/// nodes until one of them is mutated in a way that another could observe, at which point that list
/// copies its nodes (copy-on-write).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Exclusive | Shared |
/// |-|-|-|
/// | `clone` | `O(1)` | `O(1)` |
/// | `len` | `O(1)` | `O(1)` |
/// | `front/back` | `O(1)` | `O(1)` |
/// | `push` | `O(1)` | `O(1)` |
/// | `pop` | `O(1)` | `O(1)` |
/// | `append` | `O(1)` | `O(n)` |
/// | `insert_after` | `O(1)` | `O(n)` |
/// | `remove_after` | `O(1)` | `O(n)` |
/// | `remove_last` | `O(n)` | `O(n)` |
/// | `node_at/get` | `O(i)` | `O(i)` |
/// | `contains` | `O(n)` | `O(n)` |
///
/// A list is shared from the moment it is cloned until either side copies its nodes or is dropped.
/// [`push`](LinkedList::push) and [`pop`](LinkedList::pop) never copy, because they only move the
/// head and never change a node that another list could be reading.
///
/// # Positions
/// [`Position`]s name a node in a list and are used to insert or remove in the middle of it. A
/// position belongs to the list handle that produced it and is only accepted by that handle, for as
/// long as the node it names is still part of the list. Positions naming a removed node, or taken
/// before the list copied its nodes, are rejected by returning [`None`].
///
/// Using a position is `O(1)` until the list copies its nodes, is emptied, or pops a node that it
/// shares with a clone. After that, the list walks its nodes once per use to check that the
/// position's node is still among them.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) owner: ShareToken,
    pub(crate) generation: Generation,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: Rc<Node<T>>,
    pub tail: Rc<Node<T>>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            owner: ShareToken::new(),
            generation: Generation::new(),
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns true if the LinkedList contains no elements.
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns true if no other list shares this list's nodes, meaning that the next mutation won't
    /// need to copy anything.
    pub fn is_unique(&self) -> bool {
        self.owner.is_unique()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(&head.value),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(&tail.value),
        }
    }

    /// Adds the provided element to the front of the LinkedList. This never copies any nodes, even
    /// if they are shared, because the new node is only visible to this list.
    pub fn push(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => {
                contents.len = contents.len.grow();
                contents.head = Node::new(value, Some(contents.head.clone()));
            },
        }
    }

    /// Returns a position naming the node at `index`, or [`None`] if `index` is out of bounds.
    pub fn node_at(&self, index: usize) -> Option<Position<T>> {
        self.seek(index).map(|node| self.position(Some(node.clone())))
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        match self.seek(index) {
            Some(node) => Ok(&node.value),
            None => Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// Returns the position of the first node, which is the end position if the list is empty.
    pub fn start(&self) -> Position<T> {
        match &self.state {
            Empty => self.end(),
            Full(ListContents { head, .. }) => self.position(Some(head.clone())),
        }
    }

    /// Returns the position after the last node.
    pub fn end(&self) -> Position<T> {
        self.position(None)
    }

    /// Removes all elements from the list. Other lists sharing the nodes are unaffected.
    pub fn clear(&mut self) {
        if let Some(contents) = self.take_contents() {
            Node::release(Some(contents.into_head()));
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Adds the provided element to the back of the LinkedList, copying the list's nodes first if
    /// they are shared.
    pub fn append(&mut self, value: T) {
        self.make_unique();
        match &mut self.state {
            Empty => self.push(value),
            // SAFETY: make_unique has just made the chain exclusive to this list.
            Full(contents) => unsafe { contents.link_back(value) },
        }
    }

    /// Inserts `value` directly after the node named by `target`, returning the position of the new
    /// node.
    ///
    /// Returns [`None`] without changing the list if `target` is the end position or doesn't name a
    /// node in this list.
    pub fn insert_after(&mut self, target: &Position<T>, value: T) -> Option<Position<T>> {
        let node = self.resolve(target)?;
        let Full(contents) = &mut self.state else {
            return None;
        };

        let inserted = if Rc::ptr_eq(&node, &contents.tail) {
            // SAFETY: resolve only returns a node once the chain is exclusive to this list.
            unsafe { contents.link_back(value) };
            contents.tail.clone()
        } else {
            // SAFETY: As above, and `node` is part of that chain.
            let next = unsafe { node.take_next() };
            let inserted = Node::new(value, next);
            // SAFETY: As above.
            unsafe { node.set_next(Some(inserted.clone())) };
            contents.len = contents.len.grow();
            inserted
        };

        Some(self.position(Some(inserted)))
    }

    /// Removes the first element from the list and returns it, if the list isn't empty. This never
    /// copies any nodes.
    pub fn pop(&mut self) -> Option<T> {
        let exclusive = self.owner.is_unique();
        let head = match &mut self.state {
            Empty => return None,
            Full(contents) => match (contents.len.shrink(), contents.head.next().cloned()) {
                (Some(len), Some(next)) => {
                    contents.len = len;
                    mem::replace(&mut contents.head, next)
                },
                _ => self.take_contents()?.into_head(),
            },
        };

        // A popped node that is still shared stays in the other lists, so it can't be marked.
        if exclusive {
            head.detach();
        } else {
            self.generation.bump();
        }
        Some(Node::into_value(head))
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    ///
    /// Without links to previous nodes, this has to walk the whole list to find the new tail.
    pub fn remove_last(&mut self) -> Option<T> {
        match &self.state {
            Empty => return None,
            Full(ListContents { len, .. }) if *len == ONE => return self.pop(),
            Full(_) => self.make_unique(),
        }

        let Full(contents) = &mut self.state else {
            return None;
        };

        let mut prev = contents.head.clone();
        loop {
            let next = match prev.next() {
                Some(next) if !Rc::ptr_eq(next, &contents.tail) => next.clone(),
                _ => break,
            };
            prev = next;
        }

        // SAFETY: The chain was made exclusive above and no references to links are held.
        let last = unsafe { prev.take_next() }?;
        contents.tail = prev;
        if let Some(len) = contents.len.shrink() {
            contents.len = len;
        }

        last.detach();
        Some(Node::into_value(last))
    }

    /// Removes the node directly after the one named by `target` and returns its value.
    ///
    /// Returns [`None`] without changing the list if `target` has no successor, is the end
    /// position, or doesn't name a node in this list.
    pub fn remove_after(&mut self, target: &Position<T>) -> Option<T> {
        let node = self.resolve(target)?;
        let Full(contents) = &mut self.state else {
            return None;
        };

        // SAFETY: resolve only returns a node once the chain is exclusive to this list.
        let removed = unsafe { node.take_next() }?;
        // SAFETY: As above.
        unsafe { node.set_next(removed.next().cloned()) };

        if Rc::ptr_eq(&removed, &contents.tail) {
            contents.tail = node;
        }
        if let Some(len) = contents.len.shrink() {
            contents.len = len;
        }

        removed.detach();
        Some(Node::into_value(removed))
    }

    /// Copies the chain if any other list shares it.
    pub(crate) fn make_unique(&mut self) {
        if !self.owner.is_unique() {
            self.copy_nodes(None);
        }
    }

    /// Finds the node named by `target` in a chain that is exclusive to this list, copying the chain
    /// first if needed.
    fn resolve(&mut self, target: &Position<T>) -> Option<Rc<Node<T>>> {
        let node = target.node.as_ref()?;
        if node.is_detached() || !target.stamp.is_from(&self.generation) {
            return None;
        }
        if !target.stamp.is_current(&self.generation) && !self.links(node) {
            return None;
        }

        if self.owner.is_unique() {
            Some(node.clone())
        } else {
            self.copy_nodes(Some(node))
        }
    }

    /// Replaces the chain with a value-by-value copy owned by this list alone, returning the copy of
    /// `target` if it was found during the walk.
    fn copy_nodes(&mut self, target: Option<&Rc<Node<T>>>) -> Option<Rc<Node<T>>> {
        let Full(contents) = &mut self.state else {
            self.owner = ShareToken::new();
            return None;
        };

        let head = Node::new(contents.head.value.clone(), None);
        let mut old_node = contents.head.clone();
        let mut new_node = head.clone();
        let mut target_copy = None;

        loop {
            if target.is_some_and(|target| Rc::ptr_eq(target, &old_node)) {
                target_copy = Some(new_node.clone());
            }

            let Some(next_old) = old_node.next().cloned() else {
                break;
            };
            let next_new = Node::new(next_old.value.clone(), None);
            // SAFETY: new_node was created during this walk, so nothing else can observe it.
            unsafe { new_node.set_next(Some(next_new.clone())) };

            old_node = next_old;
            new_node = next_new;
        }

        // The token only changes once the copy is complete, in case cloning a value panics.
        let old_head = mem::replace(&mut contents.head, head);
        contents.tail = new_node;
        self.owner = ShareToken::new();
        self.generation.bump();

        drop(old_node);
        Node::release(Some(old_head));

        target_copy
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn seek(&self, index: usize) -> Option<&Rc<Node<T>>> {
        let Full(contents) = &self.state else {
            return None;
        };
        if index >= contents.len.get() {
            return None;
        }

        let mut node = &contents.head;
        for _ in 0..index {
            node = node.next()?;
        }
        Some(node)
    }

    /// Returns true if `target` is one of the nodes in this list's chain.
    pub(crate) fn links(&self, target: &Rc<Node<T>>) -> bool {
        let Full(contents) = &self.state else {
            return false;
        };

        let mut node = Some(&contents.head);
        while let Some(current) = node {
            if Rc::ptr_eq(current, target) {
                return true;
            }
            node = current.next();
        }
        false
    }

    pub(crate) fn position(&self, node: Link<T>) -> Position<T> {
        Position {
            node,
            stamp: self.generation.stamp(),
        }
    }

    /// Empties the list, giving it a fresh token since it no longer shares anything.
    pub(crate) fn take_contents(&mut self) -> Option<ListContents<T>> {
        match mem::replace(&mut self.state, Empty) {
            Empty => None,
            Full(contents) => {
                self.owner = ShareToken::new();
                self.generation.bump();
                Some(contents)
            },
        }
    }
}

impl<T> ListContents<T> {
    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = Node::new(value, None);

        ListContents {
            len: ONE,
            head: node.clone(),
            tail: node,
        }
    }

    /// Links a new node after the tail.
    ///
    /// # Safety
    /// The chain must be exclusive to the list that owns these contents.
    pub unsafe fn link_back(&mut self, value: T) {
        let node = Node::new(value, None);
        // SAFETY: Upheld by the caller. The tail has no successor, so nothing is replaced.
        unsafe { self.tail.set_next(Some(node.clone())) };
        self.tail = node;
        self.len = self.len.grow();
    }

    /// Releases the tail reference and returns the head.
    pub fn into_head(self) -> Rc<Node<T>> {
        let ListContents { head, .. } = self;
        head
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> Clone for LinkedList<T> {
    /// Creates another handle to the same nodes. Neither list copies anything until it is mutated.
    fn clone(&self) -> Self {
        LinkedList {
            state: match &self.state {
                Empty => Empty,
                Full(contents) => Full(ListContents {
                    len: contents.len,
                    head: contents.head.clone(),
                    tail: contents.tail.clone(),
                }),
            },
            owner: self.owner.clone(),
            generation: Generation::new(),
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(contents) = mem::replace(&mut self.state, Empty) {
            Node::release(Some(contents.into_head()));
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for value in iter {
            match &mut list.state {
                Empty => list.push(value),
                // SAFETY: The list was created here and hasn't been cloned.
                Full(contents) => unsafe { contents.link_back(value) },
            }
        }
        list
    }
}

impl<T: Clone> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut values = self.iter();
        match values.next() {
            None => write!(f, "Empty list"),
            Some(first) => {
                write!(f, "{first}")?;
                for value in values {
                    write!(f, " -> {value}")?;
                }
                Ok(())
            },
        }
    }
}
