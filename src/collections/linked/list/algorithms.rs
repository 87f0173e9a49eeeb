use std::mem;

use ListState::*;

use super::{Length, LinkedList, ListState, ONE, Position};

impl<T> LinkedList<T> {
    /// Calls `f` on every value from back to front.
    ///
    /// The links only run forwards, so this first collects references to every value, taking `O(n)`
    /// extra space.
    pub fn rev_for_each<F: FnMut(&T)>(&self, mut f: F) {
        let mut stack = LinkedList::new();
        for value in self.iter() {
            stack.push(value);
        }
        for value in stack.iter() {
            f(*value);
        }
    }

    /// Returns the position of the node at index `len / 2`, or [`None`] if the list is empty.
    ///
    /// This uses the runner technique: one position advances two nodes for every one the other
    /// advances, so the slow one is halfway along when the fast one reaches the end.
    pub fn middle(&self) -> Option<Position<T>> {
        let Full(contents) = &self.state else {
            return None;
        };

        let mut slow = &contents.head;
        let mut fast = Some(&contents.head);
        while let Some(fast_next) = fast.and_then(|node| node.next()) {
            fast = fast_next.next();
            slow = slow.next()?;
        }

        Some(self.position(Some(slow.clone())))
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns a new list containing this list's values in reverse order.
    pub fn reversed(&self) -> LinkedList<T> {
        let mut reversed = LinkedList::new();
        for value in self.iter() {
            reversed.push(value.clone());
        }
        reversed
    }

    /// Reverses the list in place by redirecting every link, copying the nodes first if they're
    /// shared.
    pub fn reverse(&mut self) {
        self.make_unique();
        let Full(contents) = &mut self.state else {
            return;
        };

        let mut previous = None;
        let mut current = Some(contents.head.clone());
        while let Some(node) = current {
            // SAFETY: make_unique has just made the chain exclusive to this list.
            current = unsafe { node.set_next(previous) };
            previous = Some(node);
        }

        mem::swap(&mut contents.head, &mut contents.tail);
    }

    /// Merges two sorted lists into a new sorted list. Equal values keep their relative order, with
    /// values from `first` ahead of those from `second`.
    ///
    /// If either list is empty, the result shares the other list's nodes.
    pub fn merge_sorted(first: &LinkedList<T>, second: &LinkedList<T>) -> LinkedList<T>
    where
        T: Ord,
    {
        if first.is_empty() {
            return second.clone();
        }
        if second.is_empty() {
            return first.clone();
        }

        let mut merged = LinkedList::new();
        let mut left = first.iter().peekable();
        let mut right = second.iter().peekable();

        loop {
            let from_right = match (left.peek(), right.peek()) {
                (Some(lhs), Some(rhs)) => rhs < lhs,
                (Some(_), None) => false,
                (None, Some(_)) => true,
                (None, None) => break,
            };
            let next = if from_right { right.next() } else { left.next() };
            if let Some(value) = next {
                merged.append(value.clone());
            }
        }

        merged
    }

    /// Removes every element equal to `item`.
    pub fn remove_all(&mut self, item: &T)
    where
        T: PartialEq,
    {
        while self.front() == Some(item) {
            self.pop();
        }
        if !self.contains(item) {
            return;
        }

        self.make_unique();
        let Full(contents) = &mut self.state else {
            return;
        };

        let mut prev = contents.head.clone();
        let mut len: Length = ONE;
        while let Some(next) = prev.next().cloned() {
            if next.value == *item {
                // SAFETY: make_unique has just made the chain exclusive to this list.
                unsafe { prev.set_next(next.next().cloned()) };
                next.detach();
            } else {
                prev = next;
                len = len.grow();
            }
        }

        if len != contents.len {
            contents.len = len;
            contents.tail = prev;
        }
    }
}
