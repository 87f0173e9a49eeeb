use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use super::{Link, Node, Stamp};

/// A position within a [`LinkedList`](super::LinkedList), naming either one of its nodes or the end
/// of the list.
///
/// Positions only move forward: [`advance`](Position::advance) follows the link to the next node
/// and there is no way back. They keep the node they name alive but never count as owners, so
/// holding one doesn't force a list to copy its nodes.
///
/// Reading through a position is always allowed, but a position is only accepted by
/// [`LinkedList::insert_after`](super::LinkedList::insert_after) and
/// [`LinkedList::remove_after`](super::LinkedList::remove_after) on the list that produced it, while
/// its node is still part of that list and the list hasn't copied its nodes.
pub struct Position<T> {
    pub(crate) node: Link<T>,
    pub(crate) stamp: Stamp,
}

impl<T> Position<T> {
    /// Returns the value at this position, or [`None`] at the end.
    pub fn value(&self) -> Option<&T> {
        self.node.as_ref().map(|node| &node.value)
    }

    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Moves to the following node. Advancing the end position leaves it at the end.
    pub fn advance(&mut self) {
        self.node = self.next_node();
    }

    /// Returns the position of the following node.
    pub fn advanced(&self) -> Position<T> {
        Position {
            node: self.next_node(),
            stamp: self.stamp.clone(),
        }
    }

    fn next_node(&self) -> Link<T> {
        self.node.as_ref().and_then(|node| node.next().cloned())
    }

    /// Returns true if `other` is reached by advancing from this position some number of times
    /// (including zero). The end position is reachable from every position.
    fn reaches(&self, other: &Position<T>) -> bool {
        let Some(target) = &other.node else {
            return true;
        };

        let mut current = self.node.as_ref();
        while let Some(node) = current {
            if Rc::ptr_eq(node, target) {
                return true;
            }
            current = node.next();
        }
        false
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        Position {
            node: self.node.clone(),
            stamp: self.stamp.clone(),
        }
    }
}

impl<T> Drop for Position<T> {
    fn drop(&mut self) {
        Node::release(self.node.take());
    }
}

impl<T> PartialEq for Position<T> {
    /// Positions are equal if they name the same link point: both are the end, or both are followed
    /// by the same node. Nodes without a successor are compared directly.
    fn eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => match (lhs.next(), rhs.next()) {
                (Some(lhs_next), Some(rhs_next)) => Rc::ptr_eq(lhs_next, rhs_next),
                (None, None) => Rc::ptr_eq(lhs, rhs),
                _ => false,
            },
            _ => false,
        }
    }
}

impl<T> Eq for Position<T> {}

impl<T> PartialOrd for Position<T> {
    /// One position precedes another if the other can be reached by advancing from it. Positions in
    /// unrelated chains aren't ordered.
    ///
    /// This walks the chain, taking `O(n)` time.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.reaches(other) {
            Some(Ordering::Less)
        } else if other.reaches(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: Debug> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => f.debug_tuple("Position").field(value).finish(),
            None => write!(f, "Position(End)"),
        }
    }
}
