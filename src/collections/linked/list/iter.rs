use std::iter::FusedIterator;

use ListState::*;

use super::{LinkedList, ListContents, ListState, Node};

impl<T: Clone> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over the values of a [`LinkedList`]. Values are moved out of nodes that no
/// other list shares and cloned out of the rest.
pub struct IntoIter<T> {
    // Popping never copies nodes, so the iterator can just hold the list.
    pub(crate) list: LinkedList<T>,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Clone> FusedIterator for IntoIter<T> {}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match &self.state {
            Empty => Iter {
                next: None,
                len: 0,
            },
            Full(ListContents { len, head, .. }) => Iter {
                next: Some(&**head),
                len: len.get(),
            },
        }
    }
}

/// A borrowed iterator over the values of a [`LinkedList`], from front to back.
pub struct Iter<'a, T> {
    pub(crate) next: Option<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.next?;
        self.next = node.next().map(|next| &**next);
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            len: self.len,
        }
    }
}
