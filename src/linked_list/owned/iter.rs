use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::node::Node;
use super::traits::Link;

/// An iterator over the elements of a [`List`](super::list::List), head to tail.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// `head` must start a chain of `len` nodes borrowed for `'a`.
    pub(crate) fn new(head: Option<NonNull<Node<T>>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node: &'a Node<T> = unsafe { &*current.as_ptr() };
            self.current = node.link();
            self.remaining -= 1;
            node.data()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
