use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use alloc::boxed::Box;
use tracing::{debug, trace};

use crate::error::ListError;

use super::element::ElementType;
use super::iter::Iter;
use super::node::Node;
use super::traits::{Destructor, DropElement, Link};

/// How many matching elements [`List::remove_by`] takes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveMode {
    /// Stop after the first match.
    First,
    /// Remove every match.
    All,
}

/// An owned singly linked list with O(1) append.
///
/// Invariants:
/// - `len == 0` iff `head` is `None` iff `tail` is `None`.
/// - Following links from `head` reaches `tail` after `len - 1` steps and
///   `None` one step later.
pub struct List<T, D = DropElement>
where
    D: Destructor<T>,
{
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    element_type: ElementType,
    destructor: D,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T, D> List<T, D>
where
    D: Destructor<T>,
{
    /// Create a one-element list.
    ///
    /// Fails if `type_name` is empty or `type_size` is zero; the element is
    /// then dropped without reaching the destructor.
    pub fn create(
        initial: T,
        type_name: &'static str,
        type_size: usize,
        destructor: D,
    ) -> Result<Self, ListError> {
        let element_type = ElementType::new(type_name, type_size)?;
        Ok(Self::with_element_type(initial, element_type, destructor))
    }

    pub(crate) fn with_element_type(initial: T, element_type: ElementType, destructor: D) -> Self {
        let mut list = Self {
            head: None,
            tail: None,
            len: 0,
            element_type,
            destructor,
            _marker: PhantomData,
        };
        list.append(initial);
        debug!(type_name = element_type.name(), type_size = element_type.size(), "list created");
        list
    }

    /// Add an element after the current tail.
    pub fn append(&mut self, element: T) -> &mut Self {
        let node = NonNull::from(Box::leak(Box::new(Node::new(element))));
        match self.tail {
            // The tail is owned by this list and nothing else borrows it.
            Some(mut tail) => unsafe { tail.as_mut().set_link(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
        self
    }

    /// Remove elements comparing `Equal` to `key`, handing each to the destructor.
    ///
    /// `comparator` is called as `comparator(element, key)`. Returns the number
    /// of removed elements, [`ListError::Empty`] if there was nothing to scan,
    /// or [`ListError::NotFound`] if nothing matched.
    pub fn remove_by<K, F>(&mut self, key: &K, mut comparator: F, mode: RemoveMode) -> Result<usize, ListError>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        let mut removed = 0;
        let mut prev: Option<NonNull<Node<T>>> = None;
        let mut current = self.head;
        while let Some(node) = current {
            let node_ref = unsafe { node.as_ref() };
            current = node_ref.link();
            if comparator(node_ref.data(), key) != Ordering::Equal {
                prev = Some(node);
                continue;
            }

            let element = unsafe { self.unlink(node, prev) };
            self.destructor.destroy(element);
            removed += 1;

            if mode == RemoveMode::First {
                break;
            }
        }

        trace!(removed, len = self.len, "remove finished");
        if removed == 0 {
            Err(ListError::NotFound)
        } else {
            Ok(removed)
        }
    }

    /// Take `node` out of the list and free it, returning its element.
    ///
    /// # Safety
    ///
    /// `node` must belong to this list and `prev` must be its predecessor, or
    /// `None` when `node` is the head.
    unsafe fn unlink(&mut self, mut node: NonNull<Node<T>>, prev: Option<NonNull<Node<T>>>) -> T {
        unsafe {
            match prev {
                Some(mut prev) => node.as_mut().detach(prev.as_mut()),
                None => node.as_mut().detach(&mut *self),
            }
            if self.tail == Some(node) {
                self.tail = prev;
            }
            self.len -= 1;
            Box::from_raw(node.as_ptr()).into_data()
        }
    }

    /// Remove every element, handing each to the destructor.
    ///
    /// Returns how many elements were destroyed. The list stays usable.
    pub fn clear(&mut self) -> usize {
        self.remove_by(&(), |_, _| Ordering::Equal, RemoveMode::All)
            .unwrap_or(0)
    }

    /// Destroy the list, handing every element to the destructor exactly once.
    pub fn destroy(mut self) {
        let destroyed = self.clear();
        debug!(type_name = self.element_type.name(), destroyed, "list destroyed");
    }

    /// Get the first element comparing `Equal` to `key`.
    pub fn find_by<K, F>(&self, key: &K, comparator: F) -> Option<&T>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        self.find_node_by(key, comparator).map(Node::data)
    }

    /// Get the first node whose element compares `Equal` to `key`.
    pub fn find_node_by<K, F>(&self, key: &K, mut comparator: F) -> Option<&Node<T>>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> Ordering,
    {
        let mut current = self.head();
        while let Some(node) = current {
            if comparator(node.data(), key) == Ordering::Equal {
                return Some(node);
            }
            current = node.next();
        }
        None
    }

    /// Get the first node.
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|head| unsafe { &*head.as_ptr() })
    }

    /// Get the last node.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|tail| unsafe { &*tail.as_ptr() })
    }

    /// Get the first element.
    pub fn front(&self) -> Option<&T> {
        self.head().map(Node::data)
    }

    /// Get the last element.
    pub fn back(&self) -> Option<&T> {
        self.tail().map(Node::data)
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the element descriptor given at creation.
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// Iterate over the elements from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head, self.len)
    }

    pub(crate) fn raw_head(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    /// Replace the head and tail after the nodes have been re-threaded.
    ///
    /// # Safety
    ///
    /// `head` must start a chain of exactly `len` nodes of this list ending at
    /// `tail`, whose link must be `None`.
    pub(crate) unsafe fn set_ends(&mut self, head: Option<NonNull<Node<T>>>, tail: Option<NonNull<Node<T>>>) {
        self.head = head;
        self.tail = tail;
    }
}

impl<T, D> List<T, D>
where
    T: PartialEq,
    D: Destructor<T>,
{
    /// Remove elements equal to `key`.
    pub fn remove(&mut self, key: &T, mode: RemoveMode) -> Result<usize, ListError> {
        self.remove_by(key, |element, key| if element == key { Ordering::Equal } else { Ordering::Less }, mode)
    }

    /// Get the first element equal to `key`.
    pub fn find(&self, key: &T) -> Option<&T> {
        self.iter().find(|element| *element == key)
    }

    /// Check whether some element equals `key`.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }
}

impl<T, D> Link for List<T, D>
where
    D: Destructor<T>,
{
    type Target = Node<T>;

    fn link(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    fn set_link(&mut self, next: Option<NonNull<Node<T>>>) {
        self.head = next;
    }
}

impl<T, D> Extend<T> for List<T, D>
where
    D: Destructor<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T, D> IntoIterator for &'a List<T, D>
where
    D: Destructor<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, D> fmt::Debug for List<T, D>
where
    T: fmt::Debug,
    D: Destructor<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, D> Drop for List<T, D>
where
    D: Destructor<T>,
{
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send, D: Destructor<T> + Send> Send for List<T, D> {}
unsafe impl<T: Sync, D: Destructor<T> + Sync> Sync for List<T, D> {}
