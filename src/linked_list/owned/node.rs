use core::fmt;
use core::ptr::NonNull;

use super::traits::Link;

/// A cell of a singly linked list.
///
/// Nodes are allocated and freed by their [`List`](super::list::List); callers
/// only ever see shared references to them.
pub struct Node<T> {
    link: Option<NonNull<Node<T>>>,
    data: T,
}

impl<T> Node<T> {
    pub(crate) fn new(data: T) -> Self {
        Self { link: None, data }
    }

    /// Get the element stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get the following node, or `None` for the tail.
    pub fn next(&self) -> Option<&Node<T>> {
        // Linked nodes are owned by the same list, which outlives `&self`.
        self.link.map(|next| unsafe { &*next.as_ptr() })
    }

    pub(crate) fn into_data(self) -> T {
        self.data
    }

    /// Unhook this node from the slot that points at it.
    ///
    /// `parent` must be the slot currently pointing at this node, either the
    /// predecessor or the list head. Afterwards it points at this node's
    /// successor and this node links nowhere.
    pub(crate) fn detach<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        parent.set_link(self.link.take());
    }
}

impl<T> Link for Node<T> {
    type Target = Self;

    #[inline]
    fn link(&self) -> Option<NonNull<Self>> {
        self.link
    }

    #[inline]
    fn set_link(&mut self, next: Option<NonNull<Self>>) {
        self.link = next;
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("has_next", &self.link.is_some())
            .finish()
    }
}

unsafe impl<T: Send> Send for Node<T> {}
unsafe impl<T: Sync> Sync for Node<T> {}
