use core::ptr::NonNull;

/// A slot holding the pointer to the next node.
///
/// Nodes implement this for their `next` link and the list implements it for
/// its head pointer, so unlinking a node only needs "whatever points at it".
pub(crate) trait Link {
    /// The node type the slot points to.
    type Target;

    /// Get the node this slot points to
    fn link(&self) -> Option<NonNull<Self::Target>>;

    /// Point this slot at another node
    fn set_link(&mut self, next: Option<NonNull<Self::Target>>);
}

/// Receives elements as they leave a list.
///
/// Called exactly once per element, when its node is removed or the list is
/// cleared, destroyed or dropped. Every `FnMut(T)` is a destructor.
pub trait Destructor<T> {
    /// Take ownership of an element that is leaving the list.
    fn destroy(&mut self, element: T);
}

impl<T, F> Destructor<T> for F
where
    F: FnMut(T),
{
    #[inline]
    fn destroy(&mut self, element: T) {
        self(element)
    }
}

/// The default destructor: drops the element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropElement;

impl<T> Destructor<T> for DropElement {
    #[inline]
    fn destroy(&mut self, element: T) {
        drop(element);
    }
}
