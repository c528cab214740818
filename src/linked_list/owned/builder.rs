use core::marker::PhantomData;

use crate::error::ListError;

use super::element::ElementType;
use super::list::List;
use super::traits::{Destructor, DropElement};

/// Configures and builds a [`List`].
///
/// Starts from [`ElementType::of`] and the [`DropElement`] destructor.
///
/// ```
/// use mola_list::linked_list::owned::ListBuilder;
///
/// let list = ListBuilder::<u8>::new()
///     .with_type_name("byte")
///     .build_from([3, 1, 2])
///     .unwrap();
/// assert_eq!(list.element_type().name(), "byte");
/// assert_eq!(list.len(), 3);
/// ```
pub struct ListBuilder<T, D = DropElement> {
    type_name: &'static str,
    type_size: usize,
    destructor: D,
    _marker: PhantomData<fn(T)>,
}

impl<T> Default for ListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        let element_type = ElementType::of::<T>();
        Self {
            type_name: element_type.name(),
            type_size: element_type.size(),
            destructor: DropElement,
            _marker: PhantomData,
        }
    }
}

impl<T, D> ListBuilder<T, D>
where
    D: Destructor<T>,
{
    /// Set the element type name shown when rendering.
    pub fn with_type_name(mut self, type_name: &'static str) -> Self {
        self.type_name = type_name;
        self
    }

    /// Set the element size hint.
    pub fn with_type_size(mut self, type_size: usize) -> Self {
        self.type_size = type_size;
        self
    }

    /// Set the destructor that receives elements leaving the list.
    pub fn with_destructor<E>(self, destructor: E) -> ListBuilder<T, E>
    where
        E: Destructor<T>,
    {
        ListBuilder {
            type_name: self.type_name,
            type_size: self.type_size,
            destructor,
            _marker: PhantomData,
        }
    }

    /// Build a one-element list.
    pub fn build(self, initial: T) -> Result<List<T, D>, ListError> {
        let element_type = ElementType::new(self.type_name, self.type_size)?;
        Ok(List::with_element_type(initial, element_type, self.destructor))
    }

    /// Build a list holding `elements` in order.
    ///
    /// Fails with [`ListError::MissingElement`] if `elements` is empty.
    pub fn build_from<I>(self, elements: I) -> Result<List<T, D>, ListError>
    where
        I: IntoIterator<Item = T>,
    {
        let element_type = ElementType::new(self.type_name, self.type_size)?;
        let mut elements = elements.into_iter();
        let initial = elements.next().ok_or(ListError::MissingElement)?;
        let mut list = List::with_element_type(initial, element_type, self.destructor);
        list.extend(elements);
        Ok(list)
    }
}
