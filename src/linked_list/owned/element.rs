use core::any::type_name;
use core::fmt;

use crate::error::ListError;

/// Describes the element type of a list.
///
/// Both fields are informational. The list never uses `size` for layout; it
/// is kept for display and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementType {
    name: &'static str,
    size: usize,
}

impl ElementType {
    /// Create a descriptor, rejecting an empty name or a zero size hint.
    pub fn new(name: &'static str, size: usize) -> Result<Self, ListError> {
        if name.is_empty() {
            return Err(ListError::MissingTypeName);
        }
        if size == 0 {
            return Err(ListError::InvalidTypeSize(size));
        }
        Ok(Self { name, size })
    }

    /// Describe `T` by its Rust type name and size.
    ///
    /// Zero-sized types report a size of 1 so the descriptor stays valid.
    pub fn of<T>() -> Self {
        Self {
            name: type_name::<T>(),
            size: size_of::<T>().max(1),
        }
    }

    /// Human-readable type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Byte-size hint.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.name, self.size)
    }
}
