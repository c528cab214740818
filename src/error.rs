use thiserror::Error;

/// Errors reported by list construction and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// A list was requested from a source that yielded no element.
    #[error("a list must be created with at least one element")]
    MissingElement,

    /// The element type name was empty.
    #[error("element type name must not be empty")]
    MissingTypeName,

    /// The element size hint was zero.
    #[error("element size hint must be non-zero, got {0}")]
    InvalidTypeSize(usize),

    /// The operation needs at least one node.
    #[error("list is empty")]
    Empty,

    /// No element compared equal to the key.
    #[error("no element matched the key")]
    NotFound,
}
