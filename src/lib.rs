//! Owned, generic singly linked lists with a stable in-place merge sort.
//!
//! See [`linked_list`] for an overview and examples.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::ListError;
