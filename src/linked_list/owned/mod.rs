//! # Owned Singly Linked List
//!
//! ## Core Components
//!
//! - [`list::List`]: the container. Creation, append, removal, lookup and destruction.
//! - [`node::Node`]: a list cell holding one element and the link to the next cell.
//! - [`sort`]: the stable bottom-up merge sort over a [`list::List`].
//! - [`render`]: stringification and the printed table form of a list.
//! - [`builder::ListBuilder`]: configures the element descriptor and destructor of a new list.
//! - [`traits::Destructor`]: the callback that receives elements leaving the list.
//!
//! ## Callback contracts
//!
//! Lookup, removal and sorting all take a comparator returning
//! [`Ordering`](core::cmp::Ordering). Lookup and removal only look for
//! `Equal`. Sorting uses the full ordering and keeps equal elements in their
//! original order.
//!
//! The destructor is called exactly once for every element that leaves the
//! list, whether through removal, [`list::List::clear`], [`list::List::destroy`]
//! or drop.

pub mod builder;
pub mod element;
pub mod iter;
pub mod list;
pub mod node;
pub mod render;
pub mod sort;
pub mod traits;

#[cfg(test)]
mod tests;

pub use builder::ListBuilder;
pub use element::ElementType;
pub use list::{List, RemoveMode};
pub use node::Node;
pub use sort::SortStats;
pub use traits::{Destructor, DropElement};

pub mod prelude {
    pub use super::builder::ListBuilder;
    pub use super::list::{List, RemoveMode};
    pub use super::traits::{Destructor, DropElement};
}
