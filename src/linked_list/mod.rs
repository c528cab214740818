//! An owned singly linked list.
//!
//! The list owns every node and every node owns its element. Behaviour that
//! depends on the element type is supplied by the caller: a destructor that
//! receives each element when it leaves the list, comparators for lookup,
//! removal and sorting, and a stringifier for rendering.
//!
//! Sorting is a bottom-up merge sort that re-threads the existing nodes, so it
//! is stable, never recurses and never allocates.
//!
//! # Examples
//!
//! ```
//! use mola_list::linked_list::owned::{List, RemoveMode};
//!
//! let mut list = List::create(3, "i32", 4, |_: i32| {}).unwrap();
//! list.append(1).append(2).append(1);
//! assert_eq!(list.len(), 4);
//!
//! list.sort();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 1, 2, 3]);
//!
//! assert_eq!(list.remove(&1, RemoveMode::All), Ok(2));
//! assert_eq!(list.find_by(&3, |a, b| a.cmp(b)), Some(&3));
//! assert_eq!(list.len(), 2);
//! ```
pub mod owned;
