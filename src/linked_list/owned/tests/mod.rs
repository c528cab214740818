extern crate std;

use std::vec::Vec;

use super::builder::ListBuilder;
use super::list::List;
use super::node::Node;
use super::traits::Destructor;

mod sort;

fn int_list(values: &[i32]) -> List<i32> {
    ListBuilder::new()
        .build_from(values.iter().copied())
        .unwrap()
}

fn values<T: Clone, D: Destructor<T>>(list: &List<T, D>) -> Vec<T> {
    list.iter().cloned().collect()
}

/// Walk the links and check them against `len`, `head` and `tail`.
fn assert_links<T, D: Destructor<T>>(list: &List<T, D>) {
    let mut count = 0;
    let mut last: Option<*const Node<T>> = None;
    let mut current = list.head();
    while let Some(node) = current {
        count += 1;
        last = Some(node as *const Node<T>);
        current = node.next();
    }

    assert_eq!(count, list.len());
    assert_eq!(list.head().is_none(), list.is_empty());
    assert_eq!(list.tail().is_none(), list.is_empty());
    assert_eq!(last, list.tail().map(|tail| tail as *const Node<T>));
    if let Some(tail) = list.tail() {
        assert!(tail.next().is_none());
    }
}
