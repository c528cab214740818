extern crate std;

use core::cell::Cell;
use core::cmp::Reverse;

use std::panic::{self, AssertUnwindSafe};
use std::vec;
use std::vec::Vec;

use crate::linked_list::owned::{
    builder::ListBuilder,
    list::List,
    sort::SortStats,
    traits::DropElement,
};

use super::{assert_links, int_list, values};

/// Deterministic scrambled input with plenty of duplicates.
fn scrambled(len: usize) -> Vec<i32> {
    (0..len).map(|i| ((i * 7919 + 13) % 17) as i32).collect()
}

#[test]
fn test_sort_empty_list() {
    let mut list = int_list(&[1]);
    list.clear();

    let stats = list.sort();
    assert_eq!(stats, SortStats::default());
    assert!(list.is_empty());
    assert_links(&list);
}

#[test]
fn test_sort_single_element() {
    let mut list = int_list(&[42]);
    let stats = list.sort();
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.merges, 1);
    assert_eq!(stats.comparisons, 0);
    assert_eq!(values(&list), vec![42]);
    assert_links(&list);
}

#[test]
fn test_sort_two_elements() {
    let mut list = int_list(&[2, 1]);
    list.sort();
    assert_eq!(values(&list), vec![1, 2]);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&2));
    assert_links(&list);
}

#[test]
fn test_sort_every_length_up_to_64() {
    for len in 1..=64 {
        let input = scrambled(len);
        let mut list = int_list(&input);
        list.sort();

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(values(&list), expected, "length {}", len);
        assert_links(&list);
    }
}

#[test]
fn test_sort_reversed_input() {
    let input: Vec<i32> = (0..37).rev().collect();
    let mut list = int_list(&input);
    list.sort();
    assert_eq!(values(&list), (0..37).collect::<Vec<_>>());
    assert_links(&list);
}

#[test]
fn test_sort_pass_accounting() {
    // Runs per pass: 4, 2, 1.
    let mut list = int_list(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let stats = list.sort();
    assert_eq!(stats.passes, 3);
    assert_eq!(stats.merges, 7);
    // Sorted input exhausts the left run first in every merge.
    assert_eq!(stats.comparisons, 12);

    // Odd remainder: runs per pass 3, 2, 1.
    let mut list = int_list(&[5, 4, 3, 2, 1]);
    let stats = list.sort();
    assert_eq!(stats.passes, 3);
    assert_eq!(stats.merges, 6);
    assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_sort_is_stable() {
    let mut list = List::create((5, 'a'), "pair", 8, DropElement).unwrap();
    list.extend([(3, 'b'), (5, 'c'), (1, 'd'), (3, 'e'), (5, 'f'), (1, 'g')]);

    list.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        values(&list),
        vec![(1, 'd'), (1, 'g'), (3, 'b'), (3, 'e'), (5, 'a'), (5, 'c'), (5, 'f')]
    );
    assert_links(&list);
}

#[test]
fn test_sort_all_equal_keeps_order() {
    let mut list = List::create((0, 0), "pair", 8, DropElement).unwrap();
    list.extend((1..20).map(|tag| (0, tag)));

    list.sort_by(|a, b| a.0.cmp(&b.0));
    let tags: Vec<i32> = list.iter().map(|(_, tag)| *tag).collect();
    assert_eq!(tags, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_sort_is_idempotent() {
    let mut list = int_list(&scrambled(29));
    list.sort();
    let once = values(&list);
    list.sort();
    assert_eq!(values(&list), once);
    assert_links(&list);
}

#[test]
fn test_sort_by_key_descending() {
    let mut list = int_list(&[3, 9, 1, 7]);
    list.sort_by_key(|value| Reverse(*value));
    assert_eq!(values(&list), vec![9, 7, 3, 1]);
    assert!(list.is_sorted_by(|a, b| b.cmp(a)));
    assert!(!list.is_sorted_by(|a, b| a.cmp(b)));
}

#[test]
fn test_sort_then_append() {
    let mut list = int_list(&[3, 1, 2]);
    list.sort();
    list.append(0);
    assert_eq!(values(&list), vec![1, 2, 3, 0]);
    assert_links(&list);
}

#[test]
fn test_sort_keeps_elements_alive() {
    let calls = Cell::new(0);
    let mut list = ListBuilder::<i32>::new()
        .with_destructor(|_: i32| calls.set(calls.get() + 1))
        .build_from(scrambled(50))
        .unwrap();

    list.sort();
    assert_eq!(calls.get(), 0);
    assert_eq!(list.len(), 50);

    list.destroy();
    assert_eq!(calls.get(), 50);
}

#[test]
fn test_sort_survives_panicking_comparator() {
    let input = scrambled(23);
    let calls = Cell::new(0);
    let mut list = ListBuilder::<i32>::new()
        .with_destructor(|_: i32| calls.set(calls.get() + 1))
        .build_from(input.iter().copied())
        .unwrap();

    let mut budget = 30;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        list.sort_by(|a, b| {
            budget -= 1;
            if budget == 0 {
                panic!("comparator gave up");
            }
            a.cmp(b)
        });
    }));
    assert!(result.is_err());

    // Every node is still reachable exactly once.
    assert_links(&list);
    let mut left = values(&list);
    let mut expected = input.clone();
    left.sort();
    expected.sort();
    assert_eq!(left, expected);

    list.sort();
    assert!(list.is_sorted_by(|a, b| a.cmp(b)));

    drop(list);
    assert_eq!(calls.get(), input.len());
}
