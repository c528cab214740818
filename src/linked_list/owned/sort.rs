//! Stable bottom-up merge sort for [`List`].
//!
//! Each pass walks the list once, merging neighbouring runs of `unit` nodes
//! into runs of `2 * unit` nodes, then doubles `unit`. A pass that performs
//! at most one merge has produced a single sorted run and ends the sort.
//!
//! Nodes are re-linked in place: no recursion, no scratch buffer, no
//! allocation. When both run fronts compare equal the left one is taken, which
//! keeps the sort stable.

use core::cmp::Ordering;
use core::ptr::NonNull;

use tracing::{debug, trace};

use super::list::List;
use super::node::Node;
use super::traits::{Destructor, Link};

/// Work done by one call to [`List::sort_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of passes over the list.
    pub passes: usize,
    /// Number of run merges across all passes.
    pub merges: usize,
    /// Number of comparator calls.
    pub comparisons: usize,
}

impl<T, D> List<T, D>
where
    D: Destructor<T>,
{
    /// Sort the list in place so that `comparator(a, b) != Greater` for every
    /// element `a` before `b`. Equal elements keep their relative order.
    pub fn sort_by<F>(&mut self, mut comparator: F) -> SortStats
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut stats = SortStats::default();
        if self.is_empty() {
            return stats;
        }

        let mut unit = 1;
        loop {
            let merges = MergePass::new(self).run(unit, &mut comparator, &mut stats);
            stats.passes += 1;
            stats.merges += merges;
            trace!(unit, merges, "merge pass finished");

            if merges <= 1 {
                break;
            }
            unit *= 2;
        }

        debug!(
            len = self.len(),
            passes = stats.passes,
            merges = stats.merges,
            comparisons = stats.comparisons,
            "list sorted"
        );
        stats
    }

    /// Sort the list in ascending order.
    pub fn sort(&mut self) -> SortStats
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sort the list by the key `f` extracts from each element.
    pub fn sort_by_key<K, F>(&mut self, mut f: F) -> SortStats
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)))
    }

    /// Check whether the list is in non-decreasing order under `comparator`.
    pub fn is_sorted_by<F>(&self, mut comparator: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for element in iter {
            if comparator(prev, element) == Ordering::Greater {
                return false;
            }
            prev = element;
        }
        true
    }
}

/// One pass of the merge sort.
///
/// The nodes of the list are always split between three places: the output
/// chain (`head..=tail`), the unmerged part of the left run (`left_len` nodes
/// from `left`) and everything from `right` to the old end of the list.
/// Dropping the pass stitches these back together in that order, so the list
/// is consistent again when the pass finishes and also when the comparator
/// panics halfway through.
struct MergePass<'a, T, D>
where
    D: Destructor<T>,
{
    list: &'a mut List<T, D>,
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    left: Option<NonNull<Node<T>>>,
    left_len: usize,
    right: Option<NonNull<Node<T>>>,
}

impl<'a, T, D> MergePass<'a, T, D>
where
    D: Destructor<T>,
{
    fn new(list: &'a mut List<T, D>) -> Self {
        let right = list.raw_head();
        Self {
            list,
            head: None,
            tail: None,
            left: None,
            left_len: 0,
            right,
        }
    }

    /// Merge every pair of neighbouring `unit`-sized runs, returning the
    /// number of merges.
    fn run<F>(&mut self, unit: usize, comparator: &mut F, stats: &mut SortStats) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut merges = 0;
        while let Some(start) = self.right {
            merges += 1;

            // Step over the left run; `right` ends up at the start of the right run.
            self.left = Some(start);
            self.left_len = 0;
            while self.left_len < unit {
                let Some(node) = self.right else { break };
                self.right = unsafe { node.as_ref().link() };
                self.left_len += 1;
            }

            // A short list leaves the right run shorter than `unit`, or empty.
            let mut right_len = unit;
            loop {
                let left = self.left.filter(|_| self.left_len > 0);
                let right = self.right.filter(|_| right_len > 0);
                let picked = match (left, right) {
                    (None, None) => break,
                    (Some(l), None) => self.take_left(l),
                    (None, Some(r)) => {
                        right_len -= 1;
                        self.take_right(r)
                    }
                    (Some(l), Some(r)) => {
                        stats.comparisons += 1;
                        let ordering = unsafe { comparator(l.as_ref().data(), r.as_ref().data()) };
                        if ordering != Ordering::Greater {
                            self.take_left(l)
                        } else {
                            right_len -= 1;
                            self.take_right(r)
                        }
                    }
                };
                self.push(picked);
            }
        }
        merges
    }

    fn take_left(&mut self, node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        self.left = unsafe { node.as_ref().link() };
        self.left_len -= 1;
        node
    }

    fn take_right(&mut self, node: NonNull<Node<T>>) -> NonNull<Node<T>> {
        self.right = unsafe { node.as_ref().link() };
        node
    }

    /// Append `node` to the output chain. Its own link is left stale until
    /// the next push or the end of the pass overwrites it.
    fn push(&mut self, node: NonNull<Node<T>>) {
        match self.tail {
            Some(mut tail) => unsafe { tail.as_mut().set_link(Some(node)) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }
}

impl<T, D> Drop for MergePass<'_, T, D>
where
    D: Destructor<T>,
{
    fn drop(&mut self) {
        while self.left_len > 0 {
            let Some(node) = self.left else { break };
            let node = self.take_left(node);
            self.push(node);
        }
        while let Some(node) = self.right {
            let node = self.take_right(node);
            self.push(node);
        }

        if let Some(mut tail) = self.tail {
            unsafe { tail.as_mut().set_link(None) };
        }
        unsafe { self.list.set_ends(self.head, self.tail) };
    }
}
