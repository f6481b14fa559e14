//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues whose
//! ordering is supplied at construction time:
//!
//! - [`Heap`]: Base trait covering push/pop/peek and size queries
//! - [`SearchableHeap`]: Extended trait adding value-equality based lookup,
//!   removal and replacement
//!
//! Ordering and equality are deliberately separate capabilities. A heap ranks
//! elements through its [`OrderingPolicy`](crate::ordering::OrderingPolicy),
//! while [`SearchableHeap`] locates elements through `PartialEq`. Two elements
//! may tie under the policy and still be distinct values.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A sort-descriptor policy was requested with no sort rules
    EmptySortDescriptors,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptySortDescriptors => {
                write!(f, "sort-descriptor ordering requires at least one sort rule")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for heap/priority queue data structures
///
/// The element at the top of the heap is the one that ranks first under the
/// heap's ordering policy: the minimum for an ascending policy, the maximum
/// for a descending one.
///
/// # Example
///
/// ```rust
/// use rust_policy_heaps::Heap;
/// use rust_policy_heaps::binary::BinaryHeap;
///
/// let mut heap = BinaryHeap::min();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized for the binary heap.
    fn push(&mut self, item: T);

    /// Returns the top element without removing it, or `None` when empty
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top element, or `None` when empty
    fn pop(&mut self) -> Option<T>;

    /// Replaces the top element with `item`, returning the previous top
    ///
    /// On an empty heap this is a plain push and returns `None`.
    /// Implementations commonly override this with a single sift.
    fn replace_top(&mut self, item: T) -> Option<T> {
        let previous = self.pop();
        self.push(item);
        previous
    }

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self)
    where
        Self: Sized;
}

/// Extended heap trait with lookup by value equality
///
/// These operations scan the heap linearly and compare with `PartialEq`,
/// never with the ordering policy. Absent values are not errors: removal
/// and replacement leave the heap untouched and return `None`.
///
/// # Example
///
/// ```rust
/// use rust_policy_heaps::{Heap, SearchableHeap};
/// use rust_policy_heaps::binary::BinaryHeap;
///
/// let mut heap: BinaryHeap<i32> = [5, 3, 8].into_iter().collect();
/// assert!(heap.contains(&8));
/// assert_eq!(heap.remove(&8), Some(8));
/// assert_eq!(heap.remove(&8), None);
/// assert_eq!(heap.len(), 2);
/// ```
pub trait SearchableHeap<T: PartialEq>: Heap<T> {
    /// Returns true if some element equals `item`
    ///
    /// # Time Complexity
    /// O(n)
    fn contains(&self, item: &T) -> bool;

    /// Removes the first element equal to `item` and returns it
    ///
    /// # Time Complexity
    /// O(n) scan plus O(log n) restoration
    fn remove(&mut self, item: &T) -> Option<T>;

    /// Replaces the first element equal to `old` with `new`, returning the
    /// element that was replaced
    ///
    /// When no element equals `old`, `new` is dropped and the heap is unchanged.
    fn replace(&mut self, old: &T, new: T) -> Option<T> {
        let previous = self.remove(old)?;
        self.push(new);
        Some(previous)
    }
}
