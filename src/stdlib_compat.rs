//! Standard library compatibility layer
//!
//! Conversions between [`BinaryHeap`] and `std::collections::BinaryHeap`,
//! plus iterators that yield elements in policy order.
//!
//! # Differences from `std::collections::BinaryHeap`
//!
//! - **Ordering is a value, not a type**: `std` always pops the maximum under
//!   `Ord`, while [`BinaryHeap`] pops whatever ranks first under its
//!   [`OrderingPolicy`]. Converting from `std` yields a descending policy so
//!   the pop order is preserved.
//! - **Lookup by value**: `contains`, `remove` and `replace` are available.
//!
//! # Example
//!
//! ```rust
//! use rust_policy_heaps::binary::BinaryHeap;
//!
//! let std_heap: std::collections::BinaryHeap<i32> = vec![5, 3, 7].into();
//! let heap = BinaryHeap::from(std_heap);
//! assert_eq!(heap.peek(), Some(&7)); // same max-first order as std
//! assert_eq!(heap.into_iter_sorted().collect::<Vec<_>>(), vec![7, 5, 3]);
//! ```

use std::collections::BinaryHeap as StdBinaryHeap;
use std::iter::FusedIterator;

use crate::binary::BinaryHeap;
use crate::ordering::OrderingPolicy;

impl<T: Ord> From<StdBinaryHeap<T>> for BinaryHeap<T> {
    /// Keeps the max-first order of the standard heap
    fn from(heap: StdBinaryHeap<T>) -> Self {
        BinaryHeap::from_vec(OrderingPolicy::descending(), heap.into_vec())
    }
}

impl<T: Ord> From<Vec<T>> for BinaryHeap<T> {
    /// Builds a min-heap in O(n)
    fn from(items: Vec<T>) -> Self {
        BinaryHeap::from_vec(OrderingPolicy::ascending(), items)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for BinaryHeap<T> {
    /// Builds a min-heap in O(n)
    fn from(items: [T; N]) -> Self {
        BinaryHeap::from_vec(OrderingPolicy::ascending(), Vec::from(items))
    }
}

impl<T: Ord> From<BinaryHeap<T>> for StdBinaryHeap<T> {
    /// The standard heap re-orders by `Ord`; the source policy is discarded.
    fn from(heap: BinaryHeap<T>) -> Self {
        StdBinaryHeap::from(heap.into_vec())
    }
}

impl<T> BinaryHeap<T> {
    /// Consumes the heap, yielding elements in policy order
    pub fn into_iter_sorted(self) -> IntoIterSorted<T> {
        IntoIterSorted { heap: self }
    }

    /// Removes elements in policy order as the iterator advances
    ///
    /// Elements not yet yielded when the iterator is dropped are removed too.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T> {
        DrainSorted { heap: self }
    }
}

/// Owning iterator returned by [`BinaryHeap::into_iter_sorted`]
#[derive(Debug)]
pub struct IntoIterSorted<T> {
    heap: BinaryHeap<T>,
}

impl<T> Iterator for IntoIterSorted<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIterSorted<T> {}

impl<T> FusedIterator for IntoIterSorted<T> {}

/// Draining iterator returned by [`BinaryHeap::drain_sorted`]
#[derive(Debug)]
pub struct DrainSorted<'a, T> {
    heap: &'a mut BinaryHeap<T>,
}

impl<T> Iterator for DrainSorted<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for DrainSorted<'_, T> {}

impl<T> FusedIterator for DrainSorted<'_, T> {}

impl<T> Drop for DrainSorted<'_, T> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
