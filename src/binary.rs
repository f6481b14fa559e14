//! Binary heap with a pluggable ordering policy
//!
//! An array-backed binary heap. The element at index `i` has children at
//! `2i + 1` and `2i + 2`, and no parent ranks after either of its children
//! under the heap's [`OrderingPolicy`]. The top of the heap is therefore the
//! element that ranks first: the minimum for an ascending policy, the
//! maximum for a descending one.
//!
//! Beyond the usual push/pop/peek, the heap supports locating elements by
//! value equality for removal and in-place replacement. Lookups use
//! `PartialEq` and are independent of the ordering policy, so elements that
//! tie in rank can still be told apart.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `push`          | O(log n) amortized |
//! | `pop`           | O(log n)   |
//! | `peek`          | O(1)       |
//! | `replace_top`   | O(log n)   |
//! | `contains`      | O(n)       |
//! | `remove`        | O(n)       |
//! | `replace`       | O(n)       |
//! | `from_vec`      | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use rust_policy_heaps::binary::BinaryHeap;
//!
//! let mut heap = BinaryHeap::max();
//! heap.push(4);
//! heap.push(1);
//! heap.push(7);
//!
//! assert_eq!(heap.peek(), Some(&7));
//! assert_eq!(heap.pop(), Some(7));
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::slice;
use std::vec;

use crate::ordering::{OrderingPolicy, SortDescriptor};
use crate::traits::{Heap, HeapError, SearchableHeap};

/// A binary heap ordered by an [`OrderingPolicy`]
///
/// The heap exclusively owns its storage. Positions of elements are not
/// stable across mutations, so no API hands out indices.
pub struct BinaryHeap<T> {
    /// The heap data, laid out as an implicit binary tree
    data: Vec<T>,
    policy: OrderingPolicy<T>,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap in natural ascending order (a min-heap)
    pub fn new() -> Self {
        Self::min()
    }

    /// Creates an empty heap that yields the smallest element first
    pub fn min() -> Self {
        Self::with_policy(OrderingPolicy::ascending())
    }

    /// Creates an empty heap that yields the largest element first
    pub fn max() -> Self {
        Self::with_policy(OrderingPolicy::descending())
    }
}

impl<T> BinaryHeap<T> {
    /// Creates an empty heap with the given ordering policy
    pub fn with_policy(policy: OrderingPolicy<T>) -> Self {
        Self {
            data: Vec::new(),
            policy,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(policy: OrderingPolicy<T>, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            policy,
        }
    }

    /// Creates an empty heap ordered by a comparison function
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_policy_heaps::binary::BinaryHeap;
    ///
    /// let mut heap = BinaryHeap::with_comparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.push("three");
    /// heap.push("one");
    /// assert_eq!(heap.pop(), Some("one"));
    /// ```
    pub fn with_comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::with_policy(OrderingPolicy::comparator(compare))
    }

    /// Creates an empty heap ordered by a list of sort rules
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptySortDescriptors`] if no rules are given.
    pub fn with_sort_descriptors<I>(descriptors: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = SortDescriptor<T>>,
    {
        Ok(Self::with_policy(OrderingPolicy::sort_descriptors(
            descriptors,
        )?))
    }

    /// Builds a heap from existing elements in O(n)
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_policy_heaps::binary::BinaryHeap;
    /// use rust_policy_heaps::ordering::OrderingPolicy;
    ///
    /// let heap = BinaryHeap::from_vec(OrderingPolicy::ascending(), vec![5, 3, 8, 1, 9, 2]);
    /// assert_eq!(heap.into_sorted_vec(), vec![1, 2, 3, 5, 8, 9]);
    /// ```
    pub fn from_vec(policy: OrderingPolicy<T>, data: Vec<T>) -> Self {
        let mut heap = Self { data, policy };
        heap.heapify();
        heap
    }

    /// Builds a heap from a copy of `items` in O(n)
    pub fn from_slice(policy: OrderingPolicy<T>, items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::from_vec(policy, items.to_vec())
    }

    /// The ordering policy this heap was built with
    pub fn policy(&self) -> &OrderingPolicy<T> {
        &self.policy
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        log::trace!(
            "reserved heap storage: len={} capacity={}",
            self.data.len(),
            self.data.capacity()
        );
    }

    /// Releases unused storage capacity
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the top element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Removes the top element, discarding it
    pub fn remove_top(&mut self) {
        let _ = self.pop();
    }

    /// Replaces the top element with `item` and returns the previous top
    ///
    /// This costs one downward sift instead of the two sifts of a pop
    /// followed by a push. On an empty heap `item` is pushed and `None`
    /// is returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_policy_heaps::binary::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(heap.replace_top(10), Some(1));
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    pub fn replace_top(&mut self, item: T) -> Option<T> {
        if self.data.is_empty() {
            self.push(item);
            return None;
        }

        let previous = mem::replace(&mut self.data[0], item);
        self.sift_down(0);
        Some(previous)
    }

    /// Replaces the whole contents with `items` and re-establishes the heap
    /// in a single O(n) pass
    pub fn set_from_vec(&mut self, items: Vec<T>) {
        self.data = items;
        self.heapify();
    }

    /// Adds every element of `items` to the heap
    ///
    /// Large batches are merged with a full rebuild; small ones are sifted in
    /// one at a time.
    pub fn append_vec(&mut self, mut items: Vec<T>) {
        let start = self.data.len();
        self.data.append(&mut items);

        if self.data.len() - start > start {
            self.heapify();
        } else {
            for index in start..self.data.len() {
                self.sift_up(index);
            }
        }
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage order (not sorted)
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The elements in storage order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copies the elements out in storage order
    ///
    /// The copy is independent of the heap and stays valid across later
    /// mutations.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Consumes the heap, returning its storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in policy order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Checks that no parent ranks after one of its children
    pub fn is_valid_heap(&self) -> bool {
        (1..self.data.len()).all(|child| {
            let parent = (child - 1) / 2;
            self.policy.compare(&self.data[parent], &self.data[child]) != Ordering::Greater
        })
    }

    /// Returns true if the element at `a` ranks strictly before the one at `b`
    #[inline]
    fn ranks_before(&self, a: usize, b: usize) -> bool {
        self.policy.compare(&self.data[a], &self.data[b]) == Ordering::Less
    }

    /// Move element at index up to maintain heap property
    ///
    /// Returns true if the element moved.
    fn sift_up(&mut self, mut index: usize) -> bool {
        let start = index;
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.ranks_before(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index != start
    }

    /// Move element at index down to maintain heap property
    ///
    /// Returns true if the element moved.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let start = index;
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.ranks_before(left, smallest) {
                smallest = left;
            }
            if right < len && self.ranks_before(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
        index != start
    }

    /// Restores the heap property around an element that was overwritten in
    /// place. The new element may belong either below or above `index`.
    fn restore(&mut self, index: usize) {
        if !self.sift_down(index) {
            self.sift_up(index);
        }
    }

    /// Bottom-up heap construction over the whole storage
    fn heapify(&mut self) {
        let len = self.data.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
        log::trace!("heapified {} elements", len);
    }
}

impl<T: PartialEq> BinaryHeap<T> {
    fn position(&self, item: &T) -> Option<usize> {
        self.data.iter().position(|candidate| candidate == item)
    }

    /// Returns true if some element equals `item`
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    /// Removes the first element equal to `item` and returns it
    ///
    /// The last element takes the vacated slot and is sifted down, or up if
    /// it could not move down. Returns `None`, leaving the heap unchanged,
    /// when no element is equal.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let Some(index) = self.position(item) else {
            log::debug!("remove: no equal element among {} in heap", self.data.len());
            return None;
        };

        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.restore(index);
        }
        Some(removed)
    }

    /// Replaces the first element equal to `old` with `new` in place and
    /// returns the element that was replaced
    ///
    /// When nothing equals `old`, `new` is dropped and the heap is unchanged.
    pub fn replace(&mut self, old: &T, new: T) -> Option<T> {
        let Some(index) = self.position(old) else {
            log::debug!("replace: no equal element among {} in heap", self.data.len());
            return None;
        };

        let previous = mem::replace(&mut self.data[index], new);
        self.restore(index);
        Some(previous)
    }

    /// Returns true if both heaps hold the same elements with the same
    /// multiplicities
    ///
    /// Storage arrangement and ordering policy are ignored: a min-heap and a
    /// max-heap over the same values are equal.
    pub fn is_equal_to_heap(&self, other: &BinaryHeap<T>) -> bool {
        if self.data.len() != other.data.len() {
            return false;
        }

        let mut matched = vec![false; other.data.len()];
        self.data.iter().all(|item| {
            let found = other
                .data
                .iter()
                .enumerate()
                .position(|(j, candidate)| !matched[j] && candidate == item);
            match found {
                Some(j) => {
                    matched[j] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<T> Heap<T> for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }

    fn replace_top(&mut self, item: T) -> Option<T> {
        BinaryHeap::replace_top(self, item)
    }

    fn merge(&mut self, other: Self) {
        self.append_vec(other.data);
    }
}

impl<T: PartialEq> SearchableHeap<T> for BinaryHeap<T> {
    fn contains(&self, item: &T) -> bool {
        BinaryHeap::contains(self, item)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        BinaryHeap::remove(self, item)
    }

    fn replace(&mut self, old: &T, new: T) -> Option<T> {
        BinaryHeap::replace(self, old, new)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinaryHeap<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for BinaryHeap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to_heap(other)
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(OrderingPolicy::ascending(), iter.into_iter().collect())
    }
}

impl<T> Extend<T> for BinaryHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_vec(iter.into_iter().collect());
    }
}

impl<'a, T> IntoIterator for &'a BinaryHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BinaryHeap<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    /// Iterates in storage order; see
    /// [`into_iter_sorted`](BinaryHeap::into_iter_sorted) for policy order.
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
