//! Policy-Ordered Heaps for Rust
//!
//! This crate provides an array-backed binary heap whose ordering is chosen
//! at construction time rather than fixed by the element type.
//!
//! # Features
//!
//! - **Pluggable ordering**: natural ascending or descending order, a
//!   comparator closure, or an ordered list of sort rules (see [`ordering`])
//! - **O(n) bulk construction** by bottom-up heapify
//! - **Lookup by value**: `contains`, `remove` and in-place `replace` locate
//!   elements with `PartialEq`, independently of the ordering
//! - **Multiset equality**: two heaps are equal when they hold the same
//!   elements, whatever their internal layout or ordering policy
//!
//! # Example
//!
//! ```rust
//! use rust_policy_heaps::binary::BinaryHeap;
//! use rust_policy_heaps::ordering::{SortDescriptor, SortDirection};
//!
//! #[derive(Debug, PartialEq)]
//! struct Ticket {
//!     id: u32,
//!     severity: u8,
//! }
//!
//! let mut queue = BinaryHeap::with_sort_descriptors(vec![
//!     SortDescriptor::by_key(|t: &Ticket| t.severity, SortDirection::Descending),
//!     SortDescriptor::by_key(|t: &Ticket| t.id, SortDirection::Ascending),
//! ])
//! .unwrap();
//!
//! queue.push(Ticket { id: 7, severity: 1 });
//! queue.push(Ticket { id: 3, severity: 4 });
//! queue.push(Ticket { id: 2, severity: 4 });
//!
//! assert_eq!(queue.pop().map(|t| t.id), Some(2));
//! assert_eq!(queue.pop().map(|t| t.id), Some(3));
//! assert_eq!(queue.pop().map(|t| t.id), Some(7));
//! ```

pub mod binary;
pub mod ordering;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use ordering::{OrderingPolicy, SortDescriptor, SortDirection};
pub use traits::{Heap, HeapError, SearchableHeap};
