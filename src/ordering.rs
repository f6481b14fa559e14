//! Pluggable ordering policies
//!
//! An [`OrderingPolicy`] decides which of two elements ranks first. Heaps in
//! this crate only ever keep the element that ranks first at the top, so a
//! "max" heap is simply a heap whose policy reverses the natural order.
//!
//! Four strategies are supported:
//!
//! | Constructor | Ordering |
//! |-------------|----------|
//! | [`OrderingPolicy::ascending`] | `Ord`, smallest first |
//! | [`OrderingPolicy::descending`] | `Ord`, largest first |
//! | [`OrderingPolicy::comparator`] | caller-supplied three-way comparison |
//! | [`OrderingPolicy::sort_descriptors`] | ordered list of [`SortDescriptor`] rules |
//!
//! Comparators are taken as authoritative. The heap never checks that they
//! describe a consistent total order; an inconsistent comparator yields an
//! arbitrary (but still well-formed) pop order.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_policy_heaps::ordering::{OrderingPolicy, SortDescriptor, SortDirection};
//!
//! let by_len_then_text = OrderingPolicy::sort_descriptors(vec![
//!     SortDescriptor::by_key(|s: &String| s.len(), SortDirection::Ascending),
//!     SortDescriptor::by(|a: &String, b: &String| a.cmp(b), SortDirection::Descending),
//! ])
//! .unwrap();
//!
//! let short = "ab".to_string();
//! let long = "abc".to_string();
//! assert_eq!(by_len_then_text.compare(&short, &long), Ordering::Less);
//! assert_eq!(by_len_then_text.compare(&"zz".to_string(), &short), Ordering::Less);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::traits::HeapError;

type CompareFn<T> = Rc<dyn Fn(&T, &T) -> Ordering>;

/// Direction applied to a comparison result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smaller values rank first
    #[default]
    Ascending,
    /// Larger values rank first
    Descending,
}

impl SortDirection {
    /// Applies this direction to an ascending comparison result
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Returns the opposite direction
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A single rule of a multi-key ordering
///
/// Each descriptor carries a comparison on the element (usually derived from
/// a key extractor) and its own direction.
pub struct SortDescriptor<T> {
    compare: CompareFn<T>,
    direction: SortDirection,
}

impl<T> SortDescriptor<T> {
    /// Orders elements by a key extracted from each element
    pub fn by_key<K, F>(key: F, direction: SortDirection) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + 'static,
    {
        Self {
            compare: Rc::new(move |a: &T, b: &T| key(a).cmp(&key(b))),
            direction,
        }
    }

    /// Orders elements with a custom comparison rule
    pub fn by<F>(compare: F, direction: SortDirection) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self {
            compare: Rc::new(compare),
            direction,
        }
    }

    /// The direction this rule sorts in
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Returns the same rule with its direction flipped
    pub fn reversed(self) -> Self {
        Self {
            compare: self.compare,
            direction: self.direction.reverse(),
        }
    }

    /// Compares two elements under this rule, direction applied
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply((self.compare)(a, b))
    }
}

impl<T> Clone for SortDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for SortDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortDescriptor")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

enum Policy<T> {
    Natural {
        direction: SortDirection,
        compare: fn(&T, &T) -> Ordering,
    },
    Comparator(CompareFn<T>),
    SortDescriptors(Rc<[SortDescriptor<T>]>),
}

/// Three-way comparison strategy used by a heap
///
/// A policy is immutable once built. Cloning is cheap: function objects are
/// shared, not copied.
pub struct OrderingPolicy<T>(Policy<T>);

impl<T: Ord> OrderingPolicy<T> {
    /// Natural order, smallest element first
    pub fn ascending() -> Self {
        OrderingPolicy(Policy::Natural {
            direction: SortDirection::Ascending,
            compare: <T as Ord>::cmp,
        })
    }

    /// Natural order, largest element first
    pub fn descending() -> Self {
        OrderingPolicy(Policy::Natural {
            direction: SortDirection::Descending,
            compare: <T as Ord>::cmp,
        })
    }
}

fn partial_or_equal<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<T: PartialOrd> OrderingPolicy<T> {
    /// Partial natural order, smallest first
    ///
    /// Incomparable pairs (such as a NaN against anything) compare as equal.
    pub fn partial_ascending() -> Self {
        OrderingPolicy(Policy::Natural {
            direction: SortDirection::Ascending,
            compare: partial_or_equal::<T>,
        })
    }

    /// Partial natural order, largest first
    pub fn partial_descending() -> Self {
        OrderingPolicy(Policy::Natural {
            direction: SortDirection::Descending,
            compare: partial_or_equal::<T>,
        })
    }
}

impl<T> OrderingPolicy<T> {
    /// Orders elements with a caller-supplied comparison
    ///
    /// `Ordering::Less` means the first argument ranks closer to the top.
    pub fn comparator<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        OrderingPolicy(Policy::Comparator(Rc::new(compare)))
    }

    /// Orders elements by a list of rules applied in sequence
    ///
    /// The first rule that does not report `Equal` decides. Elements equal
    /// under every rule compare `Equal`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::EmptySortDescriptors`] if no rules are given.
    pub fn sort_descriptors<I>(descriptors: I) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = SortDescriptor<T>>,
    {
        let rules: Rc<[SortDescriptor<T>]> = descriptors.into_iter().collect();
        if rules.is_empty() {
            return Err(HeapError::EmptySortDescriptors);
        }
        Ok(OrderingPolicy(Policy::SortDescriptors(rules)))
    }

    /// Compares two elements
    ///
    /// This is a pure function; heaps call it as often and in whatever order
    /// their restoration walks need.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.0 {
            Policy::Natural { direction, compare } => direction.apply(compare(a, b)),
            Policy::Comparator(compare) => compare(a, b),
            Policy::SortDescriptors(rules) => rules
                .iter()
                .map(|rule| rule.compare(a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal),
        }
    }

    /// Returns a policy that ranks elements in the opposite order
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        match &self.0 {
            Policy::Natural { direction, compare } => OrderingPolicy(Policy::Natural {
                direction: direction.reverse(),
                compare: *compare,
            }),
            Policy::Comparator(compare) => {
                let compare = Rc::clone(compare);
                OrderingPolicy(Policy::Comparator(Rc::new(move |a: &T, b: &T| {
                    compare(a, b).reverse()
                })))
            }
            Policy::SortDescriptors(rules) => OrderingPolicy(Policy::SortDescriptors(
                rules.iter().cloned().map(SortDescriptor::reversed).collect(),
            )),
        }
    }
}

impl<T> Clone for OrderingPolicy<T> {
    fn clone(&self) -> Self {
        OrderingPolicy(match &self.0 {
            Policy::Natural { direction, compare } => Policy::Natural {
                direction: *direction,
                compare: *compare,
            },
            Policy::Comparator(compare) => Policy::Comparator(Rc::clone(compare)),
            Policy::SortDescriptors(rules) => Policy::SortDescriptors(Rc::clone(rules)),
        })
    }
}

impl<T: Ord> Default for OrderingPolicy<T> {
    fn default() -> Self {
        Self::ascending()
    }
}

impl<T> fmt::Debug for OrderingPolicy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Policy::Natural { direction, .. } => {
                f.debug_tuple("Natural").field(direction).finish()
            }
            Policy::Comparator(_) => f.write_str("Comparator"),
            Policy::SortDescriptors(rules) => {
                f.debug_tuple("SortDescriptors").field(&rules.len()).finish()
            }
        }
    }
}
