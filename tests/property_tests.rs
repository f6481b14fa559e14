//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariant holds after every one of them, under each
//! kind of ordering policy.

use std::cmp::Ordering;

use proptest::prelude::*;
use rust_policy_heaps::{BinaryHeap, OrderingPolicy, SortDescriptor, SortDirection};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Remove(i32),
    Replace(i32, i32),
    ReplaceTop(i32),
    SetFrom(Vec<i32>),
    Append(Vec<i32>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (-50i32..50).prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => (-50i32..50).prop_map(Op::Remove),
        2 => ((-50i32..50), (-50i32..50)).prop_map(|(old, new)| Op::Replace(old, new)),
        1 => (-50i32..50).prop_map(Op::ReplaceTop),
        1 => prop::collection::vec(-50i32..50, 0..20).prop_map(Op::SetFrom),
        1 => prop::collection::vec(-50i32..50, 0..20).prop_map(Op::Append),
    ]
}

/// One policy of each kind; the comparator and descriptor policies both
/// produce ties between unequal values
fn policies() -> Vec<OrderingPolicy<i32>> {
    vec![
        OrderingPolicy::ascending(),
        OrderingPolicy::descending(),
        OrderingPolicy::comparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs())),
        OrderingPolicy::sort_descriptors(vec![
            SortDescriptor::by_key(|v: &i32| v.rem_euclid(3), SortDirection::Descending),
            SortDescriptor::by_key(|v: &i32| v.abs(), SortDirection::Ascending),
        ])
        .unwrap(),
    ]
}

/// Sort a multiset model so two models can be compared
fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

/// Test that every mutation leaves a valid heap holding the expected multiset
fn test_operation_invariant(
    policy: OrderingPolicy<i32>,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut heap = BinaryHeap::with_policy(policy.clone());
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Push(value) => {
                heap.push(value);
                model.push(value);
            }
            Op::Pop => {
                let expected_top = model
                    .iter()
                    .copied()
                    .min_by(|a, b| policy.compare(a, b));
                let popped = heap.pop();
                prop_assert_eq!(popped.is_some(), expected_top.is_some());
                if let (Some(popped), Some(expected)) = (popped, expected_top) {
                    // Ties under the policy may pop any of the tied values
                    prop_assert_eq!(policy.compare(&popped, &expected), Ordering::Equal);
                    let pos = model.iter().position(|&v| v == popped).unwrap();
                    model.swap_remove(pos);
                }
            }
            Op::Remove(value) => {
                let removed = heap.remove(&value);
                match model.iter().position(|&v| v == value) {
                    Some(pos) => {
                        model.swap_remove(pos);
                        prop_assert_eq!(removed, Some(value));
                    }
                    None => prop_assert_eq!(removed, None),
                }
            }
            Op::Replace(old, new) => {
                let replaced = heap.replace(&old, new);
                match model.iter().position(|&v| v == old) {
                    Some(pos) => {
                        model[pos] = new;
                        prop_assert_eq!(replaced, Some(old));
                    }
                    None => prop_assert_eq!(replaced, None),
                }
            }
            Op::ReplaceTop(value) => {
                let previous = heap.replace_top(value);
                if let Some(previous) = previous {
                    let pos = model.iter().position(|&v| v == previous).unwrap();
                    model.swap_remove(pos);
                }
                model.push(value);
            }
            Op::SetFrom(values) => {
                heap.set_from_vec(values.clone());
                model = values;
            }
            Op::Append(values) => {
                heap.append_vec(values.clone());
                model.extend(values);
            }
        }

        prop_assert!(heap.is_valid_heap(), "heap invariant broken: {:?}", heap);
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
        prop_assert_eq!(sorted(heap.to_vec()), sorted(model.clone()));
    }

    Ok(())
}

/// Test that popping everything yields policy order, and that feeding that
/// output through a fresh heap reproduces it
fn test_pop_order_round_trip(
    policy: OrderingPolicy<i32>,
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let heap = BinaryHeap::from_vec(policy.clone(), values.clone());
    prop_assert!(heap.is_valid_heap());

    let first = heap.into_sorted_vec();
    prop_assert_eq!(first.len(), values.len());
    for pair in first.windows(2) {
        prop_assert_ne!(policy.compare(&pair[0], &pair[1]), Ordering::Greater);
    }

    let mut again = BinaryHeap::with_policy(policy.clone());
    for value in &first {
        again.push(*value);
    }
    let second = again.into_sorted_vec();
    // Tied elements may come back in a different order, never a different rank
    for (a, b) in first.iter().zip(&second) {
        prop_assert_eq!(policy.compare(a, b), Ordering::Equal);
    }
    prop_assert_eq!(sorted(first), sorted(second));

    Ok(())
}

/// Test that bulk construction agrees with repeated pushes
fn test_bulk_matches_pushes(
    policy: OrderingPolicy<i32>,
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let bulk = BinaryHeap::from_vec(policy.clone(), values.clone());
    let mut pushed = BinaryHeap::with_policy(policy);
    for value in values {
        pushed.push(value);
    }

    prop_assert!(bulk.is_valid_heap());
    prop_assert!(bulk.is_equal_to_heap(&pushed));
    match (bulk.peek(), pushed.peek()) {
        (Some(a), Some(b)) => prop_assert_eq!(bulk.policy().compare(a, b), Ordering::Equal),
        (None, None) => {}
        _ => prop_assert!(false, "one heap empty, the other not"),
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_operations_keep_invariant(ops in prop::collection::vec(op_strategy(), 0..80)) {
        for policy in policies() {
            test_operation_invariant(policy, ops.clone())?;
        }
    }

    #[test]
    fn test_pop_order(values in prop::collection::vec(-100i32..100, 0..100)) {
        for policy in policies() {
            test_pop_order_round_trip(policy, values.clone())?;
        }
    }

    #[test]
    fn test_bulk_load(values in prop::collection::vec(-100i32..100, 0..100)) {
        for policy in policies() {
            test_bulk_matches_pushes(policy, values.clone())?;
        }
    }

    #[test]
    fn test_absent_removal_is_idempotent(
        values in prop::collection::vec(0i32..100, 0..50),
        absent in 100i32..200,
    ) {
        let mut heap = BinaryHeap::from(values.clone());
        let before = heap.to_vec();
        prop_assert_eq!(heap.remove(&absent), None);
        prop_assert!(!heap.contains(&absent));
        prop_assert_eq!(heap.to_vec(), before);
    }

    #[test]
    fn test_permutations_are_equal(
        values in prop::collection::vec(-20i32..20, 0..40),
        seed in any::<u64>(),
    ) {
        let mut shuffled = values.clone();
        // Deterministic Fisher-Yates driven by an LCG
        let mut state = seed;
        for i in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let j = (state >> 33) as usize % (i + 1);
            shuffled.swap(i, j);
        }

        let asc = BinaryHeap::from_vec(OrderingPolicy::ascending(), values.clone());
        let shuffled_asc = BinaryHeap::from_vec(OrderingPolicy::ascending(), shuffled.clone());
        let desc = BinaryHeap::from_vec(OrderingPolicy::descending(), shuffled);

        prop_assert!(asc.is_equal_to_heap(&shuffled_asc));
        prop_assert!(asc.is_equal_to_heap(&desc));

        let mut bigger = values;
        bigger.push(0);
        prop_assert!(!asc.is_equal_to_heap(&BinaryHeap::from(bigger)));
    }
}
