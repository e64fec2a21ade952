//! Unit tests for Set.
//!
//! These tests walk through the public API and its edge cases, including
//! the reference scenarios for the set algebra.

use rstest::rstest;
use setkit::{Set, set};

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: Set<i32> = Set::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: Set<i32> = Set::default();
    assert!(set.is_empty());
}

#[rstest]
#[case(vec![], 0)]
#[case(vec![1], 1)]
#[case(vec![1, 1, 1], 1)]
#[case(vec![3, 1, 2, 3, 1], 3)]
fn test_from_elements_counts_unique_values(#[case] elements: Vec<i32>, #[case] expected: usize) {
    let set = Set::from_elements(elements);
    assert_eq!(set.len(), expected);
}

#[rstest]
fn test_collect_from_iterator() {
    let set: Set<char> = "hello".chars().collect();
    assert_eq!(set, set!['h', 'e', 'l', 'o']);
}

// =============================================================================
// Membership
// =============================================================================

#[rstest]
fn test_insert_is_idempotent() {
    let mut set = set![1, 2];
    set.insert(3);
    let after_first = set.clone();
    set.insert(3);

    assert_eq!(set, after_first);
    assert_eq!(set.len(), 3);
}

#[rstest]
fn test_remove_absent_leaves_set_unchanged() {
    let mut set = set!["a", "b"];
    set.remove("z");
    assert_eq!(set, set!["a", "b"]);
}

#[rstest]
fn test_remove_on_empty_set() {
    let mut set: Set<i32> = Set::new();
    assert!(!set.remove(&1));
    assert!(set.is_empty());
}

#[rstest]
fn test_contains_with_borrowed_form() {
    let set = set!["alpha".to_string(), "beta".to_string()];
    assert!(set.contains("alpha"));
    assert!(!set.contains("gamma"));
}

#[rstest]
#[case(&[], true)]
#[case(&[1], true)]
#[case(&[1, 2, 3], true)]
#[case(&[1, 4], false)]
#[case(&[4], false)]
fn test_contains_all(#[case] query: &[i32], #[case] expected: bool) {
    let set = set![1, 2, 3];
    assert_eq!(set.contains_all(query), expected);
}

#[rstest]
#[case(&[], false)]
#[case(&[4, 5], false)]
#[case(&[4, 2], true)]
#[case(&[1, 2, 3], true)]
fn test_contains_any(#[case] query: &[i32], #[case] expected: bool) {
    let set = set![1, 2, 3];
    assert_eq!(set.contains_any(query), expected);
}

#[rstest]
fn test_contains_all_accepts_another_sets_elements() {
    let superset = set![1, 2, 3, 4];
    let subset = set![2, 4];
    assert!(superset.contains_all(subset.elements()));
    assert!(!subset.contains_all(superset.elements()));
}

// =============================================================================
// Elements, Length and Clear
// =============================================================================

#[rstest]
fn test_elements_visits_every_member_once() {
    let set = set![10, 20, 30];
    let mut visited: Vec<i32> = set.elements().copied().collect();
    visited.sort_unstable();
    assert_eq!(visited, vec![10, 20, 30]);
}

#[rstest]
fn test_len_then_clear() {
    let mut set = set![1, 2, 3];
    assert_eq!(set.len(), 3);
    set.clear();
    assert_eq!(set.len(), 0);
}

#[rstest]
fn test_set_is_usable_after_clear() {
    let mut set = set![1, 2, 3];
    set.clear();
    set.insert(4);
    assert_eq!(set, set![4]);
}

// =============================================================================
// Clone and Equality
// =============================================================================

#[rstest]
fn test_clone_is_independent() {
    let mut original = set![1, 2, 3];
    let mut copy = original.clone();

    copy.insert(4);
    copy.remove(&1);
    assert_eq!(original, set![1, 2, 3]);

    original.insert(5);
    assert_eq!(copy, set![2, 3, 4]);
}

#[rstest]
fn test_equality_ignores_insertion_order() {
    let forward = Set::from_elements(0..100);
    let backward = Set::from_elements((0..100).rev());
    assert_eq!(forward, backward);
}

#[rstest]
fn test_equality_ignores_capacity() {
    let mut roomy: Set<i32> = Set::with_capacity(1_000);
    roomy.insert(1);
    assert_eq!(roomy, set![1]);
}

#[rstest]
#[case(set![1, 2], set![1, 2, 3])]
#[case(set![1, 2, 3], set![1, 2, 4])]
#[case(set![], set![0])]
fn test_inequality(#[case] left: Set<i32>, #[case] right: Set<i32>) {
    assert_ne!(left, right);
    assert_ne!(right, left);
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[rstest]
fn test_scenario_remove_then_compare() {
    let mut set = set!["a", "b", "c"];
    set.remove("a");
    assert_eq!(set, set!["b", "c"]);
}

#[rstest]
fn test_scenario_union() {
    assert_eq!(set![1, 2].union(&set![2, 3]), set![1, 2, 3]);
}

#[rstest]
fn test_scenario_disjoint_intersection_is_empty() {
    let result = set![1, 2].intersection(&set![3]);
    assert_eq!(result, Set::new());
    assert!(result.is_empty());
}

#[rstest]
fn test_scenario_symmetric_difference() {
    assert_eq!(set![0, 2, 3].symmetric_difference(&set![0, 1, 2]), set![3, 1]);
}

#[rstest]
fn test_scenario_subset() {
    assert!(set!["x"].is_subset(&set!["x", "y"]));
    assert!(!set!["x", "y"].is_subset(&set!["x"]));
}

#[rstest]
fn test_scenario_len_and_clear() {
    let mut set = set![1, 2, 3];
    assert_eq!(set.len(), 3);
    set.clear();
    assert_eq!(set.len(), 0);
}

// =============================================================================
// Set Algebra with Empty Operands
// =============================================================================

#[rstest]
fn test_algebra_with_empty_operands() {
    let empty: Set<i32> = Set::new();
    let set = set![1, 2];

    assert_eq!(empty.union(&empty), empty);
    assert_eq!(set.union(&empty), set);
    assert_eq!(set.intersection(&empty), empty);
    assert_eq!(set.difference(&empty), set);
    assert_eq!(empty.difference(&set), empty);
    assert_eq!(set.symmetric_difference(&empty), set);
    assert!(empty.is_subset(&set));
    assert!(empty.is_subset(&empty));
}

#[rstest]
fn test_difference_only_keeps_receiver_elements() {
    let result = set![1, 2, 3].difference(&set![3, 4, 5]);
    assert_eq!(result, set![1, 2]);
    assert!(!result.contains(&4));
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn test_to_vec_contains_each_element_once() {
    let set = set!["a", "b", "c"];
    let mut sequence = set.to_vec();
    sequence.sort_unstable();
    assert_eq!(sequence, vec!["a", "b", "c"]);
}

#[rstest]
fn test_to_vec_round_trip() {
    let set = Set::from_elements(0..32);
    assert_eq!(Set::from_elements(set.to_vec()), set);
}

#[rstest]
fn test_to_vec_of_empty_set() {
    let set: Set<i32> = Set::new();
    assert!(set.to_vec().is_empty());
}

// =============================================================================
// Custom Element Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Point {
    x: i32,
    y: i32,
}

#[rstest]
fn test_struct_elements() {
    let mut set = set![Point { x: 0, y: 0 }, Point { x: 1, y: 2 }];
    assert!(!set.insert(Point { x: 1, y: 2 }));
    assert!(set.contains(&Point { x: 0, y: 0 }));
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_map_to_projection() {
    let points = set![Point { x: 0, y: 1 }, Point { x: 0, y: 2 }, Point { x: 3, y: 2 }];
    let columns = points.map(|point: &Point| point.x);
    assert_eq!(columns, set![0, 3]);
}
