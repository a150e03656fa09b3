//! Tests for list construction, projection and traversal.

use church::{
    APPEND, ChurchError, DOUBLE, HEAD, IS_NIL, LIST_EQ, LIST_NODE, MAP, NIL, ONE, SUCC, SUMLIST,
    TAIL, THREE, TWO, Value, append, head, is_nil, list_eq, list_node, list_of, map, numeral,
    sum_list, tail, to_bool, to_int, to_values, to_vec,
};

fn list(items: &[u64]) -> Value {
    list_of(items.iter().map(|&k| numeral(k)))
}

fn ints(list: &Value) -> Vec<u64> {
    to_vec(list, to_int).unwrap()
}

fn truth(result: Result<Value, ChurchError>) -> bool {
    to_bool(&result.unwrap()).unwrap()
}

fn three_two_one() -> Value {
    list_node(&THREE, &list_node(&TWO, &list_node(&ONE, &NIL)))
}

// ============================================================================
// Construction and Projection
// ============================================================================

#[test]
fn test_list_round_trip() {
    assert_eq!(ints(&three_two_one()), vec![3, 2, 1]);
}

#[test]
fn test_list_of_matches_nested_nodes() {
    assert_eq!(ints(&list(&[3, 2, 1])), vec![3, 2, 1]);
    assert!(truth(list_eq(&list(&[3, 2, 1]), &three_two_one())));
}

#[test]
fn test_nil() {
    assert!(truth(is_nil(&NIL)));
    assert!(ints(&NIL).is_empty());
}

#[test]
fn test_node_is_not_nil() {
    assert!(!truth(is_nil(&three_two_one())));
    assert!(!truth(IS_NIL.apply(list_node(&ONE, &NIL))));
}

#[test]
fn test_head_and_tail() {
    let l = three_two_one();
    assert_eq!(to_int(&head(&l).unwrap()).unwrap(), 3);
    assert_eq!(ints(&tail(&l).unwrap()), vec![2, 1]);
}

#[test]
fn test_curried_projections() {
    let l = LIST_NODE.apply2(Value::clone(&TWO), Value::clone(&NIL)).unwrap();
    assert_eq!(to_int(&HEAD.apply(l.clone()).unwrap()).unwrap(), 2);
    assert!(truth(IS_NIL.apply(TAIL.apply(l).unwrap())));
}

#[test]
fn test_to_values_keeps_elements() {
    let values = to_values(&three_two_one()).unwrap();
    assert_eq!(values.len(), 3);
    assert!(values[0].ptr_eq(&THREE));
    assert!(values[2].ptr_eq(&ONE));
}

#[test]
fn test_consing_leaves_tail_intact() {
    let base = list(&[2, 1]);
    let longer = list_node(&THREE, &base);
    assert_eq!(ints(&longer), vec![3, 2, 1]);
    assert_eq!(ints(&base), vec![2, 1]);
}

// ============================================================================
// Sum and Map
// ============================================================================

#[test]
fn test_sum_list() {
    assert_eq!(to_int(&sum_list(&three_two_one()).unwrap()).unwrap(), 6);
    assert_eq!(
        to_int(&SUMLIST.apply(list(&[10, 20, 30])).unwrap()).unwrap(),
        60
    );
}

#[test]
fn test_sum_of_nil_is_zero() {
    assert_eq!(to_int(&sum_list(&NIL).unwrap()).unwrap(), 0);
}

#[test]
fn test_map_double() {
    let doubled = map(&DOUBLE, &three_two_one()).unwrap();
    assert_eq!(ints(&doubled), vec![6, 4, 2]);
    assert_eq!(to_int(&sum_list(&doubled).unwrap()).unwrap(), 12);
}

#[test]
fn test_map_nil() {
    let mapped = MAP.apply2(Value::clone(&SUCC), Value::clone(&NIL)).unwrap();
    assert!(truth(is_nil(&mapped)));
}

#[test]
fn test_map_partial_application() {
    let increment_all = MAP.apply(Value::clone(&SUCC)).unwrap();
    assert_eq!(ints(&increment_all.apply(list(&[0, 4])).unwrap()), vec![1, 5]);
    assert_eq!(ints(&increment_all.apply(list(&[9])).unwrap()), vec![10]);
}

// ============================================================================
// Append
// ============================================================================

#[test]
fn test_append() {
    let joined = append(&list(&[1, 2]), &list(&[3, 4, 5])).unwrap();
    assert_eq!(ints(&joined), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_append_with_nil() {
    assert_eq!(ints(&append(&NIL, &list(&[7])).unwrap()), vec![7]);
    assert_eq!(ints(&append(&list(&[7]), &NIL).unwrap()), vec![7]);
    assert!(ints(&APPEND.apply2(Value::clone(&NIL), Value::clone(&NIL)).unwrap()).is_empty());
}

#[test]
fn test_append_leaves_operands_usable() {
    let left = list(&[1]);
    let right = list(&[2]);
    let _ = append(&left, &right).unwrap();
    assert_eq!(ints(&left), vec![1]);
    assert_eq!(ints(&right), vec![2]);
}

// ============================================================================
// Structural Equality
// ============================================================================

#[test]
fn test_list_eq_equal_lists() {
    assert!(truth(list_eq(&list(&[1, 2, 3]), &list(&[1, 2, 3]))));
    assert!(truth(list_eq(&NIL, &NIL)));
}

#[test]
fn test_list_eq_different_elements() {
    assert!(!truth(list_eq(&list(&[1, 2, 3]), &list(&[1, 5, 3]))));
}

#[test]
fn test_list_eq_different_lengths() {
    assert!(!truth(list_eq(&list(&[1, 2]), &list(&[1, 2, 3]))));
    assert!(!truth(list_eq(&list(&[1, 2, 3]), &list(&[1, 2]))));
    assert!(!truth(LIST_EQ.apply2(Value::clone(&NIL), list(&[0]))));
    assert!(!truth(list_eq(&list(&[0]), &NIL)));
}
