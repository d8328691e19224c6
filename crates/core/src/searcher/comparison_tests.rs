// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn searcher(terms: &[(Operator, i32)]) -> ComparisonSearcher<i32> {
    let mut searcher = ComparisonSearcher::new();
    for (op, value) in terms {
        searcher.add_term(*op, *value).unwrap();
    }
    searcher
}

// ─────────────────────────────────────────────────────────────────────────────
// Bound narrowing
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    greater_keeps_larger = { Operator::GreaterThan, 3, 7, 7 },
    greater_ignores_looser = { Operator::GreaterThan, 7, 3, 7 },
    greater_or_equal_keeps_larger = { Operator::GreaterThanOrEqual, 1, 4, 4 },
    less_keeps_smaller = { Operator::LessThan, 9, 2, 2 },
    less_ignores_looser = { Operator::LessThan, 2, 9, 2 },
    less_or_equal_keeps_smaller = { Operator::LessThanOrEqual, 8, 5, 5 },
)]
fn repeated_bound_keeps_tighter(op: Operator, first: i32, second: i32, expected: i32) {
    let s = searcher(&[(op, first), (op, second)]);
    assert_eq!(s.terms(), vec![(op, expected)]);
}

#[parameterized(
    less_or_equal_wider = { 5, 5, Operator::LessThan, 5 },
    less_or_equal_above = { 5, 9, Operator::LessThan, 5 },
    less_or_equal_tighter = { 5, 3, Operator::LessThanOrEqual, 3 },
)]
fn optimize_upper_pair(less: i32, less_or_equal: i32, kept_op: Operator, kept: i32) {
    let s = searcher(&[
        (Operator::LessThan, less),
        (Operator::LessThanOrEqual, less_or_equal),
    ]);
    assert_eq!(s.terms(), vec![(kept_op, kept)]);
}

#[parameterized(
    greater_or_equal_wider = { 5, 5, Operator::GreaterThan, 5 },
    greater_or_equal_below = { 5, 2, Operator::GreaterThan, 5 },
    greater_or_equal_tighter = { 5, 6, Operator::GreaterThanOrEqual, 6 },
)]
fn optimize_lower_pair(greater: i32, greater_or_equal: i32, kept_op: Operator, kept: i32) {
    let s = searcher(&[
        (Operator::GreaterThan, greater),
        (Operator::GreaterThanOrEqual, greater_or_equal),
    ]);
    assert_eq!(s.terms(), vec![(kept_op, kept)]);
}

#[test]
fn optimized_terms_never_looser_than_any_added_bound() {
    let lows = [(Operator::GreaterThan, 3), (Operator::GreaterThanOrEqual, 4), (Operator::GreaterThan, 1)];
    let highs = [(Operator::LessThanOrEqual, 10), (Operator::LessThan, 12), (Operator::LessThan, 10)];

    let mut s = ComparisonSearcher::new();
    for (op, value) in lows.iter().chain(highs.iter()) {
        s.add_term(*op, *value).unwrap();
    }

    let terms = s.terms();
    let lower: Vec<_> = terms
        .iter()
        .filter(|(op, _)| matches!(op, Operator::GreaterThan | Operator::GreaterThanOrEqual))
        .collect();
    let upper: Vec<_> = terms
        .iter()
        .filter(|(op, _)| matches!(op, Operator::LessThan | Operator::LessThanOrEqual))
        .collect();

    assert_eq!(lower, vec![&(Operator::GreaterThanOrEqual, 4)]);
    assert_eq!(upper, vec![&(Operator::LessThan, 10)]);
}

#[test]
fn terms_read_does_not_mutate() {
    let s = searcher(&[(Operator::LessThan, 5), (Operator::LessThanOrEqual, 5)]);
    assert_eq!(s.terms().len(), 1);
    assert!(s.contains(Operator::LessThanOrEqual));
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage errors
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    exists_then_not_exists = { Operator::Exists, Operator::NotExists },
    not_exists_then_exists = { Operator::NotExists, Operator::Exists },
)]
fn existence_operators_are_exclusive(first: Operator, second: Operator) {
    let mut s = searcher(&[(first, 0)]);
    assert!(matches!(
        s.add_term(second, 0),
        Err(Error::InvalidOperation(_))
    ));
}

#[parameterized(
    equal = { Operator::Equal },
    not_equal = { Operator::NotEqual },
)]
fn equality_operator_only_once(op: Operator) {
    let mut s = searcher(&[(op, 1)]);
    assert!(matches!(s.add_term(op, 2), Err(Error::InvalidOperation(_))));
}

#[test]
fn repeated_exists_is_accepted() {
    let mut s = searcher(&[(Operator::Exists, 0)]);
    assert!(s.add_term(Operator::Exists, 0).is_ok());
}

// ─────────────────────────────────────────────────────────────────────────────
// Range
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn range_adds_inclusive_bounds() {
    let mut s = ComparisonSearcher::new();
    s.range(2, 8).unwrap();
    assert_eq!(
        s.terms(),
        vec![
            (Operator::GreaterThanOrEqual, 2),
            (Operator::LessThanOrEqual, 8)
        ]
    );
}

#[test]
fn range_single_point_is_valid() {
    let mut s = ComparisonSearcher::new();
    assert!(s.range(4.5, 4.5).is_ok());
}

#[parameterized(
    ints = { 9, 1 },
    adjacent = { 2, 1 },
)]
fn range_inverted_fails(min: i32, max: i32) {
    let mut s = ComparisonSearcher::new();
    assert!(matches!(s.range(min, max), Err(Error::InvalidOperation(_))));
    assert!(s.is_empty());
}

#[test]
fn range_inverted_fails_for_strings() {
    let mut s = ComparisonSearcher::new();
    assert!(matches!(
        s.range("m".to_string(), "a".to_string()),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn clear_empties_terms() {
    let mut s = searcher(&[(Operator::Equal, 1), (Operator::LessThan, 3)]);
    s.clear();
    assert!(s.is_empty());
    assert!(s.terms().is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Documents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn deserialize_terms_and_range() {
    let s: ComparisonSearcher<i32> = serde_json::from_str(
        r#"[{"op": "greater_than", "value": 1}, {"min": 3, "max": 9}]"#,
    )
    .unwrap();
    assert_eq!(
        s.terms(),
        vec![
            (Operator::GreaterThanOrEqual, 3),
            (Operator::LessThanOrEqual, 9)
        ]
    );
}

#[test]
fn deserialize_rejects_invalid_combination() {
    let result: std::result::Result<ComparisonSearcher<i32>, _> = serde_json::from_str(
        r#"[{"op": "equal", "value": 1}, {"op": "equal", "value": 2}]"#,
    );
    assert!(result.unwrap_err().to_string().contains("only be specified once"));
}

#[parameterized(
    missing_value = { r#"[{"op": "equal"}]"#, "requires a value" },
    half_range = { r#"[{"min": 3}]"#, "both a minimum and a maximum" },
    mixed = { r#"[{"op": "equal", "value": 1, "max": 4}]"#, "not both" },
    empty = { r#"[{}]"#, "expected" },
    unknown_operator = { r#"[{"op": "around", "value": 1}]"#, "around" },
)]
fn deserialize_reports_malformed_entry(input: &str, message: &str) {
    let err = serde_json::from_str::<ComparisonSearcher<i32>>(input)
        .unwrap_err()
        .to_string();
    assert!(err.contains(message), "{err}");
}
