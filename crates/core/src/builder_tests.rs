// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::catalog::Catalog;
use crate::term::{GroupKind, Oid};
use chrono::{TimeZone, Utc};

fn catalog() -> Catalog {
    Catalog::new()
        .with_type(
            "Story",
            None,
            ["Name", "Owners", "Scope", "Status", "Estimate", "CreateDateUTC"],
        )
        .with_type("Member", None, ["Name"])
        .with_type("Scope", None, ["Name"])
        .with_asset("admin", Oid::new("Member", 20))
        .with_list_value("StoryStatus", "Done", Oid::new("StoryStatus", 135))
}

fn only_term(builder: &FilterBuilder<'_>) -> FilterTerm {
    assert_eq!(builder.root().len(), 1, "expected exactly one term");
    builder.root().terms()[0].clone()
}

#[test]
fn empty_inputs_add_nothing() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder.simple::<String>("Name", &[]).unwrap();
    builder.relation("Scope", &[]).unwrap();
    builder.multi_relation("Owners", &[]).unwrap();
    builder.list_relation("Status", "StoryStatus", &[]).unwrap();
    builder.searcher("Estimate", &NullableDoubleSearcher::new()).unwrap();
    assert!(!builder.root().has_terms());
}

#[test]
fn empty_inputs_skip_attribute_resolution() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    assert!(builder.simple::<String>("NoSuchAttribute", &[]).is_ok());
}

#[test]
fn simple_equals_any_of_values() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder
        .simple("Name", &["Login".to_string(), "Logout".to_string()])
        .unwrap();
    assert_eq!(only_term(&builder).token(), "Name='Login','Logout'");
}

#[test]
fn relation_resolves_each_id() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder
        .relation("Scope", &["Scope:1001".to_string(), "Scope:0".to_string()])
        .unwrap();
    assert_eq!(only_term(&builder).token(), "Scope='Scope:1001','Scope:0'");
}

#[test]
fn relation_propagates_resolution_failure() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    let err = builder.relation("Scope", &["nobody".to_string()]).unwrap_err();
    assert!(matches!(err, Error::UnresolvedIdentifier(_)));
    assert!(!builder.root().has_terms());
}

#[test]
fn unknown_attribute_fails() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    let err = builder.simple("Nme", &["x".to_string()]).unwrap_err();
    assert!(matches!(err, Error::UnknownAttribute { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Multi-relation: `None` means "related to nobody"
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn multi_relation_values_or_nobody() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder
        .multi_relation(
            "Owners",
            &[Some("admin".to_string()), Some("Member:21".to_string()), None],
        )
        .unwrap();

    let FilterTerm::Group(group) = only_term(&builder) else {
        panic!("expected an OR group");
    };
    assert_eq!(group.kind(), GroupKind::Or);
    assert_eq!(group.len(), 2);
    assert_eq!(group.token(), "Owners='Member:20','Member:21'|-Owners");
}

#[test]
fn multi_relation_only_values() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder
        .multi_relation("Owners", &[Some("admin".to_string())])
        .unwrap();
    assert_eq!(builder.root().token(), "(Owners='Member:20')");
}

#[test]
fn multi_relation_only_nobody() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder.multi_relation("Owners", &[None]).unwrap();
    assert_eq!(builder.root().token(), "(-Owners)");
}

// ─────────────────────────────────────────────────────────────────────────────
// List relation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_relation_resolves_names_and_null() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder
        .list_relation("Status", "StoryStatus", &[Some("Done".to_string()), None])
        .unwrap();
    assert_eq!(only_term(&builder).token(), "Status='StoryStatus:135','NULL'");
}

#[test]
fn list_relation_unknown_name_fails() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    let err = builder
        .list_relation("Status", "StoryStatus", &[Some("Blocked".to_string())])
        .unwrap_err();
    assert!(matches!(err, Error::UnknownListValue { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparisons
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn comparison_existence_has_no_operand() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder
        .comparison("Estimate", Operator::Exists, Some(Operand::Number(3.0)))
        .unwrap();
    assert_eq!(only_term(&builder).token(), "+Estimate");
}

#[test]
fn comparison_without_value_fails() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    assert!(matches!(
        builder.comparison("Estimate", Operator::GreaterThan, None),
        Err(Error::InvalidOperation(_))
    ));
}

#[test]
fn searcher_terms_are_anded() {
    let catalog = catalog();
    let mut estimate = NullableDoubleSearcher::new();
    estimate.range(Some(1.0), Some(5.0)).unwrap();

    let mut builder = FilterBuilder::new("Story", &catalog);
    builder.searcher("Estimate", &estimate).unwrap();
    assert_eq!(builder.root().token(), "Estimate>='1';Estimate<='5'");
}

#[test]
fn date_searcher_terms_are_anded() {
    let catalog = catalog();
    let mut created = DateSearcher::new();
    created
        .add_term(
            Operator::Equal,
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
        .unwrap();

    let mut builder = FilterBuilder::new("Story", &catalog);
    builder.searcher("CreateDateUTC", &created).unwrap();
    assert_eq!(
        builder.root().token(),
        "CreateDateUTC>='2024-01-02T03:04:05.000';CreateDateUTC<'2024-01-02T03:04:06.000'"
    );
}

#[test]
fn generic_searcher_terms_are_anded() {
    let catalog = catalog();
    let mut estimate = ComparisonSearcher::new();
    estimate.add_term(Operator::GreaterThan, 2.0).unwrap();

    let mut builder = FilterBuilder::new("Story", &catalog);
    builder.searcher("Estimate", &estimate).unwrap();
    assert_eq!(builder.root().token(), "Estimate>'2'");
}

#[test]
fn token_is_appended_verbatim() {
    let catalog = catalog();
    let mut builder = FilterBuilder::new("Story", &catalog);
    builder.token("AssetState!='Dead'");
    assert_eq!(
        builder.into_root().terms(),
        [FilterTerm::Token("AssetState!='Dead'".to_string())]
    );
}
