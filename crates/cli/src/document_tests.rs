// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    story = { r#"{"entity": "story"}"#, EntityType::Story },
    kebab = { r#"{"entity": "primary-workitem"}"#, EntityType::PrimaryWorkitem },
    upper = { r#"{"entity": "Tracked_Epic"}"#, EntityType::TrackedEpic },
    conversation = { r#"{"entity": "conversation", "mentions": [null]}"#, EntityType::Conversation },
)]
fn test_from_json_entity(input: &str, expected: EntityType) {
    let filter = AnyFilter::from_json(input).unwrap();
    assert_eq!(filter.as_filter().entity_type(), expected);
}

#[test]
fn test_from_json_carries_fields() {
    let filter = AnyFilter::from_json(
        r#"{"entity": "defect", "defect_type": ["Regression"], "order_by": ["name"]}"#,
    )
    .unwrap();
    let AnyFilter::Defect(defect) = &filter else {
        panic!("expected a defect filter");
    };
    assert_eq!(defect.defect_type(), &[Some("Regression".to_string())]);
    assert_eq!(*filter.as_filter().entity().order_by(), vec!["name".to_string()]);
}

#[test]
fn test_from_json_unknown_entity() {
    let err = AnyFilter::from_json(r#"{"entity": "storyboard"}"#).unwrap_err();
    assert!(matches!(err, Error::UnknownEntity(name) if name == "storyboard"));
}

#[parameterized(
    no_entity = { r#"{"name": ["x"]}"# },
    not_object = { r#"["story"]"# },
)]
fn test_from_json_missing_entity(input: &str) {
    assert!(matches!(
        AnyFilter::from_json(input),
        Err(Error::MissingEntity)
    ));
}

#[parameterized(
    malformed = { r#"{"entity": "story""# },
    bad_searcher = { r#"{"entity": "story", "estimate": [{"op": "bogus", "value": 1}]}"# },
    bad_range = { r#"{"entity": "iteration", "begin_date": [{"min": "2024-02-01T00:00:00Z", "max": "2024-01-01T00:00:00Z"}]}"# },
)]
fn test_from_json_invalid_document(input: &str) {
    assert!(matches!(
        AnyFilter::from_json(input),
        Err(Error::Document(_))
    ));
}
