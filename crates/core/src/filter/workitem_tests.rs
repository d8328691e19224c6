// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::Error;
use crate::filter::AssetState;
use crate::term::{FilterTerm, Operator};
use crate::testing::catalog;
use yare::parameterized;

fn where_token(filter: &dyn EntityFilter) -> String {
    filter
        .build_filter(&catalog())
        .unwrap()
        .map(|term| term.token())
        .unwrap_or_default()
}

#[test]
fn story_estimate_equal() {
    let mut filter = StoryFilter::default();
    filter
        .primary_mut()
        .estimate_mut()
        .add_term(Operator::Equal, Some(1.0))
        .unwrap();

    let term = filter.build_filter(&catalog()).unwrap().unwrap();
    let FilterTerm::Group(root) = &term else {
        panic!("expected the root AND group");
    };
    assert_eq!(root.len(), 2);
    assert_eq!(
        term.token(),
        "Estimate='1';AssetState!='Dead';AssetType='Story'"
    );
}

#[test]
fn unassigned_or_owned_by_member() {
    let mut filter = PrimaryWorkitemFilter::default();
    filter
        .workitem_mut()
        .owners_mut()
        .extend([None, Some("Member:20".to_string())]);

    assert_eq!(
        where_token(&filter),
        "(Owners='Member:20'|-Owners);AssetState!='Dead';AssetType='Story','Defect','TestSet'"
    );
}

#[test]
fn active_primary_workitems_in_iteration() {
    let mut filter = PrimaryWorkitemFilter::default();
    filter.entity_mut().state_mut().insert(AssetState::Active);
    filter.primary_mut().iteration_mut().push("Timebox:1200".to_string());
    filter.primary_mut().epic_mut().push("E-01001".to_string());

    assert_eq!(
        where_token(&filter),
        "Timebox='Timebox:1200';Super='Epic:1001';AssetState='Active';AssetType='Story','Defect','TestSet'"
    );
}

#[test]
fn workitem_to_do_not_exists() {
    let mut filter = WorkitemFilter::default();
    filter
        .workitem_mut()
        .to_do_mut()
        .add_term(Operator::NotExists, None)
        .unwrap();
    filter.workitem_mut().number_mut().push("S-01001".to_string());

    assert_eq!(
        where_token(&filter),
        "Number='S-01001';-ToDo;AssetState!='Dead';AssetType='Story','Defect','TestSet','Task','Test'"
    );
}

#[test]
fn story_fields_follow_shared_fields() {
    let mut filter = StoryFilter::default();
    filter.category_mut().push(Some("Feature".to_string()));
    filter.dependencies_mut().push(Some("S-01001".to_string()));
    filter.primary_mut().status_mut().push(Some("Done".to_string()));
    filter.asset_mut().name_mut().push("Login".to_string());

    assert_eq!(
        where_token(&filter),
        "Name='Login';Status='StoryStatus:135';Category='StoryCategory:150';\
         (Dependencies='Story:1001');AssetState!='Dead';AssetType='Story'"
    );
}

#[test]
fn defect_list_fields() {
    let mut filter = DefectFilter::default();
    filter.defect_type_mut().push(Some("Regression".to_string()));
    filter.resolution_reason_mut().push(None);
    filter.found_in_build_mut().push("1.2.0".to_string());
    filter.verified_by_mut().push("admin".to_string());

    assert_eq!(
        where_token(&filter),
        "FoundInBuild='1.2.0';VerifiedBy='Member:20';Type='DefectType:160';\
         ResolutionReason='NULL';AssetState!='Dead';AssetType='Defect'"
    );
}

#[test]
fn test_set_environment() {
    let mut filter = TestSetFilter::default();
    filter.environment_mut().push("Environment:7".to_string());
    assert_eq!(
        where_token(&filter),
        "Environment='Environment:7';AssetState!='Dead';AssetType='TestSet'"
    );
}

#[test]
fn secondary_workitems_under_parent() {
    let mut filter = SecondaryWorkitemFilter::default();
    filter.parent_mut().push("S-01001".to_string());
    filter.entity_mut().state_mut().insert(AssetState::Closed);
    assert_eq!(
        where_token(&filter),
        "Parent='Story:1001';AssetState='Closed';AssetType='Task','Test'"
    );
}

#[test]
fn task_build_and_status() {
    let mut filter = TaskFilter::default();
    filter.build_mut().push("1.2.0".to_string());
    filter.status_mut().push(Some("Completed".to_string()));
    filter.source_mut().push(Some("Customer".to_string()));
    assert_eq!(
        where_token(&filter),
        "LastVersion='1.2.0';Status='TaskStatus:123';Source='TaskSource:127';\
         AssetState!='Dead';AssetType='Task'"
    );
}

#[test]
fn test_status_any_of() {
    let mut filter = TestFilter::default();
    filter
        .status_mut()
        .extend([Some("Passed".to_string()), Some("Failed".to_string())]);
    assert_eq!(
        where_token(&filter),
        "Status='TestStatus:155','TestStatus:156';AssetState!='Dead';AssetType='Test'"
    );
}

#[parameterized(
    story_category = { "StoryCategory" },
    workitem_risk = { "WorkitemRisk" },
)]
fn unknown_list_value_fails(list_type: &str) {
    let mut filter = StoryFilter::default();
    match list_type {
        "StoryCategory" => filter.category_mut().push(Some("Bogus".to_string())),
        _ => filter.risk_mut().push(Some("Bogus".to_string())),
    }
    let err = filter.build_filter(&catalog()).unwrap_err();
    assert!(
        matches!(&err, Error::UnknownListValue { list_type: found, .. } if found == list_type),
        "unexpected error: {err}"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Filter documents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn story_from_json_document() {
    let filter: StoryFilter = serde_json::from_str(
        r#"{
            "project": ["Scope:0"],
            "status": ["Done", null],
            "estimate": [{"min": 1, "max": 5}],
            "category": ["Feature"],
            "state": ["closed"],
            "order_by": ["number"]
        }"#,
    )
    .unwrap();

    similar_asserts::assert_eq!(
        where_token(&filter).as_str(),
        "Scope='Scope:0';Status='StoryStatus:135','NULL';Estimate>='1';Estimate<='5';\
         Category='StoryCategory:150';AssetState='Closed';AssetType='Story'"
    );
    assert_eq!(*filter.entity().order_by(), vec!["number".to_string()]);
}

#[test]
fn conflicting_searcher_document_is_rejected() {
    let result = serde_json::from_str::<TaskFilter>(
        r#"{"to_do": [{"op": "exists"}, {"op": "not_exists"}]}"#,
    );
    assert!(result.is_err());
}
