// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    story = { "story", EntityType::Story },
    kebab = { "primary-workitem", EntityType::PrimaryWorkitem },
    upper = { "TEST_SET", EntityType::TestSet },
    tracked_epic = { "tracked_epic", EntityType::TrackedEpic },
)]
fn entity_type_from_str_valid(input: &str, expected: EntityType) {
    assert_eq!(input.parse::<EntityType>().unwrap(), expected);
}

#[test]
fn entity_type_from_str_invalid() {
    assert!(matches!(
        "storyboard".parse::<EntityType>(),
        Err(Error::UnknownAssetType(_))
    ));
}

#[test]
fn every_entity_type_round_trips_through_as_str() {
    for entity in EntityType::ALL {
        assert_eq!(entity.as_str().parse::<EntityType>().unwrap(), entity);
        assert!(!entity.state_asset_types().is_empty());
    }
}

#[parameterized(
    iteration = { EntityType::Iteration, "Timebox" },
    project = { EntityType::Project, "Scope" },
    conversation = { EntityType::Conversation, "Expression" },
    tracked_epic = { EntityType::TrackedEpic, "Epic" },
)]
fn asset_type_tokens(entity: EntityType, expected: &str) {
    assert_eq!(entity.asset_type(), expected);
}

#[test]
fn primary_workitem_covers_story_defect_test_set() {
    assert_eq!(
        EntityType::PrimaryWorkitem.state_asset_types(),
        ["Story", "Defect", "TestSet"]
    );
}

#[parameterized(
    common = { EntityType::Story, "project", "Scope" },
    utc_suffix = { EntityType::Defect, "create_date_utc", "CreateDateUTC" },
    type_specific = { EntityType::Defect, "defect_type", "Type" },
    snake_to_pascal = { EntityType::Story, "detail_estimate", "DetailEstimate" },
    verbatim = { EntityType::Story, "Estimate", "Estimate" },
    path = { EntityType::Story, "project.name", "Scope.Name" },
    epic_parent = { EntityType::Epic, "parent", "Super" },
    task_parent = { EntityType::Task, "parent", "Parent" },
    member_short_name = { EntityType::Member, "short_name", "Nickname" },
)]
fn attribute_name_mapping(entity: EntityType, property: &str, expected: &str) {
    assert_eq!(entity.attribute_name(property), expected);
}

#[parameterized(
    story = { EntityType::Story, "Number" },
    member = { EntityType::Member, "Nickname" },
    goal = { EntityType::Goal, "Name" },
)]
fn default_find_fields_lead_with_short_name(entity: EntityType, first: &str) {
    let fields = entity.default_find_fields();
    assert_eq!(fields[0], first);
    assert!(fields.contains(&"Description"));
}
