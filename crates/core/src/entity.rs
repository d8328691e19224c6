// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity kinds and their static meta-data.
//!
//! Each filterable entity kind maps to a server asset type, the asset type
//! tokens its state clause covers, the attributes searched by default, and a
//! table translating caller-facing property names (as used in `order_by`,
//! `find` and `selectors`) to attribute names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Workitem,
    PrimaryWorkitem,
    Story,
    Defect,
    TestSet,
    SecondaryWorkitem,
    Task,
    Test,
    Epic,
    TrackedEpic,
    Theme,
    Goal,
    Issue,
    Request,
    Iteration,
    Project,
    Member,
    Message,
    Conversation,
}

const WORKITEM_FIND: &[&str] = &["Number", "Name", "Description"];
const MEMBER_FIND: &[&str] = &["Nickname", "Name", "Description"];
const ASSET_FIND: &[&str] = &["Name", "Description"];

/// Renames shared by every entity kind.
const COMMON_RENAMES: &[(&str, &str)] = &[
    ("id", "ID"),
    ("project", "Scope"),
    ("iteration", "Timebox"),
    ("create_date_utc", "CreateDateUTC"),
    ("change_date_utc", "ChangeDateUTC"),
];

const PRIMARY_RENAMES: &[(&str, &str)] = &[("theme", "Parent"), ("epic", "Super")];

impl EntityType {
    pub const ALL: [EntityType; 19] = [
        EntityType::Workitem,
        EntityType::PrimaryWorkitem,
        EntityType::Story,
        EntityType::Defect,
        EntityType::TestSet,
        EntityType::SecondaryWorkitem,
        EntityType::Task,
        EntityType::Test,
        EntityType::Epic,
        EntityType::TrackedEpic,
        EntityType::Theme,
        EntityType::Goal,
        EntityType::Issue,
        EntityType::Request,
        EntityType::Iteration,
        EntityType::Project,
        EntityType::Member,
        EntityType::Message,
        EntityType::Conversation,
    ];

    /// Returns the string representation used in filter documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Workitem => "workitem",
            EntityType::PrimaryWorkitem => "primary_workitem",
            EntityType::Story => "story",
            EntityType::Defect => "defect",
            EntityType::TestSet => "test_set",
            EntityType::SecondaryWorkitem => "secondary_workitem",
            EntityType::Task => "task",
            EntityType::Test => "test",
            EntityType::Epic => "epic",
            EntityType::TrackedEpic => "tracked_epic",
            EntityType::Theme => "theme",
            EntityType::Goal => "goal",
            EntityType::Issue => "issue",
            EntityType::Request => "request",
            EntityType::Iteration => "iteration",
            EntityType::Project => "project",
            EntityType::Member => "member",
            EntityType::Message => "message",
            EntityType::Conversation => "conversation",
        }
    }

    /// The server asset type queried for this entity kind.
    pub fn asset_type(&self) -> &'static str {
        match self {
            EntityType::Workitem => "Workitem",
            EntityType::PrimaryWorkitem => "PrimaryWorkitem",
            EntityType::Story => "Story",
            EntityType::Defect => "Defect",
            EntityType::TestSet => "TestSet",
            EntityType::SecondaryWorkitem => "SecondaryWorkitem",
            EntityType::Task => "Task",
            EntityType::Test => "Test",
            EntityType::Epic | EntityType::TrackedEpic => "Epic",
            EntityType::Theme => "Theme",
            EntityType::Goal => "Goal",
            EntityType::Issue => "Issue",
            EntityType::Request => "Request",
            EntityType::Iteration => "Timebox",
            EntityType::Project => "Scope",
            EntityType::Member => "Member",
            EntityType::Message => "Message",
            EntityType::Conversation => "Expression",
        }
    }

    /// Concrete asset types covered by the state clause.
    pub fn state_asset_types(&self) -> &'static [&'static str] {
        match self {
            EntityType::Workitem => &["Story", "Defect", "TestSet", "Task", "Test"],
            EntityType::PrimaryWorkitem => &["Story", "Defect", "TestSet"],
            EntityType::SecondaryWorkitem => &["Task", "Test"],
            EntityType::Story => &["Story"],
            EntityType::Defect => &["Defect"],
            EntityType::TestSet => &["TestSet"],
            EntityType::Task => &["Task"],
            EntityType::Test => &["Test"],
            EntityType::Epic | EntityType::TrackedEpic => &["Epic"],
            EntityType::Theme => &["Theme"],
            EntityType::Goal => &["Goal"],
            EntityType::Issue => &["Issue"],
            EntityType::Request => &["Request"],
            EntityType::Iteration => &["Timebox"],
            EntityType::Project => &["Scope"],
            EntityType::Member => &["Member"],
            EntityType::Message => &["Message"],
            EntityType::Conversation => &["Expression"],
        }
    }

    /// Attributes searched by `find` when the caller names no fields.
    pub fn default_find_fields(&self) -> &'static [&'static str] {
        match self {
            EntityType::Workitem
            | EntityType::PrimaryWorkitem
            | EntityType::Story
            | EntityType::Defect
            | EntityType::TestSet
            | EntityType::SecondaryWorkitem
            | EntityType::Task
            | EntityType::Test
            | EntityType::Epic
            | EntityType::TrackedEpic
            | EntityType::Issue
            | EntityType::Request => WORKITEM_FIND,
            EntityType::Member => MEMBER_FIND,
            EntityType::Theme
            | EntityType::Goal
            | EntityType::Iteration
            | EntityType::Project
            | EntityType::Message
            | EntityType::Conversation => ASSET_FIND,
        }
    }

    fn renames(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            EntityType::PrimaryWorkitem | EntityType::Story | EntityType::TestSet => {
                PRIMARY_RENAMES
            }
            EntityType::Defect => &[("theme", "Parent"), ("epic", "Super"), ("defect_type", "Type")],
            EntityType::Task => &[("build", "LastVersion")],
            EntityType::Epic => &[("parent", "Super")],
            EntityType::Theme => &[("theme_type", "Category")],
            EntityType::Issue => &[("blocked_workitems", "BlockedPrimaryWorkitems")],
            EntityType::Member => &[("short_name", "Nickname")],
            _ => &[],
        }
    }

    /// Maps a property name to the attribute name the meta-model knows.
    ///
    /// Only the first segment of a dotted path is renamed; remaining segments
    /// and names without a table entry are converted from `snake_case` to
    /// `PascalCase`, so attribute names given verbatim pass through unchanged.
    pub fn attribute_name(&self, property: &str) -> String {
        let mut segments = property.split('.');
        let head = segments.next().unwrap_or_default();
        let renamed = self
            .renames()
            .iter()
            .chain(COMMON_RENAMES)
            .find(|(from, _)| *from == head)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| pascal_case(head));

        segments.fold(renamed, |mut path, segment| {
            path.push('.');
            path.push_str(&pascal_case(segment));
            path
        })
    }
}

fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_lowercase().replace('-', "_");
        EntityType::ALL
            .into_iter()
            .find(|entity| entity.as_str() == normalized)
            .ok_or_else(|| Error::UnknownAssetType(s.to_string()))
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
