// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON filter documents.
//!
//! A document names its entity kind and carries that filter's fields:
//!
//! ```json
//! {
//!   "entity": "story",
//!   "owners": ["admin", null],
//!   "estimate": [{"op": "greater_than", "value": 3}],
//!   "state": ["active"],
//!   "order_by": ["project.name"]
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;

use vq_core::filter::*;
use vq_core::EntityType;

use crate::error::{Error, Result};

/// A filter of any entity kind.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum AnyFilter {
    Workitem(WorkitemFilter),
    PrimaryWorkitem(PrimaryWorkitemFilter),
    Story(StoryFilter),
    Defect(DefectFilter),
    TestSet(TestSetFilter),
    SecondaryWorkitem(SecondaryWorkitemFilter),
    Task(TaskFilter),
    Test(TestFilter),
    Epic(EpicFilter),
    TrackedEpic(TrackedEpicFilter),
    Theme(ThemeFilter),
    Goal(GoalFilter),
    Issue(IssueFilter),
    Request(RequestFilter),
    Iteration(IterationFilter),
    Project(ProjectFilter),
    Member(MemberFilter),
    Message(MessageFilter),
    Conversation(ConversationFilter),
}

impl AnyFilter {
    /// Parses a filter document.
    ///
    /// The entity kind is checked before the fields so a misspelt kind is
    /// reported as such rather than as a generic parse failure. The kind
    /// accepts the same spellings as [`EntityType`]'s `FromStr`.
    pub fn from_json(input: &str) -> Result<Self> {
        let mut value: Value = serde_json::from_str(input).map_err(Error::Document)?;
        let Some(object) = value.as_object_mut() else {
            return Err(Error::MissingEntity);
        };
        let entity = match object.get("entity") {
            Some(Value::String(name)) => name
                .parse::<EntityType>()
                .map_err(|_| Error::UnknownEntity(name.clone()))?,
            Some(other) => return Err(Error::UnknownEntity(other.to_string())),
            None => return Err(Error::MissingEntity),
        };
        object.insert("entity".to_string(), Value::from(entity.as_str()));

        let filter = AnyFilter::deserialize(value).map_err(Error::Document)?;
        tracing::debug!("parsed {} filter document", entity);
        Ok(filter)
    }

    pub fn as_filter(&self) -> &dyn EntityFilter {
        match self {
            AnyFilter::Workitem(f) => f,
            AnyFilter::PrimaryWorkitem(f) => f,
            AnyFilter::Story(f) => f,
            AnyFilter::Defect(f) => f,
            AnyFilter::TestSet(f) => f,
            AnyFilter::SecondaryWorkitem(f) => f,
            AnyFilter::Task(f) => f,
            AnyFilter::Test(f) => f,
            AnyFilter::Epic(f) => f,
            AnyFilter::TrackedEpic(f) => f,
            AnyFilter::Theme(f) => f,
            AnyFilter::Goal(f) => f,
            AnyFilter::Issue(f) => f,
            AnyFilter::Request(f) => f,
            AnyFilter::Iteration(f) => f,
            AnyFilter::Project(f) => f,
            AnyFilter::Member(f) => f,
            AnyFilter::Message(f) => f,
            AnyFilter::Conversation(f) => f,
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
