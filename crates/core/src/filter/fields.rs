// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field sets shared between entity filters.

use serde::Deserialize;

use crate::builder::FilterBuilder;
use crate::error::Result;
use crate::searcher::NullableDoubleSearcher;

/// Fields of every asset: identity and name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaseAssetFields {
    id: Vec<String>,
    name: Vec<String>,
}

impl BaseAssetFields {
    accessors! {
        /// Asset IDs the result is restricted to.
        id, id_mut: Vec<String>;
        name, name_mut: Vec<String>;
    }

    pub fn apply(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        builder.relation("ID", &self.id)?;
        builder.simple("Name", &self.name)
    }
}

/// Fields of assets that live in a project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectAssetFields {
    project: Vec<String>,
}

impl ProjectAssetFields {
    accessors! {
        project, project_mut: Vec<String>;
    }

    pub fn apply(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        builder.relation("Scope", &self.project)
    }
}

/// Fields of every workitem: stories, defects, test sets, tasks and tests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkitemFields {
    owners: Vec<Option<String>>,
    reference: Vec<String>,
    number: Vec<String>,
    tagged_with: Vec<String>,
    detail_estimate: NullableDoubleSearcher,
    to_do: NullableDoubleSearcher,
}

impl WorkitemFields {
    accessors! {
        /// Owning members; `None` matches workitems nobody owns.
        owners, owners_mut: Vec<Option<String>>;
        reference, reference_mut: Vec<String>;
        /// Display IDs such as `S-01001`.
        number, number_mut: Vec<String>;
        tagged_with, tagged_with_mut: Vec<String>;
        detail_estimate, detail_estimate_mut: NullableDoubleSearcher;
        to_do, to_do_mut: NullableDoubleSearcher;
    }

    pub fn apply(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        builder.multi_relation("Owners", &self.owners)?;
        builder.simple("Reference", &self.reference)?;
        builder.simple("Number", &self.number)?;
        builder.simple("TaggedWith", &self.tagged_with)?;
        builder.searcher("DetailEstimate", &self.detail_estimate)?;
        builder.searcher("ToDo", &self.to_do)
    }
}

/// Fields of primary workitems: stories, defects and test sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrimaryWorkitemFields {
    status: Vec<Option<String>>,
    priority: Vec<Option<String>>,
    source: Vec<Option<String>>,
    team: Vec<String>,
    iteration: Vec<String>,
    theme: Vec<String>,
    epic: Vec<String>,
    goals: Vec<Option<String>>,
    blocking_issues: Vec<Option<String>>,
    requests: Vec<Option<String>>,
    estimate: NullableDoubleSearcher,
}

impl PrimaryWorkitemFields {
    accessors! {
        /// `StoryStatus` names; `None` matches workitems with no status.
        status, status_mut: Vec<Option<String>>;
        priority, priority_mut: Vec<Option<String>>;
        source, source_mut: Vec<Option<String>>;
        team, team_mut: Vec<String>;
        iteration, iteration_mut: Vec<String>;
        theme, theme_mut: Vec<String>;
        epic, epic_mut: Vec<String>;
        goals, goals_mut: Vec<Option<String>>;
        blocking_issues, blocking_issues_mut: Vec<Option<String>>;
        requests, requests_mut: Vec<Option<String>>;
        estimate, estimate_mut: NullableDoubleSearcher;
    }

    pub fn apply(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        builder.list_relation("Status", "StoryStatus", &self.status)?;
        builder.list_relation("Priority", "WorkitemPriority", &self.priority)?;
        builder.list_relation("Source", "StorySource", &self.source)?;
        builder.relation("Team", &self.team)?;
        builder.relation("Timebox", &self.iteration)?;
        builder.relation("Parent", &self.theme)?;
        builder.relation("Super", &self.epic)?;
        builder.multi_relation("Goals", &self.goals)?;
        builder.multi_relation("BlockingIssues", &self.blocking_issues)?;
        builder.multi_relation("Requests", &self.requests)?;
        builder.searcher("Estimate", &self.estimate)
    }
}
