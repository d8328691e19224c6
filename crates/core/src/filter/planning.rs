// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Planning filters: epics, themes, goals, issues and requests.

use serde::Deserialize;

use crate::builder::FilterBuilder;
use crate::entity::EntityType;
use crate::error::Result;
use crate::searcher::NullableDoubleSearcher;

use super::fields::{BaseAssetFields, ProjectAssetFields};
use super::{EntityFields, EntityFilter};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EpicFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    owners: Vec<Option<String>>,
    goals: Vec<Option<String>>,
    parent: Vec<String>,
    reference: Vec<String>,
    status: Vec<Option<String>>,
    category: Vec<Option<String>>,
    priority: Vec<Option<String>>,
    source: Vec<Option<String>>,
    risk: NullableDoubleSearcher,
    value: NullableDoubleSearcher,
    swag: NullableDoubleSearcher,
}

impl EpicFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        /// Owning members; `None` matches unowned epics.
        owners, owners_mut: Vec<Option<String>>;
        goals, goals_mut: Vec<Option<String>>;
        /// Parent epics.
        parent, parent_mut: Vec<String>;
        reference, reference_mut: Vec<String>;
        status, status_mut: Vec<Option<String>>;
        category, category_mut: Vec<Option<String>>;
        priority, priority_mut: Vec<Option<String>>;
        source, source_mut: Vec<Option<String>>;
        risk, risk_mut: NullableDoubleSearcher;
        value, value_mut: NullableDoubleSearcher;
        /// Rough size estimate.
        swag, swag_mut: NullableDoubleSearcher;
    }
}

impl EntityFilter for EpicFilter {
    entity_plumbing!(EntityType::Epic);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;

        builder.multi_relation("Owners", &self.owners)?;
        builder.multi_relation("Goals", &self.goals)?;
        builder.relation("Super", &self.parent)?;
        builder.simple("Reference", &self.reference)?;
        builder.list_relation("Status", "EpicStatus", &self.status)?;
        builder.list_relation("Category", "EpicCategory", &self.category)?;
        builder.list_relation("Priority", "EpicPriority", &self.priority)?;
        builder.list_relation("Source", "StorySource", &self.source)?;
        builder.searcher("Risk", &self.risk)?;
        builder.searcher("Value", &self.value)?;
        builder.searcher("Swag", &self.swag)
    }
}

/// Epics as tracked across teams on a portfolio board.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TrackedEpicFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    team: Vec<String>,
    status: Vec<Option<String>>,
}

impl TrackedEpicFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        team, team_mut: Vec<String>;
        status, status_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for TrackedEpicFilter {
    entity_plumbing!(EntityType::TrackedEpic);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;

        builder.relation("Team", &self.team)?;
        builder.list_relation("Status", "EpicStatus", &self.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThemeFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    owner: Vec<String>,
    parent: Vec<String>,
    customer: Vec<String>,
    goals: Vec<Option<String>>,
    status: Vec<Option<String>>,
    theme_type: Vec<Option<String>>,
    priority: Vec<Option<String>>,
    risk: Vec<Option<String>>,
    source: Vec<Option<String>>,
    estimate: NullableDoubleSearcher,
}

impl ThemeFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        owner, owner_mut: Vec<String>;
        parent, parent_mut: Vec<String>;
        customer, customer_mut: Vec<String>;
        goals, goals_mut: Vec<Option<String>>;
        status, status_mut: Vec<Option<String>>;
        /// `ThemeCategory` names.
        theme_type, theme_type_mut: Vec<Option<String>>;
        priority, priority_mut: Vec<Option<String>>;
        risk, risk_mut: Vec<Option<String>>;
        source, source_mut: Vec<Option<String>>;
        estimate, estimate_mut: NullableDoubleSearcher;
    }
}

impl EntityFilter for ThemeFilter {
    entity_plumbing!(EntityType::Theme);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;

        builder.relation("Owner", &self.owner)?;
        builder.relation("Parent", &self.parent)?;
        builder.relation("Customer", &self.customer)?;
        builder.multi_relation("Goals", &self.goals)?;
        builder.list_relation("Status", "ThemeStatus", &self.status)?;
        builder.list_relation("Category", "ThemeCategory", &self.theme_type)?;
        builder.list_relation("Priority", "WorkitemPriority", &self.priority)?;
        builder.list_relation("Risk", "WorkitemRisk", &self.risk)?;
        builder.list_relation("Source", "ThemeSource", &self.source)?;
        builder.searcher("Estimate", &self.estimate)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GoalFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    targeted_by: Vec<Option<String>>,
    priority: Vec<Option<String>>,
    category: Vec<Option<String>>,
}

impl GoalFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        /// Projects targeting the goal; `None` matches untargeted goals.
        targeted_by, targeted_by_mut: Vec<Option<String>>;
        priority, priority_mut: Vec<Option<String>>;
        category, category_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for GoalFilter {
    entity_plumbing!(EntityType::Goal);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;

        builder.multi_relation("TargetedBy", &self.targeted_by)?;
        builder.list_relation("Priority", "GoalPriority", &self.priority)?;
        builder.list_relation("Category", "GoalCategory", &self.category)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IssueFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    owner: Vec<String>,
    team: Vec<String>,
    identified_by: Vec<String>,
    reference: Vec<String>,
    priority: Vec<Option<String>>,
    category: Vec<Option<String>>,
    resolution_reason: Vec<Option<String>>,
    blocked_workitems: Vec<Option<String>>,
    retrospectives: Vec<Option<String>>,
}

impl IssueFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        owner, owner_mut: Vec<String>;
        team, team_mut: Vec<String>;
        identified_by, identified_by_mut: Vec<String>;
        reference, reference_mut: Vec<String>;
        priority, priority_mut: Vec<Option<String>>;
        category, category_mut: Vec<Option<String>>;
        resolution_reason, resolution_reason_mut: Vec<Option<String>>;
        /// Primary workitems the issue blocks; `None` matches non-blocking issues.
        blocked_workitems, blocked_workitems_mut: Vec<Option<String>>;
        retrospectives, retrospectives_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for IssueFilter {
    entity_plumbing!(EntityType::Issue);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;

        builder.relation("Owner", &self.owner)?;
        builder.relation("Team", &self.team)?;
        builder.simple("IdentifiedBy", &self.identified_by)?;
        builder.simple("Reference", &self.reference)?;
        builder.list_relation("Priority", "IssuePriority", &self.priority)?;
        builder.list_relation("Category", "IssueCategory", &self.category)?;
        builder.list_relation("ResolutionReason", "IssueResolution", &self.resolution_reason)?;
        builder.multi_relation("BlockedPrimaryWorkitems", &self.blocked_workitems)?;
        builder.multi_relation("Retrospectives", &self.retrospectives)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RequestFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    owner: Vec<String>,
    requested_by: Vec<String>,
    reference: Vec<String>,
    status: Vec<Option<String>>,
    priority: Vec<Option<String>>,
    category: Vec<Option<String>>,
    resolution_reason: Vec<Option<String>>,
}

impl RequestFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        owner, owner_mut: Vec<String>;
        requested_by, requested_by_mut: Vec<String>;
        reference, reference_mut: Vec<String>;
        status, status_mut: Vec<Option<String>>;
        priority, priority_mut: Vec<Option<String>>;
        category, category_mut: Vec<Option<String>>;
        resolution_reason, resolution_reason_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for RequestFilter {
    entity_plumbing!(EntityType::Request);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;

        builder.relation("Owner", &self.owner)?;
        builder.simple("RequestedBy", &self.requested_by)?;
        builder.simple("Reference", &self.reference)?;
        builder.list_relation("Status", "RequestStatus", &self.status)?;
        builder.list_relation("Priority", "RequestPriority", &self.priority)?;
        builder.list_relation("Category", "RequestCategory", &self.category)?;
        builder.list_relation("ResolutionReason", "RequestResolution", &self.resolution_reason)
    }
}

#[cfg(test)]
#[path = "planning_tests.rs"]
mod tests;
