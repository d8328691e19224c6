// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workitem filters: the workitem family and its primary and secondary
//! branches.

use serde::Deserialize;

use crate::builder::FilterBuilder;
use crate::entity::EntityType;
use crate::error::Result;

use super::fields::{BaseAssetFields, PrimaryWorkitemFields, ProjectAssetFields, WorkitemFields};
use super::{EntityFields, EntityFilter};

/// Any workitem: stories, defects, test sets, tasks and tests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkitemFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
}

impl WorkitemFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
    }
}

impl EntityFilter for WorkitemFilter {
    entity_plumbing!(EntityType::Workitem);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)
    }
}

/// Stories, defects and test sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PrimaryWorkitemFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    #[serde(flatten)]
    primary: PrimaryWorkitemFields,
}

impl PrimaryWorkitemFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        primary, primary_mut: PrimaryWorkitemFields;
    }
}

impl EntityFilter for PrimaryWorkitemFilter {
    entity_plumbing!(EntityType::PrimaryWorkitem);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;
        self.primary.apply(builder)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoryFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    #[serde(flatten)]
    primary: PrimaryWorkitemFields,
    customer: Vec<String>,
    requested_by: Vec<String>,
    benefits: Vec<String>,
    identified_in: Vec<String>,
    category: Vec<Option<String>>,
    risk: Vec<Option<String>>,
    dependencies: Vec<Option<String>>,
    dependants: Vec<Option<String>>,
}

impl StoryFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        primary, primary_mut: PrimaryWorkitemFields;
        customer, customer_mut: Vec<String>;
        requested_by, requested_by_mut: Vec<String>;
        benefits, benefits_mut: Vec<String>;
        /// Retrospectives the story was identified in.
        identified_in, identified_in_mut: Vec<String>;
        /// `StoryCategory` names.
        category, category_mut: Vec<Option<String>>;
        /// `WorkitemRisk` names.
        risk, risk_mut: Vec<Option<String>>;
        /// Stories this story depends on.
        dependencies, dependencies_mut: Vec<Option<String>>;
        /// Stories depending on this story.
        dependants, dependants_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for StoryFilter {
    entity_plumbing!(EntityType::Story);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;
        self.primary.apply(builder)?;

        builder.relation("Customer", &self.customer)?;
        builder.simple("RequestedBy", &self.requested_by)?;
        builder.simple("Benefits", &self.benefits)?;
        builder.relation("IdentifiedIn", &self.identified_in)?;
        builder.list_relation("Category", "StoryCategory", &self.category)?;
        builder.list_relation("Risk", "WorkitemRisk", &self.risk)?;
        builder.multi_relation("Dependencies", &self.dependencies)?;
        builder.multi_relation("Dependants", &self.dependants)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DefectFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    #[serde(flatten)]
    primary: PrimaryWorkitemFields,
    found_by: Vec<String>,
    found_in_build: Vec<String>,
    fixed_in_build: Vec<String>,
    environment: Vec<String>,
    version_affected: Vec<String>,
    verified_by: Vec<String>,
    defect_type: Vec<Option<String>>,
    resolution_reason: Vec<Option<String>>,
}

impl DefectFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        primary, primary_mut: PrimaryWorkitemFields;
        found_by, found_by_mut: Vec<String>;
        found_in_build, found_in_build_mut: Vec<String>;
        fixed_in_build, fixed_in_build_mut: Vec<String>;
        environment, environment_mut: Vec<String>;
        version_affected, version_affected_mut: Vec<String>;
        verified_by, verified_by_mut: Vec<String>;
        /// `DefectType` names.
        defect_type, defect_type_mut: Vec<Option<String>>;
        /// `DefectResolution` names.
        resolution_reason, resolution_reason_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for DefectFilter {
    entity_plumbing!(EntityType::Defect);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;
        self.primary.apply(builder)?;

        builder.simple("FoundBy", &self.found_by)?;
        builder.simple("FoundInBuild", &self.found_in_build)?;
        builder.simple("FixedInBuild", &self.fixed_in_build)?;
        builder.simple("Environment", &self.environment)?;
        builder.simple("VersionAffected", &self.version_affected)?;
        builder.relation("VerifiedBy", &self.verified_by)?;
        builder.list_relation("Type", "DefectType", &self.defect_type)?;
        builder.list_relation("ResolutionReason", "DefectResolution", &self.resolution_reason)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestSetFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    #[serde(flatten)]
    primary: PrimaryWorkitemFields,
    environment: Vec<String>,
}

impl TestSetFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        primary, primary_mut: PrimaryWorkitemFields;
        /// Test environments, as asset IDs.
        environment, environment_mut: Vec<String>;
    }
}

impl EntityFilter for TestSetFilter {
    entity_plumbing!(EntityType::TestSet);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;
        self.primary.apply(builder)?;

        builder.relation("Environment", &self.environment)
    }
}

/// Tasks and tests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecondaryWorkitemFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    parent: Vec<String>,
}

impl SecondaryWorkitemFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        /// Primary workitems the results belong to.
        parent, parent_mut: Vec<String>;
    }
}

impl EntityFilter for SecondaryWorkitemFilter {
    entity_plumbing!(EntityType::SecondaryWorkitem);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;

        builder.relation("Parent", &self.parent)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    parent: Vec<String>,
    build: Vec<String>,
    status: Vec<Option<String>>,
    category: Vec<Option<String>>,
    source: Vec<Option<String>>,
}

impl TaskFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        parent, parent_mut: Vec<String>;
        build, build_mut: Vec<String>;
        /// `TaskStatus` names.
        status, status_mut: Vec<Option<String>>;
        /// `TaskCategory` names.
        category, category_mut: Vec<Option<String>>;
        /// `TaskSource` names.
        source, source_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for TaskFilter {
    entity_plumbing!(EntityType::Task);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;

        builder.relation("Parent", &self.parent)?;
        builder.simple("LastVersion", &self.build)?;
        builder.list_relation("Status", "TaskStatus", &self.status)?;
        builder.list_relation("Category", "TaskCategory", &self.category)?;
        builder.list_relation("Source", "TaskSource", &self.source)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TestFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    #[serde(flatten)]
    project: ProjectAssetFields,
    #[serde(flatten)]
    workitem: WorkitemFields,
    parent: Vec<String>,
    status: Vec<Option<String>>,
    category: Vec<Option<String>>,
}

impl TestFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        project, project_mut: ProjectAssetFields;
        workitem, workitem_mut: WorkitemFields;
        parent, parent_mut: Vec<String>;
        /// `TestStatus` names.
        status, status_mut: Vec<Option<String>>;
        /// `TestCategory` names.
        category, category_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for TestFilter {
    entity_plumbing!(EntityType::Test);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;
        self.project.apply(builder)?;
        self.workitem.apply(builder)?;

        builder.relation("Parent", &self.parent)?;
        builder.list_relation("Status", "TestStatus", &self.status)?;
        builder.list_relation("Category", "TestCategory", &self.category)
    }
}

#[cfg(test)]
#[path = "workitem_tests.rs"]
mod tests;
