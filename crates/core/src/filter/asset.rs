// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filters over iterations, projects and members.

use serde::Deserialize;

use crate::builder::FilterBuilder;
use crate::entity::EntityType;
use crate::error::Result;
use crate::searcher::DateSearcher;

use super::fields::BaseAssetFields;
use super::{EntityFields, EntityFilter};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IterationFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    schedule: Vec<String>,
    begin_date: DateSearcher,
    end_date: DateSearcher,
}

impl IterationFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        schedule, schedule_mut: Vec<String>;
        begin_date, begin_date_mut: DateSearcher;
        end_date, end_date_mut: DateSearcher;
    }
}

impl EntityFilter for IterationFilter {
    entity_plumbing!(EntityType::Iteration);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;

        builder.relation("Schedule", &self.schedule)?;
        builder.searcher("BeginDate", &self.begin_date)?;
        builder.searcher("EndDate", &self.end_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    parent: Vec<String>,
    owner: Vec<String>,
    schedule: Vec<String>,
    begin_date: DateSearcher,
    end_date: DateSearcher,
}

impl ProjectFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        parent, parent_mut: Vec<String>;
        owner, owner_mut: Vec<String>;
        schedule, schedule_mut: Vec<String>;
        begin_date, begin_date_mut: DateSearcher;
        end_date, end_date_mut: DateSearcher;
    }
}

impl EntityFilter for ProjectFilter {
    entity_plumbing!(EntityType::Project);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;

        builder.relation("Parent", &self.parent)?;
        builder.relation("Owner", &self.owner)?;
        builder.relation("Schedule", &self.schedule)?;
        builder.searcher("BeginDate", &self.begin_date)?;
        builder.searcher("EndDate", &self.end_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    short_name: Vec<String>,
    username: Vec<String>,
    email: Vec<String>,
}

impl MemberFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        short_name, short_name_mut: Vec<String>;
        username, username_mut: Vec<String>;
        email, email_mut: Vec<String>;
    }
}

impl EntityFilter for MemberFilter {
    entity_plumbing!(EntityType::Member);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;

        builder.simple("Nickname", &self.short_name)?;
        builder.simple("Username", &self.username)?;
        builder.simple("Email", &self.email)
    }
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod tests;
