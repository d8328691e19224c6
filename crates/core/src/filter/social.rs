// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filters over messages and conversations.

use serde::Deserialize;

use crate::builder::FilterBuilder;
use crate::entity::EntityType;
use crate::error::Result;

use super::fields::BaseAssetFields;
use super::{state_clause, EntityFields, EntityFilter};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageFilter {
    #[serde(flatten)]
    entity: EntityFields,
    #[serde(flatten)]
    asset: BaseAssetFields,
    author: Vec<String>,
    recipients: Vec<Option<String>>,
}

impl MessageFilter {
    accessors! {
        asset, asset_mut: BaseAssetFields;
        author, author_mut: Vec<String>;
        /// Receiving members; `None` matches messages with no recipients.
        recipients, recipients_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for MessageFilter {
    entity_plumbing!(EntityType::Message);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;
        self.asset.apply(builder)?;

        builder.relation("Author", &self.author)?;
        builder.multi_relation("Recipients", &self.recipients)
    }
}

/// Conversation expressions. They carry no name and have no closed
/// lifecycle, so only the entity fields and their own fields apply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConversationFilter {
    #[serde(flatten)]
    entity: EntityFields,
    author: Vec<String>,
    mentions: Vec<Option<String>>,
}

impl ConversationFilter {
    accessors! {
        author, author_mut: Vec<String>;
        /// Mentioned assets; `None` matches expressions mentioning nothing.
        mentions, mentions_mut: Vec<Option<String>>;
    }
}

impl EntityFilter for ConversationFilter {
    entity_plumbing!(EntityType::Conversation);

    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        self.entity.apply(builder)?;

        builder.relation("Author", &self.author)?;
        builder.multi_relation("Mentions", &self.mentions)
    }

    fn modify_state(&self, builder: &mut FilterBuilder<'_>) {
        if let Some(state) = self.entity.state().effective() {
            tracing::warn!("ignoring {:?} state: conversations are never closed", state);
        }
        builder.token(state_clause(None, self.entity_type().state_asset_types()));
    }
}

#[cfg(test)]
#[path = "social_tests.rs"]
mod tests;
