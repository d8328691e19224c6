// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed entity filters.
//!
//! A filter is a value object: construct it, fill in the constraints through
//! its `*_mut` accessors, and compile it against a [`Resolver`]:
//!
//! ```rust,ignore
//! let mut filter = StoryFilter::default();
//! filter.primary_mut().estimate_mut().add_term(Operator::Equal, Some(1.0))?;
//! filter.workitem_mut().owners_mut().push(None);
//! let query = filter.compile(&catalog, &CompileOptions::default())?;
//! ```
//!
//! Filters are assembled from shared field sets ([`BaseAssetFields`],
//! [`ProjectAssetFields`], [`WorkitemFields`], [`PrimaryWorkitemFields`]).
//! Each concrete filter applies its field sets explicitly, most general
//! first, then its own fields. The state clause is appended last and always
//! ANDed at the root, so assets in the `Dead` state are excluded unless a
//! filter overrides [`EntityFilter::modify_state`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::builder::FilterBuilder;
use crate::entity::EntityType;
use crate::error::Result;
use crate::query::{CompileOptions, CompiledQuery, FindSpec, OrderSpec};
use crate::resolve::Resolver;
use crate::searcher::{DateSearcher, StringSearcher};
use crate::term::{AttributeHandle, FilterTerm};

/// Generates `field()` / `field_mut()` accessor pairs.
macro_rules! accessors {
    ($($(#[$doc:meta])* $field:ident, $field_mut:ident: $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> &$ty {
                &self.$field
            }

            pub fn $field_mut(&mut self) -> &mut $ty {
                &mut self.$field
            }
        )*
    };
}

/// Implements the `EntityFilter` plumbing for a filter holding an `entity`
/// field set.
macro_rules! entity_plumbing {
    ($entity:expr) => {
        fn entity_type(&self) -> EntityType {
            $entity
        }

        fn entity(&self) -> &EntityFields {
            &self.entity
        }

        fn entity_mut(&mut self) -> &mut EntityFields {
            &mut self.entity
        }
    };
}

mod asset;
mod fields;
mod planning;
mod social;
mod workitem;

pub use asset::{IterationFilter, MemberFilter, ProjectFilter};
pub use fields::{BaseAssetFields, PrimaryWorkitemFields, ProjectAssetFields, WorkitemFields};
pub use planning::{
    EpicFilter, GoalFilter, IssueFilter, RequestFilter, ThemeFilter, TrackedEpicFilter,
};
pub use social::{ConversationFilter, MessageFilter};
pub use workitem::{
    DefectFilter, PrimaryWorkitemFilter, SecondaryWorkitemFilter, StoryFilter, TaskFilter,
    TestFilter, TestSetFilter, WorkitemFilter,
};

/// Lifecycle states a caller may restrict a filter to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetState {
    Active,
    Closed,
}

/// The requested lifecycle states.
///
/// Exactly one state has effect; an empty set, or both states together,
/// means "any state but dead".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct StateFilter {
    states: BTreeSet<AssetState>,
}

impl StateFilter {
    pub fn insert(&mut self, state: AssetState) {
        self.states.insert(state);
    }

    pub fn remove(&mut self, state: AssetState) {
        self.states.remove(&state);
    }

    pub fn contains(&self, state: AssetState) -> bool {
        self.states.contains(&state)
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// The single state in effect, if any.
    pub fn effective(&self) -> Option<AssetState> {
        match self.states.len() {
            1 => self.states.iter().next().copied(),
            _ => None,
        }
    }
}

/// Builds the protocol-fixed state clause, e.g.
/// `AssetState!='Dead';AssetType='Story','Defect'`.
pub fn state_clause(state: Option<AssetState>, asset_types: &[&str]) -> String {
    let state = match state {
        None => "AssetState!='Dead'",
        Some(AssetState::Active) => "AssetState='Active'",
        Some(AssetState::Closed) => "AssetState='Closed'",
    };
    if asset_types.is_empty() {
        return state.to_string();
    }
    let types: Vec<String> = asset_types.iter().map(|t| format!("'{t}'")).collect();
    format!("{state};AssetType={}", types.join(","))
}

/// Fields every filter carries: ordering, search, selection, state and the
/// create/change date ranges.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntityFields {
    order_by: Vec<String>,
    find: StringSearcher,
    selectors: Vec<String>,
    state: StateFilter,
    create_date_utc: DateSearcher,
    change_date_utc: DateSearcher,
}

impl EntityFields {
    accessors! {
        /// Sort properties, primary sort first.
        order_by, order_by_mut: Vec<String>;
        find, find_mut: StringSearcher;
        /// Properties to load along with each asset.
        selectors, selectors_mut: Vec<String>;
        state, state_mut: StateFilter;
        create_date_utc, create_date_utc_mut: DateSearcher;
        change_date_utc, change_date_utc_mut: DateSearcher;
    }

    pub fn apply(&self, builder: &mut FilterBuilder<'_>) -> Result<()> {
        builder.searcher("CreateDateUTC", &self.create_date_utc)?;
        builder.searcher("ChangeDateUTC", &self.change_date_utc)
    }
}

/// A filter over one entity kind.
pub trait EntityFilter {
    fn entity_type(&self) -> EntityType;

    fn entity(&self) -> &EntityFields;

    fn entity_mut(&mut self) -> &mut EntityFields;

    /// Appends this filter's attribute constraints.
    fn modify_filter(&self, builder: &mut FilterBuilder<'_>) -> Result<()>;

    /// Appends the state clause.
    fn modify_state(&self, builder: &mut FilterBuilder<'_>) {
        let entity = self.entity_type();
        builder.token(state_clause(
            self.entity().state().effective(),
            entity.state_asset_types(),
        ));
    }

    /// Compiles the filter tree; `None` matches every asset.
    fn build_filter(&self, resolver: &dyn Resolver) -> Result<Option<FilterTerm>> {
        let mut builder = FilterBuilder::new(self.entity_type().asset_type(), resolver);
        self.modify_filter(&mut builder)?;
        self.modify_state(&mut builder);
        let root = builder.into_root();
        Ok(root.has_terms().then_some(FilterTerm::Group(root)))
    }

    /// Resolves `order_by`, falling back to `default_order`.
    fn build_order_by(
        &self,
        resolver: &dyn Resolver,
        default_order: Option<&str>,
    ) -> Result<OrderSpec> {
        let entity = self.entity_type();
        let properties: Vec<&str> = if self.entity().order_by().is_empty() {
            default_order.into_iter().collect()
        } else {
            self.entity().order_by().iter().map(String::as_str).collect()
        };

        let mut order = OrderSpec::new();
        for property in properties {
            order.minor_sort(resolve_property(resolver, entity, property)?);
        }
        Ok(order)
    }

    /// Resolves the search fields, or the entity's defaults when none are
    /// named. No search text means no find clause.
    fn build_find(&self, resolver: &dyn Resolver) -> Result<Option<FindSpec>> {
        let find = self.entity().find();
        let Some(text) = find.text() else {
            return Ok(None);
        };
        let entity = self.entity_type();
        let fields = if find.fields().is_empty() {
            entity
                .default_find_fields()
                .iter()
                .map(|attribute| resolver.resolve_attribute(entity.asset_type(), attribute))
                .collect::<Result<Vec<_>>>()?
        } else {
            find.fields()
                .iter()
                .map(|property| resolve_property(resolver, entity, property))
                .collect::<Result<Vec<_>>>()?
        };
        Ok(Some(FindSpec::new(text, fields)))
    }

    fn build_selection(&self, resolver: &dyn Resolver) -> Result<Vec<AttributeHandle>> {
        let entity = self.entity_type();
        self.entity()
            .selectors()
            .iter()
            .map(|property| resolve_property(resolver, entity, property))
            .collect()
    }

    fn compile(&self, resolver: &dyn Resolver, options: &CompileOptions) -> Result<CompiledQuery> {
        let entity = self.entity_type();
        let filter = self.build_filter(resolver)?;
        let order_by = self.build_order_by(resolver, options.default_order.as_deref())?;
        let find = self.build_find(resolver)?;
        let selection = self.build_selection(resolver)?;

        tracing::debug!(
            "compiled {} filter: {} root terms, {} sorts, find={}",
            entity,
            match &filter {
                Some(FilterTerm::Group(group)) => group.len(),
                Some(_) => 1,
                None => 0,
            },
            order_by.attributes().len(),
            find.is_some()
        );

        Ok(CompiledQuery {
            asset_type: entity.asset_type().to_string(),
            filter,
            order_by,
            find,
            selection,
        })
    }
}

fn resolve_property(
    resolver: &dyn Resolver,
    entity: EntityType,
    property: &str,
) -> Result<AttributeHandle> {
    resolver.resolve_attribute(entity.asset_type(), &entity.attribute_name(property))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
