// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vq-core: typed asset filters compiled into service queries.
//!
//! This crate turns typed filter objects into the attribute-term trees,
//! sort orders and search clauses understood by the asset query service.
//!
//! # Main Components
//!
//! - [`searcher`] - range and existence constraints over one attribute
//! - [`FilterBuilder`] - translation primitives from typed values to terms
//! - [`filter`] - one filter type per entity kind, sharing [`EntityFilter`]
//! - [`Resolver`] - meta-model lookups the compiler depends on; [`Catalog`]
//!   is an in-memory implementation loaded from TOML
//!
//! ```rust,ignore
//! use vq_core::{Catalog, CompileOptions, EntityFilter, StoryFilter};
//!
//! let catalog = Catalog::load(Path::new("catalog.toml"))?;
//! let mut filter = StoryFilter::default();
//! filter.workitem_mut().owners_mut().push(Some("admin".into()));
//! let query = filter.compile(&catalog, &CompileOptions::default())?;
//! println!("{}", query.where_token().unwrap_or_default());
//! ```

pub mod builder;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod filter;
pub mod query;
pub mod resolve;
pub mod searcher;
pub mod term;

#[cfg(test)]
mod testing;

pub use builder::{FilterBuilder, SearcherTerms};
pub use catalog::Catalog;
pub use entity::EntityType;
pub use error::{Error, Result};
pub use filter::{
    state_clause, AssetState, ConversationFilter, DefectFilter, EntityFields, EntityFilter,
    EpicFilter, GoalFilter, IssueFilter, IterationFilter, MemberFilter, MessageFilter,
    PrimaryWorkitemFilter, ProjectFilter, RequestFilter, SecondaryWorkitemFilter, StateFilter,
    StoryFilter, TaskFilter, TestFilter, TestSetFilter, ThemeFilter, TrackedEpicFilter,
    WorkitemFilter,
};
pub use query::{CompileOptions, CompiledQuery, FindSpec, OrderSpec};
pub use resolve::Resolver;
pub use searcher::{ComparisonSearcher, DateSearcher, NullableDoubleSearcher, StringSearcher};
pub use term::{
    AttributeHandle, AttributeTerm, FilterTerm, GroupKind, GroupTerm, Oid, Operand, Operator,
};
