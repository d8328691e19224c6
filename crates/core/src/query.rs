// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The compiled query handed to the query execution service.

use serde::{Deserialize, Serialize};

use crate::term::{AttributeHandle, FilterTerm};

/// Options that are not part of a filter itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompileOptions {
    /// Property sorted on when the filter names no `order_by`.
    #[serde(default)]
    pub default_order: Option<String>,
}

impl CompileOptions {
    pub fn with_default_order(property: impl Into<String>) -> Self {
        CompileOptions {
            default_order: Some(property.into()),
        }
    }
}

/// Ascending sort attributes, primary sort first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OrderSpec {
    attributes: Vec<AttributeHandle>,
}

impl OrderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a minor (less significant) ascending sort.
    pub fn minor_sort(&mut self, attribute: AttributeHandle) {
        self.attributes.push(attribute);
    }

    pub fn attributes(&self) -> &[AttributeHandle] {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// `sort` token, e.g. `Scope.Name,Estimate`.
    pub fn token(&self) -> String {
        join_names(&self.attributes)
    }
}

/// A full-text search over a set of attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindSpec {
    text: String,
    fields: Vec<AttributeHandle>,
}

impl FindSpec {
    pub fn new(text: impl Into<String>, fields: Vec<AttributeHandle>) -> Self {
        FindSpec {
            text: text.into(),
            fields,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fields(&self) -> &[AttributeHandle] {
        &self.fields
    }

    /// `findin` token listing the searched attributes.
    pub fn fields_token(&self) -> String {
        join_names(&self.fields)
    }
}

fn join_names(attributes: &[AttributeHandle]) -> String {
    attributes
        .iter()
        .map(AttributeHandle::name)
        .collect::<Vec<_>>()
        .join(",")
}

/// Everything the query service needs to execute one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledQuery {
    pub asset_type: String,
    /// `None` matches every asset.
    pub filter: Option<FilterTerm>,
    pub order_by: OrderSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub find: Option<FindSpec>,
    pub selection: Vec<AttributeHandle>,
}

impl CompiledQuery {
    /// `where` token, if the query filters anything.
    pub fn where_token(&self) -> Option<String> {
        self.filter.as_ref().map(FilterTerm::token)
    }

    /// `sel` token listing the eagerly loaded attributes.
    pub fn select_token(&self) -> String {
        join_names(&self.selection)
    }
}
