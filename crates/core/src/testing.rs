// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use crate::catalog::Catalog;

pub const CATALOG_TOML: &str = include_str!("../../../fixtures/catalog.toml");

/// The sample meta-model covering every entity kind.
pub fn catalog() -> Catalog {
    Catalog::from_toml_str(CATALOG_TOML).unwrap()
}
