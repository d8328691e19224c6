// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory meta-model catalog.
//!
//! A [`Catalog`] answers the [`Resolver`] contracts from a static description
//! of asset types, known assets and list values, loaded from TOML:
//!
//! ```toml
//! [types.PrimaryWorkitem]
//! attributes = ["Name", "Estimate", "Owners", "Status"]
//!
//! [types.Story]
//! base = "PrimaryWorkitem"
//! attributes = ["Customer"]
//!
//! [assets]
//! "S-01001" = "Story:1001"
//!
//! [lists.StoryStatus]
//! Done = "StoryStatus:135"
//! ```
//!
//! A file with a `.json` extension is read as the equivalent JSON document.
//!
//! Identifiers already in `Type:Number` form resolve without an `[assets]`
//! entry when `Type` is a known asset type.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::resolve::Resolver;
use crate::term::{AttributeHandle, Oid};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    types: BTreeMap<String, AssetTypeDef>,
    #[serde(default)]
    assets: BTreeMap<String, Oid>,
    #[serde(default)]
    lists: BTreeMap<String, BTreeMap<String, Oid>>,
}

/// Attributes declared directly on an asset type, plus its base type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetTypeDef {
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    attributes: BTreeSet<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        tracing::debug!(
            "loaded catalog from {}: {} types, {} assets, {} lists",
            path.display(),
            catalog.types.len(),
            catalog.assets.len(),
            catalog.lists.len()
        );
        Ok(catalog)
    }

    /// Declares an asset type with its direct attributes.
    pub fn with_type<I, S>(mut self, name: &str, base: Option<&str>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.insert(
            name.to_string(),
            AssetTypeDef {
                base: base.map(str::to_string),
                attributes: attributes.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    pub fn with_asset(mut self, id: &str, oid: Oid) -> Self {
        self.assets.insert(id.to_string(), oid);
        self
    }

    pub fn with_list_value(mut self, list_type: &str, name: &str, oid: Oid) -> Self {
        self.lists
            .entry(list_type.to_string())
            .or_default()
            .insert(name.to_string(), oid);
        self
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Whether `asset_type` or one of its bases declares `attribute`.
    fn declares(&self, asset_type: &str, attribute: &str) -> Result<bool> {
        let mut current = Some(asset_type);
        // A base chain longer than the number of types is a cycle.
        for _ in 0..=self.types.len() {
            let Some(name) = current else {
                return Ok(false);
            };
            let def = self
                .types
                .get(name)
                .ok_or_else(|| Error::UnknownAssetType(name.to_string()))?;
            if def.attributes.contains(attribute) {
                return Ok(true);
            }
            current = def.base.as_deref();
        }
        Err(Error::UnknownAssetType(asset_type.to_string()))
    }
}

impl Resolver for Catalog {
    fn resolve_attribute(&self, asset_type: &str, attribute: &str) -> Result<AttributeHandle> {
        // Paths such as `Scope.Name` are checked on their first segment.
        let head = attribute.split('.').next().unwrap_or(attribute);
        if self.declares(asset_type, head)? {
            Ok(AttributeHandle::new(asset_type, attribute))
        } else {
            Err(Error::UnknownAttribute {
                asset_type: asset_type.to_string(),
                attribute: attribute.to_string(),
            })
        }
    }

    fn resolve_asset_id(&self, id: &str) -> Result<Oid> {
        if let Some(oid) = self.assets.get(id) {
            return Ok(oid.clone());
        }
        match id.parse::<Oid>() {
            Ok(oid) if self.has_type(oid.asset_type()) => Ok(oid),
            _ => Err(Error::UnresolvedIdentifier(id.to_string())),
        }
    }

    fn resolve_list_value(&self, list_type: &str, name: &str) -> Result<Oid> {
        self.lists
            .get(list_type)
            .and_then(|values| values.get(name))
            .cloned()
            .ok_or_else(|| Error::UnknownListValue {
                list_type: list_type.to_string(),
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
