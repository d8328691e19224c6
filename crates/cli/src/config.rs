// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line configuration.
//!
//! Configuration is read from `vq.toml`, either the file named by `--config`
//! or one in the current directory, and includes:
//! - `catalog`: path to the meta-model catalog, relative to the config file
//! - `default_order`: property to sort on when a filter names no `order_by`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use vq_core::CompileOptions;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "vq.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog path (relative paths are resolved against the config file).
    pub catalog: Option<PathBuf>,
    /// Sort property used when a filter has no `order_by`.
    pub default_order: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `explicit` if given, otherwise `vq.toml` in `dir` when present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            default_order: self.default_order.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
