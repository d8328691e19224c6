// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for vq-core operations.

use thiserror::Error;

/// All possible errors that can occur while building or compiling a filter.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("operator '{operator}' is not supported by {searcher}")]
    NotSupported {
        operator: String,
        searcher: &'static str,
    },

    #[error("unknown attribute: {asset_type}.{attribute}\n  hint: check the attribute name against the asset type's meta-model")]
    UnknownAttribute {
        asset_type: String,
        attribute: String,
    },

    #[error("unresolved identifier: '{0}'\n  hint: identifiers take the form Type:Number or a known display ID")]
    UnresolvedIdentifier(String),

    #[error("unknown list value: {list_type} '{name}'")]
    UnknownListValue { list_type: String, name: String },

    #[error("unknown asset type: '{0}'")]
    UnknownAssetType(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for vq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
