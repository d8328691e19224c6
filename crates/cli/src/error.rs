// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors the `vq` command line can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Compile(#[from] vq_core::Error),

    #[error("unknown entity '{0}'\n  hint: run 'vq entities' to list the entity kinds")]
    UnknownEntity(String),

    #[error("filter document has no \"entity\" field\n  hint: add e.g. \"entity\": \"story\"")]
    MissingEntity,

    #[error("invalid filter document: {0}")]
    Document(serde_json::Error),

    #[error("{context} is required for {operation}")]
    RequiredFor {
        context: &'static str,
        operation: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
