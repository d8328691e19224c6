// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entities command implementation.

use serde::Serialize;

use vq_core::EntityType;

use crate::cli::OutputFormat;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct EntityRow {
    entity: &'static str,
    asset_type: &'static str,
    state_asset_types: &'static [&'static str],
}

pub fn run(format: OutputFormat) -> Result<()> {
    println!("{}", render(format)?);
    Ok(())
}

pub fn render(format: OutputFormat) -> Result<String> {
    let rows: Vec<EntityRow> = EntityType::ALL
        .iter()
        .map(|entity| EntityRow {
            entity: entity.as_str(),
            asset_type: entity.asset_type(),
            state_asset_types: entity.state_asset_types(),
        })
        .collect();

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| {
                format!(
                    "{:<20} {:<18} {}",
                    row.entity,
                    row.asset_type,
                    row.state_asset_types.join(",")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
#[path = "entities_tests.rs"]
mod tests;
