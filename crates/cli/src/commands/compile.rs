// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command implementation.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use vq_core::{Catalog, CompiledQuery};

use crate::cli::QueryFormat;
use crate::config::Config;
use crate::document::AnyFilter;
use crate::error::{Error, Result};

pub fn run(
    file: PathBuf,
    catalog: Option<PathBuf>,
    config: Option<PathBuf>,
    format: QueryFormat,
) -> Result<()> {
    let config = Config::discover(config.as_deref(), &std::env::current_dir()?)?;
    let catalog_path = catalog
        .or_else(|| config.catalog.clone())
        .ok_or(Error::RequiredFor {
            context: "a catalog (--catalog or `catalog` in vq.toml)",
            operation: "compile",
        })?;
    let catalog = Catalog::load(&catalog_path)?;

    let input = read_document(&file)?;
    let query = compile(&input, &catalog, &config)?;
    println!("{}", render(&query, format)?);
    Ok(())
}

fn read_document(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

/// Parses and compiles one filter document.
pub fn compile(input: &str, catalog: &Catalog, config: &Config) -> Result<CompiledQuery> {
    let filter = AnyFilter::from_json(input)?;
    Ok(filter
        .as_filter()
        .compile(catalog, &config.compile_options())?)
}

pub fn render(query: &CompiledQuery, format: QueryFormat) -> Result<String> {
    match format {
        QueryFormat::Json => Ok(serde_json::to_string_pretty(query)?),
        QueryFormat::Token => Ok(render_tokens(query)),
    }
}

/// One `name: value` line per non-empty query token.
fn render_tokens(query: &CompiledQuery) -> String {
    let mut lines = vec![format!("type: {}", query.asset_type)];
    if let Some(filter) = query.where_token() {
        lines.push(format!("where: {filter}"));
    }
    if !query.order_by.is_empty() {
        lines.push(format!("sort: {}", query.order_by.token()));
    }
    if let Some(find) = &query.find {
        lines.push(format!("find: {}", find.text()));
        lines.push(format!("findin: {}", find.fields_token()));
    }
    if !query.selection.is_empty() {
        lines.push(format!("sel: {}", query.select_token()));
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
