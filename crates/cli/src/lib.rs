// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vqrs - the library behind the `vq` command line.
//!
//! `vq` reads JSON filter documents, compiles them with [`vq_core`] against a
//! meta-model catalog and prints the resulting query.
//!
//! # Main Components
//!
//! - [`AnyFilter`] - a filter document of any entity kind
//! - [`Config`] - `vq.toml` settings (catalog path, default sort)
//! - [`Error`] - error types for all commands

mod cli;
mod commands;

pub mod config;
pub mod document;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, QueryFormat};
pub use config::Config;
pub use document::AnyFilter;
pub use error::{Error, Result};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Compile {
            file,
            catalog,
            config,
            format,
        } => commands::compile::run(file, catalog, config, format),
        Command::Entities { format } => commands::entities::run(format),
    }
}
