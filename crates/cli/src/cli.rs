// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `vq compile`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum QueryFormat {
    /// The compiled query as JSON.
    #[default]
    Json,
    /// The `where`, `sort`, `find`, `findin` and `sel` query tokens.
    Token,
}

/// Output format for listing commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

const QUICKSTART_HELP: &str = "\
Get started:
  vq entities                                   List filterable entity kinds
  vq compile story.json --catalog catalog.toml  Compile a filter document
  vq compile story.json --format token          Print the query tokens";

#[derive(Parser)]
#[command(name = "vq")]
#[command(about = "Compile typed asset filters into query service requests")]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a JSON filter document
    #[command(after_help = "Examples:\n  \
        vq compile story.json                       Use the catalog named in ./vq.toml\n  \
        vq compile story.json --catalog meta.toml   Use an explicit catalog\n  \
        vq compile - --format token < story.json    Read the document from stdin")]
    Compile {
        /// Filter document path, or `-` for stdin
        file: PathBuf,

        /// Meta-model catalog (overrides `catalog` in vq.toml)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Configuration file (default: ./vq.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "json")]
        format: QueryFormat,
    },

    /// List the filterable entity kinds
    Entities {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
