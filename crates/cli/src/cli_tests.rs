// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::CommandFactory;
use yare::parameterized;

#[test]
fn test_cli_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn test_compile_defaults() {
    let cli = Cli::try_parse_from(["vq", "compile", "story.json"]).unwrap();
    let Command::Compile {
        file,
        catalog,
        config,
        format,
    } = cli.command
    else {
        panic!("expected compile");
    };
    assert_eq!(file, PathBuf::from("story.json"));
    assert_eq!(catalog, None);
    assert_eq!(config, None);
    assert_eq!(format, QueryFormat::Json);
}

#[parameterized(
    json = { "json", QueryFormat::Json },
    token = { "token", QueryFormat::Token },
)]
fn test_compile_format(arg: &str, expected: QueryFormat) {
    let cli = Cli::try_parse_from(["vq", "compile", "-", "--format", arg]).unwrap();
    let Command::Compile { format, .. } = cli.command else {
        panic!("expected compile");
    };
    assert_eq!(format, expected);
}

#[test]
fn test_compile_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["vq", "compile", "-", "--format", "xml"]).is_err());
}

#[test]
fn test_entities_json() {
    let cli = Cli::try_parse_from(["vq", "entities", "-f", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Entities {
            format: OutputFormat::Json
        }
    ));
}
