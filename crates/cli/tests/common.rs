// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn vq() -> Command {
    cargo_bin_cmd!("vq")
}

/// The sample catalog shipped in the repository's `fixtures/`.
pub fn fixture_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/catalog.toml")
}

/// Helper to write a filter document into `temp` and return its path
pub fn write_filter(temp: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, json).unwrap();
    path
}
