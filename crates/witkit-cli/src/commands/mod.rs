// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! CLI command implementations.

pub mod check;
pub mod parse;
pub mod tokens;

use camino::Utf8Path;
use miette::{Context, IntoDiagnostic, Result};

/// Reads a WIT source file to a string.
pub fn read_source(path: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read '{path}'"))
}
