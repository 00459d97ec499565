// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Check a WIT file for syntax errors.

use camino::Utf8Path;
use miette::Result;
use tracing::{info, instrument};
use witkit_core::source_analysis::parse;

use crate::diagnostic::report_errors;

/// Parse a file and report only whether it is syntactically well-formed.
#[instrument(skip_all, fields(path = %path))]
pub fn run(path: &Utf8Path) -> Result<()> {
    let source = super::read_source(path)?;
    let (_, errors) = parse(&source);
    info!(errors = errors.len(), "Check finished");

    if errors.is_empty() {
        println!("{path}: no syntax errors");
        Ok(())
    } else {
        report_errors(&errors, path.as_str(), &source);
        miette::bail!("'{path}' has {} syntax error(s)", errors.len());
    }
}
