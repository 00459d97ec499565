// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts witkit-core parse errors into miette-formatted reports with
//! source code context and arrows pointing at the offending tokens.

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use witkit_core::source_analysis::ParseError;

/// A parse diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(witkit::parse))]
pub struct ParseDiagnostic {
    /// Human-readable error message
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error
    #[label("here")]
    pub span: SourceSpan,
}

impl ParseDiagnostic {
    /// Create a new diagnostic from a witkit-core parse error.
    pub fn from_parse_error(error: &ParseError, source_path: &str, source: &str) -> Self {
        Self {
            message: error.to_string(),
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: (error.span.start() as usize, error.span.len() as usize).into(),
        }
    }
}

/// Renders every accumulated error against the source file.
pub fn report_errors(errors: &[ParseError], source_path: &str, source: &str) {
    for error in errors {
        let diagnostic = ParseDiagnostic::from_parse_error(error, source_path, source);
        eprintln!("{:?}", miette::Report::new(diagnostic));
    }
}
