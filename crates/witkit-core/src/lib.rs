// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! WIT interface-definition parsing.
//!
//! This crate contains the core functionality:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction)
//! - Structured parse errors with source spans
//!
//! Parsing is diagnostic-first: a syntactically broken file still yields a
//! document plus the full list of errors, so tooling can report everything
//! in one pass.

pub mod ast;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Document, InterfaceDecl, TypeExpr, WorldDecl};
    pub use crate::source_analysis::{parse, ParseError, Span};
}
