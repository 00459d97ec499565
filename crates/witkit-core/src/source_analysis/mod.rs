// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for WIT source text.
//!
//! This module contains the lexer, tokens, spans, the parser, and the
//! structured parse errors.
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into a stream of [`Token`]s. Each
//! token carries its source location via [`Span`].
//!
//! ```
//! use witkit_core::source_analysis::{Lexer, TokenKind};
//!
//! let tokens: Vec<_> = Lexer::new("list<u8>").collect();
//! assert_eq!(tokens.len(), 4); // list, <, u8, >
//! ```
//!
//! See [`TokenKind`] for all supported syntactic elements.
//!
//! # Parsing
//!
//! The [`parse`] function builds a [`Document`](crate::ast::Document) from
//! source text in one pass, pulling tokens from the lexer as it goes.
//!
//! # Error Handling
//!
//! Both layers use error recovery. The lexer converts invalid input into
//! [`TokenKind::Error`] tokens rather than stopping; the parser records
//! every problem as a [`ParseError`] and keeps going. [`parse`] always
//! returns a document together with the accumulated errors.

mod error;
mod lexer;
mod parser;
mod span;
mod token;


pub use error::{ParseError, ParseErrorKind};
pub use lexer::{lex, lex_with_eof, Lexer};
pub use parser::{parse, Parser};
pub use span::Span;
pub use token::{Token, TokenKind};
