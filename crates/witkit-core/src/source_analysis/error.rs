// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for WIT parsing.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for beautiful error reporting.
//!
//! Parsing never aborts on the first problem: the parser accumulates a
//! `Vec<ParseError>` and keeps going, so a single pass over a file can
//! report every syntax error it contains.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use super::{Span, Token};

/// A syntax error encountered while parsing WIT source.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ParseError {
    /// The kind of parse error.
    #[source]
    pub kind: ParseErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected token" error from the offending token and a
    /// description of what the parser was looking for.
    #[must_use]
    pub fn unexpected_token(expected: impl Into<EcoString>, got: &Token) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                expected: expected.into(),
                got: got.kind().describe(),
            },
            got.span(),
        )
    }

    /// Creates an error for a token that cannot start a top-level item.
    #[must_use]
    pub fn invalid_root_token(got: &Token) -> Self {
        Self::new(
            ParseErrorKind::InvalidRootToken {
                got: got.kind().describe(),
            },
            got.span(),
        )
    }

    /// Creates an error for a character the lexer could not recognise.
    #[must_use]
    pub fn illegal_character(text: impl Into<EcoString>, span: Span) -> Self {
        Self::new(
            ParseErrorKind::IllegalCharacter { text: text.into() },
            span,
        )
    }

    /// Creates an error for type expressions nested past the supported depth.
    #[must_use]
    pub fn nesting_too_deep(span: Span) -> Self {
        Self::new(ParseErrorKind::NestingTooDeep, span)
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The parser was looking for one construct and found another token.
    #[error("expected {expected}, found {got}")]
    UnexpectedToken {
        /// Description of what was expected.
        expected: EcoString,
        /// Description of the token actually found.
        got: EcoString,
    },

    /// A token that cannot begin a top-level declaration.
    #[error("expected `package`, `interface`, or `world`, found {got}")]
    InvalidRootToken {
        /// Description of the token actually found.
        got: EcoString,
    },

    /// A character the lexer could not recognise.
    #[error("illegal character {text:?}")]
    IllegalCharacter {
        /// The offending source text.
        text: EcoString,
    },

    /// A type expression nested past the supported depth.
    #[error("type expression is nested too deeply")]
    NestingTooDeep,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::TokenKind;

    #[test]
    fn unexpected_token_message() {
        let token = Token::new(TokenKind::LeftBrace, Span::new(3, 4));
        let error = ParseError::unexpected_token("an identifier", &token);
        assert_eq!(error.to_string(), "expected an identifier, found `{`");
        assert_eq!(error.span, Span::new(3, 4));
    }

    #[test]
    fn illegal_character_message() {
        let error = ParseError::illegal_character("#", Span::new(0, 1));
        assert_eq!(error.to_string(), "illegal character \"#\"");
    }
}
