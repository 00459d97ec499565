// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent parser for WIT documents.
//!
//! The parser pulls tokens straight from the [`Lexer`] with two tokens of
//! lookahead (`current` and `peek`) and builds the [`Document`] tree in a
//! single pass.
//!
//! # Error Recovery
//!
//! Parsing never aborts. Errors are accumulated in a `Vec<ParseError>`:
//!
//! - [`Parser::expect`] records an error and does NOT advance when the
//!   current token is wrong, so the offending token stays put for the
//!   caller to decide what to do with;
//! - a production that cannot continue returns `None` and its caller
//!   skips one token before re-dispatching;
//! - a failed type expression becomes [`TypeExpr::Error`] so the
//!   surrounding declaration still exists in the tree.
//!
//! [`parse`] therefore always returns a document; when the error list is
//! non-empty the document is useful for diagnostics only.
//!
//! [`TypeExpr::Error`]: crate::ast::TypeExpr::Error

mod declarations;
#[cfg(test)]
mod property_tests;
mod types;

use ecow::EcoString;

use super::{Lexer, ParseError, Span, Token, TokenKind};
use crate::ast::{Document, PackageDecl, SemVer};

/// Maximum nesting depth for type expressions.
///
/// Prevents stack overflow on pathological input like
/// `list<list<list<...>>>` thousands of levels deep.
pub(crate) const MAX_NESTING_DEPTH: usize = 64;

/// Parses WIT source text into a document plus accumulated errors.
///
/// This is the main entry point of the crate.
///
/// # Example
///
/// ```
/// let (document, errors) = witkit_core::source_analysis::parse("package wasi:http@0.2.0");
/// assert!(errors.is_empty());
/// let package = document.package.unwrap();
/// assert_eq!(package.namespace, "wasi");
/// assert_eq!(package.version.unwrap().to_string(), "0.2.0");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Document, Vec<ParseError>) {
    Parser::new(source).parse()
}

/// The WIT parser.
///
/// Holds the lexer, two tokens of lookahead, and the errors accumulated
/// so far. Construction primes both lookahead slots by advancing twice.
pub struct Parser<'src> {
    /// Source of tokens.
    lexer: Lexer<'src>,
    /// The token being examined.
    current: Token,
    /// One token of lookahead past `current`.
    peek: Token,
    /// Errors accumulated during parsing.
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source),
            current: Token::new(TokenKind::Eof, Span::new(0, 0)),
            peek: Token::new(TokenKind::Eof, Span::new(0, 0)),
            errors: Vec::new(),
        };
        // Prime `current` and `peek`.
        parser.advance();
        parser.advance();
        parser
    }

    /// Parses the whole input, consuming the parser.
    #[must_use]
    pub fn parse(mut self) -> (Document, Vec<ParseError>) {
        let mut document = Document::new();
        while !self.current.kind().is_eof() {
            match self.current.kind() {
                TokenKind::Package => {
                    if let Some(package) = self.parse_package() {
                        document.package = Some(package);
                    } else {
                        self.advance();
                    }
                }
                TokenKind::World => {
                    if let Some(world) = self.parse_world() {
                        document.world = Some(world);
                    } else {
                        self.advance();
                    }
                }
                TokenKind::Interface => {
                    if let Some(interface) = self.parse_interface() {
                        document.interfaces.push(interface);
                    } else {
                        self.advance();
                    }
                }
                TokenKind::Use => {
                    if let Some(use_decl) = self.parse_top_use() {
                        document.uses.push(use_decl);
                    } else {
                        self.advance();
                    }
                }
                // Already reported when the token was pulled from the lexer.
                TokenKind::Error(_) => self.advance(),
                _ => {
                    self.errors.push(ParseError::invalid_root_token(&self.current));
                    self.advance();
                }
            }
        }
        (document, self.errors)
    }

    // === Lookahead primitives ===

    /// Moves one token forward.
    ///
    /// Unrecognised characters surface here, exactly once per token, as
    /// [`ParseError::illegal_character`]; the error token itself stays in
    /// the stream so lookahead positions remain honest.
    fn advance(&mut self) {
        let next = self.lexer.next_token();
        if let TokenKind::Error(text) = next.kind() {
            self.errors
                .push(ParseError::illegal_character(text.clone(), next.span()));
        }
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Returns `true` if the current token has the given kind, ignoring
    /// any payload.
    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current.kind()) == std::mem::discriminant(kind)
    }

    /// Like [`Parser::check`], but for the lookahead token.
    fn peek_check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.peek.kind()) == std::mem::discriminant(kind)
    }

    /// Consumes the current token if it matches, otherwise records an
    /// error and stays put.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Option<Token> {
        if self.check(kind) {
            let token = self.current.clone();
            self.advance();
            Some(token)
        } else {
            self.error_expected(expected);
            None
        }
    }

    /// Consumes an identifier and returns its text.
    fn expect_identifier(&mut self, expected: &str) -> Option<EcoString> {
        if let TokenKind::Identifier(name) = self.current.kind() {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            self.error_expected(expected);
            None
        }
    }

    /// Consumes an integer literal and returns its value.
    ///
    /// Unlike [`Parser::expect`] this consumes the offending token on a
    /// mismatch too, so a malformed version like `1.x.0` cannot stall the
    /// caller on the same token.
    fn expect_integer(&mut self, expected: &str) -> Option<u64> {
        if let TokenKind::Integer(text) = self.current.kind() {
            let value = text.parse().ok();
            if value.is_none() {
                self.error_expected(expected);
            }
            self.advance();
            value
        } else {
            self.error_expected(expected);
            self.advance();
            None
        }
    }

    /// Records an "expected X, found Y" error at the current token.
    ///
    /// Error tokens are skipped: the illegal character was already
    /// reported when it came out of the lexer.
    fn error_expected(&mut self, expected: &str) {
        if !self.current.kind().is_error() {
            self.errors
                .push(ParseError::unexpected_token(expected, &self.current));
        }
    }

    // === Productions ===

    /// `package namespace ':' name ('@' semver)?`
    fn parse_package(&mut self) -> Option<PackageDecl> {
        self.advance(); // `package`
        let namespace = self.expect_identifier("a package namespace")?;
        self.expect(&TokenKind::Colon, "`:`")?;
        let name = self.expect_identifier("a package name")?;
        let version = if self.check(&TokenKind::At) {
            self.advance();
            Some(self.parse_semver()?)
        } else {
            None
        };
        Some(PackageDecl {
            namespace,
            name,
            version,
        })
    }

    /// `INT '.' INT '.' INT`
    ///
    /// Pre-release and build suffixes (`1.0.0-rc.1`) are not supported;
    /// the stray suffix tokens surface as errors at the caller.
    fn parse_semver(&mut self) -> Option<SemVer> {
        let major = self.expect_integer("a major version number")?;
        self.expect(&TokenKind::Period, "`.`")?;
        let minor = self.expect_integer("a minor version number")?;
        self.expect(&TokenKind::Period, "`.`")?;
        let patch = self.expect_integer("a patch version number")?;
        Some(SemVer::new(major, minor, patch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parses and asserts there were no errors.
    fn parse_ok(source: &str) -> Document {
        let (document, errors) = parse(source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        document
    }

    #[test]
    fn parse_empty_source() {
        let document = parse_ok("");
        assert_eq!(document, Document::new());
    }

    #[test]
    fn parse_package_without_version() {
        let document = parse_ok("package example:host");
        assert_eq!(
            document.package,
            Some(PackageDecl {
                namespace: "example".into(),
                name: "host".into(),
                version: None,
            })
        );
    }

    #[test]
    fn parse_package_with_version() {
        let document = parse_ok("package jordan-rash:pingpong@0.1.0");
        let package = document.package.expect("package clause");
        assert_eq!(package.namespace, "jordan-rash");
        assert_eq!(package.name, "pingpong");
        assert_eq!(package.version, Some(SemVer::new(0, 1, 0)));
    }

    #[test]
    fn parse_package_with_large_version() {
        let document = parse_ok("package a:b@10.20.300");
        let package = document.package.expect("package clause");
        assert_eq!(package.version, Some(SemVer::new(10, 20, 300)));
    }

    #[test]
    fn malformed_version_is_an_error_not_a_hang() {
        let (document, errors) = parse("package a:b@1.x.0");
        assert!(!errors.is_empty());
        // The clause failed, so the slot stays empty.
        assert_eq!(document.package, None);
    }

    #[test]
    fn missing_package_name_is_an_error() {
        let (document, errors) = parse("package wasi");
        assert_eq!(document.package, None);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "expected `:`, found end of input");
    }

    #[test]
    fn duplicate_package_clause_last_wins() {
        let document = parse_ok("package a:b\npackage c:d");
        let package = document.package.expect("package clause");
        assert_eq!(package.namespace, "c");
        assert_eq!(package.name, "d");
    }

    #[test]
    fn invalid_root_token_is_reported_and_skipped() {
        let (document, errors) = parse("record package example:host");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "expected `package`, `interface`, or `world`, found `record`"
        );
        // Parsing resumed after the stray token.
        assert!(document.package.is_some());
    }

    #[test]
    fn illegal_character_is_reported_once() {
        let (document, errors) = parse("# package example:host");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "illegal character \"#\"");
        assert_eq!(errors[0].span, Span::new(0, 1));
        assert!(document.package.is_some());
    }

    #[test]
    fn errors_carry_spans() {
        let source = "package wasi http";
        let (_, errors) = parse(source);
        assert_eq!(errors.len(), 1);
        assert_eq!(&source[errors[0].span.as_range()], "http");
    }
}
