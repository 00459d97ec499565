// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! The type-expression grammar.
//!
//! Type expressions are the recursive heart of WIT: `list`, `option`,
//! `result`, and `tuple` nest arbitrarily. [`Parser::parse_type_expr`] is
//! total: it always produces a [`TypeExpr`], substituting
//! [`TypeExpr::Error`] (and recording a diagnostic) when the input cannot
//! be a type.

use super::{Parser, MAX_NESTING_DEPTH};
use crate::ast::{Primitive, TypeExpr};
use crate::source_analysis::{ParseError, TokenKind};

impl Parser<'_> {
    /// Parses one type expression, never failing.
    ///
    /// On an unexpected token, records an error, consumes that one token,
    /// and yields [`TypeExpr::Error`].
    pub(super) fn parse_type_expr(&mut self) -> TypeExpr {
        self.type_expr(0)
    }

    fn type_expr(&mut self, depth: usize) -> TypeExpr {
        if depth >= MAX_NESTING_DEPTH {
            let span = self.current.span();
            self.errors.push(ParseError::nesting_too_deep(span));
            return TypeExpr::Error;
        }

        match self.current.kind() {
            kind if kind.is_primitive() => {
                let primitive = primitive_for(kind);
                self.advance();
                TypeExpr::Primitive(primitive)
            }

            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                TypeExpr::Named(name)
            }

            TokenKind::List => self
                .angle_wrapped(depth, TypeExpr::list)
                .unwrap_or(TypeExpr::Error),

            TokenKind::Option => self
                .angle_wrapped(depth, TypeExpr::option)
                .unwrap_or(TypeExpr::Error),

            TokenKind::Result => self.result_type(depth).unwrap_or(TypeExpr::Error),

            TokenKind::Tuple => self.tuple_type(depth).unwrap_or(TypeExpr::Error),

            _ => {
                self.error_expected("a type");
                self.advance();
                TypeExpr::Error
            }
        }
    }

    /// `list<ty>` / `option<ty>`: consumes the keyword, then the
    /// angle-bracketed inner type, then wraps it.
    fn angle_wrapped(
        &mut self,
        depth: usize,
        wrap: impl FnOnce(TypeExpr) -> TypeExpr,
    ) -> Option<TypeExpr> {
        self.advance(); // `list` / `option`
        self.expect(&TokenKind::LeftAngle, "`<`")?;
        let inner = self.type_expr(depth + 1);
        self.expect(&TokenKind::RightAngle, "`>`")?;
        Some(wrap(inner))
    }

    /// `result`, `result<ok>`, `result<_, err>`, `result<ok, err>`.
    fn result_type(&mut self, depth: usize) -> Option<TypeExpr> {
        self.advance(); // `result`
        if !self.check(&TokenKind::LeftAngle) {
            return Some(TypeExpr::Result {
                ok: None,
                err: None,
            });
        }
        self.advance(); // `<`

        // `_` leaves the ok slot empty while still allowing an err type.
        let ok = if self.check(&TokenKind::Underscore) {
            self.advance();
            None
        } else {
            Some(Box::new(self.type_expr(depth + 1)))
        };

        let err = if self.check(&TokenKind::Comma) {
            self.advance();
            Some(Box::new(self.type_expr(depth + 1)))
        } else {
            None
        };

        self.expect(&TokenKind::RightAngle, "`>`")?;
        Some(TypeExpr::Result { ok, err })
    }

    /// `tuple<ty, ty, ..>` with at least one element; a trailing comma is
    /// tolerated.
    fn tuple_type(&mut self, depth: usize) -> Option<TypeExpr> {
        self.advance(); // `tuple`
        self.expect(&TokenKind::LeftAngle, "`<`")?;
        let mut items = vec![self.type_expr(depth + 1)];
        while self.check(&TokenKind::Comma) {
            self.advance();
            if self.check(&TokenKind::RightAngle) {
                break;
            }
            items.push(self.type_expr(depth + 1));
        }
        self.expect(&TokenKind::RightAngle, "`>`")?;
        Some(TypeExpr::Tuple(items))
    }
}

/// Maps a primitive keyword token to its [`Primitive`].
fn primitive_for(kind: &TokenKind) -> Primitive {
    match kind {
        TokenKind::Bool => Primitive::Bool,
        TokenKind::Char => Primitive::Char,
        TokenKind::String => Primitive::String,
        TokenKind::S8 => Primitive::S8,
        TokenKind::S16 => Primitive::S16,
        TokenKind::S32 => Primitive::S32,
        TokenKind::S64 => Primitive::S64,
        TokenKind::U8 => Primitive::U8,
        TokenKind::U16 => Primitive::U16,
        TokenKind::U32 => Primitive::U32,
        TokenKind::U64 => Primitive::U64,
        TokenKind::Float32 => Primitive::Float32,
        TokenKind::Float64 => Primitive::Float64,
        // Guarded by `is_primitive` at the only call site.
        _ => unreachable!("not a primitive keyword: {kind:?}"),
    }
}
