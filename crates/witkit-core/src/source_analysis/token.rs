// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Token types for WIT lexical analysis.
//!
//! A [`Token`] is a [`TokenKind`] plus the [`Span`] it was read from.
//! Variable text (identifiers, integer literals, unrecognised characters)
//! is carried inside the kind as an [`EcoString`], so tokens stay cheap to
//! clone while the literal text remains recoverable via [`Token::literal`].
//!
//! # Keywords
//!
//! WIT reserves a fixed word set (`package`, `world`, `interface`, ...)
//! plus the sized numeric types. Sized numeric keywords (`u8`..`u64`,
//! `s8`..`s64`, `float32`, `float64`) are single lexical units: the lexer
//! only produces them when the prefix is followed by an exact supported
//! bit width, so `u7` or `floatx` arrive here as plain identifiers.

use ecow::EcoString;

use super::Span;

/// The kind of token, not including its source location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A kebab-case identifier: `ping`, `jordan-rash`, `a1-b2`
    Identifier(EcoString),

    /// A decimal integer literal: `0`, `42`
    Integer(EcoString),

    // === Punctuation ===
    /// `@` precedes a semantic version
    At,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `=`
    Equal,
    /// `%`, the explicit-identifier prefix (reserved, no grammar production)
    Percent,
    /// `-`
    Minus,
    /// `.`
    Period,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`, separating package and interface in qualified paths
    Slash,
    /// `*`
    Star,
    /// `_`, the "no ok type" marker in `result<_, e>`
    Underscore,
    /// `->` precedes a function result list
    Arrow,

    // === Declaration keywords ===
    /// `package`
    Package,
    /// `world`
    World,
    /// `interface`
    Interface,
    /// `use`
    Use,
    /// `type`
    Type,
    /// `record`
    Record,
    /// `variant`
    Variant,
    /// `union`
    Union,
    /// `enum`
    Enum,
    /// `flags`
    Flags,
    /// `resource`
    Resource,
    /// `func`
    Func,
    /// `static`
    Static,
    /// `constructor`
    Constructor,
    /// `import`
    Import,
    /// `export`
    Export,
    /// `include`
    Include,
    /// `from`
    From,
    /// `with`
    With,
    /// `as`
    As,
    /// `borrow`
    Borrow,
    /// `own`
    Own,
    /// `stream`
    Stream,
    /// `future`
    Future,

    // === Type keywords ===
    /// `list`
    List,
    /// `option`
    Option,
    /// `result`
    Result,
    /// `tuple`
    Tuple,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `char`
    Char,
    /// `s8`
    S8,
    /// `s16`
    S16,
    /// `s32`
    S32,
    /// `s64`
    S64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `float32`
    Float32,
    /// `float64`
    Float64,

    // === Special ===
    /// End of input. Produced forever once the source is exhausted.
    Eof,

    /// A character the lexer could not recognise (error recovery).
    Error(EcoString),
}

impl TokenKind {
    /// Looks up a reserved word, returning `None` for plain identifiers.
    ///
    /// The sized numeric keywords are absent on purpose: identifier runs
    /// never contain digits by the time they reach this table, because the
    /// lexer recognises `u8`/`float64`-style tokens before keyword lookup.
    #[must_use]
    pub fn keyword(word: &str) -> std::option::Option<Self> {
        let kind = match word {
            "package" => Self::Package,
            "world" => Self::World,
            "interface" => Self::Interface,
            "use" => Self::Use,
            "type" => Self::Type,
            "record" => Self::Record,
            "variant" => Self::Variant,
            "union" => Self::Union,
            "enum" => Self::Enum,
            "flags" => Self::Flags,
            "resource" => Self::Resource,
            "func" => Self::Func,
            "static" => Self::Static,
            "constructor" => Self::Constructor,
            "import" => Self::Import,
            "export" => Self::Export,
            "include" => Self::Include,
            "from" => Self::From,
            "with" => Self::With,
            "as" => Self::As,
            "borrow" => Self::Borrow,
            "own" => Self::Own,
            "stream" => Self::Stream,
            "future" => Self::Future,
            "list" => Self::List,
            "option" => Self::Option,
            "result" => Self::Result,
            "tuple" => Self::Tuple,
            "string" => Self::String,
            "bool" => Self::Bool,
            "char" => Self::Char,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` if this is a primitive type keyword.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::String
                | Self::Bool
                | Self::Char
                | Self::S8
                | Self::S16
                | Self::S32
                | Self::S64
                | Self::U8
                | Self::U16
                | Self::U32
                | Self::U64
                | Self::Float32
                | Self::Float64
        )
    }

    /// Returns `true` if this token can begin a type expression.
    #[must_use]
    pub const fn starts_type_expr(&self) -> bool {
        self.is_primitive()
            || matches!(
                self,
                Self::Identifier(_) | Self::List | Self::Option | Self::Result | Self::Tuple
            )
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// A short human-readable name for diagnostics ("an identifier", "`}`").
    #[must_use]
    pub fn describe(&self) -> EcoString {
        match self {
            Self::Identifier(_) => "an identifier".into(),
            Self::Integer(_) => "an integer".into(),
            Self::Eof => "end of input".into(),
            Self::Error(s) => ecow::eco_format!("unrecognised character `{s}`"),
            other => ecow::eco_format!("`{other}`"),
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(s) | Self::Integer(s) | Self::Error(s) => write!(f, "{s}"),
            Self::At => write!(f, "@"),
            Self::LeftAngle => write!(f, "<"),
            Self::RightAngle => write!(f, ">"),
            Self::LeftBrace => write!(f, "{{"),
            Self::RightBrace => write!(f, "}}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Colon => write!(f, ":"),
            Self::Comma => write!(f, ","),
            Self::Equal => write!(f, "="),
            Self::Percent => write!(f, "%"),
            Self::Minus => write!(f, "-"),
            Self::Period => write!(f, "."),
            Self::Plus => write!(f, "+"),
            Self::Semicolon => write!(f, ";"),
            Self::Slash => write!(f, "/"),
            Self::Star => write!(f, "*"),
            Self::Underscore => write!(f, "_"),
            Self::Arrow => write!(f, "->"),
            Self::Package => write!(f, "package"),
            Self::World => write!(f, "world"),
            Self::Interface => write!(f, "interface"),
            Self::Use => write!(f, "use"),
            Self::Type => write!(f, "type"),
            Self::Record => write!(f, "record"),
            Self::Variant => write!(f, "variant"),
            Self::Union => write!(f, "union"),
            Self::Enum => write!(f, "enum"),
            Self::Flags => write!(f, "flags"),
            Self::Resource => write!(f, "resource"),
            Self::Func => write!(f, "func"),
            Self::Static => write!(f, "static"),
            Self::Constructor => write!(f, "constructor"),
            Self::Import => write!(f, "import"),
            Self::Export => write!(f, "export"),
            Self::Include => write!(f, "include"),
            Self::From => write!(f, "from"),
            Self::With => write!(f, "with"),
            Self::As => write!(f, "as"),
            Self::Borrow => write!(f, "borrow"),
            Self::Own => write!(f, "own"),
            Self::Stream => write!(f, "stream"),
            Self::Future => write!(f, "future"),
            Self::List => write!(f, "list"),
            Self::Option => write!(f, "option"),
            Self::Result => write!(f, "result"),
            Self::Tuple => write!(f, "tuple"),
            Self::String => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::Char => write!(f, "char"),
            Self::S8 => write!(f, "s8"),
            Self::S16 => write!(f, "s16"),
            Self::S32 => write!(f, "s32"),
            Self::S64 => write!(f, "s64"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::Float32 => write!(f, "float32"),
            Self::Float64 => write!(f, "float64"),
            Self::Eof => write!(f, ""),
        }
    }
}

/// A token with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Consumes the token and returns its kind.
    #[must_use]
    pub fn into_kind(self) -> TokenKind {
        self.kind
    }

    /// Returns the source span of this token.
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the literal source text of this token.
    ///
    /// For the end-of-input token the literal is the empty string.
    #[must_use]
    pub fn literal(&self) -> EcoString {
        ecow::eco_format!("{}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup() {
        assert_eq!(TokenKind::keyword("package"), Some(TokenKind::Package));
        assert_eq!(TokenKind::keyword("resource"), Some(TokenKind::Resource));
        assert_eq!(TokenKind::keyword("ping"), None);
        // Sized numerics never reach the word table.
        assert_eq!(TokenKind::keyword("u8"), None);
    }

    #[test]
    fn primitive_classification() {
        assert!(TokenKind::U8.is_primitive());
        assert!(TokenKind::Float64.is_primitive());
        assert!(!TokenKind::List.is_primitive());
        assert!(TokenKind::List.starts_type_expr());
        assert!(TokenKind::Identifier("errno".into()).starts_type_expr());
        assert!(!TokenKind::RightAngle.starts_type_expr());
    }

    #[test]
    fn token_literal_matches_display() {
        let token = Token::new(TokenKind::Arrow, Span::new(0, 2));
        assert_eq!(token.literal(), "->");

        let token = Token::new(TokenKind::Identifier("foo-bar".into()), Span::new(0, 7));
        assert_eq!(token.literal(), "foo-bar");

        let token = Token::new(TokenKind::Eof, Span::new(7, 7));
        assert_eq!(token.literal(), "");
    }

    #[test]
    fn describe_quotes_punctuation() {
        assert_eq!(TokenKind::RightBrace.describe(), "`}`");
        assert_eq!(
            TokenKind::Identifier("x".into()).describe(),
            "an identifier"
        );
    }
}
