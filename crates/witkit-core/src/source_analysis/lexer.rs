// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for WIT source text.
//!
//! The lexer is a hand-written pull scanner: [`Lexer::next_token`] produces
//! exactly one token per call, looking ahead at most one pending character.
//! It never fails and never blocks: unrecognised characters become
//! [`TokenKind::Error`] tokens so the parser can keep going, and once the
//! input is exhausted it returns [`TokenKind::Eof`] forever.
//!
//! # Context-sensitive corners
//!
//! Three places need more than a character class:
//!
//! - `-` is either the minus operator or the first half of `->`, decided
//!   by a single character of lookahead;
//! - identifiers are kebab-case and scanned greedily across hyphens
//!   (`jordan-rash` is one token);
//! - sized numeric keywords are a prefix letter (`u`/`s`) or the word
//!   `float` followed by an exact bit width. `u8` is one keyword token,
//!   while `u7` or `floatx` fall back to plain identifier scanning.

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{Span, Token, TokenKind};

/// A pull-based lexer over WIT source text.
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
}

impl std::fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.position)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

/// Tokenizes the entire source, excluding the trailing EOF token.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Tokenizes the entire source, including the trailing EOF token.
#[must_use]
pub fn lex_with_eof(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind().is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
        }
    }

    /// Produces the next token.
    ///
    /// Returns [`TokenKind::Eof`] once the input is exhausted, and keeps
    /// returning it on every subsequent call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.current_position();
        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some(c) => self.lex_token_kind(c),
        };
        Token::new(kind, self.span_from(start))
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peeks `n+1` characters ahead without consuming (n=0 is `peek_char`).
    fn peek_char_n(&self, n: usize) -> Option<char> {
        let mut iter = self.chars.clone();
        for _ in 0..n {
            iter.next();
        }
        iter.next().map(|(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.source[span.as_range()]
    }

    /// Skips whitespace (spaces, tabs, newlines) before a token.
    fn skip_whitespace(&mut self) {
        self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    /// Lexes a token kind based on the first character.
    fn lex_token_kind(&mut self, c: char) -> TokenKind {
        match c {
            'a'..='z' | 'A'..='Z' => self.lex_word(c),

            '0'..='9' => self.lex_integer(),

            // Minus or arrow, decided by one character of lookahead.
            '-' => {
                self.advance();
                if self.peek_char() == Some('>') {
                    self.advance();
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }

            '@' => self.single(TokenKind::At),
            '<' => self.single(TokenKind::LeftAngle),
            '>' => self.single(TokenKind::RightAngle),
            '{' => self.single(TokenKind::LeftBrace),
            '}' => self.single(TokenKind::RightBrace),
            '(' => self.single(TokenKind::LeftParen),
            ')' => self.single(TokenKind::RightParen),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            '=' => self.single(TokenKind::Equal),
            '%' => self.single(TokenKind::Percent),
            '.' => self.single(TokenKind::Period),
            '+' => self.single(TokenKind::Plus),
            ';' => self.single(TokenKind::Semicolon),
            '/' => self.single(TokenKind::Slash),
            '*' => self.single(TokenKind::Star),
            '_' => self.single(TokenKind::Underscore),

            // Unknown character - error recovery
            _ => {
                let start = self.current_position();
                self.advance();
                let text = self.text_for(self.span_from(start));
                TokenKind::Error(EcoString::from(text))
            }
        }
    }

    /// Consumes one character and returns the given kind.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Lexes a letter-initial run: keyword, sized numeric, or identifier.
    fn lex_word(&mut self, first: char) -> TokenKind {
        // `u`/`s` followed by an exact bit width is a sized-integer keyword
        // consuming exactly prefix+digits; any other digit run falls through
        // to identifier scanning (`u7`, `s80` are identifiers).
        if matches!(first, 'u' | 's') {
            if let Some(kind) = self.try_sized_integer(first) {
                return kind;
            }
        }

        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_alphabetic());

        if self.text_for(self.span_from(start)) == "float" {
            if let Some(kind) = self.try_float_width() {
                return kind;
            }
        }

        // Kebab-case identifiers: continue the run greedily across letters,
        // digits, and hyphens.
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '-');
        let text = self.text_for(self.span_from(start));
        TokenKind::keyword(text).unwrap_or_else(|| TokenKind::Identifier(EcoString::from(text)))
    }

    /// Recognises `u8/u16/u32/u64` and `s8/s16/s32/s64` without consuming
    /// anything on failure.
    ///
    /// The width is the maximal digit run following the prefix letter, so
    /// `u80` is not `u8` followed by `0`; it re-lexes as an identifier.
    fn try_sized_integer(&mut self, prefix: char) -> Option<TokenKind> {
        let width = self.peek_digit_run(1)?;
        let kind = match (prefix, width.as_str()) {
            ('u', "8") => TokenKind::U8,
            ('u', "16") => TokenKind::U16,
            ('u', "32") => TokenKind::U32,
            ('u', "64") => TokenKind::U64,
            ('s', "8") => TokenKind::S8,
            ('s', "16") => TokenKind::S16,
            ('s', "32") => TokenKind::S32,
            ('s', "64") => TokenKind::S64,
            _ => return None,
        };
        self.advance(); // prefix letter
        for _ in 0..width.len() {
            self.advance();
        }
        Some(kind)
    }

    /// Recognises the `32`/`64` width after a consumed `float` run.
    fn try_float_width(&mut self) -> Option<TokenKind> {
        let width = self.peek_digit_run(0)?;
        let kind = match width.as_str() {
            "32" => TokenKind::Float32,
            "64" => TokenKind::Float64,
            _ => return None,
        };
        for _ in 0..width.len() {
            self.advance();
        }
        Some(kind)
    }

    /// Returns the maximal decimal digit run starting `n` characters ahead,
    /// or `None` if the run is empty. Consumes nothing.
    fn peek_digit_run(&self, n: usize) -> Option<String> {
        let mut digits = String::new();
        let mut offset = n;
        while let Some(c) = self.peek_char_n(offset) {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            offset += 1;
        }
        if digits.is_empty() { None } else { Some(digits) }
    }

    /// Lexes a maximal decimal digit run as an integer literal.
    fn lex_integer(&mut self) -> TokenKind {
        let start = self.current_position();
        self.advance_while(|c| c.is_ascii_digit());
        let text = self.text_for(self.span_from(start));
        TokenKind::Integer(EcoString::from(text))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens until end of input; the EOF token itself is excluded.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind().is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(Token::into_kind).collect()
    }

    #[test]
    fn lex_empty() {
        assert!(lex("").is_empty());
        assert!(lex("  \t\n  ").is_empty());
    }

    #[test]
    fn lex_punctuation() {
        assert_eq!(
            lex_kinds("@/<>{}():,=%-.+;*_"),
            vec![
                TokenKind::At,
                TokenKind::Slash,
                TokenKind::LeftAngle,
                TokenKind::RightAngle,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Colon,
                TokenKind::Comma,
                TokenKind::Equal,
                TokenKind::Percent,
                TokenKind::Minus,
                TokenKind::Period,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Underscore,
            ]
        );
    }

    #[test]
    fn lex_arrow_vs_minus() {
        assert_eq!(lex_kinds("->"), vec![TokenKind::Arrow]);
        assert_eq!(lex_kinds("- >"), vec![TokenKind::Minus, TokenKind::RightAngle]);
        assert_eq!(lex_kinds("-"), vec![TokenKind::Minus]);
    }

    #[test]
    fn lex_sized_numerics() {
        assert_eq!(
            lex_kinds("u8 u16 u32 u64 s8 s16 s32 s64 float32 float64"),
            vec![
                TokenKind::U8,
                TokenKind::U16,
                TokenKind::U32,
                TokenKind::U64,
                TokenKind::S8,
                TokenKind::S16,
                TokenKind::S32,
                TokenKind::S64,
                TokenKind::Float32,
                TokenKind::Float64,
            ]
        );
    }

    #[test]
    fn sized_numeric_literals_match_input() {
        for input in ["u8", "u64", "s16", "float32", "float64"] {
            let tokens = lex(input);
            assert_eq!(tokens.len(), 1, "{input}");
            assert_eq!(tokens[0].literal(), input);
        }
    }

    #[test]
    fn near_miss_sized_numerics_are_identifiers() {
        for input in ["u7", "s9", "u80", "s128", "float3", "floatx", "float320", "uint"] {
            assert_eq!(
                lex_kinds(input),
                vec![TokenKind::Identifier(input.into())],
                "{input}"
            );
        }
    }

    #[test]
    fn lex_kebab_identifiers() {
        for input in ["jordan-rash", "a-1-a-2", "a1-b2", "foo-bar"] {
            let tokens = lex(input);
            assert_eq!(tokens.len(), 1, "{input}");
            assert_eq!(tokens[0].kind(), &TokenKind::Identifier(input.into()));
            assert_eq!(tokens[0].literal(), input);
        }
    }

    #[test]
    fn digit_initial_runs_are_integers() {
        assert_eq!(
            lex_kinds("7 1-2"),
            vec![
                TokenKind::Integer("7".into()),
                TokenKind::Integer("1".into()),
                TokenKind::Minus,
                TokenKind::Integer("2".into()),
            ]
        );
    }

    #[test]
    fn lex_keywords() {
        assert_eq!(
            lex_kinds("package world interface use type func"),
            vec![
                TokenKind::Package,
                TokenKind::World,
                TokenKind::Interface,
                TokenKind::Use,
                TokenKind::Type,
                TokenKind::Func,
            ]
        );
    }

    #[test]
    fn lex_simple_world() {
        let source = "\
package example:host

interface derp {
  type derp = result<_, errno>

  foo: func() -> u16
}

world host {
  import print: func(msg: string)
}
";
        assert_eq!(
            lex_kinds(source),
            vec![
                TokenKind::Package,
                TokenKind::Identifier("example".into()),
                TokenKind::Colon,
                TokenKind::Identifier("host".into()),
                TokenKind::Interface,
                TokenKind::Identifier("derp".into()),
                TokenKind::LeftBrace,
                TokenKind::Type,
                TokenKind::Identifier("derp".into()),
                TokenKind::Equal,
                TokenKind::Result,
                TokenKind::LeftAngle,
                TokenKind::Underscore,
                TokenKind::Comma,
                TokenKind::Identifier("errno".into()),
                TokenKind::RightAngle,
                TokenKind::Identifier("foo".into()),
                TokenKind::Colon,
                TokenKind::Func,
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Arrow,
                TokenKind::U16,
                TokenKind::RightBrace,
                TokenKind::World,
                TokenKind::Identifier("host".into()),
                TokenKind::LeftBrace,
                TokenKind::Import,
                TokenKind::Identifier("print".into()),
                TokenKind::Colon,
                TokenKind::Func,
                TokenKind::LeftParen,
                TokenKind::Identifier("msg".into()),
                TokenKind::Colon,
                TokenKind::String,
                TokenKind::RightParen,
                TokenKind::RightBrace,
            ]
        );
    }

    #[test]
    fn eof_is_sticky() {
        let mut lexer = Lexer::new("use");
        assert_eq!(lexer.next_token().into_kind(), TokenKind::Use);
        for _ in 0..4 {
            assert_eq!(lexer.next_token().into_kind(), TokenKind::Eof);
        }
    }

    #[test]
    fn unknown_characters_become_error_tokens() {
        assert_eq!(
            lex_kinds("#?"),
            vec![
                TokenKind::Error("#".into()),
                TokenKind::Error("?".into()),
            ]
        );
    }

    #[test]
    fn spans_index_back_into_source() {
        let source = "record point { x: u32 }";
        for token in lex(source) {
            assert_eq!(&source[token.span().as_range()], token.literal());
        }
    }
}
