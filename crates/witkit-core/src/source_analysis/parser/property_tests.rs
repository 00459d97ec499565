// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the WIT parser.
//!
//! These tests use `proptest` to verify parser invariants over generated
//! inputs:
//!
//! 1. **Parser never panics** — arbitrary input always yields a document
//! 2. **Parsing is deterministic** — same input, same document and errors
//! 3. **Error spans within input** — diagnostics point into the source
//! 4. **Valid documents parse cleanly** — known-good sources yield no errors
//! 5. **Nesting round-trips** — generated `list<...>` depth is reproduced

use proptest::prelude::*;

use super::parse;
use crate::ast::TypeDefKind;

// ============================================================================
// Generators
// ============================================================================

/// Known-good documents that must parse without errors.
const VALID_DOCUMENTS: &[&str] = &[
    "",
    "package example:host",
    "package jordan-rash:pingpong@0.1.0",
    "interface empty {}",
    "interface api { ping: func(name: string) -> string }",
    "interface types { type t = result<_, errno> }",
    "interface types { record point { x: u32, y: u32 } }",
    "interface types { enum color { red, green, blue, } }",
    "world host { import print: func(msg: string) }",
    "world host { export pingpong }",
    "world host { import wasi:http/types@0.2.0 }",
    "use host.{log}",
];

fn valid_document() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_DOCUMENTS).prop_map(std::string::ToString::to_string)
}

/// `type t = list<list<...u8...>>` with the given nesting depth.
fn nested_list_source(depth: usize) -> String {
    format!(
        "interface i {{ type t = {}u8{} }}",
        "list<".repeat(depth),
        ">".repeat(depth)
    )
}

// ============================================================================
// Property tests
// ============================================================================

/// Default is 512 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: Parser never panics on arbitrary string input.
    #[test]
    fn parser_never_panics(input in "\\PC{0,500}") {
        let (_document, _errors) = parse(&input);
    }

    /// Property 1b: Parser never panics on WIT-flavored token soup.
    #[test]
    fn parser_never_panics_on_token_soup(
        input in "(package|world|interface|use|func|record|u8|result|list|<|>|\\{|\\}|\\(|\\)|:|,|=|@|->|_|/|\\.|[a-z][a-z0-9-]{0,8}|[0-9]{1,3}| )*"
    ) {
        let (_document, _errors) = parse(&input);
    }

    /// Property 2: Parsing is deterministic.
    #[test]
    fn parsing_deterministic(input in "\\PC{0,200}") {
        let first = parse(&input);
        let second = parse(&input);
        prop_assert_eq!(first, second, "parse differed across runs for {:?}", input);
    }

    /// Property 3: Every error span lies within the input.
    #[test]
    fn error_spans_within_input(input in "\\PC{0,500}") {
        let (_, errors) = parse(&input);
        let input_len = u32::try_from(input.len()).unwrap_or(u32::MAX);
        for error in &errors {
            prop_assert!(
                error.span.end() <= input_len,
                "Error {:?} span exceeds input length {} for input {:?}",
                error,
                input_len,
                input,
            );
        }
    }

    /// Property 4: Known-good documents parse without errors.
    #[test]
    fn valid_documents_parse_cleanly(input in valid_document()) {
        let (_, errors) = parse(&input);
        prop_assert!(
            errors.is_empty(),
            "Valid document {:?} produced errors {:?}",
            input,
            errors,
        );
    }

    /// Property 5: Generated `list<...>` nesting below the depth limit is
    /// reproduced exactly.
    #[test]
    fn nesting_depth_round_trips(depth in 0_usize..60) {
        let (document, errors) = parse(&nested_list_source(depth));
        prop_assert!(errors.is_empty(), "depth {} produced errors {:?}", depth, errors);

        let TypeDefKind::Alias(mut ty) = document.interfaces[0].items.typedefs[0].kind.clone()
        else {
            return Err(TestCaseError::fail("expected alias typedef"));
        };
        let mut unwrapped = 0;
        while let crate::ast::TypeExpr::List(inner) = ty {
            ty = *inner;
            unwrapped += 1;
        }
        prop_assert_eq!(unwrapped, depth);
        prop_assert_eq!(
            ty,
            crate::ast::TypeExpr::Primitive(crate::ast::Primitive::U8)
        );
    }
}
