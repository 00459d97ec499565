// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Dump the token stream of a WIT file.
//!
//! Debugging aid for grammar work: shows every token with its span, the
//! end-of-input marker included.

use camino::Utf8Path;
use miette::Result;
use witkit_core::source_analysis::lex_with_eof;

/// Tokenize a file and print one token per line.
pub fn run(path: &Utf8Path) -> Result<()> {
    let source = super::read_source(path)?;
    for token in lex_with_eof(&source) {
        let span = token.span();
        println!("{:>5}..{:<5} {:?}", span.start(), span.end(), token.kind());
    }
    Ok(())
}
