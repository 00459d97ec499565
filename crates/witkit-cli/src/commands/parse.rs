// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! Parse a WIT file and print a document summary.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use camino::Utf8Path;
use miette::Result;
use tracing::{debug, info, instrument};
use witkit_core::ast::{Document, ExternItem, ExternKind};
use witkit_core::source_analysis::{self, ParseError};

use crate::diagnostic::report_errors;

/// Parse a file, racing the parse against a deadline, and print what was
/// found.
#[instrument(skip_all, fields(path = %path))]
pub fn run(path: &Utf8Path, timeout_secs: u64) -> Result<()> {
    let source = super::read_source(path)?;
    info!(bytes = source.len(), "Parsing");

    let (document, errors) = parse_with_deadline(&source, Duration::from_secs(timeout_secs))?;
    debug!(errors = errors.len(), "Parse finished");

    print_summary(&document);

    if errors.is_empty() {
        Ok(())
    } else {
        report_errors(&errors, path.as_str(), &source);
        miette::bail!("'{path}' has {} syntax error(s)", errors.len());
    }
}

/// Runs the parse on a worker thread and waits up to `deadline` for it.
///
/// The parser itself is synchronous; the thread only exists so a
/// runaway parse cannot wedge the command forever.
fn parse_with_deadline(
    source: &str,
    deadline: Duration,
) -> Result<(Document, Vec<ParseError>)> {
    let (sender, receiver) = mpsc::channel();
    let source = source.to_string();
    thread::spawn(move || {
        let _ = sender.send(source_analysis::parse(&source));
    });
    receiver
        .recv_timeout(deadline)
        .map_err(|_| miette::miette!("parsing did not finish within {}s", deadline.as_secs()))
}

/// Prints the document the way a reader skims it: package, then each
/// interface with its item count, then the world's imports and exports.
fn print_summary(document: &Document) {
    if let Some(package) = &document.package {
        match &package.version {
            Some(version) => {
                println!("package {}:{}@{version}", package.namespace, package.name);
            }
            None => println!("package {}:{}", package.namespace, package.name),
        }
    }

    for use_decl in &document.uses {
        println!("use {}.{{{}}}", use_decl.interface, use_decl.name);
    }

    for interface in &document.interfaces {
        println!(
            "interface {} ({} item(s))",
            interface.name,
            interface.items.len()
        );
        for func in &interface.items.funcs {
            println!("  func {}", func.name);
        }
        for typedef in &interface.items.typedefs {
            println!("  type {}", typedef.name);
        }
    }

    if let Some(world) = &document.world {
        println!("world {}", world.name);
        for item in &world.imports {
            println!("  import {}", describe_extern(item));
        }
        for item in &world.exports {
            println!("  export {}", describe_extern(item));
        }
    }
}

fn describe_extern(item: &ExternItem) -> String {
    match &item.kind {
        None => item.name.to_string(),
        Some(ExternKind::Func(func)) => {
            format!("{}: func ({} param(s))", item.name, func.params.len())
        }
        Some(ExternKind::Interface(items)) => {
            format!("{}: interface ({} item(s))", item.name, items.len())
        }
        Some(ExternKind::Path(path)) => match &path.version {
            Some(version) => format!(
                "{}:{}/{}@{version}",
                path.namespace, path.package, path.interface
            ),
            None => format!("{}:{}/{}", path.namespace, path.package, path.interface),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_parse_returns_document() {
        let (document, errors) =
            parse_with_deadline("package example:host", Duration::from_secs(3)).unwrap();
        assert!(errors.is_empty());
        assert!(document.package.is_some());
    }

    #[test]
    fn describes_extern_forms() {
        let (document, errors) = source_analysis::parse(
            "world host {
               import sibling
               import wasi:http/types@0.2.0
             }",
        );
        assert!(errors.is_empty());
        let world = document.world.unwrap();
        assert_eq!(describe_extern(&world.imports[0]), "sibling");
        assert_eq!(describe_extern(&world.imports[1]), "wasi:http/types@0.2.0");
    }
}
