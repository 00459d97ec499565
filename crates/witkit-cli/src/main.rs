// Copyright 2026 the witkit authors
// SPDX-License-Identifier: Apache-2.0

//! WIT parser command-line interface.
//!
//! This is the main entry point for the `witkit` command.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod diagnostic;

/// witkit: parse and inspect WIT interface definitions
#[derive(Debug, Parser)]
#[command(name = "witkit")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a WIT file and print a document summary
    Parse {
        /// Source file to parse
        file: Utf8PathBuf,

        /// Give up if parsing takes longer than this many seconds
        #[arg(long, default_value_t = 3)]
        timeout_secs: u64,
    },

    /// Check a WIT file for syntax errors without printing the document
    Check {
        /// Source file to check
        file: Utf8PathBuf,
    },

    /// Dump the token stream of a WIT file
    Tokens {
        /// Source file to tokenize
        file: Utf8PathBuf,
    },
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse { file, timeout_secs } => commands::parse::run(&file, timeout_secs),
        Command::Check { file } => commands::check::run(&file),
        Command::Tokens { file } => commands::tokens::run(&file),
    };

    // Exit with appropriate code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}
