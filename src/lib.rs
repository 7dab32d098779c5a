//! # spl
//!
//! spl is an interpreter for SPL, a tiny line-oriented language written in
//! Rust. Programs declare single-letter integer variables and one-parameter
//! functions, group statements with `begin`/`end`, and compute parenthesized
//! arithmetic expressions that may contain one function call.
//!
//! ```text
//! function f x
//! begin
//! ( x * 2 )
//! end
//! function main
//! begin
//! int a = 3
//! ( f(a) + 1 )
//! end
//! ```
//!
//! Running the program above prints `Output=7`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, path::Path};

use tracing::debug;

use crate::{config::Config, error::Error, interpreter::driver::Interpreter};

/// Defines the structure of parsed lines.
///
/// This module declares the `Statement` enum that every source line is
/// classified into, along with the expression symbols and operators the
/// evaluator works on.
pub mod ast;
/// Options for an interpreter run.
///
/// Holds the `Config` struct: strict parsing and the symbol stack limit.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or running a program, plus the top-level `Error` that also covers an
/// unreadable source file.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Maps failures to process exit statuses.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together the lexer, parser, symbol stack, evaluator and
/// driver. It exposes the building blocks behind [`get_result`].
///
/// # Responsibilities
/// - Reads and classifies source lines.
/// - Maintains the symbol stack and the session context.
/// - Evaluates expressions and performs calls and returns.
pub mod interpreter;

/// Runs a program and returns its result.
///
/// The program runs until the `end` of its outermost block, whose last
/// expression result is returned, or until it runs out of lines, in which
/// case there is no result.
///
/// # Errors
/// Returns an error if a runtime error occurs, or if a line cannot be parsed
/// and `config.strict` is set.
///
/// # Examples
/// ```
/// use spl::{config::Config, get_result};
///
/// let source = "function main\nbegin\nint a = 3\nint b = 4\n( a + b )\nend";
/// assert_eq!(get_result(source, &Config::default()).unwrap(), Some(7));
///
/// // `c` is never declared.
/// let source = "function main\nbegin\n( c + 1 )\nend";
/// assert!(get_result(source, &Config::default()).is_err());
/// ```
pub fn get_result(source: &str, config: &Config) -> Result<Option<i64>, Error> {
    Interpreter::new(source, *config).run()
}

/// Reads a program from `path` and runs it.
///
/// # Errors
/// Returns [`Error::SourceUnavailable`] if the file cannot be read, and
/// otherwise the errors of [`get_result`].
pub fn run_file(path: &Path, config: &Config) -> Result<Option<i64>, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::SourceUnavailable { path:
                                                                                          path.to_path_buf(),
                                                                                      source })?;
    debug!(path = %path.display(), lines = source.lines().count(), "loaded program");
    get_result(&source, config)
}
