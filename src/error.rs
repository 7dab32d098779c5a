/// Parsing errors.
///
/// Defines all error types that can occur while lexing and classifying a
/// source line: unknown characters, missing or extra tokens, and literals or
/// names that break the single-character rule.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a program runs, such as
/// unknown identifiers, malformed calls, division by zero and an exhausted
/// symbol stack.
pub mod runtime_error;

use std::path::PathBuf;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error as ThisError;

/// Any failure of a complete interpreter run.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A line could not be parsed and strict mode was on.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while running.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The source file could not be read.
    #[error("Can't open {}. Check the file please: {source}", path.display())]
    SourceUnavailable {
        /// The path that was requested.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

impl Error {
    /// Process exit status for `SourceUnavailable`.
    pub const EXIT_SOURCE_UNAVAILABLE: u8 = 2;
    /// Process exit status for a parse error in strict mode.
    pub const EXIT_PARSE: u8 = 3;
    /// Process exit status for a runtime error.
    pub const EXIT_RUNTIME: u8 = 4;

    /// Returns the process exit status that reports this error.
    ///
    /// Every kind of failure has its own status, distinct from the `1` used
    /// for invalid command-line arguments.
    ///
    /// # Example
    /// ```
    /// use spl::error::{Error, RuntimeError};
    ///
    /// let err = Error::from(RuntimeError::DivisionByZero { line: 4 });
    /// assert_eq!(err.exit_code(), Error::EXIT_RUNTIME);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SourceUnavailable { .. } => Self::EXIT_SOURCE_UNAVAILABLE,
            Self::Parse(_) => Self::EXIT_PARSE,
            Self::Runtime(_) => Self::EXIT_RUNTIME,
        }
    }
}
