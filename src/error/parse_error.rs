use thiserror::Error;

/// Represents all errors that can occur while lexing or classifying a line.
///
/// A parse error concerns one line only. Outside strict mode the driver
/// skips the offending line and keeps scanning.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The line ended while a token was still expected.
    #[error("Error on line {line}: Unexpected end of line, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after the statement should have ended.
    #[error("Error on line {line}: Extra tokens after statement: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal had more than one digit.
    #[error("Error on line {line}: Literal {literal} is too large, only single digits are allowed.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A variable or parameter name had more than one character.
    #[error("Error on line {line}: Identifier '{name}' is too long, names are a single letter.")]
    IdentifierTooLong {
        /// The identifier as written.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::IdentifierTooLong { line, .. } => *line,
        }
    }
}
