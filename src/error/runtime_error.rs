use thiserror::Error;

/// Represents all errors that can occur while executing a program.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// An identifier resolved to neither a variable nor a function.
    #[error("Error on line {line}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The name of the identifier.
        name: char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call argument named something that has no value, such as a function.
    #[error("Error on line {line}: Invalid argument '{name}', expected a digit or a variable.")]
    InvalidArgument {
        /// The argument as written.
        name: char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function was used without the exact call shape `name(arg)`.
    #[error("Error on line {line}: Malformed call to '{name}', expected {name}(arg) with no spaces.")]
    MalformedCall {
        /// The name of the function.
        name: char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression tried to perform a second call.
    #[error("Error on line {line}: Only one function call is allowed per expression, found a second call to '{name}'.")]
    MultipleCalls {
        /// The name of the second function.
        name: char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression line produced no value.
    #[error("Error on line {line}: Expression has no value.")]
    EmptyExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The symbol stack grew past its configured limit.
    #[error("Error on line {line}: Symbol stack exhausted after {limit} bindings. Is a function calling itself?")]
    ResourceExhausted {
        /// The configured binding limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownIdentifier { line, .. }
            | Self::InvalidArgument { line, .. }
            | Self::MalformedCall { line, .. }
            | Self::MultipleCalls { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::EmptyExpression { line }
            | Self::ResourceExhausted { line, .. } => *line,
        }
    }
}
