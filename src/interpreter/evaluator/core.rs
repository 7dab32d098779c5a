use tracing::debug;

use crate::{
    ast::{BinaryOperator, ExprToken},
    config::Config,
    error::RuntimeError,
    interpreter::stack::SymbolStack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What evaluating an expression line led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// The expression ran to completion and produced this value.
    Value(i64),
    /// The expression called a function. A call frame has been pushed and
    /// execution must continue at the callee's declaration line.
    Relocate {
        /// Line of the callee's `function` statement.
        line: usize,
    },
}

/// Stores the runtime state of one interpreter session.
///
/// ## Usage
///
/// `Context` is created once per program run and threaded through the
/// driver. Everything that survives from one line to the next lives here:
/// the symbol stack, whether `main` has been reached, the value a finished
/// call hands back to its caller, the last expression result and the
/// argument of the call in flight.
#[derive(Debug, Clone)]
pub struct Context {
    /// Variables, functions, call frames and block markers.
    pub stack:          SymbolStack,
    /// Set once `function main` has been scanned. Statements only execute
    /// from then on.
    pub entry_found:    bool,
    /// Value returned by a callee, waiting to be substituted into the
    /// caller's expression.
    pub pending_return: Option<i64>,
    /// Result of the most recently completed expression.
    pub last_result:    i64,
    /// Argument of the most recent call, bound to the callee's parameter.
    pub call_argument:  i64,
}

impl Default for Context {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Context {
    /// Creates a fresh context whose stack honors `config.max_bindings`.
    #[must_use]
    pub const fn new(config: &Config) -> Self {
        Self { stack:          SymbolStack::with_limit(config.max_bindings),
               entry_found:    false,
               pending_return: None,
               last_result:    0,
               call_argument:  0, }
    }

    /// Evaluates an expression line.
    ///
    /// This is the main entry point for expression evaluation. The line is
    /// first converted to postfix form, resolving identifiers as they are
    /// met. If that conversion runs into a function call, evaluation stops
    /// there and the caller is asked to relocate. Otherwise the postfix form
    /// is evaluated and its value becomes the new [`last_result`].
    ///
    /// # Parameters
    /// - `tokens`: The symbols of the line.
    /// - `line`: The line number, recorded in call frames and errors.
    ///
    /// # Example
    /// ```
    /// use spl::{
    ///     interpreter::{
    ///         evaluator::core::{Context, Evaluation},
    ///         parser::core::parse_line,
    ///     },
    ///     ast::Statement,
    /// };
    ///
    /// let Statement::Expression { tokens } = parse_line("( 2 + 3 * 2 )", 1).unwrap() else {
    ///     unreachable!()
    /// };
    /// let mut context = Context::default();
    /// assert_eq!(context.eval_expression(&tokens, 1).unwrap(), Evaluation::Value(8));
    /// assert_eq!(context.last_result, 8);
    /// ```
    ///
    /// [`last_result`]: Context::last_result
    pub fn eval_expression(&mut self, tokens: &[ExprToken], line: usize) -> EvalResult<Evaluation> {
        match self.convert_to_postfix(tokens, line)? {
            Conversion::Postfix(items) => {
                let value = Self::eval_postfix(&items, line)?;
                debug!(line, value, "expression evaluated");
                self.last_result = value;
                Ok(Evaluation::Value(value))
            },
            Conversion::Call { decl_line } => Ok(Evaluation::Relocate { line: decl_line }),
        }
    }
}

/// Outcome of the infix-to-postfix pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// The whole line was converted.
    Postfix(Vec<PostfixItem>),
    /// Conversion stopped at a function call.
    Call {
        /// Line of the callee's `function` statement.
        decl_line: usize,
    },
}

/// One element of an expression in postfix form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixItem {
    /// A value to push.
    Operand(i64),
    /// An operator to apply to the two topmost values.
    Operator(BinaryOperator),
}
