//! Per-line execution and the call/return protocol.
//!
//! The driver reads the program one line at a time and decides what each
//! line does. Calls and returns are jumps: a call moves the cursor to the
//! callee's `function` line and a return moves it back to the line that made
//! the call, which is then evaluated again with the returned value in hand.

use tracing::{debug, info, trace};

use crate::{
    ast::Statement,
    config::Config,
    error::Error,
    interpreter::{
        cursor::SourceCursor,
        evaluator::core::{Context, Evaluation},
        parser::core::parse_line,
        stack::Binding,
    },
};

/// Result of executing one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The line was executed; continue with the next one.
    Continue,
    /// A call or a return moved the cursor; continue from there.
    Relocated {
        /// The line that will be read next.
        line: usize,
    },
    /// Execution is over. Holds the program's result if it reached the `end`
    /// of its outermost block, or `None` if it ran out of lines first.
    Terminated(Option<i64>),
}

/// An interpreter for one program.
///
/// # Example
/// ```
/// use spl::{config::Config, interpreter::driver::Interpreter};
///
/// let source = "function main\nbegin\nint a = 3\nint b = 4\n( a + b )\nend";
/// let mut interpreter = Interpreter::new(source, Config::default());
/// assert_eq!(interpreter.run().unwrap(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter<'src> {
    cursor:  SourceCursor<'src>,
    context: Context,
    config:  Config,
}

impl<'src> Interpreter<'src> {
    /// Creates an interpreter positioned before the first line of `source`.
    #[must_use]
    pub fn new(source: &'src str, config: Config) -> Self {
        Self { cursor:  SourceCursor::new(source),
               context: Context::new(&config),
               config, }
    }

    /// The session state, for inspection.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Runs the program until it terminates.
    ///
    /// This is the top-level driver that repeatedly calls [`step`] until
    /// execution finishes.
    ///
    /// # Errors
    /// Returns the first runtime error, or the first parse error in strict
    /// mode.
    ///
    /// [`step`]: Interpreter::step
    pub fn run(&mut self) -> Result<Option<i64>, Error> {
        loop {
            if let Step::Terminated(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Reads and executes one line.
    ///
    /// Lines that fail to parse are skipped unless the interpreter runs in
    /// strict mode.
    ///
    /// # Errors
    /// Returns any runtime error raised by the line, or its parse error in
    /// strict mode.
    pub fn step(&mut self) -> Result<Step, Error> {
        let Some((line, text)) = self.cursor.next_line() else {
            info!("reached end of input without a result");
            return Ok(Step::Terminated(None));
        };

        let statement = match parse_line(text, line) {
            Ok(statement) => statement,
            Err(err) if !self.config.strict => {
                debug!(line = err.line(), %err, "skipping malformed line");
                return Ok(Step::Continue);
            },
            Err(err) => return Err(err.into()),
        };
        trace!(line, ?statement, "scanning");

        self.execute(statement, line)
    }

    /// Executes one parsed line.
    fn execute(&mut self, statement: Statement, line: usize) -> Result<Step, Error> {
        let entry_point = statement.is_entry_point();

        match statement {
            Statement::FunctionDeclaration { name, parameter } => {
                let Some(letter) = name.chars().next() else {
                    return Ok(Step::Continue);
                };
                self.context
                    .stack
                    .push(Binding::FunctionDecl { name:      letter,
                                                  decl_line: line, },
                          line)?;

                if entry_point {
                    debug!(line, "entry point found");
                    self.context.entry_found = true;
                } else if self.context.entry_found
                          && let Some(parameter) = parameter
                {
                    self.context
                        .stack
                        .push(Binding::Variable { name:  parameter,
                                                  value: self.context.call_argument, },
                              line)?;
                }
                Ok(Step::Continue)
            },
            _ if !self.context.entry_found => Ok(Step::Continue),
            Statement::VariableDeclaration { name, value } => {
                self.context.stack.push(Binding::Variable { name, value }, line)?;
                Ok(Step::Continue)
            },
            Statement::Begin => {
                self.context.stack.push(Binding::BlockBegin, line)?;
                Ok(Step::Continue)
            },
            Statement::End => self.close_block(line),
            Statement::Expression { tokens } => {
                match self.context.eval_expression(&tokens, line)? {
                    Evaluation::Value(_) => Ok(Step::Continue),
                    Evaluation::Relocate { line: target } => {
                        self.cursor.relocate(target);
                        Ok(Step::Relocated { line: target })
                    },
                }
            },
            Statement::Empty => Ok(Step::Continue),
        }
    }

    /// Handles `end`.
    ///
    /// Outside of any call this is the end of the program and the last
    /// expression result is its output. Inside a call the result becomes the
    /// pending return, the call's bindings are dropped and execution goes
    /// back to the line that made the call.
    fn close_block(&mut self, line: usize) -> Result<Step, Error> {
        self.context.stack.push(Binding::BlockEnd, line)?;

        let result = self.context.last_result;
        let Some(call_line) = self.context.stack.unwind_to_call_frame() else {
            info!(result, "program finished");
            return Ok(Step::Terminated(Some(result)));
        };

        debug!(line, call_line, result, "returning to caller");
        self.context.pending_return = Some(result);
        self.cursor.relocate(call_line);
        Ok(Step::Relocated { line: call_line })
    }
}
