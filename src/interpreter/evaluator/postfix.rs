use tracing::debug;

use crate::{
    ast::{BinaryOperator, ExprToken, Symbol},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, Conversion, EvalResult, PostfixItem},
        stack::{Binding, Lookup},
    },
};

/// Number of symbols a call site occupies after the function name: `(`, the
/// argument and `)`.
const CALL_SITE_LEN: usize = 3;

impl Context {
    /// Converts an infix expression to postfix form in one left-to-right
    /// pass.
    ///
    /// Digits go straight to the output. Operators wait on an operator stack;
    /// an incoming operator first moves the waiting one to the output when
    /// its priority is not higher, which makes equal priorities associate to
    /// the left. A `)` moves a single waiting operator to the output and a
    /// `(` does nothing, so only one level of grouping is honored.
    ///
    /// Identifiers are resolved on the spot. A variable contributes its
    /// value. A function either starts a call, which abandons the pass, or,
    /// when a call just returned, contributes the returned value in place of
    /// the whole call site.
    ///
    /// # Errors
    /// - `UnknownIdentifier` for names that are not bound.
    /// - `MalformedCall` when a function is not used as `name(arg)`.
    /// - `InvalidArgument` when the argument has no value.
    /// - `MultipleCalls` when a second call follows a substituted one.
    /// - `ResourceExhausted` when the call frame does not fit on the stack.
    pub fn convert_to_postfix(&mut self, tokens: &[ExprToken], line: usize) -> EvalResult<Conversion> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut operators: Vec<BinaryOperator> = Vec::new();
        let mut substituted = false;

        let mut i = 0;
        while i < tokens.len() {
            match tokens[i].symbol {
                Symbol::Digit(value) => output.push(PostfixItem::Operand(value)),
                Symbol::LParen => {},
                Symbol::RParen => {
                    if let Some(op) = operators.pop() {
                        output.push(PostfixItem::Operator(op));
                    }
                },
                Symbol::Operator(op) => {
                    if let Some(&top) = operators.last()
                       && op.priority() <= top.priority()
                    {
                        operators.pop();
                        output.push(PostfixItem::Operator(top));
                    }
                    operators.push(op);
                },
                Symbol::Identifier(name) => match self.stack.lookup(name) {
                    Lookup::Variable(value) => output.push(PostfixItem::Operand(value)),
                    Lookup::Function { decl_line } => {
                        if let Some(value) = self.pending_return.take() {
                            debug!(line, function = %name, value, "substituting returned value");
                            output.push(PostfixItem::Operand(value));
                            substituted = true;
                            i += CALL_SITE_LEN;
                        } else {
                            if substituted {
                                return Err(RuntimeError::MultipleCalls { name, line });
                            }
                            self.begin_call(tokens, i, line)?;
                            debug!(line, function = %name, decl_line, argument = self.call_argument, "calling");
                            return Ok(Conversion::Call { decl_line });
                        }
                    },
                    Lookup::NotFound => return Err(RuntimeError::UnknownIdentifier { name, line }),
                },
            }
            i += 1;
        }

        while let Some(op) = operators.pop() {
            output.push(PostfixItem::Operator(op));
        }

        Ok(Conversion::Postfix(output))
    }

    /// Sets up a call for the function named at `tokens[at]`.
    ///
    /// The call site must be written exactly as `name(arg)`: the three
    /// symbols after the name are `(`, a digit or a letter, and `)`, each
    /// directly after the previous one. The argument is resolved, a call
    /// frame recording `line` is pushed, and the argument is kept for the
    /// callee's parameter.
    fn begin_call(&mut self, tokens: &[ExprToken], at: usize, line: usize) -> EvalResult<()> {
        let name_token = tokens[at];
        let Symbol::Identifier(name) = name_token.symbol else {
            unreachable!("calls start at an identifier");
        };

        let call_site = tokens.get(at + 1..=at + CALL_SITE_LEN)
                              .ok_or(RuntimeError::MalformedCall { name, line })?;
        let adjacent = call_site.iter()
                                .enumerate()
                                .all(|(offset, token)| token.column == name_token.column + offset + 1);

        let argument = match (call_site[0].symbol, call_site[1].symbol, call_site[2].symbol) {
            (Symbol::LParen, argument, Symbol::RParen) if adjacent => argument,
            _ => return Err(RuntimeError::MalformedCall { name, line }),
        };

        let value = match argument {
            Symbol::Digit(value) => value,
            Symbol::Identifier(arg) => match self.stack.lookup(arg) {
                Lookup::Variable(value) => value,
                Lookup::Function { .. } => {
                    return Err(RuntimeError::InvalidArgument { name: arg, line });
                },
                Lookup::NotFound => {
                    return Err(RuntimeError::UnknownIdentifier { name: arg, line });
                },
            },
            _ => return Err(RuntimeError::MalformedCall { name, line }),
        };

        self.stack.push(Binding::CallFrame { call_line: line }, line)?;
        self.call_argument = value;
        Ok(())
    }

    /// Evaluates an expression in postfix form.
    ///
    /// Operands are pushed on a value stack; each operator pops its right
    /// operand, then its left one, and pushes the result. A missing operand
    /// counts as `0`, so `( - 3 )` is `-3`. The value left on top of the
    /// stack is the result.
    ///
    /// # Errors
    /// - `DivisionByZero` and `Overflow` from the arithmetic.
    /// - `EmptyExpression` if nothing was computed.
    ///
    /// # Example
    /// ```
    /// use spl::{
    ///     ast::BinaryOperator,
    ///     interpreter::evaluator::core::{Context, PostfixItem},
    /// };
    ///
    /// let items = [PostfixItem::Operand(7),
    ///              PostfixItem::Operand(2),
    ///              PostfixItem::Operator(BinaryOperator::Sub)];
    /// assert_eq!(Context::eval_postfix(&items, 1).unwrap(), 5);
    /// ```
    pub fn eval_postfix(items: &[PostfixItem], line: usize) -> EvalResult<i64> {
        let mut values: Vec<i64> = Vec::with_capacity(items.len());

        for item in items {
            match *item {
                PostfixItem::Operand(value) => values.push(value),
                PostfixItem::Operator(op) => {
                    let right = values.pop().unwrap_or(0);
                    let left = values.pop().unwrap_or(0);
                    values.push(Self::eval_binary(op, left, right, line)?);
                },
            }
        }

        values.last().copied().ok_or(RuntimeError::EmptyExpression { line })
    }
}
