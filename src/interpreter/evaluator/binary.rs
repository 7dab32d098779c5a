use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Applies an arithmetic operator to two integers.
    ///
    /// Division truncates toward zero. Division by zero and overflow are
    /// reported instead of panicking.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use spl::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, 2, 1), Ok(3));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, 0, 3),
    ///            Err(RuntimeError::DivisionByZero { line: 3 }));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => left.checked_add(right),
            Sub => left.checked_sub(right),
            Mul => left.checked_mul(right),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                left.checked_div(right)
            },
        };

        result.ok_or(RuntimeError::Overflow { line })
    }
}
