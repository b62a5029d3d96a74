use crate::{ast::Operator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a scalar arithmetic operation.
///
/// Division truncates toward zero. Division by zero is checked before the
/// quotient is computed, so `x / 0` is always `DivisionByZero` and never
/// `Overflow`.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Example
/// ```
/// use exprheap::{
///     ast::Operator,
///     error::RuntimeError,
///     interpreter::evaluator::scalar::eval_scalar_op,
/// };
///
/// assert_eq!(eval_scalar_op(Operator::Divide, -7, 2).unwrap(), -3);
/// assert!(matches!(eval_scalar_op(Operator::Times, i64::MAX, 2),
///                  Err(RuntimeError::Overflow { .. })));
/// ```
pub fn eval_scalar_op(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let result = match op {
        Operator::Plus => left.checked_add(right),
        Operator::Minus => left.checked_sub(right),
        Operator::Times => left.checked_mul(right),
        Operator::Divide => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(RuntimeError::Overflow { left,
                                          operator: op,
                                          right })
}
