use crate::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::core::EvalResult};

/// Applies an arithmetic operator to two already evaluated operands.
///
/// All arithmetic is checked. Division truncates toward zero, so `-7 / 2` is
/// `-3`.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if the exact result is outside the `i64` range, including
///   `i64::MIN / -1`.
///
/// # Example
/// ```
/// use calctree::{ast::BinaryOperator, interpreter::evaluator::binary::apply_binary_op};
///
/// assert_eq!(apply_binary_op(BinaryOperator::Div, -7, 2).unwrap(), -3);
/// assert!(apply_binary_op(BinaryOperator::Div, 5, 0).is_err());
/// ```
pub fn apply_binary_op(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { dividend: left });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(EvalError::Overflow { op, left, right })
}
