use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::binary::apply_binary_op,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a tree to a single integer.
///
/// The tree is walked in post-order with an explicit stack, so arbitrarily
/// long operator chains evaluate without deep native recursion. Both operands
/// of an operator are evaluated (left first) before the operator is applied,
/// so the right operand of a division is always known before the zero check.
///
/// # Errors
/// - `DivisionByZero` if the right operand of `/` evaluates to zero.
/// - `Overflow` if an intermediate result does not fit in an `i64`.
///
/// # Example
/// ```
/// use calctree::interpreter::{evaluator::core::evaluate, parser::core::parse};
///
/// let tree = parse("(1 + 2) * 3").unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 9);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    enum Step<'a> {
        Visit(&'a Expr),
        Apply(BinaryOperator),
    }

    let mut steps = vec![Step::Visit(expr)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Expr::Number { value }) => values.push(*value),
            Step::Visit(Expr::BinaryOp { op, left, right }) => {
                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(&**right));
                steps.push(Step::Visit(&**left));
            },
            Step::Apply(op) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    unreachable!("operator applied with fewer than two operands");
                };
                values.push(apply_binary_op(op, left, right)?);
            },
        }
    }

    let Some(value) = values.pop() else {
        unreachable!("evaluation produced no value");
    };
    Ok(value)
}

impl Expr {
    /// Evaluates this tree. See [`evaluate`].
    ///
    /// # Errors
    /// Propagates any [`EvalError`] raised during evaluation.
    pub fn evaluate(&self) -> EvalResult<i64> {
        let value = evaluate(self)?;
        log::debug!("{self} evaluated to {value}");
        Ok(value)
    }
}
