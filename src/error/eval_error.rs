use crate::ast::BinaryOperator;

/// Represents all errors that can occur while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The value that was being divided.
        dividend: i64,
    },
    /// The exact result of an operation does not fit in an `i64`.
    #[error("Integer overflow while computing {left} {op} {right}.")]
    Overflow {
        /// The operator being applied.
        op:    BinaryOperator,
        /// Left operand value.
        left:  i64,
        /// Right operand value.
        right: i64,
    },
}
