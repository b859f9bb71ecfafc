/// Core evaluation logic.
///
/// Contains the recursive tree walk and the evaluator's result alias.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for the four operators, including
/// the division-by-zero check.
pub mod binary;
