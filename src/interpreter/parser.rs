/// Entry points and shared parser definitions.
///
/// Contains the top-level [`core::parse`] function, the result alias used by
/// every grammar rule and the nesting limit.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: `expr` for `+`/`-`
/// and `term` for `*`/`/`.
pub mod binary;

/// Factor parsing.
///
/// Handles unary `+`/`-`, integer literals and parenthesised groups.
pub mod unary;
