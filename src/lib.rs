//! # calctree
//!
//! calctree parses integer arithmetic expressions into an abstract syntax
//! tree and evaluates them. It supports `+`, `-`, `*`, truncating `/`, unary
//! plus and minus, and parenthesised grouping, with the usual precedence and
//! left-associativity.
//!
//! The pipeline is a single synchronous pass: the lexer is pulled one token
//! at a time by a recursive-descent parser, which produces an owned tree that
//! the evaluator then reduces to an `i64`. Every phase fails fast with a typed
//! error instead of returning a partial result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the `BinaryOperator` type. The
/// tree is built by the parser and traversed by the evaluator and the
/// renderers.
pub mod ast;
/// Provides the error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum carrying the offending character,
/// position or operands; [`error::Error`] unifies them for callers that run
/// the whole pipeline.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Turns source text into tokens on demand.
/// - Builds the tree according to the precedence grammar.
/// - Reduces the tree to a single integer.
pub mod interpreter;
/// Text renderings of a parsed tree.
///
/// Provides the indented prefix form and the sideways tree drawing used by
/// the command-line front end.
pub mod render;

pub use crate::{
    ast::{BinaryOperator, Expr},
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{evaluator::core::evaluate, parser::core::parse},
};

/// Parses and evaluates a source string in one step.
///
/// # Errors
/// Returns the first lex, parse or evaluation error encountered.
///
/// # Examples
/// ```
/// use calctree::{Error, EvalError, eval_str};
///
/// assert_eq!(eval_str("8 - 3 - 2").unwrap(), 3);
/// assert_eq!(eval_str("-7 / 2").unwrap(), -3);
///
/// assert!(matches!(eval_str("5 / 0"),
///                  Err(Error::Eval(EvalError::DivisionByZero { .. }))));
/// ```
pub fn eval_str(source: &str) -> Result<i64, Error> {
    let tree = parse(source)?;
    Ok(tree.evaluate()?)
}
