use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`, so `8 - 3 - 2`
/// becomes `(8 - 3) - 2`.
///
/// The rule is: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `lexer`: Token cursor.
/// - `depth`: Current nesting depth, passed through to factors.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(lexer, depth)?;
    while let Some(op) = token_to_binary_operator(lexer.current())
          && op.is_additive()
    {
        lexer.advance()?;
        let right = parse_multiplicative(lexer, depth)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `lexer`: Token cursor.
/// - `depth`: Current nesting depth, passed through to factors.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Expr> {
    log::trace!("parse_multiplicative at {}", lexer.position());
    let mut left = parse_unary(lexer, depth)?;
    while let Some(op) = token_to_binary_operator(lexer.current())
          && !op.is_additive()
    {
        lexer.advance()?;
        let right = parse_unary(lexer, depth)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers, parentheses and the end marker.
///
/// # Example
/// ```
/// use calctree::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Number(_) | Token::LParen | Token::RParen | Token::End => None,
    }
}
