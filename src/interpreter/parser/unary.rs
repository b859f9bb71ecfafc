use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a factor.
///
/// Supports the prefix operators `+` (no-op) and `-` (negation). Unary
/// operators are right-recursive, so `--5` is parsed as `-(-(5))`. Negation is
/// desugared to `0 - operand`; unary plus leaves no trace in the tree.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | primary
/// ```
/// # Parameters
/// - `lexer`: Token cursor.
/// - `depth`: Current nesting depth.
///
/// # Errors
/// `NestingTooDeep` when the chain of unary operators exceeds
/// [`MAX_NESTING_DEPTH`].
pub(crate) fn parse_unary(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Expr> {
    match lexer.current() {
        Token::Plus => {
            enter_nesting(lexer, depth)?;
            lexer.advance()?;
            parse_unary(lexer, depth + 1)
        },
        Token::Minus => {
            enter_nesting(lexer, depth)?;
            lexer.advance()?;
            let operand = parse_unary(lexer, depth + 1)?;
            Ok(Expr::negate(operand))
        },
        _ => parse_primary(lexer, depth),
    }
}

/// Parses a primary expression: an integer literal or a parenthesised group.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expr ")"
/// ```
/// # Errors
/// - `UnmatchedParenthesis` if a group is not closed by `)`.
/// - `ExpectedFactor` for any other token, including a stray `)` or the end
///   of input.
pub(crate) fn parse_primary(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Expr> {
    log::trace!("parse_primary at {}", lexer.position());
    match lexer.current() {
        Token::Number(value) => {
            lexer.advance()?;
            Ok(Expr::number(value))
        },
        Token::LParen => parse_grouping(lexer, depth),
        found => Err(ParseError::ExpectedFactor { found:    found.to_string(),
                                                  position: lexer.position(), }.into()),
    }
}

/// Parses `"(" expr ")"`, returning the inner expression unchanged.
fn parse_grouping(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Expr> {
    enter_nesting(lexer, depth)?;
    lexer.advance()?;

    let inner = parse_expression(lexer, depth + 1)?;

    if lexer.current() != Token::RParen {
        return Err(ParseError::UnmatchedParenthesis { position: lexer.position(),
                                                      rest:     lexer.rest().to_string(), }.into());
    }
    lexer.advance()?;
    Ok(inner)
}

/// Fails once another level of nesting would exceed the limit.
fn enter_nesting(lexer: &Lexer<'_>, depth: usize) -> Result<(), ParseError> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                                position: lexer.position(), });
    }
    Ok(())
}
