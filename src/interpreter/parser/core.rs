use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        lexer::{Lexer, Token},
        parser::binary::parse_additive,
    },
};

/// Result type used by every grammar rule.
///
/// A rule can fail either because the next token could not be lexed or
/// because the tokens do not match the grammar, so the error side is the
/// crate-level [`Error`].
pub type ParseResult<T> = Result<T, Error>;

/// Maximum number of nested parenthesised groups and unary operators.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a complete source string into a tree.
///
/// The whole input must form exactly one expression; anything left over after
/// it is rejected.
///
/// # Errors
/// - [`Error::Lex`] if the source contains a character that starts no token.
/// - [`Error::Parse`] for grammar violations, including trailing input.
///
/// # Example
/// ```
/// use calctree::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::core::parse,
/// };
///
/// let tree = parse("1 + 2").unwrap();
/// assert_eq!(tree, Expr::binary(BinaryOperator::Add, Expr::number(1), Expr::number(2)));
///
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    let mut lexer = Lexer::new(source)?;
    let expr = parse_expression(&mut lexer, 0)?;

    if lexer.current() != Token::End {
        return Err(ParseError::TrailingInput { position: lexer.position(),
                                               rest:     lexer.rest().to_string(), }.into());
    }

    log::debug!("parsed {source:?} into {expr}");
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing and for the contents of
/// every parenthesised group. It begins at the lowest-precedence level.
///
/// Grammar: `expr := term (("+" | "-") term)*`
///
/// # Parameters
/// - `lexer`: Cursor positioned at the first token of the expression.
/// - `depth`: Current nesting depth of groups and unary operators.
pub fn parse_expression(lexer: &mut Lexer<'_>, depth: usize) -> ParseResult<Expr> {
    log::trace!("parse_expression at {}", lexer.position());
    parse_additive(lexer, depth)
}
