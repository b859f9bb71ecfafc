use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// `End` is never matched by the generated lexer; [`Lexer`] produces it once
/// the input is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f\v]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Number(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digits do not fit in an `i64`, which the lexer
/// turns into an error.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// An on-demand token cursor with one token of lookahead.
///
/// The cursor always holds the next unconsumed token in [`Lexer::current`].
/// Calling [`Lexer::advance`] consumes it and lexes the following one. After
/// the input is exhausted the lookahead stays [`Token::End`] forever.
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, Token>,
    current:  Token,
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a cursor over `source` and lexes the first token.
    ///
    /// # Errors
    /// Returns a [`LexError`] if the first token is malformed.
    ///
    /// # Example
    /// ```
    /// use calctree::interpreter::lexer::{Lexer, Token};
    ///
    /// let lexer = Lexer::new("  12 + 3").unwrap();
    /// assert_eq!(lexer.current(), Token::Number(12));
    /// assert_eq!(lexer.position(), 2);
    /// ```
    pub fn new(source: &'src str) -> Result<Self, LexError> {
        let mut lexer = Self { source,
                               inner: Token::lexer(source),
                               current: Token::End,
                               position: 0 };
        lexer.advance()?;
        Ok(lexer)
    }

    /// Returns the lookahead token.
    #[must_use]
    pub const fn current(&self) -> Token {
        self.current
    }

    /// Byte offset of the lookahead token. For [`Token::End`] this is the
    /// length of the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The unconsumed input, starting at the lookahead token.
    #[must_use]
    pub fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    /// Consumes the lookahead and lexes the next token.
    ///
    /// # Errors
    /// - `UnexpectedCharacter` if the next non-whitespace character does not
    ///   begin a token.
    /// - `NumberTooLarge` if a digit run overflows `i64`.
    pub fn advance(&mut self) -> Result<(), LexError> {
        match self.inner.next() {
            None => {
                self.current = Token::End;
                self.position = self.source.len();
            },
            Some(Ok(token)) => {
                self.current = token;
                self.position = self.inner.span().start;
            },
            Some(Err(())) => {
                let position = self.inner.span().start;
                let rest = &self.source[position..];
                return Err(match rest.chars().next() {
                               Some(c) if c.is_ascii_digit() => {
                                   let digits = rest.chars().take_while(char::is_ascii_digit);
                                   LexError::NumberTooLarge { literal: digits.collect(),
                                                              position }
                               },
                               Some(character) => {
                                   LexError::UnexpectedCharacter { character, position }
                               },
                               None => LexError::UnexpectedCharacter { character: '\0',
                                                                       position },
                           });
            },
        }
        log::trace!("lexed {:?} at {}", self.current, self.position);
        Ok(())
    }
}

/// Lexes the whole source, returning every token up to and including
/// [`Token::End`].
///
/// # Errors
/// Returns the first [`LexError`] encountered.
///
/// # Example
/// ```
/// use calctree::interpreter::lexer::{Token, tokenize};
///
/// assert_eq!(tokenize("(1)").unwrap(),
///            vec![Token::LParen, Token::Number(1), Token::RParen, Token::End]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source)?;
    let mut tokens = vec![lexer.current()];
    while lexer.current() != Token::End {
        lexer.advance()?;
        tokens.push(lexer.current());
    }
    Ok(tokens)
}
