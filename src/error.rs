/// Lexing errors.
///
/// Raised when a character in the source does not begin any valid token, or
/// when a numeric literal does not fit in a signed 64-bit integer.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all grammar violations the recursive-descent parser can detect:
/// missing factors, unbalanced parentheses, leftover input and excessive
/// nesting.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while reducing a tree to an integer,
/// namely division by zero and arithmetic overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any failure of a single parse/evaluate cycle.
///
/// Each phase reports its own error type; this enum lets callers compose the
/// phases with `?` and still tell them apart afterwards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source contained a character that does not start a token.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree could not be reduced to a value.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Process exit code reported by the command-line front end.
    ///
    /// Usage errors are handled by the argument parser and never reach this
    /// type, so every variant here maps to `1`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Lex(_) | Self::Parse(_) | Self::Eval(_) => 1,
        }
    }
}
