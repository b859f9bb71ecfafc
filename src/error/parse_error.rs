/// Represents all grammar violations detected by the parser.
///
/// The parser stops at the first violation, so at most one of these is ever
/// produced for a given input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A number, unary operator or `(` was required but something else was
    /// found.
    #[error("Expected a number, unary operator or '(' at position {position}, found {found}.")]
    ExpectedFactor {
        /// Description of the token that was found instead.
        found:    String,
        /// Byte offset of that token.
        position: usize,
    },
    /// A parenthesised group was opened but never closed.
    #[error("Expected closing parenthesis ')' at position {position} but found: {}", describe_rest(.rest))]
    UnmatchedParenthesis {
        /// Byte offset where the `)` was expected.
        position: usize,
        /// Remaining input at that point.
        rest:     String,
    },
    /// A complete expression was parsed but input remains.
    #[error("Trailing input at position {position}: {rest}")]
    TrailingInput {
        /// Byte offset of the first unconsumed token.
        position: usize,
        /// The unconsumed input.
        rest:     String,
    },
    /// Parentheses or unary operators were nested deeper than the parser
    /// allows.
    #[error("Expression nests deeper than {limit} levels at position {position}.")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit:    usize,
        /// Byte offset of the token that exceeded it.
        position: usize,
    },
}

fn describe_rest(rest: &str) -> &str {
    if rest.is_empty() { "end of input" } else { rest }
}

impl ParseError {
    /// Byte offset at which parsing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::ExpectedFactor { position, .. }
            | Self::UnmatchedParenthesis { position, .. }
            | Self::TrailingInput { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}
