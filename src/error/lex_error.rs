/// Represents all errors that can occur while splitting the source into
/// tokens.
///
/// Positions are byte offsets into the original source string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that does not begin any token.
    #[error("Unexpected character '{character}' at position {position}.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A run of digits whose value does not fit in an `i64`.
    #[error("Number literal {literal} at position {position} is too large.")]
    NumberTooLarge {
        /// The digits as written in the source.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
}

impl LexError {
    /// Byte offset at which lexing failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::NumberTooLarge { position, .. } => {
                *position
            },
        }
    }
}
