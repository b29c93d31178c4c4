use crate::token::Location;

/// An error raised while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unexpected character `{character}` at {location}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it was found
        location: Location,
    },

    /// An identifier longer than [`MAX_IDENTIFIER_LEN`](crate::MAX_IDENTIFIER_LEN).
    #[error("identifier `{name}` is longer than {max} characters at {location}")]
    IdentifierTooLong {
        /// The identifier text
        name: String,
        /// The length limit that was exceeded
        max: usize,
        /// Where the identifier starts
        location: Location,
    },
}

impl LexError {
    /// Where the error occurred.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnexpectedCharacter { location, .. }
            | LexError::IdentifierTooLong { location, .. } => *location,
        }
    }

    /// Source text the error points at.
    pub fn lexeme(&self) -> String {
        match self {
            LexError::UnexpectedCharacter { character, .. } => character.to_string(),
            LexError::IdentifierTooLong { name, .. } => name.clone(),
        }
    }
}
