use mep_lexer::{LexError, Location, Token};

/// An error raised while parsing an expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input does not follow the expression grammar.
    #[error("syntax error at {location}: {message}")]
    Syntax {
        /// What went wrong
        message: String,
        /// Where the offending token starts
        location: Location,
        /// Source text of the offending token, empty at end of input
        lexeme: String,
    },

    /// An identifier longer than [`MAX_IDENTIFIER_LEN`](mep_lexer::MAX_IDENTIFIER_LEN).
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

impl ParseError {
    /// A syntax error pointing at `token`.
    pub fn at_token<S: Into<String>>(token: &Token, message: S) -> Self {
        ParseError::Syntax {
            message: message.into(),
            location: token.location,
            lexeme: token.lexeme.clone(),
        }
    }

    /// Where the error occurred.
    pub fn location(&self) -> Location {
        match self {
            ParseError::Syntax { location, .. } | ParseError::IdentifierTooLong { location, .. } => {
                *location
            }
        }
    }

    /// Source text the error points at.
    pub fn lexeme(&self) -> &str {
        match self {
            ParseError::Syntax { lexeme, .. } => lexeme,
            ParseError::IdentifierTooLong { name, .. } => name,
        }
    }

    /// The error message without its location.
    pub fn message(&self) -> String {
        match self {
            ParseError::Syntax { message, .. } => message.clone(),
            ParseError::IdentifierTooLong { name, max, .. } => {
                format!("identifier `{name}` is longer than {max} characters")
            }
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        match err {
            LexError::UnexpectedCharacter {
                character,
                location,
            } => ParseError::Syntax {
                message: format!("unexpected character `{character}`"),
                location,
                lexeme: character.to_string(),
            },
            LexError::IdentifierTooLong {
                name,
                max,
                location,
            } => ParseError::IdentifierTooLong {
                name,
                max,
                location,
            },
        }
    }
}
