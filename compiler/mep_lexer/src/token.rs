use std::fmt;

use mep_math::FunctionId;

use crate::operator::{BinaryOperator, Operator};

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number, counted in characters
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// Location of the first character of a source.
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// What a `Term` token denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// Numeric literal
    Number,
    /// Free variable, resolved at evaluation time
    Variable,
}

/// The kind of a token together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Prefix application: a sign (`+`, `-`) or a named function.
    UnaryOp(FunctionId),
    /// Infix operator.
    BinaryOp(BinaryOperator),
    /// Literal or variable.
    Term {
        /// Number or variable
        kind: TermKind,
        /// The source text of the term
        text: String,
    },
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// No input left.
    EndOfInput,
}

impl TokenKind {
    /// The operator carried by an operator token.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            TokenKind::UnaryOp(function) => Some(Operator::Apply(*function)),
            TokenKind::BinaryOp(op) => Some(Operator::Binary(*op)),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::UnaryOp(function) if function.is_sign() => write!(f, "sign `{function}`"),
            TokenKind::UnaryOp(function) => write!(f, "function `{function}`"),
            TokenKind::BinaryOp(op) => write!(f, "operator `{op}`"),
            TokenKind::Term {
                kind: TermKind::Number,
                text,
            } => write!(f, "number `{text}`"),
            TokenKind::Term {
                kind: TermKind::Variable,
                text,
            } => write!(f, "variable `{text}`"),
            TokenKind::LeftParen => f.write_str("`(`"),
            TokenKind::RightParen => f.write_str("`)`"),
            TokenKind::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// A token, its source text and where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of the token
    pub kind: TokenKind,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token in the source
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Returns true if this token is a literal or a variable
    pub fn is_term(&self) -> bool {
        matches!(self.kind, TokenKind::Term { .. })
    }

    /// Returns true if this token is a binary operator
    pub fn is_binary(&self) -> bool {
        matches!(self.kind, TokenKind::BinaryOp(_))
    }

    /// Returns true if this token is a prefix operator
    pub fn is_unary(&self) -> bool {
        matches!(self.kind, TokenKind::UnaryOp(_))
    }

    /// Returns true if this token is a sign prefix (`+x` / `-x`)
    pub fn is_sign(&self) -> bool {
        matches!(self.kind, TokenKind::UnaryOp(function) if function.is_sign())
    }

    /// Returns true if this token ends an operand, so that a following
    /// `+`/`-` is binary
    pub fn ends_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Term { .. } | TokenKind::RightParen)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let location = Location {
            line: 1,
            column: 3,
            offset: 2,
        };
        let token = Token::new(
            TokenKind::Term {
                kind: TermKind::Variable,
                text: "x".to_string(),
            },
            "x",
            location,
        );
        assert!(token.is_term());
        assert!(token.ends_operand());
        assert_eq!(token.lexeme, "x");
        assert_eq!(token.to_string(), "variable `x`@1:3");
    }

    #[test]
    fn test_sign_tokens() {
        let token = Token::new(TokenKind::UnaryOp(FunctionId::Negate), "-", Location::start());
        assert!(token.is_unary());
        assert!(token.is_sign());
        assert!(!token.ends_operand());
        assert_eq!(token.kind.operator(), Some(Operator::Apply(FunctionId::Negate)));

        let function = Token::new(TokenKind::UnaryOp(FunctionId::Sin), "sin", Location::start());
        assert!(!function.is_sign());
        assert_eq!(function.kind.to_string(), "function `sin`");
    }

    #[test]
    fn test_punctuation_has_no_operator() {
        assert_eq!(TokenKind::LeftParen.operator(), None);
        assert_eq!(TokenKind::EndOfInput.to_string(), "end of input");
        assert!(Token::new(TokenKind::RightParen, ")", Location::start()).ends_operand());
    }
}
