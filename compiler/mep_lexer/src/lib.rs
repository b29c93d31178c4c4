//! mep lexical analyzer
//!
//! This crate turns the text of a math expression into tokens for the
//! parser, one token at a time with a single token of lookahead. Sign
//! characters are classified as unary or binary from the token that was
//! consumed just before them.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod lexer;
pub mod logos_token;
pub mod operator;
pub mod token;

// Re-export the main types for convenience
pub use error::LexError;
pub use lexer::{Lexer, MAX_IDENTIFIER_LEN};
pub use logos_token::LogosToken;
pub use mep_math::FunctionId;
pub use operator::{BinaryOperator, Operator};
pub use token::{Location, TermKind, Token, TokenKind};
