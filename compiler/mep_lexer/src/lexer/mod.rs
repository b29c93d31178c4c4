//! Lexer implementation for mep expressions
//! Converts source text into tokens on demand, one token of lookahead at a time

use logos::Logos;
use mep_math::FunctionId;

use crate::error::LexError;
use crate::operator::BinaryOperator;
use crate::token::{Location, TermKind, Token, TokenKind};
use crate::LogosToken;

/// Identifiers longer than this are rejected.
pub const MAX_IDENTIFIER_LEN: usize = 64;

/// The lexer holds the remaining input, the lookahead token and the token
/// consumed last.
///
/// [`peek`](Lexer::peek) returns the same token until
/// [`consume`](Lexer::consume) is called.
pub struct Lexer<'a> {
    /// The source text being lexed
    source: &'a str,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
    /// Token returned by `peek` and not consumed yet
    lookahead: Option<Token>,
    /// Token consumed last, decides whether `+`/`-` is a sign
    previous: Option<Token>,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset `line` and `column` refer to
    offset: usize,
    /// Set once the iterator yielded `EndOfInput` or an error
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: LogosToken::lexer(source),
            lookahead: None,
            previous: None,
            line: 1,
            column: 1,
            offset: 0,
            finished: false,
        }
    }

    /// The complete source text
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the lookahead token, scanning it if necessary.
    ///
    /// Calling `peek` again before [`consume`](Lexer::consume) returns the
    /// identical token.
    pub fn peek(&mut self) -> Result<&Token, LexError> {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.scan()?,
        };
        Ok(self.lookahead.insert(token))
    }

    /// Advances past the lookahead token and returns it.
    ///
    /// Returns `None` if no token has been peeked since the last call.
    pub fn consume(&mut self) -> Option<Token> {
        let token = self.lookahead.take()?;
        self.previous = Some(token.clone());
        Some(token)
    }

    /// The token consumed last.
    pub fn previous(&self) -> Option<&Token> {
        self.previous.as_ref()
    }

    /// Move the line/column cursor forward to `target`.
    /// Columns count characters, not bytes.
    fn sync_position_to(&mut self, target: usize) -> Location {
        let text = &self.source[self.offset..target];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // Handle Windows line endings (\r\n)
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;

        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// True if the token consumed last ends an operand.
    fn after_operand(&self) -> bool {
        self.previous.as_ref().is_some_and(Token::ends_operand)
    }

    /// Scan the next token from the remaining input
    fn scan(&mut self) -> Result<Token, LexError> {
        let Some(raw) = self.inner.next() else {
            let location = self.sync_position_to(self.source.len());
            return Ok(Token::new(TokenKind::EndOfInput, "", location));
        };

        let span = self.inner.span();
        let lexeme = self.inner.slice();
        let location = self.sync_position_to(span.start);

        let raw = raw.map_err(|()| LexError::UnexpectedCharacter {
            character: lexeme.chars().next().unwrap_or_default(),
            location,
        })?;

        let kind = match raw {
            LogosToken::Plus | LogosToken::Minus => {
                let plus = raw == LogosToken::Plus;
                if self.after_operand() {
                    TokenKind::BinaryOp(if plus {
                        BinaryOperator::Add
                    } else {
                        BinaryOperator::Sub
                    })
                } else {
                    TokenKind::UnaryOp(if plus {
                        FunctionId::Identity
                    } else {
                        FunctionId::Negate
                    })
                }
            }
            LogosToken::Caret => TokenKind::BinaryOp(BinaryOperator::Pow),
            LogosToken::Percent => TokenKind::BinaryOp(BinaryOperator::Mod),
            LogosToken::Ampersand => TokenKind::BinaryOp(BinaryOperator::And),
            LogosToken::Pipe => TokenKind::BinaryOp(BinaryOperator::Or),
            LogosToken::Star => TokenKind::BinaryOp(BinaryOperator::Mul),
            LogosToken::Slash => TokenKind::BinaryOp(BinaryOperator::Div),
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,
            LogosToken::Number => TokenKind::Term {
                kind: TermKind::Number,
                text: lexeme.to_string(),
            },
            LogosToken::Identifier => self.classify_identifier(lexeme, location)?,
        };

        let token = Token::new(kind, lexeme, location);
        #[cfg(feature = "logging")]
        log::trace!("token {token}");
        Ok(token)
    }

    /// Registered function names become prefix operators, everything else is
    /// a variable.
    fn classify_identifier(&self, name: &str, location: Location) -> Result<TokenKind, LexError> {
        if name.len() > MAX_IDENTIFIER_LEN {
            return Err(LexError::IdentifierTooLong {
                name: name.to_string(),
                max: MAX_IDENTIFIER_LEN,
                location,
            });
        }

        Ok(match mep_math::find(name) {
            Some(function) => TokenKind::UnaryOp(function),
            None => TokenKind::Term {
                kind: TermKind::Variable,
                text: name.to_string(),
            },
        })
    }
}

/// Yields every token up to and including `EndOfInput`, or up to the first
/// error.
impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Err(err) = self.peek() {
            self.finished = true;
            return Some(Err(err));
        }
        let token = self.consume()?;
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(Ok(token))
    }
}

// Include the test module
#[cfg(test)]
mod tests;
