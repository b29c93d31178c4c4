use logos::Logos;

/// Raw token type used by the logos lexer.
///
/// Raw tokens carry no context: `+` and `-` are only classified as sign or
/// binary operator by [`Lexer`](crate::Lexer), and identifiers are only
/// split into functions and variables once they have been looked up.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r]+")]
pub enum LogosToken {
    // --- Operators ---
    /// `+`, unary or binary
    #[token("+")]
    Plus,
    /// `-`, unary or binary
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,

    // --- Delimiters ---
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    // --- Terms ---
    /// Unsigned decimal literal without exponent
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    /// ASCII alphanumeric run starting with a letter
    #[regex(r"[A-Za-z][A-Za-z0-9]*")]
    Identifier,
}
