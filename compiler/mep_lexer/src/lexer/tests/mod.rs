
use super::*;

/// Collects the kinds of all tokens, `EndOfInput` included.
fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .map(|token| token.map(|token| token.kind))
        .collect::<Result<_, _>>()
        .unwrap_or_else(|err| panic!("lexing {input:?} failed: {err}"))
}

fn number(text: &str) -> TokenKind {
    TokenKind::Term {
        kind: TermKind::Number,
        text: text.to_string(),
    }
}

fn variable(text: &str) -> TokenKind {
    TokenKind::Term {
        kind: TermKind::Variable,
        text: text.to_string(),
    }
}
