use mep_lexer::BinaryOperator;

/// An error raised while evaluating a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The operator parses but has no numeric meaning (`&`, `|`).
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(BinaryOperator),

    /// A terminal with no text.
    #[error("cannot evaluate an empty tree")]
    EmptyTree,

    /// A number terminal whose text is not a valid number.
    #[error("invalid number literal `{0}`")]
    InvalidLiteral(String),
}
