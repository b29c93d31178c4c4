//! Expression tree for mep.
//!
//! This crate defines the tree built by the parser, a handful of queries
//! over it and the canonical, fully parenthesised rendering used for
//! debugging and round trips.

pub mod ast;
pub mod render;

// Re-export commonly used types
pub use ast::{BinaryNode, Node, TerminalNode, UnaryNode};
pub use render::render;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised by the JSON helpers.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum AstError {
    /// The value could not be converted to or from JSON.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A result type for tree operations.
#[cfg(feature = "serde")]
pub type Result<T> = std::result::Result<T, AstError>;

/// Serializes a tree (or any of its parts) to a pretty JSON string.
///
/// # Example
///
/// ```
/// use mep_ast::{to_json, Node};
///
/// let json = to_json(&Node::terminal("42")).unwrap();
/// assert!(json.contains(r#""type": "Terminal""#));
/// assert!(json.contains(r#""text": "42""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes a tree from a JSON string.
///
/// ```
/// use mep_ast::{from_json, Node};
///
/// let node: Node = from_json(r#"{"type":"Terminal","text":"x"}"#).unwrap();
/// assert_eq!(node, Node::terminal("x"));
/// ```
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use mep_lexer::BinaryOperator;
    use mep_math::FunctionId;

    #[test]
    fn test_json_round_trip() {
        let tree = Node::binary(
            BinaryOperator::Pow,
            Node::unary(FunctionId::Sin, Node::terminal("x")),
            Node::terminal("2"),
        );

        let json = to_json(&tree).unwrap();
        assert!(json.contains(r#""function": "sin""#));
        assert!(json.contains(r#""operator": "Pow""#));

        let back: Node = from_json(&json).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            from_json::<Node>("{\"type\":\"Ternary\"}"),
            Err(AstError::Json(_))
        ));
    }
}
