//! Canonical rendering of expression trees.
//!
//! Every binary application is wrapped in parentheses and number literals
//! are printed with two decimals, so `1+2*3` renders as
//! `(1.00 + (2.00 * 3.00))`. Rendering never fails and never mutates the
//! tree.

use std::fmt::{self, Write};

use mep_math::FunctionId;

use crate::ast::{Node, TerminalNode};

/// Renders `node` as a fully parenthesised string.
pub fn render(node: &Node) -> String {
    node.to_string()
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Terminal(terminal) => write!(f, "{terminal}"),
            Node::Unary(unary) => match unary.function {
                FunctionId::Identity => write!(f, "{}", unary.child),
                FunctionId::Negate => {
                    f.write_char('-')?;
                    write!(f, "{}", unary.child)
                }
                function => write!(f, "{}({})", mep_math::name_of(function), unary.child),
            },
            Node::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.left,
                binary.operator.symbol(),
                binary.right
            ),
        }
    }
}

impl fmt::Display for TerminalNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Literals that do not parse (only possible in hand-built trees)
        // are printed as they are.
        match self.text.parse::<f64>() {
            Ok(value) if self.is_number() => write!(f, "{value:.2}"),
            _ => f.write_str(&self.text),
        }
    }
}
