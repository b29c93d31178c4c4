// Expression tree for mep.
// Each interior node owns its children; a tree is never mutated once built.

use std::collections::BTreeSet;

use mep_lexer::BinaryOperator;
use mep_math::FunctionId;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node {
    /// Number literal or variable name.
    Terminal(TerminalNode),
    /// Sign or function application.
    Unary(Box<UnaryNode>),
    /// Binary operator application.
    Binary(Box<BinaryNode>),
}

/// Leaf of the tree. Text starting with a digit is a number literal,
/// anything else names a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TerminalNode {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryNode {
    pub function: FunctionId,
    pub child: Node,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryNode {
    pub operator: BinaryOperator,
    pub left: Node,
    pub right: Node,
}

impl TerminalNode {
    /// True if the text denotes a number literal.
    pub fn is_number(&self) -> bool {
        self.text.starts_with(|c: char| c.is_ascii_digit())
    }
}

impl Node {
    pub fn terminal<S: Into<String>>(text: S) -> Self {
        Node::Terminal(TerminalNode { text: text.into() })
    }

    pub fn unary(function: FunctionId, child: Node) -> Self {
        Node::Unary(Box::new(UnaryNode { function, child }))
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary(Box::new(BinaryNode {
            operator,
            left,
            right,
        }))
    }

    /// True for a terminal holding a number literal.
    pub fn is_number(&self) -> bool {
        matches!(self, Node::Terminal(terminal) if terminal.is_number())
    }

    /// The distinct variable names in the tree, sorted.
    pub fn variables(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names.into_iter().map(str::to_string).collect()
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Node::Terminal(terminal) => {
                if !terminal.is_number() && !terminal.text.is_empty() {
                    names.insert(terminal.text.as_str());
                }
            }
            Node::Unary(unary) => unary.child.collect_variables(names),
            Node::Binary(binary) => {
                binary.left.collect_variables(names);
                binary.right.collect_variables(names);
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Terminal(_) => 1,
            Node::Unary(unary) => 1 + unary.child.depth(),
            Node::Binary(binary) => 1 + binary.left.depth().max(binary.right.depth()),
        }
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        match self {
            Node::Terminal(_) => 1,
            Node::Unary(unary) => 1 + unary.child.len(),
            Node::Binary(binary) => 1 + binary.left.len() + binary.right.len(),
        }
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }
}
