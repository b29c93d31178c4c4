// Tree-walking evaluator for mep expressions.
// Arithmetic follows IEEE 754: dividing by zero gives an infinity or NaN
// instead of an error.

use mep_ast::ast::{BinaryNode, Node, TerminalNode, UnaryNode};
use mep_lexer::BinaryOperator;
use mep_math::{FunctionId, Number};

use crate::env::VarTable;
use crate::error::EvalError;

/// Evaluates `node` with the bindings in `vars`.
///
/// ```
/// use mep_eval::{evaluate, VarTable};
///
/// let tree = mep_parser::parse("6 + c").unwrap();
/// assert_eq!(evaluate(&tree, &VarTable::new()), Ok(7.0));
/// ```
pub fn evaluate(node: &Node, vars: &VarTable) -> Result<Number, EvalError> {
    Evaluator::new(vars).eval(node)
}

pub struct Evaluator<'a> {
    vars: &'a VarTable,
}

impl<'a> Evaluator<'a> {
    pub fn new(vars: &'a VarTable) -> Self {
        Evaluator { vars }
    }

    /// Evaluates a tree. The tree is only read, so it can be evaluated
    /// any number of times.
    pub fn eval(&self, node: &Node) -> Result<Number, EvalError> {
        match node {
            Node::Terminal(terminal) => self.eval_terminal(terminal),
            Node::Unary(unary) => self.eval_unary(unary),
            Node::Binary(binary) => self.eval_binary(binary),
        }
    }

    fn eval_terminal(&self, terminal: &TerminalNode) -> Result<Number, EvalError> {
        if terminal.text.is_empty() {
            return Err(EvalError::EmptyTree);
        }
        if terminal.is_number() {
            terminal
                .text
                .parse()
                .map_err(|_| EvalError::InvalidLiteral(terminal.text.clone()))
        } else {
            Ok(self.vars.lookup(&terminal.text))
        }
    }

    fn eval_unary(&self, unary: &UnaryNode) -> Result<Number, EvalError> {
        let value = self.eval(&unary.child)?;
        Ok(match unary.function {
            FunctionId::Identity => value,
            FunctionId::Negate => -value,
            function => mep_math::apply(function, value),
        })
    }

    fn eval_binary(&self, binary: &BinaryNode) -> Result<Number, EvalError> {
        let left = self.eval(&binary.left)?;
        let right = self.eval(&binary.right)?;
        match binary.operator {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => Ok(left / right),
            // `%` on f64 truncates like C's fmod
            BinaryOperator::Mod => Ok(left % right),
            BinaryOperator::Pow => Ok(left.powf(right)),
            op @ (BinaryOperator::And | BinaryOperator::Or) => {
                Err(EvalError::UnsupportedOperator(op))
            }
        }
    }
}
