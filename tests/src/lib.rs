//! Helpers shared by the end-to-end tests.

use mep_ast::render;
use mep_eval::{evaluate, EvalError, VarTable};
use mep_parser::{parse, ParseError};

/// What happened to one input.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    SyntaxError(ParseError),
    EvalError(EvalError),
}

impl Outcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            Outcome::Value(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Outcome::SyntaxError(_))
    }
}

/// Parses and evaluates `input` with unbound variables defaulting to 1.
pub fn run(input: &str) -> Outcome {
    run_with(input, &VarTable::new())
}

pub fn run_with(input: &str, vars: &VarTable) -> Outcome {
    let tree = match parse(input) {
        Ok(tree) => tree,
        Err(err) => return Outcome::SyntaxError(err),
    };
    match evaluate(&tree, vars) {
        Ok(value) => Outcome::Value(value),
        Err(err) => Outcome::EvalError(err),
    }
}

/// Rendering of the parsed input, `None` on a syntax error.
pub fn rendered(input: &str) -> Option<String> {
    parse(input).ok().map(|tree| render(&tree))
}

/// True if `actual` is within `tolerance` of `expected`.
pub fn approx_eq(actual: f64, expected: f64, tolerance: f64) -> bool {
    (actual - expected).abs() <= tolerance
}
