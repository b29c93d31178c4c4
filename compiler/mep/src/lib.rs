//! mep: parse, render and evaluate infix math expressions.
//!
//! This crate ties the lexer, parser and evaluator together for the `mep`
//! command-line tool and its REPL.

pub mod batch;
pub mod binding;
pub mod repl;

pub use mep_ast::{render, Node};
pub use mep_eval::{evaluate, EvalError, VarTable};
pub use mep_parser::{parse, ParseError};

use mep_parser::{render_snippet, Diagnostic};
use serde::Serialize;

/// Any error raised while handling one expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MepError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Strict mode only: the expression mentions variables with no binding.
    #[error("unbound variables: {}", .0.join(", "))]
    Unbound(Vec<String>),
}

impl MepError {
    /// A printable description; parse errors come with a source snippet.
    pub fn describe(&self, source: &str) -> String {
        match self {
            MepError::Parse(err) => render_snippet(&Diagnostic::from(err), source),
            other => format!("error: {other}"),
        }
    }
}

/// Outcome of analysing one expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: String,
    /// Canonical rendering, if the input parsed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
    /// Variables referenced by the expression
    pub variables: Vec<String>,
    /// Non-finite values serialize as `null`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Fails with [`MepError::Unbound`] if `tree` mentions a variable that has
/// no binding in `vars`.
pub fn check_bound(tree: &Node, vars: &VarTable) -> Result<(), MepError> {
    let unbound: Vec<String> = tree
        .variables()
        .into_iter()
        .filter(|name| !vars.contains(name))
        .collect();
    if unbound.is_empty() {
        Ok(())
    } else {
        Err(MepError::Unbound(unbound))
    }
}

/// Parses and evaluates `source`.
///
/// ```
/// use mep::{eval_str, VarTable};
///
/// assert_eq!(eval_str("(( ((2)) + 4))*((5))", &VarTable::new(), false), Ok(30.0));
/// ```
pub fn eval_str(source: &str, vars: &VarTable, strict: bool) -> Result<f64, MepError> {
    let tree = parse(source)?;
    if strict {
        check_bound(&tree, vars)?;
    }
    Ok(evaluate(&tree, vars)?)
}

/// Parses, renders and evaluates `source`, collecting the results in a
/// [`Report`]. Failures end up in `error` instead of being returned.
pub fn analyze(source: &str, vars: &VarTable, strict: bool) -> Report {
    let mut report = Report {
        input: source.to_string(),
        rendered: None,
        variables: Vec::new(),
        value: None,
        error: None,
    };

    let tree = match parse(source) {
        Ok(tree) => tree,
        Err(err) => {
            log::debug!("parse failed: {err}");
            report.error = Some(MepError::from(err).describe(source));
            return report;
        }
    };
    report.rendered = Some(render(&tree));
    report.variables = tree.variables();

    let value = if strict {
        check_bound(&tree, vars).and_then(|()| Ok(evaluate(&tree, vars)?))
    } else {
        evaluate(&tree, vars).map_err(MepError::from)
    };
    match value {
        Ok(value) => report.value = Some(value),
        Err(err) => report.error = Some(err.describe(source)),
    }
    report
}
