// Expressions and expected results of the demonstration harness.

use mep_eval::{EvalError, VarTable};
use pretty_assertions::assert_eq;
use tests::{approx_eq, run, run_with, Outcome};

const EXACT: &[(&str, f64)] = &[
    ("--1", 1.0),
    ("- + -1", 1.0),
    ("1+2", 3.0),
    ("2^2^2", 16.0),
    ("6 + c", 7.0),
    ("6-2-2", 2.0),
    ("2-7", -5.0),
    ("5*3", 15.0),
    ("8/4", 2.0),
    ("2 -4 +6 -1 -1- 0 +8", 10.0),
    ("2*3 - 4*5 + 6/3", -12.0),
    ("2*3*4/8 - 5/2*4 + 6 + 0/3", -1.0),
    ("1 -1 + 2 - 2 + 4 - 4 + 6", 6.0),
    (" 5 + + 6", 11.0),
    ("-5 + 2", -3.0),
    ("(5 + 2*3 - 1 + 7 * 8)", 66.0),
    ("(67 + 2 * 3 - 67 + 2/1 - 7)", 1.0),
    ("(2) + (17*2-30) * (5)+2 - (8/2)*4", 8.0),
    ("(((((5)))))", 5.0),
    ("(( ((2)) + 4))*((5))", 30.0),
    ("2 + (7 * 3)", 23.0),
    ("((2)) * ((3))", 6.0),
];

const APPROXIMATE: &[(&str, f64)] = &[("sin(x)+cos(y)", 1.3812), ("5/3", 1.66)];

const INFINITE: &[&str] = &[
    "5/0",
    " 2 - 1 + 14/0 + 7",
    "(5*7/5) + (23) - 5 * (98-4)/(6*7-42)",
];

const SYNTAX_ERRORS: &[&str] = &[
    "(((((4))))",
    "((5)) * ((1)",
    " % ",
    "2 + (5 * 2",
    "((2)) * ((3",
    "((9)) * ((1)",
];

#[test]
fn exact_values() {
    for &(input, expected) in EXACT {
        assert_eq!(run(input), Outcome::Value(expected), "input: {input:?}");
    }
}

#[test]
fn approximate_values() {
    for &(input, expected) in APPROXIMATE {
        let value = run(input).value().unwrap_or_else(|| panic!("{input:?} has no value"));
        assert!(approx_eq(value, expected, 1e-2), "{input:?}: {value} != {expected}");
    }
}

#[test]
fn infinite_values() {
    for &input in INFINITE {
        let value = run(input).value().unwrap_or_else(|| panic!("{input:?} has no value"));
        assert!(value.is_infinite(), "{input:?} evaluated to {value}");
    }
}

#[test]
fn syntax_errors() {
    for &input in SYNTAX_ERRORS {
        assert!(run(input).is_syntax_error(), "{input:?} should not parse");
    }
}

#[test]
fn logical_operator_fails_at_evaluation() {
    match run("7 & 2") {
        Outcome::EvalError(EvalError::UnsupportedOperator(_)) => {}
        other => panic!("expected an unsupported operator error, got {other:?}"),
    }
}

#[test]
fn variables_can_be_bound() {
    let vars: VarTable = [("c", 4.0)].into_iter().collect();
    assert_eq!(run_with("6 + c", &vars), Outcome::Value(10.0));
}
