// Parser for `name=value` variable bindings given on the command line or
// with `:set` in the REPL.

use nom::{
    bytes::complete::take_while,
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, recognize},
    number::complete::double,
    sequence::{delimited, pair, separated_pair},
    IResult,
};

/// A binding that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid binding `{input}`, expected `name=value`")]
pub struct BindingError {
    pub input: String,
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric()),
    ))(input)
}

fn parse_binding_inner(input: &str) -> IResult<&str, (&str, f64)> {
    all_consuming(delimited(
        multispace0,
        separated_pair(
            parse_name,
            delimited(multispace0, char('='), multispace0),
            double,
        ),
        multispace0,
    ))(input)
}

/// Parses `name=value`, with optional spaces around `=`.
///
/// Names follow the expression grammar (a letter, then letters or digits)
/// and registered function names are refused since they can never be
/// referenced as variables.
pub fn parse_binding(input: &str) -> Result<(String, f64), BindingError> {
    let invalid = || BindingError {
        input: input.to_string(),
    };
    let (_, (name, value)) = parse_binding_inner(input).map_err(|_| invalid())?;
    if mep_math::find(name).is_some() || name.len() > mep_lexer::MAX_IDENTIFIER_LEN {
        return Err(invalid());
    }
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_bindings() {
        assert_eq!(parse_binding("x=2"), Ok(("x".to_string(), 2.0)));
        assert_eq!(parse_binding(" rate = -0.5 "), Ok(("rate".to_string(), -0.5)));
        assert_eq!(parse_binding("a1=1e3"), Ok(("a1".to_string(), 1000.0)));
    }

    #[test]
    fn test_invalid_bindings() {
        for input in ["x", "=1", "1x=2", "x=", "x=abc", "x=1 2", "x y=1", "sin=1"] {
            assert!(parse_binding(input).is_err(), "{input} should be rejected");
        }
        assert_eq!(
            parse_binding("x").unwrap_err().to_string(),
            "invalid binding `x`, expected `name=value`"
        );
    }
}
