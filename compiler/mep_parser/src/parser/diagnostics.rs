use std::fmt::Write;

use mep_lexer::Location;

use super::error::ParseError;

/// A user-facing error report for a problem in an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub location: Location,
    /// Number of characters to underline, at least one
    pub length: usize,
    pub help: Option<String>,
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        Diagnostic {
            message: err.message(),
            location: err.location(),
            length: err.lexeme().chars().count().max(1),
            help: help_for_error(err),
        }
    }
}

/// Map a parse error to a user-friendly help message
fn help_for_error(err: &ParseError) -> Option<String> {
    match err {
        ParseError::IdentifierTooLong { max, .. } => {
            Some(format!("Names may be at most {max} characters long"))
        }
        ParseError::Syntax {
            message, lexeme, ..
        } => {
            if message.starts_with("unexpected character") {
                Some("Only numbers, names, '+ - * / % ^ & |' and parentheses are allowed".to_string())
            } else if message.starts_with("expected `(` after function") {
                Some("Functions take their argument in parentheses, e.g. 'sin(x)'".to_string())
            } else if message.starts_with("missing `)`") {
                Some("Did you forget a closing ')'?".to_string())
            } else if lexeme == ")" {
                Some("Did you forget a matching '(' earlier?".to_string())
            } else if lexeme.is_empty() {
                Some("The expression ended early. Is an operand missing?".to_string())
            } else {
                None
            }
        }
    }
}

/// Renders a diagnostic with the offending source line and a caret marker.
///
/// ```text
/// error: missing `)`, found end of input
///  --> 1:11
///   |
/// 1 | (((((4))))
///   |           ^
///   = help: Did you forget a closing ')'?
/// ```
pub fn render_snippet(diagnostic: &Diagnostic, source: &str) -> String {
    let line_no = diagnostic.location.line.max(1);
    let gutter = line_no.to_string().len();
    let line = source_line(source, line_no);

    let mut out = String::new();
    let _ = writeln!(out, "error: {}", diagnostic.message);
    let _ = writeln!(out, "{:gutter$}--> {}", "", diagnostic.location);
    let _ = writeln!(out, "{:gutter$} |", "");
    let _ = writeln!(out, "{line_no} | {line}");
    let _ = write!(
        out,
        "{:gutter$} | {}{}",
        "",
        " ".repeat(diagnostic.location.column.saturating_sub(1)),
        "^".repeat(diagnostic.length)
    );
    if let Some(help) = &diagnostic.help {
        let _ = write!(out, "\n{:gutter$} = help: {help}", "");
    }
    out
}

/// The 1-based `line_no`th line of `source`. Line breaks are `\n`, `\r\n`
/// and a lone `\r`, the same ones the lexer counts.
fn source_line(source: &str, line_no: usize) -> &str {
    let bytes = source.as_bytes();
    let mut line = 1;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' || bytes[i] == b'\r' {
            if line == line_no {
                return &source[start..i];
            }
            if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
                i += 1;
            }
            line += 1;
            start = i + 1;
        }
        i += 1;
    }
    if line == line_no {
        &source[start..]
    } else {
        ""
    }
}
