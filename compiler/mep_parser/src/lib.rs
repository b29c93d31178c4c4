//! Operator-precedence parser for mep expressions.
//!
//! [`parse`] turns the text of an expression into a [`Node`] tree using a
//! shunting-yard parser over two stacks. Failures are reported as
//! [`ParseError`]s which [`Diagnostic`] can turn into an annotated snippet.

pub mod parser;

pub use mep_ast::Node;
pub use parser::diagnostics::{render_snippet, Diagnostic};
pub use parser::error::ParseError;
pub use parser::{parse, Parser};


// Integration tests are in the tests/ directory
