//! Function registry for mep expressions.
//!
//! Maps function names to [`FunctionId`]s and back, and supplies the numeric
//! implementation of every identifier. The two sign pseudo-functions
//! ([`FunctionId::Identity`] and [`FunctionId::Negate`]) live here as well so
//! that the parser and the evaluator can treat `+x`/`-x` like any other
//! unary application.

#![warn(missing_docs)]

pub mod function;
pub mod registry;

pub use function::FunctionId;
pub use registry::{apply, find, lookup, name_of, UnsupportedFunction};

/// The numeric type every expression evaluates to.
pub type Number = f64;
