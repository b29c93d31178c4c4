//! Numeric evaluation of mep expression trees.

pub mod env;
pub mod error;
pub mod evaluator;

pub use env::VarTable;
pub use error::EvalError;
pub use evaluator::{evaluate, Evaluator};
