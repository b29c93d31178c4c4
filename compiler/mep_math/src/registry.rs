use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{FunctionId, Number};

lazy_static! {
    static ref FUNCTIONS: HashMap<&'static str, FunctionId> = FunctionId::NAMED
        .iter()
        .map(|&id| (id.name(), id))
        .collect();
}

/// Returned by [`lookup`] when a name is not one of the registered functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported function `{name}`")]
pub struct UnsupportedFunction {
    /// The name that failed to resolve.
    pub name: String,
}

/// Resolves a function name, failing with [`UnsupportedFunction`] when it is
/// not registered. Lookup is case-sensitive.
pub fn lookup(name: &str) -> Result<FunctionId, UnsupportedFunction> {
    find(name).ok_or_else(|| UnsupportedFunction {
        name: name.to_string(),
    })
}

/// Classification query used by the lexer: `Some` for a function name,
/// `None` for anything else.
pub fn find(name: &str) -> Option<FunctionId> {
    FUNCTIONS.get(name).copied()
}

/// Name of a registered function (`+`/`-` for the sign functions).
pub fn name_of(id: FunctionId) -> &'static str {
    id.name()
}

/// Applies a function to a number.
pub fn apply(id: FunctionId, x: Number) -> Number {
    id.apply(x)
}
