// Variable bindings for evaluation.
// Lookups of unbound names fall back to a default value instead of failing.

use std::collections::HashMap;

use mep_math::Number;

/// Value of an unbound variable unless configured otherwise.
pub const DEFAULT_VALUE: Number = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct VarTable {
    values: HashMap<String, Number>,
    default_value: Number,
}

impl Default for VarTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VarTable {
    pub fn new() -> Self {
        Self::with_default(DEFAULT_VALUE)
    }

    /// An empty table whose unbound variables evaluate to `default_value`.
    pub fn with_default(default_value: Number) -> Self {
        Self {
            values: HashMap::new(),
            default_value,
        }
    }

    /// Binds `name`, returning the previous value if there was one.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Number) -> Option<Number> {
        self.values.insert(name.into(), value)
    }

    /// The bound value of `name`, if any.
    pub fn get(&self, name: &str) -> Option<Number> {
        self.values.get(name).copied()
    }

    /// The value of `name`, or the default for unbound names.
    /// Names are case-sensitive.
    pub fn lookup(&self, name: &str) -> Number {
        match self.get(name) {
            Some(value) => value,
            None => {
                log::trace!("variable `{name}` is unbound, using {}", self.default_value);
                self.default_value
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Number> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn default_value(&self) -> Number {
        self.default_value
    }

    pub fn set_default_value(&mut self, value: Number) {
        self.default_value = value;
    }

    /// Bindings sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Number)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Number)> for VarTable {
    fn from_iter<I: IntoIterator<Item = (S, Number)>>(iter: I) -> Self {
        let mut table = VarTable::new();
        table.extend(iter);
        table
    }
}

impl<S: Into<String>> Extend<(S, Number)> for VarTable {
    fn extend<I: IntoIterator<Item = (S, Number)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
