//! Variable table.
//!
//! One flat table per run: no block scoping and no shadowing. A block
//! body that declares a variable writes straight into this table.

use rustc_hash::FxHashMap;

use crate::Value;

/// Map from variable name to its current value.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind `name` to `value`, overwriting any existing binding.
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_owned(), value);
        }
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings ordered by name, for dumping the table.
    pub fn sorted_bindings(&self) -> Vec<(&str, Value)> {
        let mut bindings: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

#[cfg(test)]
mod tests;
