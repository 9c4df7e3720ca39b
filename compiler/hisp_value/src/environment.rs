//! Symbol environment.
//!
//! One flat scope. Entries stay in insertion order; an `FxHashMap` index maps
//! each name to its slot so lookup does not depend on that order.

use rustc_hash::FxHashMap;

use crate::builtin::{Builtin, BuiltinFn};
use crate::errors::unbound_symbol;
use crate::value::Value;

/// A name bound to the environment's private copy of a value.
#[derive(Clone, Debug)]
struct Binding {
    name: String,
    value: Value,
}

/// Mapping from symbol name to value.
///
/// Owns an independent deep copy of every bound value: `put` clones its
/// argument and `get` hands out a clone, so no caller ever aliases an entry.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<Binding>,
    index: FxHashMap<String, usize>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Look up `name`, returning a copy of its value.
    ///
    /// An unbound name yields an `UnboundSymbol` error value.
    pub fn get(&self, name: &str) -> Value {
        match self.index.get(name).and_then(|&slot| self.bindings.get(slot)) {
            Some(binding) => binding.value.clone(),
            None => Value::Error(unbound_symbol(name)),
        }
    }

    /// Bind `name` to a copy of `value`, replacing any previous binding.
    pub fn put(&mut self, name: &str, value: &Value) {
        if let Some(binding) = self
            .index
            .get(name)
            .and_then(|&slot| self.bindings.get_mut(slot))
        {
            binding.value = value.clone();
            return;
        }
        self.index.insert(name.to_string(), self.bindings.len());
        self.bindings.push(Binding {
            name: name.to_string(),
            value: value.clone(),
        });
    }

    /// Bind a native operation under its own name.
    pub fn put_builtin(&mut self, name: &'static str, func: BuiltinFn) {
        self.put(name, &Value::Function(Builtin::new(name, func)));
    }

    /// Whether `name` is bound.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of bound names.
    #[inline]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in the order they were first defined.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|binding| binding.name.as_str())
    }
}

#[cfg(test)]
mod tests;
