//! Native function handles.

use std::fmt;

use crate::environment::Environment;
use crate::errors::EvalResult;
use crate::value::Value;

/// Signature of a native operation.
///
/// Receives the environment and the full, already evaluated argument list,
/// which it owns and must consume on every path.
pub type BuiltinFn = fn(&mut Environment, Vec<Value>) -> EvalResult;

/// A named native operation; the payload of [`Value::Function`].
#[derive(Clone, Copy)]
pub struct Builtin {
    name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    /// Name the builtin was registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply to `args`. A failure comes back as a [`Value::Error`].
    #[inline]
    pub fn call(&self, env: &mut Environment, args: Vec<Value>) -> Value {
        Value::from_result((self.func)(env, args))
    }
}

/// Builtins are identified by name; function pointers are not compared.
impl PartialEq for Builtin {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}
