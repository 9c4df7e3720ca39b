//! Interpreter facade: one environment with the builtin catalog installed.

use hisp_syntax::AstNode;
use hisp_value::{Environment, Value};

use crate::builtins::register_builtins;
use crate::evaluator::evaluate;
use crate::reader::read;

/// An independent hisp instance.
///
/// Definitions made through one interpreter are never visible to another.
pub struct Interpreter {
    env: Environment,
}

impl Interpreter {
    /// Create an interpreter whose environment holds every builtin.
    pub fn new() -> Self {
        let mut env = Environment::new();
        register_builtins(&mut env);
        Interpreter { env }
    }

    /// Read and evaluate one parsed input.
    pub fn eval_ast(&mut self, node: &AstNode) -> Value {
        self.eval(read(node))
    }

    /// Evaluate an already-read value.
    pub fn eval(&mut self, value: Value) -> Value {
        evaluate(&mut self.env, value)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
