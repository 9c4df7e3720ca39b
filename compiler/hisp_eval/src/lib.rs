#![deny(clippy::arithmetic_side_effects)]
//! Hisp Eval - reader, evaluator, and builtins for hisp.
//!
//! # Architecture
//!
//! - `read`: annotated syntax tree → unevaluated `Value` tree
//! - `evaluate`: reduces a `Value` against an `Environment`
//! - `builtins`: the native catalog (arithmetic, list operations, `def`),
//!   installed into an environment by `register_builtins`
//! - `Interpreter`: owns one environment with the catalog installed
//!
//! The environment is always passed explicitly; there is no global state, so
//! any number of interpreters can coexist.

pub mod builtins;
mod evaluator;
mod interpreter;
mod reader;

pub use builtins::register_builtins;
pub use evaluator::evaluate;
pub use interpreter::Interpreter;
pub use reader::read;

// Re-export the data model so drivers need a single dependency.
pub use hisp_value::{render, Environment, EvalError, EvalErrorKind, Value};

#[cfg(test)]
mod tests;
