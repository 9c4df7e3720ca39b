//! Hisp Value - runtime data model for the hisp evaluator.
//!
//! This crate provides:
//! - The tagged runtime value (`Value`) and native function handle (`Builtin`)
//! - Evaluation errors (`EvalError`, `EvalErrorKind`) and their constructors
//! - The symbol table (`Environment`)
//! - The printer (`Display` for `Value`, plus [`render`])
//!
//! # Ownership
//!
//! Values form strict trees: an `SExpr`/`QExpr` owns its [`Cells`] outright
//! and nothing is shared. Dropping, cloning, and comparing lists is safe at
//! any nesting depth. A value is either moved into its next owner or
//! deep-copied with `Clone`. The environment stores its own copy of every
//! bound value, so later changes to the source expression never reach it.

mod builtin;
mod cells;
mod environment;
mod errors;
mod printer;
mod value;

pub use builtin::{Builtin, BuiltinFn};
pub use cells::Cells;
pub use environment::Environment;
pub use errors::{
    division_by_zero, empty_list, integer_overflow, invalid_number, not_callable, parse_error,
    unbound_symbol, wrong_arg_count, wrong_arg_type, Arity, EvalError, EvalErrorKind, EvalResult,
};
pub use printer::render;
pub use value::Value;
