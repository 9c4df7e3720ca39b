//! Native builtin catalog.
//!
//! Every builtin receives the environment and its evaluated argument list,
//! owns that list, and either returns a result or an `EvalError`. Arguments
//! are validated before any work is done; a failed check returns a
//! descriptive error naming the function, the mismatch, and expected vs.
//! actual counts or types.

mod arithmetic;
mod binding;
mod list;

use hisp_value::{
    empty_list, wrong_arg_count, wrong_arg_type, Arity, BuiltinFn, Environment, EvalError, Value,
};

pub use arithmetic::ArithOp;

/// Every builtin with the symbol it is bound to.
pub const CATALOG: &[(&str, BuiltinFn)] = &[
    // List operations
    ("list", list::list),
    ("head", list::head),
    ("tail", list::tail),
    ("eval", list::eval),
    ("join", list::join),
    ("len", list::len),
    ("cons", list::cons),
    ("init", list::init),
    // Arithmetic
    ("+", arithmetic::add),
    ("-", arithmetic::sub),
    ("*", arithmetic::mul),
    ("/", arithmetic::div),
    ("%", arithmetic::rem),
    ("^", arithmetic::pow),
    // Binding
    ("def", binding::def),
];

/// Bind every builtin in [`CATALOG`] into `env`.
pub fn register_builtins(env: &mut Environment) {
    for &(name, func) in CATALOG {
        env.put_builtin(name, func);
    }
    tracing::debug!(count = CATALOG.len(), "registered builtins");
}

// Argument checking helpers

/// Check the argument count without consuming the list.
fn check_arity(function: &str, args: &[Value], arity: Arity) -> Result<(), EvalError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(wrong_arg_count(function, arity, args.len()))
    }
}

/// Take the only argument.
fn one_arg(function: &str, args: Vec<Value>) -> Result<Value, EvalError> {
    match <[Value; 1]>::try_from(args) {
        Ok([arg]) => Ok(arg),
        Err(args) => Err(wrong_arg_count(function, Arity::Exactly(1), args.len())),
    }
}

/// Take exactly two arguments.
fn two_args(function: &str, args: Vec<Value>) -> Result<(Value, Value), EvalError> {
    match <[Value; 2]>::try_from(args) {
        Ok([first, second]) => Ok((first, second)),
        Err(args) => Err(wrong_arg_count(function, Arity::Exactly(2), args.len())),
    }
}

/// Unwrap a Q-expression argument into its cells.
fn expect_qexpr(function: &str, index: usize, arg: Value) -> Result<Vec<Value>, EvalError> {
    match arg {
        Value::QExpr(cells) => Ok(cells.into_vec()),
        other => Err(wrong_arg_type(
            function,
            index,
            "Q-Expression",
            other.type_name(),
        )),
    }
}

/// Check that an argument is a Q-expression without consuming it.
fn check_qexpr(function: &str, index: usize, arg: &Value) -> Result<(), EvalError> {
    match arg {
        Value::QExpr(_) => Ok(()),
        other => Err(wrong_arg_type(
            function,
            index,
            "Q-Expression",
            other.type_name(),
        )),
    }
}

/// The single argument, which must be a non-empty Q-expression.
fn one_nonempty_qexpr(function: &str, args: Vec<Value>) -> Result<Vec<Value>, EvalError> {
    let cells = expect_qexpr(function, 0, one_arg(function, args)?)?;
    if cells.is_empty() {
        return Err(empty_list(function));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests;
