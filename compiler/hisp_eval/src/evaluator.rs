//! Evaluation of values against an environment.
//!
//! Numbers, errors, Q-expressions, and functions evaluate to themselves.
//! Symbols are looked up. S-expressions evaluate every child left to right,
//! then report the first error among them, then unwrap or apply:
//!
//! - `()` stays `()`
//! - `(x)` is `x`
//! - `(f a b ...)` applies `f` (which must be a function) to `a b ...`
//!
//! Errors are inspected only after all children ran, so a `def` appearing
//! after a failing sibling still takes effect.

use hisp_stack::ensure_sufficient_stack;
use hisp_value::{not_callable, Environment, Value};

/// Evaluate `value`, consuming it.
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate(env: &mut Environment, value: Value) -> Value {
    eval(env, value)
}

fn eval(env: &mut Environment, value: Value) -> Value {
    ensure_sufficient_stack(|| match value {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(cells) => eval_sexpr(env, cells.into_vec()),
        Value::Number(_) | Value::Error(_) | Value::QExpr(_) | Value::Function(_) => value,
    })
}

fn eval_sexpr(env: &mut Environment, cells: Vec<Value>) -> Value {
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| eval(env, cell)).collect();

    if let Some(index) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(index);
    }

    let mut cells = cells.into_iter();
    let Some(head) = cells.next() else {
        return Value::unit();
    };
    let args: Vec<Value> = cells.collect();
    if args.is_empty() {
        return head;
    }

    match head {
        Value::Function(builtin) => {
            tracing::debug!(builtin = builtin.name(), argc = args.len(), "applying builtin");
            builtin.call(env, args)
        }
        other => Value::error(not_callable(other.type_name())),
    }
}
