//! List builtins over Q-expressions.

use hisp_value::{integer_overflow, Arity, Environment, EvalResult, Value};

use super::{
    check_arity, check_qexpr, expect_qexpr, one_arg, one_nonempty_qexpr, two_args,
};
use crate::evaluator::evaluate;

/// `list a b ...` → `{a b ...}`
pub(super) fn list(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    Ok(Value::qexpr(args))
}

/// `head {a b ...}` → `{a}`
pub(super) fn head(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let mut cells = one_nonempty_qexpr("head", args)?;
    cells.truncate(1);
    Ok(Value::qexpr(cells))
}

/// `tail {a b ...}` → `{b ...}`
pub(super) fn tail(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let cells = one_nonempty_qexpr("tail", args)?;
    Ok(Value::qexpr(cells.into_iter().skip(1).collect()))
}

/// `init {... y z}` → `{... y}`
pub(super) fn init(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let mut cells = one_nonempty_qexpr("init", args)?;
    cells.pop();
    Ok(Value::qexpr(cells))
}

/// `eval {f a b}` evaluates `(f a b)`.
pub(super) fn eval(env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let cells = expect_qexpr("eval", 0, one_arg("eval", args)?)?;
    Ok(evaluate(env, Value::sexpr(cells)))
}

/// `join {a} {b c} ...` → `{a b c ...}`
pub(super) fn join(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    check_arity("join", &args, Arity::AtLeast(1))?;
    for (index, arg) in args.iter().enumerate() {
        check_qexpr("join", index, arg)?;
    }

    let mut joined = Vec::new();
    for (index, arg) in args.into_iter().enumerate() {
        joined.extend(expect_qexpr("join", index, arg)?);
    }
    Ok(Value::qexpr(joined))
}

/// `len {a b c}` → `3`
pub(super) fn len(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let cells = expect_qexpr("len", 0, one_arg("len", args)?)?;
    let count = i64::try_from(cells.len()).map_err(|_| integer_overflow("len"))?;
    Ok(Value::number(count))
}

/// `cons a {b c}` → `{a b c}`
pub(super) fn cons(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let (first, rest) = two_args("cons", args)?;
    let rest = expect_qexpr("cons", 1, rest)?;

    let mut cells = Vec::with_capacity(rest.len().saturating_add(1));
    cells.push(first);
    cells.extend(rest);
    Ok(Value::qexpr(cells))
}
