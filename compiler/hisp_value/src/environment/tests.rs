use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalResult;

fn noop(_env: &mut Environment, _args: Vec<Value>) -> EvalResult {
    Ok(Value::unit())
}

#[test]
fn test_put_get() {
    let mut env = Environment::new();
    env.put("x", &Value::number(100));
    assert_eq!(env.get("x"), Value::number(100));
    assert!(env.contains("x"));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_unbound_is_error_value() {
    let env = Environment::new();
    let value = env.get("foo");
    assert_eq!(value.to_string(), "Error: Unbound Symbol 'foo'");
    assert!(env.is_empty());
}

#[test]
fn test_put_overwrites() {
    let mut env = Environment::new();
    env.put("x", &Value::number(100));
    env.put("x", &Value::number(5));
    assert_eq!(env.get("x"), Value::number(5));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_put_stores_independent_copy() {
    let mut env = Environment::new();
    let mut source = Value::qexpr(vec![Value::number(1), Value::number(2)]);
    env.put("xs", &source);

    if let Value::QExpr(cells) = &mut source {
        cells.push(Value::number(3));
        cells[0] = Value::symbol("changed");
    }
    drop(source);

    assert_eq!(
        env.get("xs"),
        Value::qexpr(vec![Value::number(1), Value::number(2)])
    );
}

#[test]
fn test_get_returns_independent_copy() {
    let mut env = Environment::new();
    env.put("xs", &Value::qexpr(vec![Value::number(1)]));

    let mut copy = env.get("xs");
    if let Value::QExpr(cells) = &mut copy {
        cells.clear();
    }

    assert_eq!(env.get("xs"), Value::qexpr(vec![Value::number(1)]));
}

#[test]
fn test_names_in_definition_order() {
    let mut env = Environment::new();
    env.put("b", &Value::number(1));
    env.put("a", &Value::number(2));
    env.put("b", &Value::number(3));
    env.put_builtin("noop", noop);
    assert_eq!(env.names().collect::<Vec<_>>(), vec!["b", "a", "noop"]);
}

#[test]
fn test_put_builtin_is_callable() {
    let mut env = Environment::new();
    env.put_builtin("noop", noop);

    let Value::Function(builtin) = env.get("noop") else {
        panic!("expected a function value");
    };
    assert_eq!(builtin.name(), "noop");
    assert_eq!(builtin.call(&mut env, vec![]), Value::unit());
}

#[test]
fn test_independent_environments() {
    let mut first = Environment::new();
    let second = Environment::new();
    first.put("x", &Value::number(1));
    assert!(!second.contains("x"));
}
