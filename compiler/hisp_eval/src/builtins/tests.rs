use pretty_assertions::assert_eq;

use super::*;
use crate::tests::{eval_source, run};
use crate::Interpreter;

// Arithmetic

#[test]
fn test_arithmetic_folds() {
    assert_eq!(run("+ 1 2 3"), "6");
    assert_eq!(run("- 10 1 2"), "7");
    assert_eq!(run("* 2 3 4"), "24");
    assert_eq!(run("/ 100 5 2"), "10");
    assert_eq!(run("% 17 5"), "2");
    assert_eq!(run("^ 2 10"), "1024");
    assert_eq!(run("+ 5"), "5");
}

#[test]
fn test_unary_minus() {
    assert_eq!(run("- 5"), "-5");
    assert_eq!(run("- -5"), "5");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(run("/ 4 0"), "Error: Division By Zero!");
    assert_eq!(run("% 4 0"), "Error: Division By Zero!");
    assert_eq!(run("/ 0 0"), "Error: Division By Zero!");
}

#[test]
fn test_truncating_division_and_remainder_sign() {
    assert_eq!(run("/ -7 2"), "-3");
    assert_eq!(run("% -7 2"), "-1");
    assert_eq!(run("% 7 -2"), "1");
}

#[test]
fn test_power_edge_cases() {
    assert_eq!(ArithOp::Pow.apply(5, 0), Ok(1));
    assert_eq!(ArithOp::Pow.apply(0, 0), Ok(1));
    assert_eq!(ArithOp::Pow.apply(2, -1), Ok(0));
    assert_eq!(ArithOp::Pow.apply(1, -5), Ok(1));
    assert_eq!(ArithOp::Pow.apply(-1, -3), Ok(-1));
    assert_eq!(ArithOp::Pow.apply(-1, i64::MAX), Ok(-1));
    assert_eq!(ArithOp::Pow.apply(0, -2), Err(hisp_value::division_by_zero()));
    assert_eq!(
        ArithOp::Pow.apply(2, 64),
        Err(hisp_value::integer_overflow("^"))
    );
}

#[test]
fn test_overflow_is_error() {
    assert_eq!(
        run("+ 9223372036854775807 1"),
        "Error: Integer Overflow in '+'"
    );
    assert_eq!(
        run("- -9223372036854775808"),
        "Error: Integer Overflow in '-'"
    );
    assert_eq!(
        run("/ -9223372036854775808 -1"),
        "Error: Integer Overflow in '/'"
    );
}

#[test]
fn test_arithmetic_type_error() {
    assert_eq!(
        run("+ 1 {2}"),
        "Error: Function '+' passed incorrect type for argument 1. Got Q-Expression, Expected Number."
    );
    // Checked before any division happens
    assert_eq!(
        run("/ 1 0 {}"),
        "Error: Function '/' passed incorrect type for argument 2. Got Q-Expression, Expected Number."
    );
}

#[test]
fn test_variadic_builtins_without_arguments() {
    // Unreachable from source text, where `(+)` unwraps to the function.
    let mut env = Environment::new();
    assert_eq!(
        arithmetic::add(&mut env, vec![]),
        Err(wrong_arg_count("+", Arity::AtLeast(1), 0))
    );
    assert_eq!(
        arithmetic::sub(&mut env, vec![]),
        Err(wrong_arg_count("-", Arity::AtLeast(1), 0))
    );
    assert_eq!(
        binding::def(&mut env, vec![]),
        Err(wrong_arg_count("def", Arity::AtLeast(1), 0))
    );
    assert!(env.is_empty());
}

// List operations

#[test]
fn test_list() {
    assert_eq!(run("list 1 2 3"), "{1 2 3}");
    assert_eq!(run("list (+ 1 1) {x}"), "{2 {x}}");
}

#[test]
fn test_head_tail_init() {
    assert_eq!(run("head {1 2 3}"), "{1}");
    assert_eq!(run("tail {1 2 3}"), "{2 3}");
    assert_eq!(run("init {1 2 3}"), "{1 2}");
    assert_eq!(run("tail {1}"), "{}");
    assert_eq!(run("init {1}"), "{}");
}

#[test]
fn test_empty_list_errors() {
    assert_eq!(run("head {}"), "Error: Function 'head' passed {}!");
    assert_eq!(run("tail {}"), "Error: Function 'tail' passed {}!");
    assert_eq!(run("init {}"), "Error: Function 'init' passed {}!");
}

#[test]
fn test_list_arity_and_type_errors() {
    assert_eq!(
        run("head {1} {2}"),
        "Error: Function 'head' passed incorrect number of arguments. Got 2, Expected 1."
    );
    assert_eq!(
        run("tail 1"),
        "Error: Function 'tail' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
    assert_eq!(
        run("cons 1"),
        "Error: Function 'cons' passed incorrect number of arguments. Got 1, Expected 2."
    );
    assert_eq!(
        run("cons 1 2"),
        "Error: Function 'cons' passed incorrect type for argument 1. Got Number, Expected Q-Expression."
    );
    assert_eq!(
        run("join {1} 2"),
        "Error: Function 'join' passed incorrect type for argument 1. Got Number, Expected Q-Expression."
    );
    assert_eq!(
        run("len 1 2"),
        "Error: Function 'len' passed incorrect number of arguments. Got 2, Expected 1."
    );
    assert_eq!(
        run("eval 1"),
        "Error: Function 'eval' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
}

#[test]
fn test_join_len_cons() {
    assert_eq!(run("join {1} {2 3}"), "{1 2 3}");
    assert_eq!(run("join {} {1} {} {2}"), "{1 2}");
    assert_eq!(run("len {1 2 3}"), "3");
    assert_eq!(run("len {}"), "0");
    assert_eq!(run("cons 1 {2 3}"), "{1 2 3}");
    assert_eq!(run("cons {1} {}"), "{{1}}");
}

#[test]
fn test_eval() {
    assert_eq!(run("eval {+ 1 2}"), "3");
    assert_eq!(run("eval {}"), "()");
    assert_eq!(run("eval (head {(+ 1 2) (+ 10 20)})"), "3");
    assert_eq!(run("eval (tail {tail tail {5 6 7}})"), "{6 7}");
}

#[test]
fn test_eval_of_lone_function() {
    // A single-element expression unwraps; `+` is never called.
    assert_eq!(run("eval {+}"), "<function>");
}

// Binding

#[test]
fn test_def_and_lookup() {
    let mut interp = Interpreter::new();
    assert_eq!(eval_source(&mut interp, "def {x} 100").to_string(), "()");
    assert_eq!(eval_source(&mut interp, "+ x 1").to_string(), "101");
}

#[test]
fn test_def_overwrites() {
    let mut interp = Interpreter::new();
    eval_source(&mut interp, "def {x} 100");
    eval_source(&mut interp, "def {x} 5");
    assert_eq!(eval_source(&mut interp, "x").to_string(), "5");
}

#[test]
fn test_def_multiple_and_via_symbol_list() {
    let mut interp = Interpreter::new();
    eval_source(&mut interp, "def {a b} 1 2");
    eval_source(&mut interp, "def {names} {c d}");
    eval_source(&mut interp, "def names 3 4");
    assert_eq!(eval_source(&mut interp, "+ a b c d").to_string(), "10");
}

#[test]
fn test_def_stores_copy() {
    let mut interp = Interpreter::new();
    eval_source(&mut interp, "def {xs} {1 2 3}");
    eval_source(&mut interp, "def {ys} (tail xs)");
    assert_eq!(eval_source(&mut interp, "xs").to_string(), "{1 2 3}");
    assert_eq!(eval_source(&mut interp, "ys").to_string(), "{2 3}");
}

#[test]
fn test_def_errors_leave_environment_untouched() {
    let mut interp = Interpreter::new();
    assert_eq!(
        eval_source(&mut interp, "def {a 1} 2 3").to_string(),
        "Error: Function 'def' passed incorrect type for argument 1. Got Number, Expected Symbol."
    );
    assert_eq!(
        eval_source(&mut interp, "def {a b} 1").to_string(),
        "Error: Function 'def' passed incorrect number of arguments. Got 1, Expected 2."
    );
    assert_eq!(
        eval_source(&mut interp, "def 1 2").to_string(),
        "Error: Function 'def' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
    assert!(!interp.env().contains("a"));
    assert!(!interp.env().contains("b"));
}

#[test]
fn test_builtins_can_be_redefined() {
    let mut interp = Interpreter::new();
    eval_source(&mut interp, "def {head} tail");
    assert_eq!(eval_source(&mut interp, "head {1 2}").to_string(), "{2}");
}

// Catalog

#[test]
fn test_catalog_registration() {
    let mut env = Environment::new();
    register_builtins(&mut env);
    let names: Vec<&str> = env.names().collect();
    assert_eq!(
        names,
        vec![
            "list", "head", "tail", "eval", "join", "len", "cons", "init", "+", "-", "*", "/",
            "%", "^", "def",
        ]
    );
    for &(name, _) in CATALOG {
        match env.get(name) {
            Value::Function(builtin) => assert_eq!(builtin.name(), name),
            other => panic!("{name} bound to {other}"),
        }
    }
}

#[test]
fn test_helpers_consume_arguments() {
    assert_eq!(
        one_arg("head", vec![Value::number(1)]),
        Ok(Value::number(1))
    );
    assert_eq!(
        two_args("cons", vec![Value::number(1)]),
        Err(wrong_arg_count("cons", Arity::Exactly(2), 1))
    );
    assert_eq!(
        one_nonempty_qexpr("init", vec![Value::qexpr(vec![])]),
        Err(empty_list("init"))
    );
    assert_eq!(
        check_arity("join", &[], Arity::AtLeast(1)),
        Err(wrong_arg_count("join", Arity::AtLeast(1), 0))
    );
}
