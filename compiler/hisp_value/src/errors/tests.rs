use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_messages() {
    assert_eq!(division_by_zero().to_string(), "Division By Zero!");
    assert_eq!(unbound_symbol("foo").to_string(), "Unbound Symbol 'foo'");
    assert_eq!(
        not_callable("Number").to_string(),
        "S-Expression starts with incorrect type. Got Number, Expected Function."
    );
    assert_eq!(
        wrong_arg_count("head", Arity::Exactly(1), 2).to_string(),
        "Function 'head' passed incorrect number of arguments. Got 2, Expected 1."
    );
    assert_eq!(
        wrong_arg_count("+", Arity::AtLeast(1), 0).to_string(),
        "Function '+' passed incorrect number of arguments. Got 0, Expected at least 1."
    );
    assert_eq!(
        wrong_arg_type("head", 0, "Q-Expression", "Number").to_string(),
        "Function 'head' passed incorrect type for argument 0. Got Number, Expected Q-Expression."
    );
    assert_eq!(empty_list("tail").to_string(), "Function 'tail' passed {}!");
    assert_eq!(
        invalid_number("99999999999999999999").to_string(),
        "Invalid Number '99999999999999999999'"
    );
    assert_eq!(integer_overflow("*").to_string(), "Integer Overflow in '*'");
    assert_eq!(parse_error("bad input").to_string(), "bad input");
}

#[test]
fn test_message_matches_kind() {
    let err = wrong_arg_type("join", 1, "Q-Expression", "Symbol");
    assert_eq!(err.message, err.kind.to_string());
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            function: "join".to_string(),
            index: 1,
            expected: "Q-Expression",
            got: "Symbol",
        }
    );
}

#[test]
fn test_arity_accepts() {
    assert!(Arity::Exactly(2).accepts(2));
    assert!(!Arity::Exactly(2).accepts(3));
    assert!(Arity::AtLeast(1).accepts(1));
    assert!(Arity::AtLeast(1).accepts(7));
    assert!(!Arity::AtLeast(1).accepts(0));
}
