//! `def`: bind symbols in the environment.

use hisp_value::{wrong_arg_count, wrong_arg_type, Arity, Environment, EvalResult, Value};

use super::expect_qexpr;

/// `def {a b} 1 2` binds `a` to `1` and `b` to `2`, returning `()`.
///
/// Every name is validated and the value count checked before anything is
/// bound, so a failing `def` leaves the environment untouched.
pub(super) fn def(env: &mut Environment, args: Vec<Value>) -> EvalResult {
    let mut args = args.into_iter();
    let Some(names) = args.next() else {
        return Err(wrong_arg_count("def", Arity::AtLeast(1), 0));
    };
    let names = expect_qexpr("def", 0, names)?;
    let values: Vec<Value> = args.collect();

    let symbols = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            name.as_symbol()
                .ok_or_else(|| wrong_arg_type("def", index, "Symbol", name.type_name()))
        })
        .collect::<Result<Vec<&str>, _>>()?;

    if symbols.len() != values.len() {
        return Err(wrong_arg_count(
            "def",
            Arity::Exactly(symbols.len()),
            values.len(),
        ));
    }

    for (name, value) in symbols.iter().zip(&values) {
        env.put(name, value);
    }
    tracing::debug!(names = ?symbols, "defined");
    Ok(Value::unit())
}
