//! Reader and evaluator tests, plus helpers shared with the builtin tests.


use crate::{render, Interpreter, Value};

/// Parse, read, and evaluate `source` in `interp`.
pub(crate) fn eval_source(interp: &mut Interpreter, source: &str) -> Value {
    let ast = hisp_syntax::parse(source).unwrap_or_else(|err| panic!("parse failed: {err}"));
    interp.eval_ast(&ast)
}

/// Evaluate `source` in a fresh interpreter and render the result.
pub(crate) fn run(source: &str) -> String {
    render(&eval_source(&mut Interpreter::new(), source))
}
