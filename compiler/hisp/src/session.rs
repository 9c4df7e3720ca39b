//! One interactive session: a persistent interpreter fed a line at a time.

use hisp_eval::{Interpreter, Value};
use hisp_syntax::{parse, ParseError};
use hisp_value::parse_error;

/// A driver session.
///
/// Definitions persist across lines for the lifetime of the session. Every
/// line produces exactly one value; failures come back as `Value::Error`.
#[derive(Default)]
pub struct Session {
    interp: Interpreter,
}

impl Session {
    pub fn new() -> Self {
        Session {
            interp: Interpreter::new(),
        }
    }

    /// Parse, read, and evaluate one line of input.
    ///
    /// A parse failure is reported as an error value and leaves the
    /// environment unchanged.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_line(&mut self, line: &str) -> Value {
        match parse(line) {
            Ok(ast) => self.interp.eval_ast(&ast),
            Err(err) => {
                tracing::debug!(%err, "parse failed");
                Value::error(parse_error(err.to_string()))
            }
        }
    }

    /// Parse `line` and dump its annotated syntax tree without evaluating it.
    pub fn dump_ast(line: &str) -> Result<String, ParseError> {
        parse(line).map(|ast| ast.pretty())
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interp
    }
}
