//! Text rendering of values.
//!
//! Numbers and symbols print literally, errors as `Error: <message>`,
//! S-expressions in parentheses, Q-expressions in braces, and functions as
//! a fixed placeholder.

use std::fmt;

use crate::value::Value;

/// What a function value prints as.
pub const FUNCTION_PLACEHOLDER: &str = "<function>";

/// Render a value as the driver prints it.
pub fn render(value: &Value) -> String {
    value.to_string()
}

fn write_cells(f: &mut fmt::Formatter<'_>, open: char, cells: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        hisp_stack::ensure_sufficient_stack(|| write!(f, "{cell}"))?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Error(err) => write!(f, "Error: {err}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::SExpr(cells) => write_cells(f, '(', cells, ')'),
            Value::QExpr(cells) => write_cells(f, '{', cells, '}'),
            Value::Function(_) => write!(f, "{FUNCTION_PLACEHOLDER}"),
        }
    }
}
