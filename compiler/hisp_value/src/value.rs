//! Runtime values for the hisp evaluator.

use crate::builtin::Builtin;
use crate::cells::Cells;
use crate::errors::{EvalError, EvalResult};

/// Runtime value.
///
/// A closed set of variants matched exhaustively everywhere. `Clone` is the
/// deep copy: list children are owned [`Cells`], so cloning a list clones
/// every child. Strings are copied and builtins are copied by value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed integer.
    Number(i64),
    /// Terminal error; never has children.
    Error(EvalError),
    /// Name resolved through the environment.
    Symbol(String),
    /// Unevaluated list; its head decides what is applied.
    SExpr(Cells),
    /// Quoted list, never evaluated automatically.
    QExpr(Cells),
    /// Native operation.
    Function(Builtin),
}

impl Value {
    #[inline]
    pub fn number(n: i64) -> Value {
        Value::Number(n)
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Value {
        Value::Symbol(name.into())
    }

    #[inline]
    pub fn error(err: EvalError) -> Value {
        Value::Error(err)
    }

    #[inline]
    pub fn sexpr(cells: Vec<Value>) -> Value {
        Value::SExpr(Cells::from(cells))
    }

    /// The empty S-expression `()`.
    #[inline]
    pub fn unit() -> Value {
        Value::SExpr(Cells::default())
    }

    #[inline]
    pub fn qexpr(cells: Vec<Value>) -> Value {
        Value::QExpr(Cells::from(cells))
    }

    #[inline]
    pub fn function(builtin: Builtin) -> Value {
        Value::Function(builtin)
    }

    /// Collapse a builtin's `Result` into a value; `Err` becomes `Value::Error`.
    #[inline]
    pub fn from_result(result: EvalResult) -> Value {
        result.unwrap_or_else(Value::Error)
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Function(_) => "Function",
        }
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&EvalError> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Children of an S- or Q-expression.
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(cells) | Value::QExpr(cells) => Some(cells.as_slice()),
            _ => None,
        }
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}
