//! Evaluation errors.
//!
//! Errors in hisp are ordinary values: every failure becomes a
//! [`Value::Error`] that flows back through evaluation like any other result
//! and is printed by the driver. Nothing here unwinds.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` carries the structured data for each failure. The factory
//! functions below are the public API; they build the kind and cache its
//! rendered message on the `EvalError`.

use std::fmt;

use crate::value::Value;

/// Result of evaluating or applying a builtin.
///
/// Builtins use `?` on this internally; the call boundary folds an `Err`
/// back into a [`Value::Error`].
pub type EvalResult = Result<Value, EvalError>;

/// How many arguments a builtin accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    /// Whether `count` arguments satisfy this arity.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// Typed error category.
///
/// The `Display` impl produces the user-facing message (without the
/// `Error: ` prefix, which the printer adds).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// The parser rejected the input text.
    Parse { message: String },
    /// A number literal does not fit in an `i64`.
    InvalidNumber { literal: String },
    /// Symbol lookup failed.
    UnboundSymbol { name: String },
    /// The head of an S-expression is not a function.
    NotCallable { got: &'static str },
    /// Wrong number of arguments (or of values for `def`).
    ArityMismatch {
        function: String,
        expected: Arity,
        got: usize,
    },
    /// An argument has the wrong variant.
    TypeMismatch {
        function: String,
        index: usize,
        expected: &'static str,
        got: &'static str,
    },
    DivisionByZero,
    /// `head`, `tail`, or `init` given `{}`.
    EmptyList { function: String },
    /// Checked `i64` arithmetic failed.
    IntegerOverflow { function: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { message } => write!(f, "{message}"),
            Self::InvalidNumber { literal } => write!(f, "Invalid Number '{literal}'"),
            Self::UnboundSymbol { name } => write!(f, "Unbound Symbol '{name}'"),
            Self::NotCallable { got } => write!(
                f,
                "S-Expression starts with incorrect type. Got {got}, Expected Function."
            ),
            Self::ArityMismatch {
                function,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed incorrect number of arguments. \
                 Got {got}, Expected {expected}."
            ),
            Self::TypeMismatch {
                function,
                index,
                expected,
                got,
            } => write!(
                f,
                "Function '{function}' passed incorrect type for argument {index}. \
                 Got {got}, Expected {expected}."
            ),
            Self::DivisionByZero => write!(f, "Division By Zero!"),
            Self::EmptyList { function } => write!(f, "Function '{function}' passed {{}}!"),
            Self::IntegerOverflow { function } => write!(f, "Integer Overflow in '{function}'"),
        }
    }
}

/// Evaluation error carried by [`Value::Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Rendered message; always equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

/// The parser collaborator rejected the input.
#[cold]
pub fn parse_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Parse {
        message: message.into(),
    })
}

/// A number literal could not be read.
#[cold]
pub fn invalid_number(literal: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumber {
        literal: literal.to_string(),
    })
}

/// Symbol not bound in the environment.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol {
        name: name.to_string(),
    })
}

/// S-expression head is not a function; `got` is the head's type name.
#[cold]
pub fn not_callable(got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { got })
}

/// Wrong argument count for a builtin.
#[cold]
pub fn wrong_arg_count(function: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        function: function.to_string(),
        expected,
        got,
    })
}

/// Wrong argument type for a builtin.
#[cold]
pub fn wrong_arg_type(
    function: &str,
    index: usize,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        function: function.to_string(),
        index,
        expected,
        got,
    })
}

/// Division or remainder by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

/// List operation on `{}`.
#[cold]
pub fn empty_list(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyList {
        function: function.to_string(),
    })
}

/// Arithmetic result out of `i64` range.
#[cold]
pub fn integer_overflow(function: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        function: function.to_string(),
    })
}

#[cfg(test)]
mod tests;
