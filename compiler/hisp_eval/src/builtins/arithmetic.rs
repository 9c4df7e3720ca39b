//! Arithmetic builtins: `+ - * / % ^`.
//!
//! Each is a left fold over its arguments. All arithmetic is checked; a
//! result outside `i64` is an `IntegerOverflow` error.

use hisp_value::{
    division_by_zero, integer_overflow, wrong_arg_count, wrong_arg_type, Arity, Environment,
    EvalError, EvalResult, Value,
};

/// Binary integer operator behind an arithmetic builtin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl ArithOp {
    /// The symbol the builtin is bound to.
    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
            ArithOp::Pow => "^",
        }
    }

    /// Apply to two operands.
    pub fn apply(self, lhs: i64, rhs: i64) -> Result<i64, EvalError> {
        let overflow = || integer_overflow(self.symbol());
        match self {
            ArithOp::Add => lhs.checked_add(rhs).ok_or_else(overflow),
            ArithOp::Sub => lhs.checked_sub(rhs).ok_or_else(overflow),
            ArithOp::Mul => lhs.checked_mul(rhs).ok_or_else(overflow),
            ArithOp::Div | ArithOp::Rem if rhs == 0 => Err(division_by_zero()),
            ArithOp::Div => lhs.checked_div(rhs).ok_or_else(overflow),
            ArithOp::Rem => lhs.checked_rem(rhs).ok_or_else(overflow),
            ArithOp::Pow => power(lhs, rhs),
        }
    }
}

/// Integer power. Negative exponents truncate toward zero like the
/// reciprocal would; `0` to a negative power divides by zero.
fn power(base: i64, exp: i64) -> Result<i64, EvalError> {
    let odd = (exp & 1) == 1;
    if exp < 0 {
        return match base {
            0 => Err(division_by_zero()),
            1 => Ok(1),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ => Ok(0),
        };
    }
    match u32::try_from(exp) {
        Ok(exp) => base
            .checked_pow(exp)
            .ok_or_else(|| integer_overflow(ArithOp::Pow.symbol())),
        // Exponents past u32 only stay in range for these bases.
        Err(_) => match base {
            0 | 1 => Ok(base),
            -1 => Ok(if odd { -1 } else { 1 }),
            _ => Err(integer_overflow(ArithOp::Pow.symbol())),
        },
    }
}

/// Validate that every argument is a number, then left-fold with `op`.
///
/// `-` with a single argument negates it.
fn fold(op: ArithOp, args: &[Value]) -> EvalResult {
    let name = op.symbol();

    let numbers = args
        .iter()
        .enumerate()
        .map(|(index, arg)| {
            arg.as_number()
                .ok_or_else(|| wrong_arg_type(name, index, "Number", arg.type_name()))
        })
        .collect::<Result<Vec<i64>, EvalError>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(wrong_arg_count(name, Arity::AtLeast(1), 0));
    };

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow(name));
    }

    rest.iter()
        .try_fold(first, |acc, &rhs| op.apply(acc, rhs))
        .map(Value::Number)
}

pub(super) fn add(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Add, &args)
}

pub(super) fn sub(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Sub, &args)
}

pub(super) fn mul(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Mul, &args)
}

pub(super) fn div(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Div, &args)
}

pub(super) fn rem(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Rem, &args)
}

pub(super) fn pow(_env: &mut Environment, args: Vec<Value>) -> EvalResult {
    fold(ArithOp::Pow, &args)
}
