//! Stack growth for deeply nested expressions.
//!
//! Reading, parsing, and evaluating a hisp expression all recurse once per
//! level of list nesting. Input like `((((((...))))))` with tens of thousands
//! of levels would overflow a native thread stack, so every recursive step
//! goes through [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! Callers in hisp: the parser (`parse_expr`), the reader, the evaluator,
//! the value printer, `AstNode::pretty`, and the clone and equality impls of
//! list cells and syntax nodes. Drops of deep trees use worklists instead.
//!
//! There is no depth cap: nesting is bounded by available memory.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a new stack segment when the
//!   remaining space drops below the red zone.
//! - **WASM targets**: plain call.

/// Remaining stack (100KB) below which a new segment is allocated.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each stack segment handed out by `stacker` (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f` on a stack with at least `RED_ZONE` bytes to spare.
///
/// Wrap the body of every function that recurses once per list level:
///
/// ```text
/// fn eval(env: &mut Environment, value: Value) -> Value {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(cells) => eval_sexpr(env, cells.into_vec()),
///         other => other,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `stacker` has no wasm32 support; recurse on the host stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
