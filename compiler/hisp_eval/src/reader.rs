//! Annotated syntax tree → `Value`.

use hisp_stack::ensure_sufficient_stack;
use hisp_syntax::AstNode;
use hisp_value::{invalid_number, Value};

/// Convert a parsed tree into an unevaluated value.
///
/// Leaves tagged `number` become numbers (or an `InvalidNumber` error value
/// when the literal does not fit), leaves tagged `symbol` become symbols.
/// Any other node becomes a list: a Q-expression when tagged `qexpr`,
/// otherwise an S-expression (this covers the root). Bracket punctuation and
/// anchor tokens are dropped.
pub fn read(node: &AstNode) -> Value {
    ensure_sufficient_stack(|| {
        if node.tag.contains("number") {
            return read_number(&node.contents);
        }
        if node.tag.contains("symbol") {
            return Value::symbol(node.contents.as_str());
        }

        let cells = node
            .children
            .iter()
            .filter(|child| !is_syntax(child))
            .map(read)
            .collect();

        if node.tag.contains("qexpr") {
            Value::qexpr(cells)
        } else {
            Value::sexpr(cells)
        }
    })
}

fn read_number(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(_) => Value::error(invalid_number(literal)),
    }
}

/// Punctuation and anchors carry no value.
fn is_syntax(node: &AstNode) -> bool {
    matches!(node.contents.as_str(), "(" | ")" | "{" | "}") || node.tag == "regex"
}
