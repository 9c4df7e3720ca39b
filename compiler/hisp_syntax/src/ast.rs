//! Annotated syntax tree.

use std::fmt::{self, Write as _};

/// Rule tags attached to [`AstNode`]s.
///
/// Tags of nested nodes are `|`-joined rule paths (`expr|number|regex`), so
/// consumers match on substrings the same way they would for any
/// grammar-generated tree.
pub mod tag {
    /// The whole input.
    pub const ROOT: &str = ">";
    /// A number literal leaf.
    pub const NUMBER: &str = "expr|number|regex";
    /// A symbol leaf.
    pub const SYMBOL: &str = "expr|symbol|regex";
    /// A parenthesized list.
    pub const SEXPR: &str = "expr|sexpr|>";
    /// A braced list.
    pub const QEXPR: &str = "expr|qexpr|>";
    /// Bracket or brace punctuation.
    pub const CHAR: &str = "char";
    /// Start/end-of-input anchor (empty contents).
    pub const REGEX: &str = "regex";
}

/// 1-based line and column of a node or error in the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A node of the annotated syntax tree.
///
/// Trees nest as deep as the input. Clone and equality recurse through
/// `ensure_sufficient_stack`; drop does not recurse at all.
#[derive(Debug, Eq)]
pub struct AstNode {
    /// Grammar rule tag (see [`tag`]).
    pub tag: String,
    /// Matched text for leaves; empty for branches and anchors.
    pub contents: String,
    /// Where the node starts.
    pub position: Position,
    /// Ordered children, punctuation included.
    pub children: Vec<AstNode>,
}

impl AstNode {
    /// Create a leaf node.
    pub fn leaf(tag: &str, contents: impl Into<String>, position: Position) -> Self {
        AstNode {
            tag: tag.to_string(),
            contents: contents.into(),
            position,
            children: Vec::new(),
        }
    }

    /// Create a branch node.
    pub fn branch(tag: &str, position: Position, children: Vec<AstNode>) -> Self {
        AstNode {
            tag: tag.to_string(),
            contents: String::new(),
            position,
            children,
        }
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Indented dump of the tree, one node per line.
    ///
    /// Branches print their tag; leaves print `tag:line:column 'contents'`.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        // Writing into a String cannot fail.
        if self.is_leaf() {
            let _ = writeln!(out, "{}:{} '{}'", self.tag, self.position, self.contents);
        } else {
            let _ = writeln!(out, "{} ", self.tag);
            for child in &self.children {
                hisp_stack::ensure_sufficient_stack(|| child.pretty_into(out, depth + 1));
            }
        }
    }
}

impl Clone for AstNode {
    fn clone(&self) -> Self {
        AstNode {
            tag: self.tag.clone(),
            contents: self.contents.clone(),
            position: self.position,
            children: self
                .children
                .iter()
                .map(|child| hisp_stack::ensure_sufficient_stack(|| child.clone()))
                .collect(),
        }
    }
}

impl PartialEq for AstNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.contents == other.contents
            && self.position == other.position
            && self.children.len() == other.children.len()
            && self
                .children
                .iter()
                .zip(&other.children)
                .all(|(lhs, rhs)| hisp_stack::ensure_sufficient_stack(|| lhs == rhs))
    }
}

/// Frees descendants from a worklist instead of recursing per level.
impl Drop for AstNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
