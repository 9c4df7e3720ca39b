//! Hisp Syntax - grammar and parsing for hisp.
//!
//! Produces a generic annotated syntax tree: every [`AstNode`] carries a rule
//! tag, the literal text it matched (leaves only), its source position, and
//! its ordered children. Turning that tree into runtime values is the job of
//! the reader in `hisp_eval`; this crate knows nothing about values.
//!
//! # Grammar
//!
//! ```text
//! number : /-?[0-9]+/ ;
//! symbol : /[a-zA-Z0-9_+\-*\/\\=<>!&%^]+/ ;
//! sexpr  : '(' <expr>* ')' ;
//! qexpr  : '{' <expr>* '}' ;
//! expr   : <number> | <symbol> | <sexpr> | <qexpr> ;
//! hisp   : /^/ <expr>* /$/ ;
//! ```
//!
//! `expr` is an ordered choice: wherever a number can start, it wins over a
//! symbol, so `1-2` is two numbers and `5x` is a number then a symbol.
//!
//! Punctuation and the start/end anchors are kept in the tree as `char` and
//! `regex` nodes so the shape matches what a grammar-driven parser emits.

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::{tag, AstNode, Position};
pub use error::ParseError;
pub use parser::parse;
