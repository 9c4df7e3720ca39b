//! Recursive-descent parser building the annotated tree.

use hisp_stack::ensure_sufficient_stack;

use crate::ast::{tag, AstNode, Position};
use crate::error::ParseError;
use crate::lexer::{lex, LineIndex, Token, TokenKind};

/// Parse one line (or file) of hisp source into an annotated tree.
///
/// The root is tagged [`tag::ROOT`] and holds a start anchor, every
/// top-level expression in order, and an end anchor.
pub fn parse(source: &str) -> Result<AstNode, ParseError> {
    let lines = LineIndex::new(source);
    let tokens = lex(source, &lines)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
    };

    let mut children = vec![AstNode::leaf(tag::REGEX, "", Position::START)];
    while let Some(token) = parser.bump() {
        children.push(parser.parse_expr(token)?);
    }
    children.push(AstNode::leaf(tag::REGEX, "", lines.position(source.len())));

    Ok(AstNode::branch(tag::ROOT, Position::START, children))
}

struct Parser<'a, 'src> {
    tokens: &'a [Token<'src>],
    pos: usize,
}

impl<'src> Parser<'_, 'src> {
    fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).copied()?;
        self.pos += 1;
        Some(token)
    }

    fn parse_expr(&mut self, token: Token<'src>) -> Result<AstNode, ParseError> {
        ensure_sufficient_stack(|| match token.kind {
            TokenKind::Number => Ok(AstNode::leaf(tag::NUMBER, token.text, token.position)),
            TokenKind::Symbol => Ok(AstNode::leaf(tag::SYMBOL, token.text, token.position)),
            TokenKind::LParen => self.parse_list(token, tag::SEXPR, TokenKind::RParen),
            TokenKind::LBrace => self.parse_list(token, tag::QEXPR, TokenKind::RBrace),
            TokenKind::RParen | TokenKind::RBrace => Err(unexpected_close(token)),
        })
    }

    fn parse_list(
        &mut self,
        open: Token<'src>,
        list_tag: &str,
        close: TokenKind,
    ) -> Result<AstNode, ParseError> {
        tracing::trace!(tag = list_tag, at = %open.position, "parsing list");
        let mut children = vec![AstNode::leaf(tag::CHAR, open.text, open.position)];

        loop {
            let Some(token) = self.bump() else {
                return Err(ParseError::UnclosedDelimiter {
                    open: first_char(open.text),
                    close: if close == TokenKind::RParen { ')' } else { '}' },
                    at: open.position,
                });
            };
            if token.kind == close {
                children.push(AstNode::leaf(tag::CHAR, token.text, token.position));
                return Ok(AstNode::branch(list_tag, open.position, children));
            }
            children.push(self.parse_expr(token)?);
        }
    }
}

fn unexpected_close(token: Token<'_>) -> ParseError {
    ParseError::UnexpectedClose {
        ch: first_char(token.text),
        at: token.position,
    }
}

fn first_char(text: &str) -> char {
    text.chars().next().unwrap_or('\u{fffd}')
}
