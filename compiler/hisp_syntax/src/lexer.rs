//! Tokenizer for hisp using logos.

use logos::Logos;

use crate::ast::Position;
use crate::error::ParseError;

/// Raw token from logos.
///
/// `-5` matches both `Number` and `Symbol` at the same length; the explicit
/// priority makes it a number. A lone `-` is only a symbol. Longer symbol
/// runs that begin with a number (`1-2`, `5x`) are split again by [`lex`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum TokenKind {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[regex(r"-?[0-9]+", priority = 3)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&%^]+")]
    Symbol,
}

/// A token with its matched text and start position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Token<'src> {
    pub(crate) kind: TokenKind,
    pub(crate) text: &'src str,
    pub(crate) position: Position,
}

/// Byte offsets of line starts, for offset → line/column conversion.
pub(crate) struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineIndex {
            source,
            line_starts,
        }
    }

    pub(crate) fn position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        let column = self
            .source
            .get(line_start..offset)
            .map_or(0, |prefix| prefix.chars().count());
        Position {
            line: u32::try_from(line + 1).unwrap_or(u32::MAX),
            column: u32::try_from(column + 1).unwrap_or(u32::MAX),
        }
    }
}

/// Split `source` into tokens, stopping at the first unrecognized character.
///
/// A number is tried before a symbol at every token start, so `+ 1-2` lexes
/// as `+`, `1`, `-2` and `5x` as `5`, `x`.
pub(crate) fn lex<'src>(
    source: &'src str,
    lines: &LineIndex<'src>,
) -> Result<Vec<Token<'src>>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        let position = lines.position(span.start);
        match result {
            Ok(TokenKind::Symbol) => push_symbol_run(text, span.start, lines, &mut tokens),
            Ok(kind) => tokens.push(Token {
                kind,
                text,
                position,
            }),
            Err(()) => {
                let ch = text.chars().next().unwrap_or('\u{fffd}');
                return Err(ParseError::UnexpectedChar { ch, at: position });
            }
        }
    }

    tracing::trace!(count = tokens.len(), "lexed input");
    Ok(tokens)
}

/// Push a run of symbol characters starting at byte `start`.
///
/// Leading `-?[0-9]+` prefixes become numbers; once a piece does not start
/// with one, the rest of the run is a single symbol.
fn push_symbol_run<'src>(
    text: &'src str,
    start: usize,
    lines: &LineIndex<'src>,
    tokens: &mut Vec<Token<'src>>,
) {
    let mut rest = text;
    let mut offset = start;
    while !rest.is_empty() {
        let (kind, len) = match number_prefix_len(rest) {
            0 => (TokenKind::Symbol, rest.len()),
            len => (TokenKind::Number, len),
        };
        let (piece, tail) = rest.split_at(len);
        tokens.push(Token {
            kind,
            text: piece,
            position: lines.position(offset),
        });
        offset += len;
        rest = tail;
    }
}

/// Length of the `-?[0-9]+` prefix of `text`, or 0 when there is none.
fn number_prefix_len(text: &str) -> usize {
    let sign = usize::from(text.starts_with('-'));
    let digits = text
        .get(sign..)
        .map_or(0, |tail| tail.bytes().take_while(u8::is_ascii_digit).count());
    if digits == 0 {
        0
    } else {
        sign + digits
    }
}
