//! Parse errors.

use crate::ast::Position;

/// Failure to turn input text into an [`AstNode`](crate::AstNode).
///
/// Terminal for the one input it was raised on; the driver reports it and
/// moves on to the next line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("<stdin>:{at}: error: unexpected character '{ch}'")]
    UnexpectedChar { ch: char, at: Position },

    /// Input ended inside a list.
    #[error("<stdin>:{at}: error: unclosed '{open}', expected '{close}' before end of input")]
    UnclosedDelimiter {
        open: char,
        close: char,
        at: Position,
    },

    /// A closing bracket with no matching opener.
    #[error("<stdin>:{at}: error: unexpected '{ch}'")]
    UnexpectedClose { ch: char, at: Position },
}

impl ParseError {
    /// Where the error was detected.
    pub fn position(&self) -> Position {
        match self {
            ParseError::UnexpectedChar { at, .. }
            | ParseError::UnclosedDelimiter { at, .. }
            | ParseError::UnexpectedClose { at, .. } => *at,
        }
    }
}
