//! Reformatting engine for the grammar notation
//!
//! The engine is a single-pass transducer over a flat token stream: no parse
//! tree is ever built. Layout is reproduced from token kinds and a little
//! mutable context (current header, bracket depths, buffered comments).
//!
//! Fatal errors abort the pass immediately and discard the partial output;
//! they indicate either input the formatter has no layout rule for or a
//! structurally misplaced token.
use std::fmt;

use crate::lexing::{Token, TokenKind};
use crate::parsing::GrammarError;

pub mod buffer;
pub mod directives;
pub mod engine;
pub mod state;

pub use buffer::OutputBuffer;
pub use engine::Reformatter;
pub use state::{Directive, ReformatterState};

/// Fatal reformatting errors.
#[derive(Debug, Clone)]
pub enum FormatError {
    /// The input failed the grammar validity check; reformatting never began.
    InvalidGrammar(GrammarError),
    /// The dispatch engine has no handler for this token's kind or text.
    UnhandledToken {
        text: String,
        kind: TokenKind,
        line: usize,
        column: usize,
    },
    /// A header-capable token outside any rule context that does not start a
    /// new header either.
    OrphanToken {
        text: String,
        line: usize,
        column: usize,
    },
}

impl FormatError {
    pub(crate) fn unhandled(token: &Token) -> Self {
        FormatError::UnhandledToken {
            text: token.text.clone(),
            kind: token.kind,
            line: token.line,
            column: token.column,
        }
    }

    pub(crate) fn orphan(token: &Token) -> Self {
        FormatError::OrphanToken {
            text: token.text.clone(),
            line: token.line,
            column: token.column,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidGrammar(err) => write!(f, "invalid grammar: {}", err),
            FormatError::UnhandledToken {
                text,
                kind,
                line,
                column,
            } => write!(
                f,
                "unhandled token {:?} ({:?}) on line {} column {}",
                text, kind, line, column
            ),
            FormatError::OrphanToken { text, line, column } => write!(
                f,
                "token {:?} on line {} column {} is not inside a rule and does not start one",
                text, line, column
            ),
        }
    }
}

impl std::error::Error for FormatError {}
