//! Base tokenization for the grammar lexer
//!
//! This module provides the raw tokenization using the logos lexer library.
//! This is the entry point where grammar source strings become token streams.
//!
//! The lexer is invoked in two modes: the reformatting pass keeps every token
//! (it needs inline whitespace for lookahead decisions and comments for
//! re-attachment), while the validation and round-trip passes drop inline
//! whitespace and comments, mirroring Lark's `%ignore` behavior.
use crate::lexing::tokens::{Token, TokenKind};
use logos::Logos;

/// Maps byte offsets to 1-based line/column positions.
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        LineIndex { line_starts }
    }

    /// Columns count characters, not bytes, so positions stay meaningful in
    /// lines with non-ASCII literals.
    fn position(&self, source: &str, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = source[self.line_starts[line]..offset].chars().count() + 1;
        (line + 1, column)
    }
}

/// Tokenize grammar source text.
///
/// With `keep_whitespace` set, every token is returned, including inline
/// whitespace and comments. Without it, inline whitespace and comment tokens
/// are dropped; newline tokens are always kept since line boundaries are
/// structural in the notation.
///
/// Input the lexer has no rule for is returned as [`TokenKind::Unknown`]
/// rather than silently skipped, so the dispatch engine can report it.
pub fn tokenize(source: &str, keep_whitespace: bool) -> Vec<Token> {
    let index = LineIndex::new(source);
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Unknown);
        if !keep_whitespace && matches!(kind, TokenKind::Whitespace | TokenKind::Comment) {
            continue;
        }
        let span = lexer.span();
        let (line, column) = index.position(source, span.start);
        tokens.push(Token::new(kind, lexer.slice(), line, column));
    }

    tokens
}
