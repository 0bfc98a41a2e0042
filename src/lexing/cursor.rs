//! Token cursor: the ordered, poppable queue the reformatter consumes
//!
//! Handlers never index the token stream directly; peeking, conditional bulk
//! consumption and bounded collection all go through these primitives.
use crate::lexing::tokens::{Token, TokenKind};
use std::collections::VecDeque;

/// An ordered queue of tokens, consumed exactly once front to back.
#[derive(Debug)]
pub struct TokenCursor {
    tokens: VecDeque<Token>,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenCursor {
            tokens: tokens.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Remove and return the head token.
    pub fn pop(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// The head token, without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// The head token's kind, without consuming it.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.front().map(|t| t.kind)
    }

    /// The first token whose kind is not in `skip`, without consuming anything.
    pub fn peek_skip(&self, skip: &[TokenKind]) -> Option<&Token> {
        self.tokens.iter().find(|t| !skip.contains(&t.kind))
    }

    /// The first non-inline-whitespace token, without consuming anything.
    pub fn peek_skip_whitespace(&self) -> Option<&Token> {
        self.peek_skip(&[TokenKind::Whitespace])
    }

    /// Consume and discard tokens whose kind is in `kinds`; inline whitespace
    /// is always treated as eaten as well.
    pub fn eat_while(&mut self, kinds: &[TokenKind]) {
        while let Some(head) = self.peek() {
            if kinds.contains(&head.kind) || head.kind == TokenKind::Whitespace {
                self.pop();
            } else {
                break;
            }
        }
    }

    /// Collect tokens until the head's kind is in `stop_kinds` or its text
    /// equals one of `stop_values`. The stopping token is never consumed.
    /// Collected tokens whose kind is in `ignore_kinds` are discarded.
    pub fn eat_until(
        &mut self,
        stop_kinds: &[TokenKind],
        stop_values: &[&str],
        ignore_kinds: &[TokenKind],
    ) -> Vec<Token> {
        let mut collected = Vec::new();
        while let Some(head) = self.peek() {
            if stop_kinds.contains(&head.kind) || stop_values.contains(&head.text.as_str()) {
                break;
            }
            let token = self.pop().expect("peeked token present");
            if !ignore_kinds.contains(&token.kind) {
                collected.push(token);
            }
        }
        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize;

    fn cursor(source: &str) -> TokenCursor {
        TokenCursor::new(tokenize(source, true))
    }

    #[test]
    fn test_pop_and_peek() {
        let mut cursor = cursor("foo: a");
        assert_eq!(cursor.peek_kind(), Some(TokenKind::Rule));
        assert_eq!(cursor.pop().map(|t| t.text), Some("foo".to_string()));
        assert_eq!(cursor.peek_kind(), Some(TokenKind::Colon));
    }

    #[test]
    fn test_peek_skip_whitespace() {
        let mut cursor = cursor("foo  : a");
        cursor.pop();
        // Head is whitespace, but the non-whitespace lookahead sees the colon
        assert_eq!(cursor.peek_kind(), Some(TokenKind::Whitespace));
        let next = cursor.peek_skip_whitespace().expect("token after whitespace");
        assert_eq!(next.kind, TokenKind::Colon);
    }

    #[test]
    fn test_eat_while_includes_whitespace() {
        let mut cursor = cursor(":  : a");
        cursor.eat_while(&[TokenKind::Colon]);
        assert_eq!(cursor.peek_kind(), Some(TokenKind::Rule));
    }

    #[test]
    fn test_eat_until_stop_kind() {
        let mut cursor = cursor("foo . 2 : a");
        let name = cursor.pop().expect("name token");
        assert_eq!(name.text, "foo");
        let collected = cursor.eat_until(&[TokenKind::Colon], &[], &[TokenKind::Whitespace]);
        let texts: Vec<&str> = collected.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![".", "2"]);
        // The stopping colon is still at the head
        assert_eq!(cursor.peek_kind(), Some(TokenKind::Colon));
    }

    #[test]
    fn test_eat_until_stop_value() {
        let mut cursor = cursor("common.WS -> SPACE");
        let collected = cursor.eat_until(
            &[TokenKind::Newline],
            &["->"],
            &[TokenKind::Whitespace],
        );
        let payload: String = collected.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(payload, "common.WS");
        assert_eq!(cursor.peek().map(|t| t.text.as_str()), Some("->"));
    }

    #[test]
    fn test_eat_until_exhausts_without_stop() {
        let mut cursor = cursor("a b c");
        let collected = cursor.eat_until(&[TokenKind::Colon], &[], &[TokenKind::Whitespace]);
        assert_eq!(collected.len(), 3);
        assert!(cursor.is_empty());
    }
}
