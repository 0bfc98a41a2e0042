//! Dispatch engine: the single-pass token-stream transducer
//!
//! The main loop pops one token at a time, resolves a handler by the token's
//! kind (with a fallback table keyed by literal text for the multi-character
//! pseudo-tokens) and invokes it. Handlers may consume further tokens through
//! the cursor, but only via its peek/eat primitives.
use crate::formatting::buffer::OutputBuffer;
use crate::formatting::state::ReformatterState;
use crate::formatting::FormatError;
use crate::lexing::{Token, TokenCursor, TokenKind};

/// One reformatting pass over a token stream.
#[derive(Debug)]
pub struct Reformatter {
    pub(crate) cursor: TokenCursor,
    pub(crate) state: ReformatterState,
    pub(crate) buffer: OutputBuffer,
}

impl Reformatter {
    pub fn new(tokens: Vec<Token>) -> Self {
        Reformatter {
            cursor: TokenCursor::new(tokens),
            state: ReformatterState::new(),
            buffer: OutputBuffer::new(),
        }
    }

    /// Drain the cursor, dispatching every token, and extract the final text.
    pub fn run(mut self) -> Result<String, FormatError> {
        while let Some(token) = self.cursor.pop() {
            if token.kind == TokenKind::Whitespace {
                continue;
            }
            self.dispatch(token)?;
        }
        // Comments buffered with nothing after them still belong in the output
        self.flush_comments();
        Ok(self.buffer.finish())
    }

    fn dispatch(&mut self, token: Token) -> Result<(), FormatError> {
        match token.kind {
            TokenKind::Rule => self.handle_rule(token),
            TokenKind::Terminal => self.handle_terminal(token),
            TokenKind::Number => self.handle_number(token),
            TokenKind::String | TokenKind::Regexp | TokenKind::Colon | TokenKind::Dot => {
                self.handle_literal(token)
            }
            TokenKind::Comma => self.handle_comma(token),
            TokenKind::Lpar => self.handle_lpar(token),
            TokenKind::Rpar => self.handle_rpar(token),
            TokenKind::Lsqb => self.handle_lsqb(token),
            TokenKind::Rsqb => self.handle_rsqb(token),
            TokenKind::Lbrace => self.handle_lbrace(token),
            TokenKind::Rbrace => self.handle_rbrace(token),
            TokenKind::Operator => self.handle_operator(token),
            TokenKind::Vbar => self.handle_vbar(token),
            TokenKind::Newline => self.handle_newline(token),
            TokenKind::Comment => self.handle_comment(token),
            TokenKind::Special => self.handle_special(token),
            TokenKind::Whitespace => Ok(()),
            TokenKind::Unknown => Err(FormatError::unhandled(&token)),
        }
    }

    fn handle_special(&mut self, token: Token) -> Result<(), FormatError> {
        match token.text.as_str() {
            "->" => self.handle_arrow(token),
            ".." => self.handle_range(token),
            "%import" => self.handle_import(token),
            "%ignore" | "%override" | "%declare" => self.handle_line_directive(token),
            _ => Err(FormatError::unhandled(&token)),
        }
    }

    /// Write out pending comments, each trimmed on its own line, preceded by
    /// a blank line unless the previous output line is already a comment.
    /// Returns whether anything was emitted.
    pub(crate) fn flush_comments(&mut self) -> bool {
        if self.state.pending_comments.is_empty() {
            return false;
        }
        self.buffer.ensure_newline();
        if !self.buffer.last_line_is_comment() {
            self.buffer.push_raw("\n");
        }
        for comment in std::mem::take(&mut self.state.pending_comments) {
            self.buffer.push_raw(comment.text.trim());
            self.buffer.push_raw("\n");
        }
        true
    }

    /// Move to a new line, flushing comments first; the comment flush ends
    /// the line itself, so nothing more is emitted in that case.
    pub(crate) fn newline(&mut self) {
        if !self.flush_comments() {
            self.buffer.push_raw("\n");
        }
    }

    /// Shared tail of header handling: collect the priority suffix up to the
    /// colon, compact it, emit `name<suffix>: ` and record the indent width.
    fn emit_header(&mut self, token: &Token) {
        let suffix = self.cursor.eat_until(&[TokenKind::Colon], &[], &[]);
        let mut rendered = token.text.clone();
        for part in &suffix {
            rendered.push_str(&part.text);
        }
        let header: String = rendered.chars().filter(|c| !c.is_whitespace()).collect();
        self.buffer.push_raw(&header);
        self.buffer.push_raw(": ");
        self.state.rule_indent = header.chars().count();
        self.cursor.eat_while(&[TokenKind::Colon]);
        self.state.in_rule = Some(token.text.clone());
        self.state.last_directive = None;
    }

    fn handle_rule(&mut self, token: Token) -> Result<(), FormatError> {
        self.flush_comments();

        if self.state.in_rule.is_some() {
            // A reference to another rule inside the current body
            self.buffer.push_raw(&token.text);
            self.buffer.push_raw(" ");
            return Ok(());
        }

        match self
            .cursor
            .peek_skip_whitespace()
            .map(|t| t.text.as_str())
        {
            Some(":") | Some(".") | Some("{") => {
                // Rule definitions are separated from preceding content by a
                // blank line, except directly under their comment block
                if !self.buffer.last_line_is_comment() {
                    self.buffer.ensure_blank_line();
                }
                self.emit_header(&token);
                Ok(())
            }
            _ => Err(FormatError::orphan(&token)),
        }
    }

    fn handle_terminal(&mut self, token: Token) -> Result<(), FormatError> {
        self.flush_comments();

        match self
            .cursor
            .peek_skip_whitespace()
            .map(|t| t.text.as_str())
        {
            Some(":") | Some(".") => {
                // Terminal definitions stay on adjacent lines
                if self.state.in_rule.is_some() {
                    self.newline();
                }
                self.emit_header(&token);
            }
            _ => {
                // A reference, or a name inside an import list / after an
                // alias arrow; terminals appear legitimately outside rules
                self.buffer.push_raw(&token.text);
                self.buffer.push_raw(" ");
            }
        }
        Ok(())
    }

    fn handle_number(&mut self, token: Token) -> Result<(), FormatError> {
        self.buffer.append(&token.text, true);
        self.buffer.push_raw(" ");
        Ok(())
    }

    fn handle_literal(&mut self, token: Token) -> Result<(), FormatError> {
        self.buffer.push_raw(&token.text);
        self.buffer.push_raw(" ");
        Ok(())
    }

    fn handle_comma(&mut self, _token: Token) -> Result<(), FormatError> {
        self.buffer.right_strip();
        self.buffer.push_raw(", ");
        Ok(())
    }

    fn handle_lpar(&mut self, _token: Token) -> Result<(), FormatError> {
        self.state.parentheses += 1;
        self.buffer.append("( ", true);
        Ok(())
    }

    fn handle_rpar(&mut self, _token: Token) -> Result<(), FormatError> {
        self.state.parentheses = self.state.parentheses.saturating_sub(1);
        self.buffer.append(") ", true);
        Ok(())
    }

    fn handle_lsqb(&mut self, _token: Token) -> Result<(), FormatError> {
        self.state.square_brackets += 1;
        self.buffer.append("[ ", true);
        Ok(())
    }

    fn handle_rsqb(&mut self, _token: Token) -> Result<(), FormatError> {
        self.state.square_brackets = self.state.square_brackets.saturating_sub(1);
        self.buffer.append("] ", true);
        Ok(())
    }

    fn handle_lbrace(&mut self, _token: Token) -> Result<(), FormatError> {
        self.state.curly_braces += 1;
        self.buffer.append("{ ", false);
        Ok(())
    }

    fn handle_rbrace(&mut self, _token: Token) -> Result<(), FormatError> {
        self.state.curly_braces = self.state.curly_braces.saturating_sub(1);
        self.buffer.append("} ", false);
        Ok(())
    }

    fn handle_operator(&mut self, token: Token) -> Result<(), FormatError> {
        // Quantifiers bind tightly to the preceding construct
        if token.text == "*" || token.text == "?" {
            self.buffer.right_strip();
        }
        self.buffer.push_raw(&token.text);
        self.buffer.push_raw(" ");
        Ok(())
    }

    fn handle_newline(&mut self, _token: Token) -> Result<(), FormatError> {
        // A newline directly before an alternation bar is a continuation of
        // the current body, not the end of it; the bar handler produces the
        // line break and indentation itself
        let continues = matches!(
            self.cursor.peek_skip(&[
                TokenKind::Whitespace,
                TokenKind::Newline,
                TokenKind::Comment,
            ]),
            Some(t) if t.kind == TokenKind::Vbar
        );
        if continues {
            self.cursor.eat_while(&[TokenKind::Newline]);
            return Ok(());
        }

        if self.state.in_rule.is_some() {
            self.newline();
        }
        self.state.in_rule = None;
        self.cursor.eat_while(&[TokenKind::Newline]);
        Ok(())
    }

    fn handle_vbar(&mut self, _token: Token) -> Result<(), FormatError> {
        if self.state.in_rule.is_some() && self.state.at_top_level() {
            if !self.flush_comments() {
                self.buffer.push_raw("\n");
            }
            self.buffer.push_raw(&" ".repeat(self.state.rule_indent));
            self.buffer.push_raw("| ");
        } else {
            self.buffer.right_strip();
            self.buffer.push_raw(" | ");
        }
        Ok(())
    }

    fn handle_comment(&mut self, token: Token) -> Result<(), FormatError> {
        self.state.pending_comments.push(token);
        Ok(())
    }

    fn handle_arrow(&mut self, _token: Token) -> Result<(), FormatError> {
        self.buffer.right_strip();
        self.buffer.push_raw(" -> ");
        Ok(())
    }

    fn handle_range(&mut self, _token: Token) -> Result<(), FormatError> {
        self.buffer.right_strip();
        self.buffer.push_raw("..");
        Ok(())
    }
}
