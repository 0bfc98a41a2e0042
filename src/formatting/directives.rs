//! Statement-level directive handlers
//!
//! Each `%`-directive consumes its own payload through end-of-line, collapses
//! interior whitespace, and manages blank-line separation: directives of the
//! same kind stay adjacent, a different kind (or ordinary content) gets one
//! separating blank line.
use crate::formatting::engine::Reformatter;
use crate::formatting::state::Directive;
use crate::formatting::FormatError;
use crate::lexing::{Token, TokenKind};

impl Reformatter {
    /// Common directive entry: flush comments, move to a fresh line and
    /// insert the blank separator unless the previous directive was of the
    /// same kind or the directive sits directly under its comment block.
    fn directive_prelude(&mut self, directive: Directive) {
        self.flush_comments();
        self.buffer.ensure_newline();
        if self.state.last_directive != Some(directive) && !self.buffer.last_line_is_comment() {
            self.buffer.ensure_blank_line();
        }
    }

    /// End the directive line, consuming the trailing newline run.
    fn directive_epilogue(&mut self, directive: Directive) {
        self.state.last_directive = Some(directive);
        if self.cursor.peek_kind() == Some(TokenKind::Newline) {
            self.cursor.eat_while(&[TokenKind::Newline]);
            self.buffer.push_raw("\n");
        }
    }

    /// `%import` joins its dotted path with no separator. An import list
    /// (`(A, B)`) or an alias arrow ends the payload early; those tokens are
    /// re-emitted through the normal handlers rather than reflowed.
    pub(crate) fn handle_import(&mut self, _token: Token) -> Result<(), FormatError> {
        self.directive_prelude(Directive::Import);
        let payload = self.cursor.eat_until(
            &[TokenKind::Newline, TokenKind::Lpar],
            &["->"],
            &[TokenKind::Whitespace],
        );
        let path: String = payload.iter().map(|t| t.text.as_str()).collect();
        self.buffer.push_raw("%import ");
        self.buffer.push_raw(&path);
        self.directive_epilogue(Directive::Import);
        Ok(())
    }

    /// `%ignore`, `%override` and `%declare` space-join their payload.
    pub(crate) fn handle_line_directive(&mut self, token: Token) -> Result<(), FormatError> {
        let directive = Directive::from_keyword(&token.text)
            .ok_or_else(|| FormatError::unhandled(&token))?;
        self.directive_prelude(directive);
        let payload =
            self.cursor
                .eat_until(&[TokenKind::Newline], &[], &[TokenKind::Whitespace]);
        let joined = payload
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        self.buffer.push_raw(directive.keyword());
        self.buffer.push_raw(" ");
        self.buffer.push_raw(&joined);
        self.directive_epilogue(directive);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::formatting::Reformatter;
    use crate::lexing::tokenize;

    fn reformat_tokens(source: &str) -> String {
        Reformatter::new(tokenize(source, true)).run().unwrap()
    }

    #[test]
    fn test_same_kind_directives_adjacent() {
        assert_eq!(
            reformat_tokens("%import common.WS\n%import common.NEWLINE"),
            "%import common.WS\n%import common.NEWLINE"
        );
    }

    #[test]
    fn test_different_kinds_blank_separated() {
        assert_eq!(
            reformat_tokens("%import common.WS\n%ignore WS"),
            "%import common.WS\n\n%ignore WS"
        );
    }

    #[test]
    fn test_import_path_compacted() {
        assert_eq!(
            reformat_tokens("%import  common . WS"),
            "%import common.WS"
        );
    }

    #[test]
    fn test_import_alias_reemitted() {
        assert_eq!(
            reformat_tokens("%import common.WS -> SPACE"),
            "%import common.WS -> SPACE"
        );
    }

    #[test]
    fn test_import_list_reemitted() {
        assert_eq!(
            reformat_tokens("%import common (WS, NEWLINE)"),
            "%import common ( WS, NEWLINE )"
        );
    }

    #[test]
    fn test_ignore_payload_space_joined() {
        assert_eq!(reformat_tokens("%ignore  /\\s+/"), "%ignore /\\s+/");
        assert_eq!(reformat_tokens("%declare A  B"), "%declare A B");
    }

    #[test]
    fn test_blank_runs_between_same_kind_collapse() {
        assert_eq!(
            reformat_tokens("%import common.WS\n\n\n%import common.INT"),
            "%import common.WS\n%import common.INT"
        );
    }

    #[test]
    fn test_directive_after_rule_blank_separated() {
        assert_eq!(
            reformat_tokens("foo: a\n%ignore WS"),
            "foo: a\n\n%ignore WS"
        );
    }

    #[test]
    fn test_rule_after_directive_blank_separated() {
        assert_eq!(
            reformat_tokens("%ignore WS\nfoo: a"),
            "%ignore WS\n\nfoo: a"
        );
    }

    #[test]
    fn test_comment_attached_to_directive() {
        assert_eq!(
            reformat_tokens("// keep whitespace out\n%ignore WS"),
            "// keep whitespace out\n%ignore WS"
        );
    }
}
