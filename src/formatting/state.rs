//! Mutable context threaded through one reformatting pass
use crate::lexing::Token;

/// The four statement-level directives of the notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Import,
    Ignore,
    Override,
    Declare,
}

impl Directive {
    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Import => "%import",
            Directive::Ignore => "%ignore",
            Directive::Override => "%override",
            Directive::Declare => "%declare",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "%import" => Some(Directive::Import),
            "%ignore" => Some(Directive::Ignore),
            "%override" => Some(Directive::Override),
            "%declare" => Some(Directive::Declare),
            _ => None,
        }
    }
}

/// Per-pass reformatter state. Created fresh for every call and discarded
/// once the output text is extracted.
#[derive(Debug, Default)]
pub struct ReformatterState {
    /// Name of the rule or terminal whose body is currently being emitted.
    pub in_rule: Option<String>,
    /// Rendered length of the most recent header (name plus compacted
    /// priority suffix, excluding the colon); continuation alternation bars
    /// are aligned with this many spaces.
    pub rule_indent: usize,
    pub parentheses: usize,
    pub square_brackets: usize,
    pub curly_braces: usize,
    /// Comment tokens collected since the last flush point.
    pub pending_comments: Vec<Token>,
    /// Kind of the most recently emitted directive, used to keep same-kind
    /// directives adjacent; reset whenever a header starts.
    pub last_directive: Option<Directive>,
}

impl ReformatterState {
    pub fn new() -> Self {
        ReformatterState::default()
    }

    /// Alternation bars lay out as top-level alternatives only outside any
    /// parenthesized or bracketed group; brace depth is irrelevant here.
    pub fn at_top_level(&self) -> bool {
        self.parentheses == 0 && self.square_brackets == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_keyword_round_trip() {
        for directive in [
            Directive::Import,
            Directive::Ignore,
            Directive::Override,
            Directive::Declare,
        ] {
            assert_eq!(Directive::from_keyword(directive.keyword()), Some(directive));
        }
        assert_eq!(Directive::from_keyword("%extend"), None);
    }

    #[test]
    fn test_top_level_ignores_braces() {
        let mut state = ReformatterState::new();
        state.curly_braces = 2;
        assert!(state.at_top_level());
        state.parentheses = 1;
        assert!(!state.at_top_level());
    }
}
