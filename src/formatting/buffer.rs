//! Output buffer with cursor-aware append operations
//!
//! The reformatter never re-parses what it has emitted; the buffer exposes
//! the handful of read-back probes the handlers need (last character, last
//! line) together with smart-spacing appends and trailing-whitespace trims.

/// Appendable text sink for the reformatting pass.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        OutputBuffer::default()
    }

    /// Append text verbatim.
    pub fn push_raw(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append text, inserting a single space first when `add_space_if_needed`
    /// is set and the last emitted character is not already whitespace.
    pub fn append(&mut self, text: &str, add_space_if_needed: bool) {
        if add_space_if_needed && self.needs_space() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    fn needs_space(&self) -> bool {
        !matches!(self.text.chars().last(), None | Some(' ' | '\t' | '\n'))
    }

    /// Emit a newline only if the buffer is non-empty and not already at the
    /// start of a line.
    pub fn ensure_newline(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    /// Make sure the buffer ends with a blank line (no-op at start of output).
    pub fn ensure_blank_line(&mut self) {
        if self.text.is_empty() {
            return;
        }
        self.ensure_newline();
        if !self.text.ends_with("\n\n") {
            self.text.push('\n');
        }
    }

    /// Remove trailing whitespace, so tight-binding operators attach directly
    /// to the preceding token.
    pub fn right_strip(&mut self) {
        let stripped = self.text.trim_end().len();
        self.text.truncate(stripped);
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }

    /// The most recently completed-or-open line. When the buffer ends with a
    /// newline this is the line before it, matching what "the previous line"
    /// means to a handler about to start a new one.
    pub fn last_line(&self) -> &str {
        let text = self.text.strip_suffix('\n').unwrap_or(&self.text);
        text.rsplit('\n').next().unwrap_or("")
    }

    pub fn last_line_is_comment(&self) -> bool {
        self.last_line().starts_with("//")
    }

    /// Final extraction: right-trim every line, then trim the whole result so
    /// the output has no trailing whitespace and no leading/trailing blanks.
    pub fn finish(self) -> String {
        let lines: Vec<&str> = self.text.lines().map(str::trim_end).collect();
        lines.join("\n").trim().to_string()
    }
}
