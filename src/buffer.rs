//! The editing surface the commands run against.
//!
//! An editor host gives us a handful of capabilities: read the whole document, insert text at
//! a coordinate, and move the cursor. `EditSurface` names exactly those, and `TextBuffer` is
//! the in-memory implementation the CLI loads files into.

use crate::position::Position;

/// Host capabilities needed to add an entry to a document.
pub trait EditSurface {
    /// The whole document as it currently stands.
    fn value(&self) -> String;
    /// Index of the last line (0 for an empty document).
    fn last_line(&self) -> usize;
    /// Contents of line `n`, without its newline.
    fn line(&self, n: usize) -> Option<String>;
    /// Insert `text` at `at`, replacing nothing.
    fn replace_range(&mut self, text: &str, at: Position);
    /// Move the edit cursor.
    fn set_cursor(&mut self, at: Position);
    /// Where the edit cursor currently is.
    fn cursor(&self) -> Position;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// A document held in memory with a single cursor.
pub struct TextBuffer {
    text: String,
    cursor: Position,
}

impl TextBuffer {
    #[must_use]
    /// Wraps `text` with the cursor at the start of the document.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: Position::default(),
        }
    }

    #[must_use]
    /// Consumes the buffer, yielding the edited text.
    pub fn into_text(self) -> String {
        self.text
    }

    #[must_use]
    /// Borrow the current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte offset of `at`, clamping the line to the document and the column to the line.
    fn byte_offset(&self, at: Position) -> usize {
        let line = at.line.min(self.last_line());
        let line_start: usize = self
            .text
            .split('\n')
            .take(line)
            .map(|l| l.len() + 1)
            .sum();
        let line_text = self.text[line_start..].split('\n').next().unwrap_or_default();
        let within = line_text
            .char_indices()
            .nth(at.ch)
            .map_or(line_text.len(), |(i, _)| i);
        line_start + within
    }
}

impl EditSurface for TextBuffer {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn last_line(&self) -> usize {
        self.text.matches('\n').count()
    }

    fn line(&self, n: usize) -> Option<String> {
        self.text.split('\n').nth(n).map(str::to_string)
    }

    fn replace_range(&mut self, text: &str, at: Position) {
        let offset = self.byte_offset(at);
        self.text.insert_str(offset, text);
    }

    fn set_cursor(&mut self, at: Position) {
        self.cursor = at;
    }

    fn cursor(&self) -> Position {
        self.cursor
    }
}

#[cfg(test)]
#[path = "tests/buffer.rs"]
mod tests;
