use serde::Serialize;

use crate::models::Line;

/// Line separator used by `flatten` and `rebuild`
pub const LINE_BREAK: char = '\n';

/// Ordered sequence of lines making up the text being edited
///
/// A document is never empty: it always holds at least one line, which may
/// itself be empty. Lines are addressed by zero-based index, and index
/// resolution walks the sequence from the first line, so `line_at(n)` costs
/// O(n).
///
/// ## Serialization
///
/// `flatten` joins line contents with `'\n'` and writes no trailing break.
/// `rebuild` splits on `'\n'` and replaces every line, so
/// `rebuild(&flatten())` always reproduces the same line sequence.
///
/// ```rust
/// # use linepad_engine::editing::Document;
/// let mut doc = Document::new();
/// doc.append_text("hello");
/// doc.new_line_at_end();
/// doc.append_text("world");
/// assert_eq!(doc.flatten(), "hello\nworld");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Create a document holding a single empty line
    pub fn new() -> Self {
        Self {
            lines: vec![Line::default()],
        }
    }

    pub fn from_blob(blob: &str) -> Self {
        let mut doc = Self::new();
        doc.rebuild(blob);
        doc
    }

    /// Line at `index`, or `None` when out of range
    pub fn line_at(&self, index: usize) -> Option<&Line> {
        self.lines.iter().nth(index)
    }

    pub fn line_at_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.iter_mut().nth(index)
    }

    pub fn line_count(&self) -> usize {
        self.lines.iter().count()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Fill the last line if it is empty, otherwise start a new line with `text`
    pub fn append_text(&mut self, text: &str) {
        match self.lines.last_mut() {
            Some(last) if last.is_empty() => last.set_content(text),
            _ => self.lines.push(Line::new(text)),
        }
    }

    /// Append an empty line regardless of what the last line holds
    pub fn new_line_at_end(&mut self) {
        self.lines.push(Line::default());
    }

    /// Join all lines with a line break, without a trailing break
    pub fn flatten(&self) -> String {
        let mut blob = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            if index > 0 {
                blob.push(LINE_BREAK);
            }
            blob.push_str(line.content());
        }
        blob
    }

    /// Discard every line and rebuild the document from `blob`
    pub fn rebuild(&mut self, blob: &str) {
        // split always yields at least one segment, so an empty blob
        // leaves exactly one empty line
        self.lines = blob.split(LINE_BREAK).map(Line::from).collect();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
