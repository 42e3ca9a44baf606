use serde::{Deserialize, Serialize};

/// A single line of text in a document.
///
/// Lines carry no identity beyond their position; two lines with equal
/// content are interchangeable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    content: String,
}

impl Line {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the line content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length of the content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Whether `at` is a position text can be inserted at (`at <= len`)
    pub fn is_insert_position(&self, at: usize) -> bool {
        at <= self.content.len() && self.content.is_char_boundary(at)
    }

    /// Whether `at` addresses an existing byte (`at < len`)
    pub fn is_content_position(&self, at: usize) -> bool {
        at < self.content.len() && self.content.is_char_boundary(at)
    }

    /// End of a `count`-long span starting at `at`, clamped to the line end.
    ///
    /// The result may still split a multi-byte character; check it with
    /// `is_insert_position` before slicing.
    pub fn clamped_end(&self, at: usize, count: usize) -> usize {
        at.saturating_add(count).min(self.content.len())
    }

    pub(crate) fn insert_str(&mut self, at: usize, text: &str) {
        self.content.insert_str(at, text);
    }

    pub(crate) fn slice(&self, range: std::ops::Range<usize>) -> &str {
        &self.content[range]
    }

    pub(crate) fn remove_range(&mut self, range: std::ops::Range<usize>) -> String {
        self.content.drain(range).collect()
    }

    pub(crate) fn replace_range(&mut self, range: std::ops::Range<usize>, text: &str) {
        self.content.replace_range(range, text);
    }
}

impl From<&str> for Line {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Line {
    fn from(content: String) -> Self {
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_line_is_empty() {
        let line = Line::default();
        assert!(line.is_empty());
        assert_eq!(line.content(), "");
    }

    #[test]
    fn test_insert_and_content_positions() {
        let line = Line::new("abc");

        assert!(line.is_insert_position(0));
        assert!(line.is_insert_position(3));
        assert!(!line.is_insert_position(4));

        assert!(line.is_content_position(2));
        assert!(!line.is_content_position(3));
    }

    #[test]
    fn test_positions_inside_multibyte_char_are_rejected() {
        // "é" is two bytes
        let line = Line::new("aé");

        assert!(line.is_insert_position(1));
        assert!(!line.is_insert_position(2));
        assert!(line.is_insert_position(3));
        assert!(!line.is_content_position(2));
    }

    #[test]
    fn test_clamped_end() {
        let line = Line::new("hello");

        assert_eq!(line.clamped_end(1, 2), 3);
        assert_eq!(line.clamped_end(1, 100), 5);
        assert_eq!(line.clamped_end(2, usize::MAX), 5);

        let wide = Line::new("aé");
        assert_eq!(wide.clamped_end(0, 2), 2);
        assert!(!wide.is_insert_position(wide.clamped_end(0, 2)));
    }

    #[test]
    fn test_remove_range_returns_removed_text() {
        let mut line = Line::new("hello world");
        let removed = line.remove_range(5..11);

        assert_eq!(removed, " world");
        assert_eq!(line.content(), "hello");
    }
}
