/// Single-slot buffer for the most recently cut or copied fragment
///
/// Not part of the undo history: undo and redo never touch it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    content: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held fragment
    pub fn set(&mut self, fragment: impl Into<String>) {
        self.content = fragment.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_previous_fragment() {
        let mut clipboard = Clipboard::new();
        assert!(clipboard.is_empty());

        clipboard.set("first");
        clipboard.set("second");

        assert_eq!(clipboard.content(), "second");
    }
}
