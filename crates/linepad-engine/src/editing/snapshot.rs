use crate::editing::Document;

/// Point-in-time copy of a document's lines
///
/// A snapshot owns its lines outright. Taking one clones every line, so later
/// edits to the live document never show up in the snapshot and vice versa.
/// Restoring consumes the snapshot and hands its lines over to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    document: Document,
}

impl Snapshot {
    /// Deep-copy the current state of `document`
    pub fn capture(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    /// Give up the captured lines as a live document
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Captured content, flattened
    pub fn flatten(&self) -> String {
        self.document.flatten()
    }
}
