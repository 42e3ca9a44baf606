use serde::{Deserialize, Serialize};

/// Last focused editing position. Advisory only: nothing validates it
/// against the document and undo/redo leave it where it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub line: usize,
    pub offset: usize,
}

impl Cursor {
    pub fn new(line: usize, offset: usize) -> Self {
        Self { line, offset }
    }
}
