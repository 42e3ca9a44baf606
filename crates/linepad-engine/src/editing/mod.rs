/*!
 * # Editing Core Module
 *
 * In-memory, line-oriented text buffer with indexed edits and bounded
 * snapshot-based undo/redo.
 *
 * ## Architecture Overview
 *
 * ### 1. Document of Lines
 * - A **`Document`** is an ordered sequence of **`Line`**s and is never empty
 * - Lines are addressed by zero-based index; offsets inside a line are raw
 *   byte offsets, not grapheme positions
 * - Serialization is "lines joined by `'\n'`, no trailing break"
 *
 * ### 2. Whole-Document Snapshots
 * - History entries are full deep copies (**`Snapshot`**), not diffs
 * - A snapshot never shares storage with the live document; restoring moves
 *   its lines out of the stack
 *
 * ### 3. Bounded History
 * - Two **`HistoryStack`**s (undo and redo), default capacity 3
 * - At capacity the *top* entry is evicted before a push, see
 *   [`HistoryStack`] for the exact policy
 *
 * ### 4. Editor Façade
 * - **`Editor`** owns the document, both stacks and the **`Clipboard`**
 * - Every mutation snapshots first, clears redo, then validates and edits
 * - Edits are also available as **`Cmd`** values applied with
 *   `Editor::apply`, returning a **`Patch`**
 *
 * ## Usage Pattern
 *
 * ```rust
 * use linepad_engine::editing::*;
 *
 * let mut editor = Editor::new();
 * editor.append_text("hello");
 * editor.new_line_at_end();
 * editor.append_text("world");
 *
 * editor.cut(0, 0, 5).unwrap();
 * assert_eq!(editor.clipboard(), "hello");
 * editor.paste(0, 0).unwrap();
 *
 * let hits = editor.search("wor").unwrap();
 * assert_eq!((hits[0].line, hits[0].offset), (1, 0));
 * ```
 */

// Module exports
pub mod clipboard;
pub mod commands;
pub mod document;
pub mod editor;
pub mod history;
pub mod patch;
pub mod search;
pub mod snapshot;

// Public API re-exports
pub use clipboard::Clipboard;
pub use commands::Cmd;
pub use document::Document;
pub use editor::Editor;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryStack};
pub use patch::Patch;
pub use search::SearchHit;
pub use snapshot::Snapshot;

use crate::io::IoError;

/// Errors reported by editor operations
///
/// None of these are fatal: the document is left as it was (apart from the
/// history entry a mutating call records before validating) and the caller
/// may retry with corrected input.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Invalid line index {index}: document has {line_count} lines")]
    InvalidLineIndex { index: usize, line_count: usize },
    #[error("Invalid character index {index} on line {line} (length {len})")]
    InvalidCharIndex { line: usize, index: usize, len: usize },
    #[error("Search text must not be empty")]
    EmptyNeedle,
    #[error("Text not found: {needle:?}")]
    NotFound { needle: String },
    #[error("No more steps to undo")]
    NothingToUndo,
    #[error("No more steps to redo")]
    NothingToRedo,
    #[error(transparent)]
    Storage(#[from] IoError),
}

/// Broad class of an [`EditError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Out-of-range line or character index, empty needle
    Validation,
    /// Search or find-based replace matched nothing
    NotFound,
    /// Undo or redo with an empty source stack
    HistoryExhausted,
    /// Reader or writer failure
    Storage,
}

impl EditError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::InvalidLineIndex { .. }
            | EditError::InvalidCharIndex { .. }
            | EditError::EmptyNeedle => ErrorKind::Validation,
            EditError::NotFound { .. } => ErrorKind::NotFound,
            EditError::NothingToUndo | EditError::NothingToRedo => ErrorKind::HistoryExhausted,
            EditError::Storage(_) => ErrorKind::Storage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_kinds() {
        let invalid = EditError::InvalidLineIndex {
            index: 3,
            line_count: 1,
        };
        assert_eq!(invalid.kind(), ErrorKind::Validation);
        assert_eq!(EditError::NothingToRedo.kind(), ErrorKind::HistoryExhausted);

        let storage: EditError = IoError::NotFound(PathBuf::from("missing.txt")).into();
        assert_eq!(storage.kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_error_messages() {
        let err = EditError::InvalidCharIndex {
            line: 1,
            index: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid character index 9 on line 1 (length 4)"
        );
        assert_eq!(EditError::NothingToUndo.to_string(), "No more steps to undo");
    }
}
