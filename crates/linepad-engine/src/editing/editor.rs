use std::ops::Range;

use log::debug;
use relative_path::RelativePath;

use crate::editing::search::{self, SearchHit};
use crate::editing::{
    Clipboard, Cmd, DEFAULT_HISTORY_CAPACITY, Document, EditError, HistoryStack, Patch,
};
use crate::io::{Reader, Writer};
use crate::models::{Cursor, Line};

/// Editing façade over one document, its undo/redo history and a clipboard
///
/// ## History protocol
///
/// Every mutating operation, in this order:
///
/// 1. pushes a snapshot of the current document onto the undo stack
/// 2. clears the redo stack
/// 3. validates its arguments and mutates the document in place
///
/// Validation happens after the push, so an operation rejected for a bad
/// index still leaves its snapshot on the undo stack. Queries (`copy`,
/// `search`, `flatten`, `line_at`, ...) never touch either stack.
///
/// ```rust
/// # use linepad_engine::editing::Editor;
/// let mut editor = Editor::new();
/// editor.append_text("hello");
/// editor.insert(0, 5, " world").unwrap();
/// assert_eq!(editor.flatten(), "hello world");
///
/// editor.undo().unwrap();
/// assert_eq!(editor.flatten(), "hello");
/// editor.redo().unwrap();
/// assert_eq!(editor.flatten(), "hello world");
/// ```
#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    undo_stack: HistoryStack,
    redo_stack: HistoryStack,
    clipboard: Clipboard,
    cursor: Cursor,
    /// Bumped on every applied change, undo and redo included
    version: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an editor whose undo and redo stacks each hold `capacity` snapshots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            document: Document::new(),
            undo_stack: HistoryStack::new(capacity),
            redo_stack: HistoryStack::new(capacity),
            clipboard: Clipboard::new(),
            cursor: Cursor::default(),
            version: 0,
        }
    }

    // ============ Queries ============

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn line_count(&self) -> usize {
        self.document.line_count()
    }

    pub fn line_at(&self, index: usize) -> Option<&Line> {
        self.document.line_at(index)
    }

    pub fn flatten(&self) -> String {
        self.document.flatten()
    }

    pub fn clipboard(&self) -> &str {
        self.clipboard.content()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn undo_stack(&self) -> &HistoryStack {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &HistoryStack {
        &self.redo_stack
    }

    /// Every occurrence of `needle`, overlapping ones included
    pub fn search(&self, needle: &str) -> Result<Vec<SearchHit>, EditError> {
        if needle.is_empty() {
            return Err(EditError::EmptyNeedle);
        }
        let hits = search::find_all(&self.document, needle);
        if hits.is_empty() {
            return Err(EditError::NotFound {
                needle: needle.to_string(),
            });
        }
        Ok(hits)
    }

    /// Copy up to `count` bytes from `at` into the clipboard
    ///
    /// Same bounds as `delete`, but leaves the document and history alone.
    pub fn copy(&mut self, line: usize, at: usize, count: usize) -> Result<String, EditError> {
        let target = line_ref(&self.document, line)?;
        let range = selection(target, line, at, count)?;
        let fragment = target.slice(range).to_string();

        self.clipboard.set(fragment.clone());
        self.cursor = Cursor::new(line, at);
        Ok(fragment)
    }

    /// Write the flattened document through `writer`
    pub fn save_to<W: Writer>(&self, writer: &W, path: &RelativePath) -> Result<(), EditError> {
        writer.write(path, &self.flatten())?;
        debug!("saved {} lines to {path}", self.line_count());
        Ok(())
    }

    // ============ Mutations ============

    /// Apply a command through the history protocol
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, EditError> {
        let line = cmd.line();
        match cmd {
            Cmd::AppendText { text } => self.append_text(&text),
            Cmd::NewLine => self.new_line_at_end(),
            Cmd::InsertText { line, at, text } => self.insert(line, at, &text)?,
            Cmd::Delete { line, at, count } => {
                self.delete(line, at, count)?;
            }
            Cmd::Cut { line, at, count } => {
                self.cut(line, at, count)?;
            }
            Cmd::Paste { line, at } => self.paste(line, at)?,
            Cmd::ReplaceFound {
                line,
                from,
                find,
                with,
            } => {
                self.replace_found(line, from, &find, &with)?;
            }
            Cmd::ReplaceAt { line, at, text } => self.replace_at(line, at, &text)?,
            Cmd::Load { blob } => self.rebuild_from_blob(&blob),
        }

        Ok(Patch {
            line,
            version: self.version,
        })
    }

    pub fn append_text(&mut self, text: &str) {
        self.record();
        self.document.append_text(text);

        let last = self.document.line_count() - 1;
        let end = self.document.line_at(last).map_or(0, Line::len);
        self.changed(last, end);
    }

    pub fn new_line_at_end(&mut self) {
        self.record();
        self.document.new_line_at_end();
        self.changed(self.document.line_count() - 1, 0);
    }

    /// Insert `text` at byte `at` of `line`; `at` may equal the line length
    pub fn insert(&mut self, line: usize, at: usize, text: &str) -> Result<(), EditError> {
        self.record();
        let target = line_mut(&mut self.document, line)?;
        check_insert_position(target, line, at)?;

        target.insert_str(at, text);
        self.changed(line, at);
        Ok(())
    }

    /// Remove up to `count` bytes from `at`; `count` is clamped to the line end
    pub fn delete(&mut self, line: usize, at: usize, count: usize) -> Result<String, EditError> {
        self.record();
        let target = line_mut(&mut self.document, line)?;
        let range = selection(target, line, at, count)?;

        let removed = target.remove_range(range);
        self.changed(line, at);
        Ok(removed)
    }

    /// Delete like `delete`, keeping the removed fragment in the clipboard
    pub fn cut(&mut self, line: usize, at: usize, count: usize) -> Result<String, EditError> {
        self.record();
        let target = line_mut(&mut self.document, line)?;
        let range = selection(target, line, at, count)?;

        let removed = target.remove_range(range);
        self.clipboard.set(removed.clone());
        self.changed(line, at);
        Ok(removed)
    }

    /// Insert the clipboard content at byte `at` of `line`
    pub fn paste(&mut self, line: usize, at: usize) -> Result<(), EditError> {
        self.record();
        let target = line_mut(&mut self.document, line)?;
        check_insert_position(target, line, at)?;

        target.insert_str(at, self.clipboard.content());
        self.changed(line, at);
        Ok(())
    }

    /// Replace the first occurrence of `find` at or after byte `from`
    ///
    /// Returns the offset the replacement was made at.
    pub fn replace_found(
        &mut self,
        line: usize,
        from: usize,
        find: &str,
        with: &str,
    ) -> Result<usize, EditError> {
        self.record();
        let target = line_mut(&mut self.document, line)?;
        if from <= target.len() {
            check_insert_position(target, line, from)?;
        }
        let start = target
            .content()
            .get(from..)
            .and_then(|tail| tail.find(find))
            .map(|found| from + found)
            .ok_or_else(|| EditError::NotFound {
                needle: find.to_string(),
            })?;

        target.replace_range(start..start + find.len(), with);
        self.changed(line, start);
        Ok(start)
    }

    /// Overwrite the line from byte `at` with `text`
    ///
    /// Overwrites `min(text.len(), len - at)` bytes and writes all of `text`:
    /// a longer replacement extends the line, a shorter one leaves the rest
    /// of the tail in place.
    pub fn replace_at(&mut self, line: usize, at: usize, text: &str) -> Result<(), EditError> {
        self.record();
        let target = line_mut(&mut self.document, line)?;
        let range = selection(target, line, at, text.len())?;

        target.replace_range(range, text);
        self.changed(line, at);
        Ok(())
    }

    /// Replace the whole document with the lines of `blob`
    pub fn rebuild_from_blob(&mut self, blob: &str) {
        self.record();
        self.document.rebuild(blob);
        self.changed(0, 0);
    }

    /// Read `path` through `reader` and rebuild the document from it
    ///
    /// A failed read leaves the document and both history stacks untouched.
    pub fn load_from<R: Reader>(
        &mut self,
        reader: &R,
        path: &RelativePath,
    ) -> Result<(), EditError> {
        let blob = reader.read(path)?;
        self.rebuild_from_blob(&blob);
        debug!("loaded {} lines from {path}", self.line_count());
        Ok(())
    }

    // ============ History ============

    /// Restore the state before the latest change
    pub fn undo(&mut self) -> Result<(), EditError> {
        let Some(snapshot) = self.undo_stack.pop_state() else {
            return Err(EditError::NothingToUndo);
        };
        self.redo_stack.push_state(&self.document);
        self.document = snapshot.into_document();
        self.version += 1;

        debug!(
            "undo: {} undo / {} redo entries left",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Ok(())
    }

    /// Restore the state the latest undo moved away from
    pub fn redo(&mut self) -> Result<(), EditError> {
        let Some(snapshot) = self.redo_stack.pop_state() else {
            return Err(EditError::NothingToRedo);
        };
        self.undo_stack.push_state(&self.document);
        self.document = snapshot.into_document();
        self.version += 1;

        debug!(
            "redo: {} undo / {} redo entries left",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Ok(())
    }

    fn record(&mut self) {
        self.undo_stack.push_state(&self.document);
        self.redo_stack.clear();
    }

    fn changed(&mut self, line: usize, offset: usize) {
        self.cursor = Cursor::new(line, offset);
        self.version += 1;
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

fn line_ref(document: &Document, index: usize) -> Result<&Line, EditError> {
    let line_count = document.line_count();
    document
        .line_at(index)
        .ok_or(EditError::InvalidLineIndex { index, line_count })
}

fn line_mut(document: &mut Document, index: usize) -> Result<&mut Line, EditError> {
    let line_count = document.line_count();
    document
        .line_at_mut(index)
        .ok_or(EditError::InvalidLineIndex { index, line_count })
}

fn check_insert_position(target: &Line, line: usize, at: usize) -> Result<(), EditError> {
    if target.is_insert_position(at) {
        Ok(())
    } else {
        Err(EditError::InvalidCharIndex {
            line,
            index: at,
            len: target.len(),
        })
    }
}

/// Byte range of a `count`-long selection from `at`, clamped to the line end
fn selection(
    target: &Line,
    line: usize,
    at: usize,
    count: usize,
) -> Result<Range<usize>, EditError> {
    if !target.is_content_position(at) {
        return Err(EditError::InvalidCharIndex {
            line,
            index: at,
            len: target.len(),
        });
    }
    let end = target.clamped_end(at, count);
    check_insert_position(target, line, end)?;
    Ok(at..end)
}
