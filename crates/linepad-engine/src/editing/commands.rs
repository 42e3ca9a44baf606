/// A mutating edit expressed as a value
///
/// Every variant maps onto one `Editor` method and goes through the same
/// history protocol when applied with `Editor::apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Fill the empty last line, or add a new line holding `text`
    AppendText { text: String },
    /// Add an empty line at the end
    NewLine,
    InsertText {
        line: usize,
        at: usize,
        text: String,
    },
    Delete {
        line: usize,
        at: usize,
        count: usize,
    },
    Cut {
        line: usize,
        at: usize,
        count: usize,
    },
    Paste { line: usize, at: usize },
    /// Replace the first occurrence of `find` at or after `from`
    ReplaceFound {
        line: usize,
        from: usize,
        find: String,
        with: String,
    },
    /// Overwrite from `at`, growing the line when `text` runs past its end
    ReplaceAt {
        line: usize,
        at: usize,
        text: String,
    },
    /// Replace the whole document with the lines of `blob`
    Load { blob: String },
}

impl Cmd {
    /// Line index the command addresses, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Cmd::AppendText { .. } | Cmd::NewLine | Cmd::Load { .. } => None,
            Cmd::InsertText { line, .. }
            | Cmd::Delete { line, .. }
            | Cmd::Cut { line, .. }
            | Cmd::Paste { line, .. }
            | Cmd::ReplaceFound { line, .. }
            | Cmd::ReplaceAt { line, .. } => Some(*line),
        }
    }
}
