pub mod cipher;
pub mod editing;
pub mod io;
pub mod models;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{
    Clipboard, Cmd, Document, EditError, Editor, ErrorKind, HistoryStack, Patch, SearchHit,
    Snapshot,
};
pub use io::*;
pub use models::*;
