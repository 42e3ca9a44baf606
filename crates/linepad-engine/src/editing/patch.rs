/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Line the command addressed, if it addressed one
    pub line: Option<usize>,
    pub version: u64,
}
