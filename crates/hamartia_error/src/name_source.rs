//! Name source error types.

/// Conditions raised while producing a list of names to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NameSourceErrorKind {
    /// Failed to read a name list file
    #[display("Failed to read name list {}: {}", path, message)]
    FileRead {
        /// Path that was read
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// No bundled list exists under this name
    #[display("Unknown bundled list: {}", _0)]
    UnknownList(String),
}

/// Name source error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Name Source Error: {} at line {} in {}", kind, line, file)]
pub struct NameSourceError {
    /// The kind of error that occurred
    pub kind: NameSourceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NameSourceError {
    /// Create a new name source error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NameSourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
