//! Record store error types.

/// Kinds of record store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// No record exists under the given key
    #[display("Record not found: {}", _0)]
    NotFound(String),
    /// Backend could not be reached or the operation failed in transit
    #[display("Store transport failure: {}", _0)]
    Transport(String),
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a record
    #[display("Failed to write record: {}", _0)]
    FileWrite(String),
    /// Failed to read a record
    #[display("Failed to read record: {}", _0)]
    FileRead(String),
    /// Stored bytes could not be decoded into a record
    #[display("Corrupt record: {}", _0)]
    Corrupt(String),
    /// Record could not be encoded for storage
    #[display("Serialization failed: {}", _0)]
    Serialization(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use hamartia_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::NotFound("Hamlet".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, StorageErrorKind::NotFound(_))
    }
}
