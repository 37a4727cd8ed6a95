//! Response normalization error types.
//!
//! These never escape the normalizer: every failure is folded into a
//! fallback record whose text carries the message.

/// Reasons a completion could not be read as an analysis payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum NormalizeErrorKind {
    /// Text is not valid JSON
    #[display("invalid JSON: {}", _0)]
    InvalidJson(String),
    /// JSON root is something other than an object
    #[display("expected a JSON object, found {}", _0)]
    NotAnObject(String),
    /// A field carried a value of the wrong type
    #[display("unexpected field shape: {}", _0)]
    FieldShape(String),
}

/// Normalization error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Normalize Error: {} at line {} in {}", kind, line, file)]
pub struct NormalizeError {
    /// The kind of error that occurred
    pub kind: NormalizeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl NormalizeError {
    /// Create a new normalize error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: NormalizeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
