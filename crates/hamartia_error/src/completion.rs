//! Completion provider error types.

/// Conditions raised while requesting a chat completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// Provider answered but the first choice carried no text
    #[display("Completion response contained no content")]
    EmptyResponse,
    /// Provider returned a non-success HTTP status
    #[display("API error ({}): {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Provider rejected the request for exceeding its rate limit
    #[display("Rate limited by provider: {}", _0)]
    RateLimited(String),
    /// Response body could not be decoded into the expected shape
    #[display("Failed to parse completion response: {}", _0)]
    ResponseParsing(String),
}

impl CompletionErrorKind {
    /// Check if the provider signalled a transient condition.
    ///
    /// The client never retries on its own; callers that want retries can
    /// use this to decide.
    pub fn is_transient(&self) -> bool {
        match self {
            CompletionErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 500 | 502 | 503 | 504)
            }
            CompletionErrorKind::RateLimited(_) => true,
            _ => false,
        }
    }
}

/// Completion error with location tracking.
///
/// # Examples
///
/// ```
/// use hamartia_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no content"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new completion error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
