//! Errors that carry only a message and the location that raised them.
//!
//! Used where the underlying library reports a plain string: reqwest
//! transport failures, serde_json encoding, and configuration loading.

/// Transport failure talking to the completion provider (connection, TLS, timeout).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What went wrong
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl HttpError {
    /// Record `message` at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let (line, file) = caller();
        Self {
            message: message.into(),
            line,
            file,
        }
    }
}

/// Failure encoding output as JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What went wrong
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl JsonError {
    /// Record `message` at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let (line, file) = caller();
        Self {
            message: message.into(),
            line,
            file,
        }
    }
}

/// Missing credential or unloadable configuration layer. Fatal to callers.
///
/// ```
/// use hamartia_error::ConfigError;
///
/// let err = ConfigError::new("OPENAI_API_KEY is not set");
/// assert!(err.message.contains("OPENAI_API_KEY"));
/// assert!(err.to_string().starts_with("Configuration Error: "));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Line that raised the error
    pub line: u32,
    /// File that raised the error
    pub file: &'static str,
}

impl ConfigError {
    /// Record `message` at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let (line, file) = caller();
        Self {
            message: message.into(),
            line,
            file,
        }
    }
}

#[track_caller]
fn caller() -> (u32, &'static str) {
    let location = std::panic::Location::caller();
    (location.line(), location.file())
}
