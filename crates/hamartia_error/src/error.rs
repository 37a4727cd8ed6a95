//! Top-level error wrapper types.

use crate::{
    BuilderError, CompletionError, ConfigError, HttpError, JsonError, NameSourceError,
    NormalizeError, StorageError,
};

/// Union of every error the workspace can raise.
///
/// # Examples
///
/// ```
/// use hamartia_error::{HamartiaError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: HamartiaError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum HamartiaErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Completion provider error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Normalization error
    #[from(NormalizeError)]
    Normalize(NormalizeError),
    /// Record store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Name source error
    #[from(NameSourceError)]
    NameSource(NameSourceError),
}

/// Hamartia error with kind discrimination.
///
/// # Examples
///
/// ```
/// use hamartia_error::{ConfigError, HamartiaResult};
///
/// fn might_fail() -> HamartiaResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Hamartia Error: {}", _0)]
pub struct HamartiaError(Box<HamartiaErrorKind>);

impl HamartiaError {
    /// Create a new error from a kind.
    pub fn new(kind: HamartiaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &HamartiaErrorKind {
        &self.0
    }

    /// True when the error is a store lookup that found no record.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind(), HamartiaErrorKind::Storage(e) if e.is_not_found())
    }

    /// The underlying condition without the source location.
    pub fn message(&self) -> String {
        match self.kind() {
            HamartiaErrorKind::Http(e) => e.message.clone(),
            HamartiaErrorKind::Json(e) => e.message.clone(),
            HamartiaErrorKind::Config(e) => e.message.clone(),
            HamartiaErrorKind::Builder(e) => e.kind().to_string(),
            HamartiaErrorKind::Completion(e) => e.kind.to_string(),
            HamartiaErrorKind::Normalize(e) => e.kind.to_string(),
            HamartiaErrorKind::Storage(e) => e.kind.to_string(),
            HamartiaErrorKind::NameSource(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to HamartiaErrorKind
impl<T> From<T> for HamartiaError
where
    T: Into<HamartiaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Hamartia operations.
pub type HamartiaResult<T> = std::result::Result<T, HamartiaError>;
