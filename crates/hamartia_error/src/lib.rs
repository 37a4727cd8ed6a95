//! Error types for the Hamartia toolkit.
//!
//! Every crate in the workspace reports failures through the types defined here.
//!
//! # Error Hierarchy
//!
//! Errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the source location that raised it
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! # Examples
//!
//! ```
//! use hamartia_error::{HamartiaResult, HttpError};
//!
//! fn fetch_analysis() -> HamartiaResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_analysis() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod completion;
mod error;
mod message;
mod name_source;
mod normalize;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use completion::{CompletionError, CompletionErrorKind};
pub use error::{HamartiaError, HamartiaErrorKind, HamartiaResult};
pub use message::{ConfigError, HttpError, JsonError};
pub use name_source::{NameSourceError, NameSourceErrorKind};
pub use normalize::{NormalizeError, NormalizeErrorKind};
pub use storage::{StorageError, StorageErrorKind};
