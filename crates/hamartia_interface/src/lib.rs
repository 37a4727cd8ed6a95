//! Trait definitions for the Hamartia toolkit.
//!
//! The analysis pipeline talks to three seams:
//! - [`CompletionDriver`] sends a chat request and returns raw text
//! - [`RecordStore`] persists records keyed by character name
//! - [`NameSource`] yields the names a batch run should analyze

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionDriver, NameSource, RecordStore};
