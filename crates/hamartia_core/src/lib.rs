//! Core data types for the Hamartia toolkit.
//!
//! This crate provides the record model persisted by every store and the
//! chat types exchanged with completion providers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod field;
mod message;
mod record;
mod request;
mod role;
mod telemetry;
mod update;
mod wisdom;

pub use field::RecordField;
pub use message::Message;
pub use record::CharacterRecord;
pub use request::{CompletionRequest, CompletionRequestBuilder};
pub use role::Role;
pub use telemetry::init_tracing;
pub use update::RecordUpdate;
pub use wisdom::{WisdomLevel, WisdomTrend};
