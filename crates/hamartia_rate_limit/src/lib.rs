//! Configuration loading and request pacing.
//!
//! Batch runs issue one completion per character. This crate decides how
//! long to wait between them:
//! - [`Pacing::FixedDelay`] sleeps a fixed interval between items (default 1s)
//! - [`Pacing::PerMinute`] uses a governor GCRA bucket for a requests-per-minute ceiling
//!
//! It also owns [`HamartiaConfig`], loaded from the bundled `hamartia.toml`
//! merged with user overrides.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pacer;

pub use config::{BatchConfig, CompletionConfig, HamartiaConfig, StoreBackend, StoreConfig};
pub use pacer::{Pacer, Pacing};
