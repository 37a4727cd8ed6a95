//! Hamartia - Aristotelian character analysis with large language models
//!
//! Hamartia asks a chat completion model to analyze a fictional or historical
//! character through Aristotle's ethics: the tragic flaw (*hamartia*), practical
//! wisdom (*phronesis*) and purpose (*telos*). Responses are normalized into a
//! fixed [`CharacterRecord`] shape that can be stored and queried.
//!
//! # Quick Start
//!
//! ```no_run
//! use hamartia::{CharacterAnalyzer, HamartiaConfig, analysis_settings, completion_client};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HamartiaConfig::load()?;
//! let analyzer = CharacterAnalyzer::with_settings(
//!     completion_client(&config.completion)?,
//!     analysis_settings(&config.completion)?,
//! );
//!
//! let record = analyzer.analyze_or_fallback("Hamlet").await;
//! println!("{}", serde_json::to_string_pretty(&record)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `hamartia_error` - Error types
//! - `hamartia_core` - Records, requests and tracing setup
//! - `hamartia_interface` - Driver, store and name source traits
//! - `hamartia_rate_limit` - Batch pacing and configuration
//! - `hamartia_storage` - In-memory and filesystem record stores
//! - `hamartia_models` - OpenAI-compatible completion client
//! - `hamartia_analysis` - Prompting, normalization and batch runs
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod setup;

pub use setup::{
    analysis_settings, completion_client, completion_client_with, open_store,
    open_store_for_save,
};

pub use hamartia_error::{
    BuilderError, BuilderErrorKind, CompletionError, CompletionErrorKind, ConfigError,
    HamartiaError, HamartiaErrorKind, HamartiaResult, HttpError, JsonError, NameSourceError,
    NameSourceErrorKind, NormalizeError, NormalizeErrorKind, StorageError, StorageErrorKind,
};

pub use hamartia_core::{
    CharacterRecord, CompletionRequest, CompletionRequestBuilder, Message, RecordField,
    RecordUpdate, Role, WisdomLevel, WisdomTrend, init_tracing,
};

pub use hamartia_interface::{CompletionDriver, NameSource, RecordStore};

pub use hamartia_rate_limit::{
    BatchConfig, CompletionConfig, HamartiaConfig, Pacer, Pacing, StoreBackend, StoreConfig,
};

pub use hamartia_storage::{FileSystemRecordStore, InMemoryRecordStore};

pub use hamartia_models::{OPENAI_API_KEY_VAR, OPENAI_BASE_URL, OpenAICompatibleClient};

pub use hamartia_analysis::{
    AnalysisSettings, AnalysisSettingsBuilder, BatchAnalyzer, BatchReport, BundledList,
    CharacterAnalyzer, FLAW_LABELS, FailureStage, FileNameSource, ItemFailure, StaticNames,
    SuggestedNames, build_analysis_prompt, build_suggestion_prompt, fallback_record, normalize,
    parse_name_list,
};
