//! Aristotelian character analysis on top of a chat completion provider.
//!
//! The pipeline for one character:
//! 1. [`build_analysis_prompt`] renders the user prompt
//! 2. a [`CompletionDriver`](hamartia_interface::CompletionDriver) returns raw text
//! 3. [`normalize`] turns that text into a [`CharacterRecord`](hamartia_core::CharacterRecord),
//!    falling back to [`fallback_record`] when the text is not usable
//!
//! [`CharacterAnalyzer`] wires these together; [`BatchAnalyzer`] runs it over
//! many names with pacing and optional persistence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod batch;
mod extraction;
mod names;
mod normalize;
mod prompt;

pub use analyzer::{AnalysisSettings, AnalysisSettingsBuilder, CharacterAnalyzer};
pub use batch::{BatchAnalyzer, BatchReport, FailureStage, ItemFailure};
pub use extraction::strip_code_fence;
pub use names::{
    BundledList, FileNameSource, StaticNames, SuggestedNames, parse_name_list,
};
pub use normalize::{fallback_record, image_slug, normalize};
pub use prompt::{
    ANALYSIS_SYSTEM_PROMPT, FLAW_LABELS, SUGGESTION_SYSTEM_PROMPT, build_analysis_prompt,
    build_suggestion_prompt,
};
