//! Single-character analysis and theme suggestions.

use crate::prompt::{
    ANALYSIS_SYSTEM_PROMPT, SUGGESTION_SYSTEM_PROMPT, build_analysis_prompt,
    build_suggestion_prompt,
};
use crate::{fallback_record, normalize};
use derive_getters::Getters;
use hamartia_core::{CharacterRecord, CompletionRequest, Message};
use hamartia_error::{BuilderError, BuilderErrorKind, HamartiaResult};
use hamartia_interface::CompletionDriver;
use tracing::{info, instrument, warn};

/// Sampling parameters for the two kinds of request.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::AnalysisSettings;
///
/// let settings = AnalysisSettings::builder()
///     .temperature(0.5f32)
///     .build()
///     .unwrap();
/// assert_eq!(*settings.max_tokens(), 7000);
/// assert_eq!(*settings.suggestion_max_tokens(), 200);
/// ```
#[derive(Debug, Clone, PartialEq, derive_builder::Builder, Getters)]
#[builder(setter(into))]
pub struct AnalysisSettings {
    /// Model override; `None` uses the driver's model
    #[builder(default, setter(strip_option))]
    model: Option<String>,
    /// Temperature for analyses
    #[builder(default = "0.7")]
    temperature: f32,
    /// Token ceiling for analyses
    #[builder(default = "7000")]
    max_tokens: u32,
    /// Temperature for suggestions
    #[builder(default = "0.8")]
    suggestion_temperature: f32,
    /// Token ceiling for suggestions
    #[builder(default = "200")]
    suggestion_max_tokens: u32,
}

impl AnalysisSettings {
    /// Creates a new builder.
    pub fn builder() -> AnalysisSettingsBuilder {
        AnalysisSettingsBuilder::default()
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            model: None,
            temperature: 0.7,
            max_tokens: 7000,
            suggestion_temperature: 0.8,
            suggestion_max_tokens: 200,
        }
    }
}

/// Analyzes characters through a [`CompletionDriver`].
///
/// # Example
///
/// ```no_run
/// use hamartia_analysis::CharacterAnalyzer;
/// use hamartia_models::OpenAICompatibleClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = CharacterAnalyzer::new(OpenAICompatibleClient::from_env("gpt-4o-mini")?);
/// let record = analyzer.analyze_or_fallback("Hamlet").await;
/// println!("{}: {}", record.name, record.flaw_tag);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CharacterAnalyzer<D> {
    driver: D,
    settings: AnalysisSettings,
}

impl<D: CompletionDriver> CharacterAnalyzer<D> {
    /// Create an analyzer with default settings.
    pub fn new(driver: D) -> Self {
        Self::with_settings(driver, AnalysisSettings::default())
    }

    /// Create an analyzer with explicit settings.
    pub fn with_settings(driver: D, settings: AnalysisSettings) -> Self {
        Self { driver, settings }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Current settings.
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// The request [`analyze`](Self::analyze) sends for `name`.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the request cannot be assembled.
    pub fn analysis_request(&self, name: &str) -> HamartiaResult<CompletionRequest> {
        self.request(
            ANALYSIS_SYSTEM_PROMPT,
            build_analysis_prompt(name),
            self.settings.temperature,
            self.settings.max_tokens,
        )
    }

    /// Analyze one character.
    ///
    /// Errors only come from the completion call. Unparseable output is not
    /// an error: it normalizes to a fallback record.
    ///
    /// # Errors
    ///
    /// Propagates transport, API and empty-response failures from the driver.
    #[instrument(skip(self), fields(provider = self.driver.provider_name()))]
    pub async fn analyze(&self, name: &str) -> HamartiaResult<CharacterRecord> {
        info!("Analyzing character");
        let request = self.analysis_request(name)?;
        let raw = self.driver.complete(&request).await?;
        let record = normalize(&raw, name);
        info!(flaw = %record.flaw_tag, id = %record.id, "Analysis complete");
        Ok(record)
    }

    /// Analyze one character, substituting a fallback record on any failure.
    pub async fn analyze_or_fallback(&self, name: &str) -> CharacterRecord {
        match self.analyze(name).await {
            Ok(record) => record,
            Err(e) => {
                warn!(name, error = %e, "Analysis failed; substituting fallback");
                fallback_record(name, &e.message())
            }
        }
    }

    /// Ask the model for up to `count` character names related to `theme`.
    ///
    /// # Errors
    ///
    /// Propagates driver failures.
    #[instrument(skip(self))]
    pub async fn try_suggest(&self, theme: &str, count: usize) -> HamartiaResult<Vec<String>> {
        let request = self.request(
            SUGGESTION_SYSTEM_PROMPT,
            build_suggestion_prompt(theme, count),
            self.settings.suggestion_temperature,
            self.settings.suggestion_max_tokens,
        )?;
        let raw = self.driver.complete(&request).await?;
        let names = parse_suggestions(&raw, count);
        info!(found = names.len(), "Received character suggestions");
        Ok(names)
    }

    /// Like [`try_suggest`](Self::try_suggest), but any failure yields an empty list.
    pub async fn suggest(&self, theme: &str, count: usize) -> Vec<String> {
        match self.try_suggest(theme, count).await {
            Ok(names) => names,
            Err(e) => {
                warn!(theme, error = %e, "Suggestion request failed");
                Vec::new()
            }
        }
    }

    fn request(
        &self,
        system: &str,
        user: String,
        temperature: f32,
        max_tokens: u32,
    ) -> HamartiaResult<CompletionRequest> {
        let mut builder = CompletionRequest::builder();
        builder
            .messages(vec![Message::system(system), Message::user(user)])
            .temperature(temperature)
            .max_tokens(max_tokens);
        if let Some(model) = &self.settings.model {
            builder.model(model.clone());
        }
        builder.build().map_err(|e| {
            BuilderError::new(BuilderErrorKind::MissingField(format!(
                "Failed to build completion request: {}",
                e
            )))
            .into()
        })
    }
}

/// One name per non-blank line, list markers removed, at most `count`.
fn parse_suggestions(raw: &str, count: usize) -> Vec<String> {
    raw.lines()
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .take(count)
        .map(String::from)
        .collect()
}

/// Remove a leading `-`, `*`, `•` or `1.`/`1)` marker.
fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(['-', '*', '•']) {
        return rest.trim();
    }
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(['.', ')']) {
            return rest.trim();
        }
    }
    line
}
