//! Layered configuration.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (include_str! from hamartia.toml)
//! 2. `~/.config/hamartia/hamartia.toml`
//! 3. `./hamartia.toml`
//! 4. An explicit file passed to [`HamartiaConfig::load_with`]
//! 5. `HAMARTIA__<SECTION>__<KEY>` environment variables

use crate::Pacing;
use config::{Config, Environment, File, FileFormat};
use hamartia_error::{ConfigError, HamartiaError, HamartiaResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../hamartia.toml");

/// Completion provider settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// Base URL of an OpenAI-compatible API, without `/chat/completions`
    pub base_url: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature for analyses
    pub temperature: f32,
    /// Token ceiling for analyses
    pub max_tokens: u32,
    /// Sampling temperature for theme suggestions
    pub suggestion_temperature: f32,
    /// Token ceiling for theme suggestions
    pub suggestion_max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 7000,
            suggestion_temperature: 0.8,
            suggestion_max_tokens: 200,
        }
    }
}

/// Batch run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchConfig {
    /// Fixed pause between items in milliseconds
    pub delay_ms: u64,
    /// Requests-per-minute ceiling; replaces `delay_ms` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    /// Persist every record produced by a batch
    #[serde(default)]
    pub save: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            requests_per_minute: None,
            save: false,
        }
    }
}

impl BatchConfig {
    /// Pacing policy described by these settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamartia_rate_limit::{BatchConfig, Pacing};
    /// use std::time::Duration;
    ///
    /// let config = BatchConfig { delay_ms: 250, requests_per_minute: None, save: false };
    /// assert_eq!(config.pacing(), Pacing::FixedDelay(Duration::from_millis(250)));
    ///
    /// let config = BatchConfig { delay_ms: 0, requests_per_minute: None, save: false };
    /// assert_eq!(config.pacing(), Pacing::None);
    /// ```
    pub fn pacing(&self) -> Pacing {
        if let Some(rpm) = self.requests_per_minute.and_then(NonZeroU32::new) {
            return Pacing::PerMinute(rpm);
        }
        if self.delay_ms == 0 {
            Pacing::None
        } else {
            Pacing::FixedDelay(Duration::from_millis(self.delay_ms))
        }
    }
}

/// Which record store backend to open.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    Memory,
    /// One JSON document per record under a directory
    #[default]
    Filesystem,
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Backend to open
    #[serde(default)]
    pub backend: StoreBackend,
    /// Root directory; empty selects the platform data directory
    #[serde(default)]
    pub path: String,
    /// Table name, a subdirectory of the root
    pub table: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Filesystem,
            path: String::new(),
            table: "characters".to_string(),
        }
    }
}

impl StoreConfig {
    /// Root directory for the filesystem backend.
    ///
    /// Falls back to `./hamartia-data` when the platform has no data directory.
    pub fn root(&self) -> PathBuf {
        if !self.path.trim().is_empty() {
            return PathBuf::from(&self.path);
        }
        dirs::data_dir()
            .map(|dir| dir.join("hamartia"))
            .unwrap_or_else(|| PathBuf::from("hamartia-data"))
    }
}

/// Top-level configuration.
///
/// # Example
///
/// ```no_run
/// use hamartia_rate_limit::HamartiaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = HamartiaConfig::load()?;
/// println!("model: {}", config.completion.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct HamartiaConfig {
    /// Completion provider settings
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Batch settings
    #[serde(default)]
    pub batch: BatchConfig,
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl HamartiaConfig {
    /// Load configuration from a single file, without other layers.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> HamartiaResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                HamartiaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                HamartiaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load every layer.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed.
    pub fn load() -> HamartiaResult<Self> {
        Self::load_with(None)
    }

    /// Load every layer, adding `explicit` (required) above the user files.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing or any present file is malformed.
    #[instrument]
    pub fn load_with(explicit: Option<&Path>) -> HamartiaResult<Self> {
        debug!("Loading configuration: env > explicit > current dir > home dir > bundled");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/hamartia/hamartia.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::from(Path::new("hamartia.toml")).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("HAMARTIA")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .map_err(|e| {
                HamartiaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                HamartiaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
