//! Building the runtime pieces from configuration.

use hamartia_analysis::AnalysisSettings;
use hamartia_error::{BuilderError, BuilderErrorKind, HamartiaResult};
use hamartia_interface::RecordStore;
use hamartia_models::{OPENAI_API_KEY_VAR, OpenAICompatibleClient};
use hamartia_rate_limit::{CompletionConfig, StoreBackend, StoreConfig};
use hamartia_storage::{FileSystemRecordStore, InMemoryRecordStore};
use std::sync::Arc;
use tracing::debug;

/// Open the record store selected by `config`.
///
/// # Errors
///
/// Fails if the filesystem table directory cannot be created.
pub fn open_store(config: &StoreConfig) -> HamartiaResult<Arc<dyn RecordStore>> {
    match config.backend {
        StoreBackend::Memory => {
            debug!("Opening in-memory record store");
            Ok(Arc::new(InMemoryRecordStore::new()))
        }
        StoreBackend::Filesystem => {
            let root = config.root();
            debug!(root = %root.display(), table = %config.table, "Opening filesystem record store");
            Ok(Arc::new(FileSystemRecordStore::new(root, &config.table)?))
        }
    }
}

/// Open the store only when records are going to be saved.
///
/// # Errors
///
/// Fails only when `save` is set and the store cannot be opened.
pub fn open_store_for_save(
    config: &StoreConfig,
    save: bool,
) -> HamartiaResult<Option<Arc<dyn RecordStore>>> {
    if save { open_store(config).map(Some) } else { Ok(None) }
}

/// Completion client for `config`, reading the API key from `OPENAI_API_KEY`.
///
/// # Errors
///
/// Fails if the key is not set or blank.
pub fn completion_client(config: &CompletionConfig) -> HamartiaResult<OpenAICompatibleClient> {
    completion_client_with(config, std::env::var(OPENAI_API_KEY_VAR).ok())
}

/// Completion client for `config` with an already looked-up key; `None` means unset.
///
/// # Errors
///
/// Fails if the key is `None` or blank.
pub fn completion_client_with(
    config: &CompletionConfig,
    api_key: Option<String>,
) -> HamartiaResult<OpenAICompatibleClient> {
    let client = OpenAICompatibleClient::from_key(api_key, &config.model)?;
    Ok(apply_config(client, config))
}

fn apply_config(client: OpenAICompatibleClient, config: &CompletionConfig) -> OpenAICompatibleClient {
    client
        .with_base_url(config.base_url.as_str())
        .with_defaults(Some(config.temperature), Some(config.max_tokens))
}

/// Analyzer sampling settings taken from `config`.
pub fn analysis_settings(config: &CompletionConfig) -> HamartiaResult<AnalysisSettings> {
    AnalysisSettings::builder()
        .temperature(config.temperature)
        .max_tokens(config.max_tokens)
        .suggestion_temperature(config.suggestion_temperature)
        .suggestion_max_tokens(config.suggestion_max_tokens)
        .build()
        .map_err(|e| {
            BuilderError::new(BuilderErrorKind::ValidationFailed(format!(
                "analysis settings: {}",
                e
            )))
            .into()
        })
}
