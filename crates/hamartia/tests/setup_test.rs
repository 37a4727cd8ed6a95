// Tests for building stores, clients and settings from configuration.

use hamartia::{
    CompletionConfig, CompletionDriver, ConfigError, HamartiaErrorKind, HamartiaResult,
    StoreBackend, StoreConfig, analysis_settings, completion_client_with, open_store,
    open_store_for_save,
};
use std::error::Error;

fn unusable_store_config(dir: &tempfile::TempDir) -> StoreConfig {
    // A regular file where the store root directory should be
    let file = dir.path().join("not-a-dir");
    std::fs::write(&file, b"").unwrap();
    StoreConfig {
        backend: StoreBackend::Filesystem,
        path: file.display().to_string(),
        table: "characters".to_string(),
    }
}

#[tokio::test]
async fn test_memory_store_from_config() {
    let config = StoreConfig {
        backend: StoreBackend::Memory,
        ..StoreConfig::default()
    };

    let store = open_store(&config).unwrap();

    assert_eq!(store.backend_name(), "memory");
    assert!(store.scan_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_filesystem_store_uses_configured_root_and_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        backend: StoreBackend::Filesystem,
        path: dir.path().display().to_string(),
        table: "tragedies".to_string(),
    };

    let store = open_store(&config).unwrap();

    assert_eq!(store.backend_name(), "filesystem");
    assert!(dir.path().join("tragedies").is_dir());
}

#[test]
fn test_store_not_opened_without_save() {
    let dir = tempfile::tempdir().unwrap();
    let config = unusable_store_config(&dir);

    assert!(open_store_for_save(&config, false).unwrap().is_none());
}

#[test]
fn test_unusable_store_fails_only_when_saving() {
    let dir = tempfile::tempdir().unwrap();
    let config = unusable_store_config(&dir);

    let err = open_store_for_save(&config, true).err().unwrap();
    assert!(matches!(err.kind(), HamartiaErrorKind::Storage(_)));
}

#[test]
fn test_client_follows_completion_config() {
    let config = CompletionConfig {
        base_url: "http://localhost:8080/v1/".to_string(),
        model: "local-model".to_string(),
        ..CompletionConfig::default()
    };

    let client = completion_client_with(&config, Some("sk-test".to_string())).unwrap();

    assert_eq!(client.model_name(), "local-model");
    assert_eq!(client.endpoint(), "http://localhost:8080/v1/chat/completions");
}

#[test]
fn test_missing_key_is_config_error() {
    let err = completion_client_with(&CompletionConfig::default(), None).unwrap_err();
    assert!(matches!(err.kind(), HamartiaErrorKind::Config(_)));
}

#[test]
fn test_blank_key_is_config_error() {
    let err = completion_client_with(&CompletionConfig::default(), Some("  ".to_string()))
        .unwrap_err();
    assert!(matches!(err.kind(), HamartiaErrorKind::Config(_)));
}

#[test]
fn test_settings_follow_completion_config() {
    let config = CompletionConfig {
        temperature: 0.2,
        max_tokens: 1234,
        suggestion_temperature: 0.9,
        suggestion_max_tokens: 50,
        ..CompletionConfig::default()
    };

    let settings = analysis_settings(&config).unwrap();

    assert_eq!(*settings.temperature(), 0.2);
    assert_eq!(*settings.max_tokens(), 1234);
    assert_eq!(*settings.suggestion_temperature(), 0.9);
    assert_eq!(*settings.suggestion_max_tokens(), 50);
    assert_eq!(settings.model(), &None);
}

// The binary's entry point mixes subscriber errors and workspace errors.
fn start(
    tracing: Result<(), Box<dyn Error + Send + Sync>>,
    config: HamartiaResult<()>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing?;
    config?;
    Ok(())
}

#[test]
fn test_entry_point_errors_share_one_type() {
    assert!(start(Ok(()), Ok(())).is_ok());
    assert!(start(Err("subscriber already set".into()), Ok(())).is_err());

    let err = start(Ok(()), Err(ConfigError::new("bad layer").into())).unwrap_err();
    assert!(err.to_string().contains("bad layer"));
}
