//! Handlers for commands that call the completion model.

use super::{BatchArgs, print_json};
use hamartia::{
    BatchAnalyzer, BundledList, CharacterAnalyzer, FileNameSource, HamartiaConfig,
    HamartiaResult, NameSource, OpenAICompatibleClient, Pacing, RecordStore, SuggestedNames,
    analysis_settings, completion_client,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

fn analyzer(config: &HamartiaConfig) -> HamartiaResult<CharacterAnalyzer<OpenAICompatibleClient>> {
    Ok(CharacterAnalyzer::with_settings(
        completion_client(&config.completion)?,
        analysis_settings(&config.completion)?,
    ))
}

/// Analyze one character, saving it when `store` is given.
///
/// Never fails on model errors, only on setup or saving.
pub async fn handle_analyze(
    config: &HamartiaConfig,
    store: Option<Arc<dyn RecordStore>>,
    name: &str,
) -> HamartiaResult<()> {
    let analyzer = analyzer(config)?;
    let record = analyzer.analyze_or_fallback(name).await;

    if let Some(store) = store {
        store.put(&record).await?;
        info!(name = %record.name, backend = store.backend_name(), "Saved record");
    }

    print_json(&record)
}

/// Run a batch over the selected name source, saving records when `store` is given.
pub async fn handle_batch(
    config: &HamartiaConfig,
    store: Option<Arc<dyn RecordStore>>,
    args: BatchArgs,
) -> HamartiaResult<()> {
    let pacing = match args.delay_ms {
        Some(ms) => Pacing::FixedDelay(Duration::from_millis(ms)),
        None => config.batch.pacing(),
    };

    let mut batch = BatchAnalyzer::new(analyzer(config)?).with_pacing(pacing);
    if let Some(store) = store {
        batch = batch.with_store(store);
    }

    let mut names = if let Some(path) = &args.file {
        FileNameSource::new(path).names().await?
    } else if let Some(theme) = &args.theme {
        SuggestedNames::new(batch.analyzer(), theme.as_str(), args.count)
            .names()
            .await?
    } else {
        let list = args.list.as_deref().unwrap_or("literature");
        BundledList::parse(list)?.names().await?
    };

    if let Some(limit) = args.limit {
        names.truncate(limit);
    }
    if names.is_empty() {
        warn!("No names to analyze");
    }

    let report = batch.run(&names).await;
    for failure in report.failures() {
        warn!(
            index = failure.index(),
            name = %failure.name(),
            stage = %failure.stage(),
            error = %failure.message(),
            "Batch item failed"
        );
    }

    print_json(&report)
}

/// Print model suggestions for a theme.
pub async fn handle_suggest(config: &HamartiaConfig, theme: &str, count: usize) -> HamartiaResult<()> {
    let names = analyzer(config)?.suggest(theme, count).await;
    print_json(&names)
}
