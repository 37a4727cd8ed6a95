//! Sequential batch analysis.
//!
//! Items run strictly one after another: item N+1 starts only after item N
//! has been analyzed, optionally persisted and paced. A failure on one item
//! never aborts the batch; the item gets a fallback record and the failure
//! is reported alongside the results.

use crate::{CharacterAnalyzer, fallback_record};
use derive_getters::Getters;
use hamartia_core::CharacterRecord;
use hamartia_error::HamartiaResult;
use hamartia_interface::{CompletionDriver, NameSource, RecordStore};
use hamartia_rate_limit::{Pacer, Pacing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Step at which a batch item failed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FailureStage {
    /// The completion call failed; a fallback record was substituted
    Completion,
    /// The record was produced but could not be stored
    Persist,
}

/// A per-item failure recorded during a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ItemFailure {
    /// Position of the item in the input
    index: usize,
    /// Subject name
    name: String,
    /// Where it failed
    stage: FailureStage,
    /// Error text
    message: String,
}

/// Outcome of a batch run.
///
/// `records` always has one entry per input name, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BatchReport {
    /// One record per input name
    records: Vec<CharacterRecord>,
    /// Items that needed a fallback or failed to persist
    failures: Vec<ItemFailure>,
}

impl BatchReport {
    /// True when every item was analyzed and (if requested) stored.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of items whose record came from the model, not a fallback.
    pub fn analyzed_count(&self) -> usize {
        let fallbacks = self
            .failures
            .iter()
            .filter(|f| f.stage == FailureStage::Completion)
            .count();
        self.records.len() - fallbacks
    }

    /// Consume the report, returning the records.
    pub fn into_records(self) -> Vec<CharacterRecord> {
        self.records
    }
}

/// Runs a [`CharacterAnalyzer`] over many names.
///
/// # Example
///
/// ```no_run
/// use hamartia_analysis::{BatchAnalyzer, CharacterAnalyzer};
/// use hamartia_models::OpenAICompatibleClient;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let analyzer = CharacterAnalyzer::new(OpenAICompatibleClient::from_env("gpt-4o-mini")?);
/// let batch = BatchAnalyzer::new(analyzer);
/// let report = batch.run(&["Hamlet".to_string(), "Medea".to_string()]).await;
/// assert_eq!(report.records().len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct BatchAnalyzer<D> {
    analyzer: CharacterAnalyzer<D>,
    pacer: Pacer,
    store: Option<Arc<dyn RecordStore>>,
}

impl<D: CompletionDriver> BatchAnalyzer<D> {
    /// Batch runner with the default one-second pause and no persistence.
    pub fn new(analyzer: CharacterAnalyzer<D>) -> Self {
        Self {
            analyzer,
            pacer: Pacer::new(Pacing::default()),
            store: None,
        }
    }

    /// Replace the pacing policy.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacer = Pacer::new(pacing);
        self
    }

    /// Persist every record to `store` as it is produced.
    pub fn with_store(mut self, store: Arc<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// The wrapped analyzer.
    pub fn analyzer(&self) -> &CharacterAnalyzer<D> {
        &self.analyzer
    }

    /// Analyze `names` in order.
    #[instrument(skip_all, fields(count = names.len(), persist = self.store.is_some()))]
    pub async fn run(&self, names: &[String]) -> BatchReport {
        info!("Starting batch analysis");
        let mut report = BatchReport::default();

        for (index, name) in names.iter().enumerate() {
            self.pacer.pace(index).await;

            let record = match self.analyzer.analyze(name).await {
                Ok(record) => record,
                Err(e) => {
                    error!(index, name = %name, error = %e, "Analysis failed; using fallback");
                    let message = e.message();
                    report.failures.push(ItemFailure {
                        index,
                        name: name.clone(),
                        stage: FailureStage::Completion,
                        message: message.clone(),
                    });
                    fallback_record(name, &message)
                }
            };

            if let Some(store) = &self.store
                && let Err(e) = store.put(&record).await
            {
                warn!(index, name = %name, error = %e, "Failed to persist record");
                report.failures.push(ItemFailure {
                    index,
                    name: name.clone(),
                    stage: FailureStage::Persist,
                    message: e.message(),
                });
            }

            report.records.push(record);
        }

        info!(
            records = report.records.len(),
            failures = report.failures.len(),
            "Batch analysis complete"
        );
        report
    }

    /// Analyze every name `source` yields.
    ///
    /// # Errors
    ///
    /// Fails only if the source itself cannot produce names.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub async fn run_source(&self, source: &dyn NameSource) -> HamartiaResult<BatchReport> {
        let names = source.names().await?;
        Ok(self.run(&names).await)
    }
}
