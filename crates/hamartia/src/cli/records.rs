//! Record store command handlers.

use super::print_json;
use hamartia::{
    BuilderError, BuilderErrorKind, HamartiaResult, RecordField, RecordStore, RecordUpdate,
    StorageError, StorageErrorKind,
};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::info;

fn parse_field(field: &str) -> HamartiaResult<RecordField> {
    RecordField::from_str(field).map_err(|_| {
        let known = RecordField::iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        BuilderError::new(BuilderErrorKind::ValidationFailed(format!(
            "unknown field '{}'; expected one of: {}",
            field, known
        )))
        .into()
    })
}

/// Print the record stored under `name`.
pub async fn handle_get(store: &dyn RecordStore, name: &str) -> HamartiaResult<()> {
    match store.get(name).await? {
        Some(record) => print_json(&record),
        None => Err(StorageError::new(StorageErrorKind::NotFound(name.to_string())).into()),
    }
}

/// Print every stored record.
pub async fn handle_list(store: &dyn RecordStore) -> HamartiaResult<()> {
    let mut records = store.scan_all().await?;
    records.sort_by(|a, b| a.name.cmp(&b.name));
    info!(count = records.len(), "Listed records");
    print_json(&records)
}

/// Print records whose `field` matches `value`.
pub async fn handle_find(store: &dyn RecordStore, field: &str, value: &str) -> HamartiaResult<()> {
    let field = parse_field(field)?;
    let records = store.find_by_field(field, value).await?;
    info!(%field, value, count = records.len(), "Found records");
    print_json(&records)
}

/// Set one field of a stored record and print the result.
pub async fn handle_update(
    store: &dyn RecordStore,
    name: &str,
    field: &str,
    value: &str,
) -> HamartiaResult<()> {
    let mut update = RecordUpdate::default();
    update.set(parse_field(field)?, value)?;
    let record = store.update(name, update).await?;
    print_json(&record)
}

/// Delete a stored record.
pub async fn handle_delete(store: &dyn RecordStore, name: &str) -> HamartiaResult<()> {
    store.delete(name).await?;
    info!(name, "Deleted record");
    print_json(&serde_json::json!({ "deleted": name }))
}
