//! Shared fixtures and contract checks for record store tests.

#![allow(dead_code)]

use hamartia_core::{CharacterRecord, RecordField, RecordUpdate};
use hamartia_interface::RecordStore;

pub fn sample_record(name: &str, flaw: &str, level: &str, tags: &[&str]) -> CharacterRecord {
    CharacterRecord {
        id: format!("char-1700000000000-{}", name.len()),
        name: name.to_string(),
        flaw_tag: flaw.to_string(),
        situational_context: format!("{} in their story", name),
        wisdom_level: level.to_string(),
        wisdom_trend: "constant".to_string(),
        purpose: "Unknown purpose".to_string(),
        origin_work: "Test universe".to_string(),
        notable_success: "A victory".to_string(),
        notable_failure: "A defeat".to_string(),
        category_tags: tags.iter().map(|t| t.to_string()).collect(),
        image_ref: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
    }
}

pub async fn assert_round_trip(store: &dyn RecordStore) {
    let record = sample_record("Hamlet", "Courage deficiency", "high", &["tragedy"]);
    store.put(&record).await.unwrap();

    let fetched = store.get("Hamlet").await.unwrap();
    assert_eq!(fetched, Some(record));
}

pub async fn assert_get_missing_is_none(store: &dyn RecordStore) {
    assert_eq!(store.get("Nobody").await.unwrap(), None);
}

pub async fn assert_put_overwrites(store: &dyn RecordStore) {
    let first = sample_record("Medea", "Temperance deficiency", "medium", &["myth"]);
    let mut second = first.clone();
    second.purpose = "Revenge on Jason".to_string();

    store.put(&first).await.unwrap();
    store.put(&second).await.unwrap();

    assert_eq!(store.get("Medea").await.unwrap(), Some(second));
    assert_eq!(store.scan_all().await.unwrap().len(), 1);
}

pub async fn assert_delete_idempotent(store: &dyn RecordStore) {
    let record = sample_record("Oedipus", "Theoretical Wisdom excess", "high", &["myth"]);
    store.put(&record).await.unwrap();

    store.delete("Oedipus").await.unwrap();
    assert_eq!(store.get("Oedipus").await.unwrap(), None);

    // Second delete of an absent key still succeeds
    store.delete("Oedipus").await.unwrap();
}

pub async fn assert_update_changes_only_named_field(store: &dyn RecordStore) {
    let record = sample_record("Macbeth", "Ambition excess", "medium", &["tragedy"]);
    store.put(&record).await.unwrap();

    let updated = store
        .update("Macbeth", RecordUpdate::default().with_wisdom_level("low"))
        .await
        .unwrap();

    let mut expected = record.clone();
    expected.wisdom_level = "low".to_string();
    assert_eq!(updated, expected);
    assert_eq!(store.get("Macbeth").await.unwrap(), Some(expected));
}

pub async fn assert_update_missing_is_not_found(store: &dyn RecordStore) {
    let err = store
        .update("Nobody", RecordUpdate::default().with_purpose("x"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.get("Nobody").await.unwrap(), None);
}

pub async fn assert_find_by_field(store: &dyn RecordStore) {
    store
        .put(&sample_record("Achilles", "Magnanimity excess", "low", &["myth", "warrior"]))
        .await
        .unwrap();
    store
        .put(&sample_record("Ajax", "Magnanimity excess", "medium", &["myth"]))
        .await
        .unwrap();
    store
        .put(&sample_record("Lear", "Truthfulness deficiency", "low", &["tragedy"]))
        .await
        .unwrap();

    let mut proud: Vec<String> = store
        .find_by_field(RecordField::FlawTag, "Magnanimity excess")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    proud.sort();
    assert_eq!(proud, vec!["Achilles".to_string(), "Ajax".to_string()]);

    let low = store
        .find_by_field(RecordField::WisdomLevel, "low")
        .await
        .unwrap();
    assert_eq!(low.len(), 2);

    let warriors = store
        .find_by_field(RecordField::CategoryTags, "warrior")
        .await
        .unwrap();
    assert_eq!(warriors.len(), 1);
    assert_eq!(warriors[0].name, "Achilles");

    assert!(store
        .find_by_field(RecordField::FlawTag, "Nonexistent")
        .await
        .unwrap()
        .is_empty());
}
