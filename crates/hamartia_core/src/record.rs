//! The persisted character analysis record.

use crate::{RecordField, RecordUpdate, WisdomLevel, WisdomTrend};
use serde::{Deserialize, Serialize};

/// Aristotelian analysis of a single character, keyed by `name`.
///
/// Records produced by the normalizer have every string field non-empty and
/// at least one category tag. The advisory enumerations (`wisdom_level`,
/// `wisdom_trend`) are kept as the raw model text; use
/// [`CharacterRecord::wisdom_level_kind`] to classify them.
///
/// # Examples
///
/// ```
/// use hamartia_core::CharacterRecord;
///
/// let json = r#"{
///     "id": "char-1", "name": "Hamlet", "flawTag": "Courage deficiency",
///     "situationalContext": "Prince of Denmark", "wisdomLevel": "high",
///     "wisdomTrend": "decreasing", "purpose": "Avenge his father",
///     "originWork": "Hamlet", "notableSuccess": "Exposes Claudius",
///     "notableFailure": "Dies", "categoryTags": ["tragedy"],
///     "imageRef": "hamlet.jpg"
/// }"#;
/// let record: CharacterRecord = serde_json::from_str(json).unwrap();
/// assert_eq!(record.name, "Hamlet");
/// assert_eq!(record.category_tags, vec!["tragedy".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    /// Unique identifier, `char-…` for analyses and `fallback-…` for placeholders
    pub id: String,
    /// Subject name, the storage key
    pub name: String,
    /// Tragic flaw label
    pub flaw_tag: String,
    /// Who the character is and their circumstances
    pub situational_context: String,
    /// Practical wisdom level: low, medium or high
    pub wisdom_level: String,
    /// Practical wisdom trajectory: increasing, decreasing or constant
    pub wisdom_trend: String,
    /// The character's ultimate purpose
    pub purpose: String,
    /// Story, franchise or historical setting
    pub origin_work: String,
    /// Greatest achievement
    pub notable_success: String,
    /// Greatest failure
    pub notable_failure: String,
    /// Free-form category tags
    pub category_tags: Vec<String>,
    /// Image file name derived from the subject name
    pub image_ref: String,
}

impl CharacterRecord {
    /// Classify `wisdom_level`, if it names a known level.
    pub fn wisdom_level_kind(&self) -> Option<WisdomLevel> {
        self.wisdom_level.parse().ok()
    }

    /// Classify `wisdom_trend`, if it names a known trajectory.
    pub fn wisdom_trend_kind(&self) -> Option<WisdomTrend> {
        self.wisdom_trend.parse().ok()
    }

    /// Overwrite every field present in `update`. The name never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamartia_core::{CharacterRecord, RecordUpdate};
    /// # let mut record: CharacterRecord = serde_json::from_value(serde_json::json!({
    /// #   "id": "1", "name": "Hamlet", "flawTag": "a", "situationalContext": "b",
    /// #   "wisdomLevel": "high", "wisdomTrend": "constant", "purpose": "c",
    /// #   "originWork": "d", "notableSuccess": "e", "notableFailure": "f",
    /// #   "categoryTags": ["g"], "imageRef": "hamlet.jpg" })).unwrap();
    ///
    /// record.apply(RecordUpdate::default().with_wisdom_level("low"));
    /// assert_eq!(record.wisdom_level, "low");
    /// assert_eq!(record.purpose, "c");
    /// ```
    pub fn apply(&mut self, update: RecordUpdate) {
        let RecordUpdate {
            id,
            flaw_tag,
            situational_context,
            wisdom_level,
            wisdom_trend,
            purpose,
            origin_work,
            notable_success,
            notable_failure,
            category_tags,
            image_ref,
        } = update;

        if let Some(v) = id {
            self.id = v;
        }
        if let Some(v) = flaw_tag {
            self.flaw_tag = v;
        }
        if let Some(v) = situational_context {
            self.situational_context = v;
        }
        if let Some(v) = wisdom_level {
            self.wisdom_level = v;
        }
        if let Some(v) = wisdom_trend {
            self.wisdom_trend = v;
        }
        if let Some(v) = purpose {
            self.purpose = v;
        }
        if let Some(v) = origin_work {
            self.origin_work = v;
        }
        if let Some(v) = notable_success {
            self.notable_success = v;
        }
        if let Some(v) = notable_failure {
            self.notable_failure = v;
        }
        if let Some(v) = category_tags {
            self.category_tags = v;
        }
        if let Some(v) = image_ref {
            self.image_ref = v;
        }
    }

    /// Text of a single-valued field; `None` for `categoryTags`.
    pub fn text(&self, field: RecordField) -> Option<&str> {
        let value = match field {
            RecordField::Id => &self.id,
            RecordField::Name => &self.name,
            RecordField::FlawTag => &self.flaw_tag,
            RecordField::SituationalContext => &self.situational_context,
            RecordField::WisdomLevel => &self.wisdom_level,
            RecordField::WisdomTrend => &self.wisdom_trend,
            RecordField::Purpose => &self.purpose,
            RecordField::OriginWork => &self.origin_work,
            RecordField::NotableSuccess => &self.notable_success,
            RecordField::NotableFailure => &self.notable_failure,
            RecordField::ImageRef => &self.image_ref,
            RecordField::CategoryTags => return None,
        };
        Some(value)
    }

    /// Exact equality on `field`; tag membership for `categoryTags`.
    pub fn matches(&self, field: RecordField, value: &str) -> bool {
        match self.text(field) {
            Some(text) => text == value,
            None => self.category_tags.iter().any(|tag| tag == value),
        }
    }
}
