//! Partial record updates.

use crate::RecordField;
use hamartia_error::{BuilderError, BuilderErrorKind};
use serde::{Deserialize, Serialize};

/// A partial [`crate::CharacterRecord`]: only present fields are written.
///
/// There is no `name` field: the key of a stored record is
/// fixed once written.
///
/// # Examples
///
/// ```
/// use hamartia_core::RecordUpdate;
///
/// let update = RecordUpdate::default()
///     .with_flaw_tag("Ambition excess")
///     .with_wisdom_trend("decreasing");
///
/// assert_eq!(update.flaw_tag.as_deref(), Some("Ambition excess"));
/// assert!(update.purpose.is_none());
/// assert!(!update.is_empty());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters,
)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_", strip_option, into)]
pub struct RecordUpdate {
    /// New identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New tragic flaw label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flaw_tag: Option<String>,
    /// New situational context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situational_context: Option<String>,
    /// New wisdom level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wisdom_level: Option<String>,
    /// New wisdom trajectory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wisdom_trend: Option<String>,
    /// New purpose
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// New origin work
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_work: Option<String>,
    /// New greatest achievement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notable_success: Option<String>,
    /// New greatest failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notable_failure: Option<String>,
    /// Replacement tag list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_tags: Option<Vec<String>>,
    /// New image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl RecordUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set one field from its textual form.
    ///
    /// `categoryTags` takes a comma-separated list; blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Fails for `name`, which is the key and cannot be updated, and for a
    /// tag list with no non-blank entries.
    pub fn set(&mut self, field: RecordField, value: impl Into<String>) -> Result<(), BuilderError> {
        let value = value.into();
        match field {
            RecordField::Name => {
                return Err(BuilderError::new(BuilderErrorKind::ValidationFailed(
                    "name is the record key and cannot be updated".to_string(),
                )));
            }
            RecordField::Id => self.id = Some(value),
            RecordField::FlawTag => self.flaw_tag = Some(value),
            RecordField::SituationalContext => self.situational_context = Some(value),
            RecordField::WisdomLevel => self.wisdom_level = Some(value),
            RecordField::WisdomTrend => self.wisdom_trend = Some(value),
            RecordField::Purpose => self.purpose = Some(value),
            RecordField::OriginWork => self.origin_work = Some(value),
            RecordField::NotableSuccess => self.notable_success = Some(value),
            RecordField::NotableFailure => self.notable_failure = Some(value),
            RecordField::ImageRef => self.image_ref = Some(value),
            RecordField::CategoryTags => {
                let tags: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect();
                if tags.is_empty() {
                    return Err(BuilderError::new(BuilderErrorKind::ValidationFailed(
                        "categoryTags needs at least one non-blank tag".to_string(),
                    )));
                }
                self.category_tags = Some(tags);
            }
        }
        Ok(())
    }
}
