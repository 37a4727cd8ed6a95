//! Filterable record fields.

use serde::{Deserialize, Serialize};

/// A field of [`crate::CharacterRecord`] that can be filtered on.
///
/// Parses from the camelCase record key. The keys used in model output
/// (`hamartia`, `phronesisLevel`, …) are accepted as aliases.
///
/// # Examples
///
/// ```
/// use hamartia_core::RecordField;
///
/// assert_eq!("flawTag".parse::<RecordField>().unwrap(), RecordField::FlawTag);
/// assert_eq!("hamartia".parse::<RecordField>().unwrap(), RecordField::FlawTag);
/// assert_eq!(RecordField::WisdomLevel.to_string(), "wisdomLevel");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    /// `id`
    #[strum(to_string = "id")]
    Id,
    /// `name`
    #[strum(to_string = "name", serialize = "characterName")]
    Name,
    /// `flawTag`
    #[strum(to_string = "flawTag", serialize = "hamartia")]
    FlawTag,
    /// `situationalContext`
    #[strum(to_string = "situationalContext", serialize = "context")]
    SituationalContext,
    /// `wisdomLevel`
    #[strum(to_string = "wisdomLevel", serialize = "phronesisLevel")]
    WisdomLevel,
    /// `wisdomTrend`
    #[strum(to_string = "wisdomTrend", serialize = "phronesisTrajectory")]
    WisdomTrend,
    /// `purpose`
    #[strum(to_string = "purpose", serialize = "telos")]
    Purpose,
    /// `originWork`
    #[strum(to_string = "originWork", serialize = "universe")]
    OriginWork,
    /// `notableSuccess`
    #[strum(to_string = "notableSuccess", serialize = "greatestWin")]
    NotableSuccess,
    /// `notableFailure`
    #[strum(to_string = "notableFailure", serialize = "greatestDefeat")]
    NotableFailure,
    /// `categoryTags`
    #[strum(to_string = "categoryTags", serialize = "tags")]
    CategoryTags,
    /// `imageRef`
    #[strum(to_string = "imageRef", serialize = "image")]
    ImageRef,
}
