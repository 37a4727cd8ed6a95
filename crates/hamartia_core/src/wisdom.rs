//! Advisory practical-wisdom classifications.

use serde::{Deserialize, Serialize};

/// How much practical wisdom a character shows.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WisdomLevel {
    /// low
    Low,
    /// medium
    Medium,
    /// high
    High,
}

/// Direction a character's practical wisdom moves over their story.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WisdomTrend {
    /// increasing
    Increasing,
    /// decreasing
    Decreasing,
    /// constant
    Constant,
}
