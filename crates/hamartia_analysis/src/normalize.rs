//! Turns untrusted completion text into a well-formed [`CharacterRecord`].
//!
//! [`normalize`] never fails. Text that is not a JSON object of the
//! expected shape becomes a fallback record carrying the parse error, so
//! callers always get every field populated and at least one tag.

use crate::strip_code_fence;
use hamartia_core::CharacterRecord;
use hamartia_error::{NormalizeError, NormalizeErrorKind};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const UNKNOWN_CHARACTER: &str = "Unknown character";

/// Fields as the model emits them. Every field is optional; record keys
/// are accepted as aliases so stored records re-normalize cleanly.
#[derive(Debug, Default, Deserialize)]
struct AnalysisPayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "characterName", alias = "name")]
    name: Option<String>,
    #[serde(default, rename = "hamartia", alias = "flawTag")]
    flaw_tag: Option<String>,
    #[serde(default, rename = "context", alias = "situationalContext")]
    situational_context: Option<String>,
    #[serde(
        default,
        rename = "phronesisLevel",
        alias = "phronesis",
        alias = "wisdomLevel"
    )]
    wisdom_level: Option<String>,
    #[serde(default, rename = "phronesisTrajectory", alias = "wisdomTrend")]
    wisdom_trend: Option<String>,
    #[serde(default, rename = "telos", alias = "purpose")]
    purpose: Option<String>,
    #[serde(default, rename = "universe", alias = "originWork")]
    origin_work: Option<String>,
    #[serde(default, rename = "greatestWin", alias = "notableSuccess")]
    notable_success: Option<String>,
    #[serde(default, rename = "greatestDefeat", alias = "notableFailure")]
    notable_failure: Option<String>,
    #[serde(default, rename = "tags", alias = "categoryTags")]
    category_tags: Option<Vec<String>>,
    #[serde(default, rename = "image", alias = "imageRef")]
    image_ref: Option<String>,
}

/// Normalize raw completion text for `subject` into a record.
///
/// Strips a surrounding code fence, parses a JSON object and fills every
/// absent or blank field with its default. Any parse failure yields
/// [`fallback_record`] instead.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::normalize;
///
/// let raw = "```json\n{\"characterName\":\"Hamlet\",\"hamartia\":\"Courage deficiency\",\"tags\":[\"tragedy\"]}\n```";
/// let record = normalize(raw, "Hamlet");
/// assert_eq!(record.flaw_tag, "Courage deficiency");
/// assert_eq!(record.situational_context, "Unknown context");
/// assert_eq!(record.image_ref, "hamlet.jpg");
///
/// let record = normalize("not json at all", "Hamlet");
/// assert!(record.id.starts_with("fallback-"));
/// assert!(record.notable_failure.starts_with("AI analysis failed: "));
/// ```
pub fn normalize(raw: &str, subject: &str) -> CharacterRecord {
    match parse_payload(raw) {
        Ok(payload) => {
            debug!(subject, "Normalized analysis payload");
            from_payload(payload, subject)
        }
        Err(e) => {
            let preview = raw.chars().take(100).collect::<String>();
            warn!(
                subject,
                error = %e.kind,
                response_preview = %preview,
                "Completion is not a usable analysis; substituting fallback"
            );
            fallback_record(subject, &e.kind.to_string())
        }
    }
}

/// Placeholder record for `subject` when analysis could not be completed.
///
/// `error_message` is embedded in `notable_failure`.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::fallback_record;
///
/// let record = fallback_record("Anna Karenina", "timeout");
/// assert_eq!(record.name, "Anna Karenina");
/// assert_eq!(record.notable_failure, "AI analysis failed: timeout");
/// assert_eq!(record.category_tags, vec!["error", "incomplete-analysis"]);
/// assert_eq!(record.image_ref, "anna-karenina.jpg");
/// ```
pub fn fallback_record(subject: &str, error_message: &str) -> CharacterRecord {
    let name = subject_name(subject);
    let error_message = match error_message.trim() {
        "" => "Unknown error",
        message => message,
    };

    CharacterRecord {
        id: generate_id("fallback"),
        image_ref: image_slug(&name),
        name,
        flaw_tag: "Analysis failed - Unable to determine tragic flaw".to_string(),
        situational_context: "Unknown context due to analysis error".to_string(),
        wisdom_level: "medium".to_string(),
        wisdom_trend: "constant".to_string(),
        purpose: "Unable to determine purpose".to_string(),
        origin_work: "Unknown universe".to_string(),
        notable_success: "Analysis incomplete".to_string(),
        notable_failure: format!("AI analysis failed: {}", error_message),
        category_tags: vec!["error".to_string(), "incomplete-analysis".to_string()],
    }
}

/// Image file name for a character: lower-cased, whitespace runs become `-`.
///
/// # Examples
///
/// ```
/// use hamartia_analysis::image_slug;
///
/// assert_eq!(image_slug("Lady  Macbeth"), "lady-macbeth.jpg");
/// ```
pub fn image_slug(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("{}.jpg", slug)
}

fn parse_payload(raw: &str) -> Result<AnalysisPayload, NormalizeError> {
    let body = strip_code_fence(raw);

    let value: Value = serde_json::from_str(body)
        .map_err(|e| NormalizeError::new(NormalizeErrorKind::InvalidJson(e.to_string())))?;

    if !value.is_object() {
        return Err(NormalizeError::new(NormalizeErrorKind::NotAnObject(
            json_kind(&value).to_string(),
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| NormalizeError::new(NormalizeErrorKind::FieldShape(e.to_string())))
}

fn from_payload(payload: AnalysisPayload, subject: &str) -> CharacterRecord {
    let subject = subject_name(subject);

    let category_tags: Vec<String> = payload
        .category_tags
        .unwrap_or_default()
        .into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();

    CharacterRecord {
        id: present(payload.id).unwrap_or_else(|| generate_id("char")),
        name: present(payload.name).unwrap_or_else(|| subject.clone()),
        flaw_tag: or_default(payload.flaw_tag, "Unknown flaw"),
        situational_context: or_default(payload.situational_context, "Unknown context"),
        wisdom_level: or_default(payload.wisdom_level, "medium"),
        wisdom_trend: or_default(payload.wisdom_trend, "constant"),
        purpose: or_default(payload.purpose, "Unknown purpose"),
        origin_work: or_default(payload.origin_work, "Unknown universe"),
        notable_success: or_default(payload.notable_success, "Unknown victory"),
        notable_failure: or_default(payload.notable_failure, "Unknown defeat"),
        category_tags: if category_tags.is_empty() {
            vec!["unknown".to_string()]
        } else {
            category_tags
        },
        image_ref: present(payload.image_ref).unwrap_or_else(|| image_slug(&subject)),
    }
}

/// Blank strings count as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn or_default(value: Option<String>, default: &str) -> String {
    present(value).unwrap_or_else(|| default.to_string())
}

fn subject_name(subject: &str) -> String {
    match subject.trim() {
        "" => UNKNOWN_CHARACTER.to_string(),
        name => name.to_string(),
    }
}

/// `{prefix}-{unix millis}-{9 random chars}`
fn generate_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &random[..9])
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_complete(record: &CharacterRecord) {
        for text in [
            &record.id,
            &record.name,
            &record.flaw_tag,
            &record.situational_context,
            &record.wisdom_level,
            &record.wisdom_trend,
            &record.purpose,
            &record.origin_work,
            &record.notable_success,
            &record.notable_failure,
            &record.image_ref,
        ] {
            assert!(!text.trim().is_empty(), "blank field in {:?}", record);
        }
        assert!(!record.category_tags.is_empty());
    }

    #[test]
    fn fenced_partial_payload_gets_defaults() {
        let raw = "```json\n{\"characterName\":\"Hamlet\",\"hamartia\":\"Courage deficiency\",\"tags\":[\"tragedy\"]}\n```";
        let record = normalize(raw, "Hamlet");

        assert!(record.id.starts_with("char-"));
        assert_eq!(record.name, "Hamlet");
        assert_eq!(record.flaw_tag, "Courage deficiency");
        assert_eq!(record.situational_context, "Unknown context");
        assert_eq!(record.wisdom_level, "medium");
        assert_eq!(record.wisdom_trend, "constant");
        assert_eq!(record.purpose, "Unknown purpose");
        assert_eq!(record.origin_work, "Unknown universe");
        assert_eq!(record.notable_success, "Unknown victory");
        assert_eq!(record.notable_failure, "Unknown defeat");
        assert_eq!(record.category_tags, vec!["tragedy"]);
        assert_eq!(record.image_ref, "hamlet.jpg");
    }

    #[test]
    fn full_payload_is_kept() {
        let raw = r#"{
            "id": "char-42",
            "characterName": "Achilles",
            "hamartia": "Patience deficiency",
            "context": "War (polemos)",
            "phronesisLevel": "Medium",
            "phronesisTrajectory": "Constant",
            "telos": "Glory",
            "universe": "Iliad",
            "greatestWin": "Kills Hector.",
            "greatestDefeat": "Loses Patroclus.",
            "tags": ["Mythology", "War"],
            "image": "achilles.png"
        }"#;
        let record = normalize(raw, "Achilles");

        assert_eq!(record.id, "char-42");
        assert_eq!(record.situational_context, "War (polemos)");
        assert_eq!(record.wisdom_level, "Medium");
        assert_eq!(record.purpose, "Glory");
        assert_eq!(record.category_tags, vec!["Mythology", "War"]);
        assert_eq!(record.image_ref, "achilles.png");
    }

    #[test]
    fn plain_text_becomes_fallback() {
        let record = normalize("not json at all", "Hamlet");

        assert!(record.id.starts_with("fallback-"));
        assert_eq!(record.name, "Hamlet");
        assert_eq!(
            record.flaw_tag,
            "Analysis failed - Unable to determine tragic flaw"
        );
        assert!(record.notable_failure.starts_with("AI analysis failed: "));
        assert!(record.notable_failure.contains("invalid JSON"));
        assert_eq!(record.category_tags, vec!["error", "incomplete-analysis"]);
        assert_complete(&record);
    }

    #[test]
    fn empty_string_becomes_fallback() {
        let record = normalize("", "Hamlet");
        assert!(record.id.starts_with("fallback-"));
        assert_complete(&record);
    }

    #[test]
    fn non_object_json_becomes_fallback() {
        let record = normalize("[\"Hamlet\"]", "Hamlet");
        assert!(record.id.starts_with("fallback-"));
        assert!(record.notable_failure.contains("an array"));
    }

    #[test]
    fn wrong_field_type_becomes_fallback() {
        let record = normalize(r#"{"characterName": "Hamlet", "tags": "tragedy"}"#, "Hamlet");
        assert!(record.id.starts_with("fallback-"));
        assert!(record.notable_failure.contains("unexpected field shape"));
    }

    #[test]
    fn blank_and_null_fields_count_as_absent() {
        let raw = r#"{"characterName": "  ", "hamartia": "", "telos": null, "tags": ["", " "]}"#;
        let record = normalize(raw, "Ophelia");

        assert_eq!(record.name, "Ophelia");
        assert_eq!(record.flaw_tag, "Unknown flaw");
        assert_eq!(record.purpose, "Unknown purpose");
        assert_eq!(record.category_tags, vec!["unknown"]);
    }

    #[test]
    fn empty_tag_list_gets_unknown() {
        let record = normalize(r#"{"tags": []}"#, "Creon");
        assert_eq!(record.category_tags, vec!["unknown"]);
    }

    #[test]
    fn model_name_wins_over_subject() {
        let record = normalize(r#"{"characterName": "Prince Hamlet"}"#, "hamlet");
        assert_eq!(record.name, "Prince Hamlet");
        // The image follows the requested name
        assert_eq!(record.image_ref, "hamlet.jpg");
    }

    #[test]
    fn record_keys_are_accepted() {
        let raw = r#"{"name": "Medea", "flawTag": "Temperance deficiency", "categoryTags": ["myth"], "phronesis": "high"}"#;
        let record = normalize(raw, "Medea");

        assert_eq!(record.flaw_tag, "Temperance deficiency");
        assert_eq!(record.category_tags, vec!["myth"]);
        assert_eq!(record.wisdom_level, "high");
    }

    #[test]
    fn blank_subject_still_yields_complete_record() {
        assert_complete(&normalize("garbage", "   "));
        assert_complete(&normalize("{}", ""));
        assert_eq!(normalize("{}", "").name, "Unknown character");
    }

    #[test]
    fn ids_are_unique_per_call() {
        let ids: HashSet<String> = (0..50).map(|_| normalize("{}", "Iago").id).collect();
        assert_eq!(ids.len(), 50);

        let fallback_ids: HashSet<String> =
            (0..50).map(|_| fallback_record("Iago", "x").id).collect();
        assert_eq!(fallback_ids.len(), 50);
    }

    #[test]
    fn id_has_expected_shape() {
        let id = normalize("{}", "Iago").id;
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "char");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
    }

    #[test]
    fn fallback_without_message_says_unknown_error() {
        let record = fallback_record("Iago", "");
        assert_eq!(record.notable_failure, "AI analysis failed: Unknown error");
    }

    #[test]
    fn slug_collapses_whitespace() {
        assert_eq!(image_slug("Jean  Valjean\t"), "jean-valjean.jpg");
        assert_eq!(image_slug("Mr. Darcy"), "mr.-darcy.jpg");
    }
}
