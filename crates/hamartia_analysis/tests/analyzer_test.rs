// Tests for CharacterAnalyzer using MockDriver.

mod test_utils;

use hamartia_analysis::{AnalysisSettings, CharacterAnalyzer, FLAW_LABELS};
use hamartia_core::Role;
use hamartia_error::{CompletionErrorKind, HamartiaErrorKind};
use test_utils::{MockDriver, analysis_json};

#[tokio::test]
async fn test_analysis_request_carries_prompt_and_settings() {
    let analyzer = CharacterAnalyzer::new(MockDriver::new_success(analysis_json(
        "Hamlet",
        "Courage deficiency",
    )));

    analyzer.analyze("Hamlet").await.unwrap();

    let requests = analyzer.driver().requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.temperature, Some(0.7));
    assert_eq!(request.max_tokens, Some(7000));
    assert_eq!(request.model, None);

    let prompt = request.last_user_text().unwrap();
    assert!(prompt.contains("Hamlet"));
    for label in FLAW_LABELS {
        assert!(prompt.contains(label), "prompt is missing {}", label);
    }
}

#[tokio::test]
async fn test_fenced_response_is_normalized() {
    let fenced = format!(
        "```json\n{}\n```",
        analysis_json("Hamlet", "Courage deficiency")
    );
    let analyzer = CharacterAnalyzer::new(MockDriver::new_success(fenced));

    let record = analyzer.analyze("Hamlet").await.unwrap();

    assert_eq!(record.name, "Hamlet");
    assert_eq!(record.flaw_tag, "Courage deficiency");
    assert_eq!(record.wisdom_level, "low");
    assert_eq!(record.wisdom_trend, "decreasing");
    assert_eq!(record.category_tags, vec!["tragedy", "revenge"]);
    assert_eq!(record.image_ref, "hamlet.jpg");
    assert!(record.id.starts_with("char-"));
}

#[tokio::test]
async fn test_unparseable_response_yields_fallback() {
    let analyzer = CharacterAnalyzer::new(MockDriver::new_success("not json"));

    let record = analyzer.analyze("Hamlet").await.unwrap();

    assert!(record.id.starts_with("fallback-"));
    assert_eq!(record.name, "Hamlet");
    assert!(record.notable_failure.starts_with("AI analysis failed: "));
    assert_eq!(record.category_tags, vec!["error", "incomplete-analysis"]);
}

#[tokio::test]
async fn test_driver_error_propagates_from_analyze() {
    let analyzer =
        CharacterAnalyzer::new(MockDriver::new_error(CompletionErrorKind::EmptyResponse));

    let err = analyzer.analyze("Hamlet").await.unwrap_err();

    match err.kind() {
        HamartiaErrorKind::Completion(e) => {
            assert_eq!(e.kind, CompletionErrorKind::EmptyResponse)
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_analyze_or_fallback_absorbs_driver_error() {
    let analyzer = CharacterAnalyzer::new(MockDriver::new_error(
        CompletionErrorKind::RateLimited("slow down".to_string()),
    ));

    let record = analyzer.analyze_or_fallback("Medea").await;

    assert_eq!(record.name, "Medea");
    assert!(record.id.starts_with("fallback-"));
    assert!(record.notable_failure.contains("slow down"));
}

#[tokio::test]
async fn test_fallback_failure_text_has_no_source_location() {
    let analyzer = CharacterAnalyzer::new(MockDriver::new_error(
        CompletionErrorKind::RateLimited("slow down".to_string()),
    ));

    let record = analyzer.analyze_or_fallback("Medea").await;

    assert_eq!(
        record.notable_failure,
        format!(
            "AI analysis failed: {}",
            CompletionErrorKind::RateLimited("slow down".to_string())
        )
    );
    assert!(!record.notable_failure.contains(" at line "));
    assert!(!record.notable_failure.contains(".rs"));
}

#[tokio::test]
async fn test_settings_override_model() {
    let settings = AnalysisSettings::builder()
        .model("gpt-4o".to_string())
        .max_tokens(1000u32)
        .build()
        .unwrap();
    let analyzer = CharacterAnalyzer::with_settings(
        MockDriver::new_success(analysis_json("Hamlet", "Excess of caution")),
        settings,
    );

    analyzer.analyze("Hamlet").await.unwrap();

    let request = &analyzer.driver().requests()[0];
    assert_eq!(request.model.as_deref(), Some("gpt-4o"));
    assert_eq!(request.max_tokens, Some(1000));
}

#[tokio::test]
async fn test_suggest_splits_and_truncates() {
    let analyzer = CharacterAnalyzer::new(MockDriver::new_success(
        "1. Oedipus\n2. Creon\n\n- Antigone\nJocasta\n",
    ));

    let names = analyzer.suggest("Theban plays", 3).await;

    assert_eq!(names, vec!["Oedipus", "Creon", "Antigone"]);
    let request = &analyzer.driver().requests()[0];
    assert_eq!(request.temperature, Some(0.8));
    assert_eq!(request.max_tokens, Some(200));
    assert!(request.last_user_text().unwrap().contains("Theban plays"));
}

#[tokio::test]
async fn test_suggest_failure_is_empty() {
    let analyzer = CharacterAnalyzer::new(MockDriver::new_error(CompletionErrorKind::Api {
        status: 500,
        message: "boom".to_string(),
    }));

    assert!(analyzer.suggest("anything", 5).await.is_empty());
    assert!(analyzer.try_suggest("anything", 5).await.is_err());
}
