//! Unit tests for the validation result accumulator and response envelope.

use crate::validation::{
    adapters::JsonResultSerializer,
    domain::{PluginResponse, ResponseStatus, ValidationError, ValidationResult, combine},
    ports::ResultSerializer,
};
use rstest::{fixture, rstest};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn url_error() -> ValidationResult {
    ValidationResult::new().add_error("url", "must not be blank")
}

#[fixture]
fn token_error() -> ValidationResult {
    ValidationResult::new().add_error("token", "must not be blank")
}

// ============================================================================
// Accumulator behaviour
// ============================================================================

#[rstest]
fn new_result_is_empty() {
    let result = ValidationResult::new();
    assert!(result.is_empty());
    assert_eq!(result.len(), 0);
}

#[rstest]
fn merge_appends_right_after_left(url_error: ValidationResult, token_error: ValidationResult) {
    let merged = url_error.merge(token_error);

    let keys: Vec<&str> = merged.errors().iter().map(ValidationError::key).collect();
    assert_eq!(keys, ["url", "token"]);
}

#[rstest]
fn merging_empty_results_stays_empty() {
    assert!(combine(ValidationResult::new(), ValidationResult::new()).is_empty());
}

#[rstest]
fn combine_is_associative(url_error: ValidationResult, token_error: ValidationResult) {
    let port_error = ValidationResult::new().add_error("port", "must be a number");

    let left = combine(combine(url_error.clone(), token_error.clone()), port_error.clone());
    let right = combine(url_error, combine(token_error, port_error));

    assert_eq!(left, right);
}

#[rstest]
#[case::empty_then_error(ValidationResult::new(), ValidationResult::new().add_error("a", "b"))]
#[case::error_then_empty(ValidationResult::new().add_error("a", "b"), ValidationResult::new())]
#[case::both_empty(ValidationResult::new(), ValidationResult::new())]
fn emptiness_does_not_depend_on_order(
    #[case] first: ValidationResult,
    #[case] second: ValidationResult,
) {
    let forwards = combine(first.clone(), second.clone());
    let backwards = combine(second, first);
    assert_eq!(forwards.is_empty(), backwards.is_empty());
    assert_eq!(forwards.len(), backwards.len());
}

#[rstest]
fn display_lists_key_message_pairs(url_error: ValidationResult, token_error: ValidationResult) {
    let rendered = url_error.merge(token_error).to_string();
    assert_eq!(rendered, "[url: must not be blank; token: must not be blank]");
}

#[rstest]
fn result_collects_from_iterator() {
    let result: ValidationResult = ["a", "b"]
        .into_iter()
        .map(|key| ValidationError::new(key, "invalid"))
        .collect();
    assert_eq!(result.len(), 2);
}

#[rstest]
fn result_wraps_error_vec_in_order() {
    let result = ValidationResult::from(vec![
        ValidationError::new("url", "must not be blank"),
        ValidationError::new("token", "must not be blank"),
    ]);

    assert_eq!(
        result,
        ValidationResult::new()
            .add_error("url", "must not be blank")
            .add_error("token", "must not be blank")
    );
}

// ============================================================================
// JSON serialization
// ============================================================================

#[rstest]
fn empty_result_serializes_to_empty_array() {
    let json = JsonResultSerializer
        .to_json(&ValidationResult::new())
        .expect("empty result should serialize");
    assert_eq!(json, "[]");
}

#[rstest]
fn errors_serialize_as_key_message_objects(url_error: ValidationResult) {
    let json = JsonResultSerializer
        .to_json(&url_error)
        .expect("result should serialize");
    assert_eq!(json, r#"[{"key":"url","message":"must not be blank"}]"#);
}

#[rstest]
fn serialized_result_parses_back(url_error: ValidationResult, token_error: ValidationResult) {
    let merged = url_error.merge(token_error);
    let json = JsonResultSerializer
        .to_json(&merged)
        .expect("result should serialize");
    let parsed: ValidationResult = serde_json::from_str(&json).expect("valid JSON array");
    assert_eq!(parsed, merged);
}

// ============================================================================
// Response envelope
// ============================================================================

#[rstest]
#[case::success(PluginResponse::Success("[]".to_owned()), ResponseStatus::Success, 200)]
#[case::failed(
    PluginResponse::ValidationFailed("[]".to_owned()),
    ResponseStatus::ValidationFailed,
    412
)]
fn response_reports_status_and_code(
    #[case] response: PluginResponse,
    #[case] status: ResponseStatus,
    #[case] code: u16,
) {
    assert_eq!(response.status(), status);
    assert_eq!(response.status_code(), code);
    assert_eq!(response.body(), "[]");
}

#[rstest]
#[case::success(PluginResponse::Success("[]".to_owned()))]
#[case::failed(PluginResponse::ValidationFailed(r#"[{"key":"a","message":"b"}]"#.to_owned()))]
fn into_body_returns_payload(#[case] response: PluginResponse) {
    let expected = response.body().to_owned();
    assert_eq!(response.into_body(), expected);
}

#[rstest]
fn response_status_displays_snake_case() {
    assert_eq!(ResponseStatus::ValidationFailed.to_string(), "validation_failed");
    assert_eq!(ResponseStatus::Success.to_string(), "success");
}
