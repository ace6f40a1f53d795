//! Unit tests for the built-in settings validator.

use crate::validation::{
    domain::{PluginRequest, ValidationError, ValidationResult},
    ports::Validator,
    services::{DefaultValidator, default_validator::REQUEST_BODY_KEY},
};
use rstest::rstest;

fn validate(request: &PluginRequest) -> ValidationResult {
    DefaultValidator
        .validate(request)
        .expect("default validator never faults")
}

fn keys(result: &ValidationResult) -> Vec<&str> {
    result.errors().iter().map(ValidationError::key).collect()
}

#[rstest]
fn request_without_body_passes() {
    assert!(validate(&PluginRequest::new("validate")).is_empty());
}

#[rstest]
#[case::empty("")]
#[case::whitespace("  \n\t")]
#[case::empty_object("{}")]
#[case::string_values(r#"{"url":"https://ci.example.com","token":"secret"}"#)]
#[case::null_value(r#"{"proxy":null}"#)]
fn well_formed_bodies_pass(#[case] body: &str) {
    let request = PluginRequest::new("validate").with_body(body);
    assert!(validate(&request).is_empty());
}

#[rstest]
#[case::malformed("{not json")]
#[case::array(r#"["url"]"#)]
#[case::scalar("42")]
#[case::string(r#""settings""#)]
fn non_object_bodies_fail_under_body_key(#[case] body: &str) {
    let request = PluginRequest::new("validate").with_body(body);
    let result = validate(&request);
    assert_eq!(keys(&result), [REQUEST_BODY_KEY]);
}

#[rstest]
fn array_body_names_the_found_type() {
    let request = PluginRequest::new("validate").with_body("[]");
    let result = validate(&request);
    assert_eq!(
        result.errors()[0].message(),
        "must be a JSON object, found array"
    );
}

#[rstest]
fn each_non_string_property_is_reported() {
    let request = PluginRequest::new("validate")
        .with_body(r#"{"url":"https://ci.example.com","port":8153,"secure":true}"#);
    let result = validate(&request);

    // serde_json orders object keys alphabetically.
    assert_eq!(keys(&result), ["port", "secure"]);
    assert_eq!(result.errors()[0].message(), "must be a string, found number");
    assert_eq!(result.errors()[1].message(), "must be a string, found boolean");
}
