use vouch_core::errors::{usage_error, ErrorInfo, VouchError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("tolerance", "-0.5")
        .with_context("reason", "example")
}

#[test]
fn usage_error_surface() {
    let err = VouchError::Usage(sample_info("tolerance-negative", "bad tolerance"));
    assert_eq!(err.info().code, "tolerance-negative");
    assert!(err.info().context.contains_key("tolerance"));
    assert!(err.is_usage());
}

#[test]
fn assertion_error_surface() {
    let err = VouchError::Assertion(sample_info("unverified-failures", "2 failed"));
    assert_eq!(err.info().code, "unverified-failures");
    assert!(!err.is_usage());
}

#[test]
fn serde_error_surface() {
    let err = VouchError::Serde(sample_info("json-read", "eof"));
    assert_eq!(err.info().code, "json-read");
}

#[test]
fn display_includes_code_context_and_hint() {
    let info = ErrorInfo::new("E001", "problem")
        .with_context("value", "1")
        .with_hint("try again");
    let err = VouchError::Usage(info);
    assert_eq!(
        err.to_string(),
        "usage error: problem (code: E001) | context: [value=1] | hint: try again"
    );
}

#[test]
fn usage_helper_builds_usage_family() {
    let err = usage_error("tolerance-nan", "tolerance cannot be NaN");
    assert!(err.is_usage());
    assert_eq!(err.info().message, "tolerance cannot be NaN");
}
