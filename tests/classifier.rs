use roundbus::blockchain::classifier::{is_oversized, ErrorClassifier, ErrorKind};
use roundbus::error::ApiError;

#[test]
fn rate_limit_by_message_prefix() {
    let classifier = ErrorClassifier::new();
    let err = ApiError::new("RequestError", "Rate Limited at endpoint /v2/blocks/100");
    assert_eq!(classifier.classify(&err).kind, ErrorKind::RateLimit);
}

#[test]
fn rate_limit_by_status_code_regardless_of_message() {
    let classifier = ErrorClassifier::new();
    let err = ApiError::with_status("IndexerHttpError", "too many requests", 429);
    assert_eq!(classifier.classify(&err).kind, ErrorKind::RateLimit);
}

#[test]
fn rate_limit_prefix_must_anchor_at_start() {
    let classifier = ErrorClassifier::new();
    let err = ApiError::new("RequestError", "was Rate Limited at endpoint /health");
    assert_eq!(classifier.classify(&err).kind, ErrorKind::Default);
}

#[test]
fn timeout_variants_both_classify() {
    let classifier = ErrorClassifier::new();
    for message in ["timeout of 30000ms exceeded", "operation timed out"] {
        let err = ApiError::new("RequestError", message);
        assert_eq!(classifier.classify(&err).kind, ErrorKind::Timeout);
    }
}

#[test]
fn disconnection_prefix_classifies_as_connection_lost() {
    let classifier = ErrorClassifier::new();
    let err = ApiError::new("RequestError", "disconnected from https://indexer.example");
    assert_eq!(classifier.classify(&err).kind, ErrorKind::ConnectionLost);
}

#[test]
fn oversized_response_classifies_and_triggers_fallback_predicate() {
    let classifier = ErrorClassifier::new();
    let err = ApiError::new("IndexerHttpError", "searching for round 20: result limit exceeded");
    assert_eq!(classifier.classify(&err).kind, ErrorKind::OversizedResponse);
    assert!(is_oversized(&err));
    assert!(!is_oversized(&ApiError::new("RequestError", "operation timed out")));
}

#[test]
fn unmatched_errors_fall_to_default_preserving_diagnostics() {
    let classifier = ErrorClassifier::new();
    let err = ApiError::with_status("IndexerHttpError", "no blocks found for round 9", 404);
    let classified = classifier.classify(&err);
    assert_eq!(classified.kind, ErrorKind::Default);
    assert_eq!(classified.name, "IndexerHttpError");
    assert_eq!(classified.message, "no blocks found for round 9");
}
