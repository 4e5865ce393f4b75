//! Tests for the error system.

use senz::auth::AuthError;
use senz::error::*;

#[test]
fn error_api_creation() {
    let err = SenzError::api(404, "Not found");
    assert!(matches!(&err, SenzError::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "API error (status 404): Not found");
}

#[test]
fn auth_errors_become_authentication_failures() {
    let err: SenzError = AuthError::ExpiredOrInvalidGrant.into();
    assert!(matches!(&err, SenzError::Authentication(msg) if msg == "Expired or invalid grant"));
    assert_eq!(err.recovery_suggestion(), RecoverySuggestion::Reauthenticate);
}

#[test]
fn error_helper_mappings_are_stable_for_major_variants() {
    struct Case {
        error: SenzError,
        expected_category: ErrorCategory,
        expected_recovery: RecoverySuggestion,
    }

    let network_error = reqwest::Client::new()
        .get("http://[::1")
        .build()
        .unwrap_err();
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();

    let cases = vec![
        Case {
            error: SenzError::Authentication("bad-token".to_string()),
            expected_category: ErrorCategory::Authentication,
            expected_recovery: RecoverySuggestion::Reauthenticate,
        },
        Case {
            error: SenzError::api(403, "Forbidden"),
            expected_category: ErrorCategory::Authentication,
            expected_recovery: RecoverySuggestion::Reauthenticate,
        },
        Case {
            error: SenzError::Timeout(10_000),
            expected_category: ErrorCategory::Timeout,
            expected_recovery: RecoverySuggestion::RetryLater,
        },
        Case {
            error: SenzError::Network(network_error),
            expected_category: ErrorCategory::Network,
            expected_recovery: RecoverySuggestion::RetryLater,
        },
        Case {
            error: SenzError::api(502, "Bad Gateway"),
            expected_category: ErrorCategory::Server,
            expected_recovery: RecoverySuggestion::RetryLater,
        },
        Case {
            error: SenzError::Configuration("bad-config".to_string()),
            expected_category: ErrorCategory::Configuration,
            expected_recovery: RecoverySuggestion::CheckConfiguration,
        },
        Case {
            error: SenzError::Serialization(serde_error),
            expected_category: ErrorCategory::Serialization,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
        Case {
            error: SenzError::Failure("unexpected".to_string()),
            expected_category: ErrorCategory::Unknown,
            expected_recovery: RecoverySuggestion::ContactSupport,
        },
    ];

    for case in cases {
        assert_eq!(case.error.category(), case.expected_category, "{}", case.error);
        assert_eq!(
            case.error.recovery_suggestion(),
            case.expected_recovery,
            "{}",
            case.error
        );
    }
}
