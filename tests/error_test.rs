//! Tests for error classification and display.

use furrow::FurrowError;

#[test]
fn remote_family() {
    assert!(FurrowError::Http("timed out".into()).is_remote());
    assert!(
        FurrowError::Api {
            status: 502,
            message: "bad gateway".into()
        }
        .is_remote()
    );
    assert!(FurrowError::Decode("missing field".into()).is_remote());

    assert!(!FurrowError::Configuration("bad".into()).is_remote());
    assert!(!FurrowError::Unsupported.is_remote());
}

#[test]
fn status_only_for_api_errors() {
    let err = FurrowError::Api {
        status: 422,
        message: "invalid sample".into(),
    };
    assert_eq!(err.status(), Some(422));
    assert_eq!(FurrowError::Http("reset".into()).status(), None);
}

#[test]
fn display_messages() {
    let err = FurrowError::Api {
        status: 500,
        message: "model not loaded".into(),
    };
    assert_eq!(err.to_string(), "backend error (500): model not loaded");
    assert_eq!(
        FurrowError::Unsupported.to_string(),
        "backend does not support this operation"
    );
}

#[test]
fn json_errors_convert() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let err: FurrowError = parse.unwrap_err().into();
    assert!(matches!(err, FurrowError::Json(_)));
    assert!(!err.is_remote());
}
