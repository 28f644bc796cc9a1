use crate::client::client::{api_error_from_body, idempotency_key, unwrap_envelope};
use crate::{Client, ClientError};

use reqwest::{Method, StatusCode};
use serde_json::json;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/api/");
    assert_eq!(client.base_url, "http://localhost:5000/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000/api");
    assert_eq!(client.base_url, "http://localhost:5000/api");
}

#[test]
fn test_token_stored() {
    let client = Client::new("http://localhost:5000/api").with_token("abc");
    assert_eq!(client.token(), Some("abc"));
}

#[test]
fn test_token_cleared() {
    let mut client = Client::new("http://localhost:5000/api").with_token("abc");
    client.set_token(None);
    assert!(client.token().is_none());
}

// =========================================================================
// Envelope handling
// =========================================================================

#[test]
fn test_unwrap_envelope_named_key() {
    let body = json!({ "tasks": [{ "_id": "t1" }], "count": 1 });
    assert_eq!(unwrap_envelope(body, "tasks"), json!([{ "_id": "t1" }]));
}

#[test]
fn test_unwrap_envelope_data_key() {
    let body = json!({ "success": true, "data": [1, 2, 3] });
    assert_eq!(unwrap_envelope(body, "tasks"), json!([1, 2, 3]));
}

#[test]
fn test_unwrap_envelope_named_key_inside_data() {
    let body = json!({ "data": { "user": { "_id": "u1" } } });
    assert_eq!(unwrap_envelope(body, "user"), json!({ "_id": "u1" }));
}

#[test]
fn test_unwrap_envelope_bare_payload() {
    let body = json!([{ "_id": "t1" }]);
    assert_eq!(unwrap_envelope(body.clone(), "tasks"), body);
}

// =========================================================================
// Error bodies
// =========================================================================

#[test]
fn test_error_body_nested_code_and_message() {
    let body = json!({ "error": { "code": "NOT_FOUND", "message": "Task not found" } });
    let err = api_error_from_body(StatusCode::NOT_FOUND, &body, "");

    match err {
        ClientError::Api {
            status,
            code,
            message,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "NOT_FOUND");
            assert_eq!(message, "Task not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_body_flat_message_falls_back_to_status_code() {
    let body = json!({ "message": "Amount exceeds due" });
    let err = api_error_from_body(StatusCode::BAD_REQUEST, &body, "");

    match err {
        ClientError::Api { code, message, .. } => {
            assert_eq!(code, "HTTP_400");
            assert_eq!(message, "Amount exceeds due");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_error_body_plain_string_error() {
    let body = json!({ "error": "Invalid token" });
    let err = api_error_from_body(StatusCode::UNAUTHORIZED, &body, "");

    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("Invalid token"));
}

#[test]
fn test_error_body_raw_text() {
    let err = api_error_from_body(
        StatusCode::BAD_GATEWAY,
        &serde_json::Value::Null,
        "upstream unavailable",
    );
    assert!(err.to_string().contains("upstream unavailable"));
    assert!(err.to_string().contains("HTTP_502"));
}

#[test]
fn test_error_body_empty_uses_reason_phrase() {
    let err = api_error_from_body(
        StatusCode::INTERNAL_SERVER_ERROR,
        &serde_json::Value::Null,
        "  ",
    );
    assert!(err.to_string().contains("Internal Server Error"));
}

// =========================================================================
// Idempotency keys
// =========================================================================

#[test]
fn test_idempotency_key_stable_for_same_submission() {
    let body = br#"{"leadIds":["l1"],"assignedTo":"m1"}"#;

    let first = idempotency_key(&Method::POST, "/leads/bulk-assign", body, "");
    let second = idempotency_key(&Method::POST, "/leads/bulk-assign", body, "");

    assert_eq!(first, second);
}

#[test]
fn test_idempotency_key_differs_by_payload_path_and_scope() {
    let body = br#"{"collectingAmount":500.0}"#;
    let base = idempotency_key(&Method::PATCH, "/admission-fees/s1/payment", body, "1500.00");

    let other_student = idempotency_key(&Method::PATCH, "/admission-fees/s2/payment", body, "1500.00");
    let other_balance = idempotency_key(&Method::PATCH, "/admission-fees/s1/payment", body, "1000.00");
    let other_amount = idempotency_key(
        &Method::PATCH,
        "/admission-fees/s1/payment",
        br#"{"collectingAmount":400.0}"#,
        "1500.00",
    );

    assert_ne!(base, other_student);
    assert_ne!(base, other_balance);
    assert_ne!(base, other_amount);
}
