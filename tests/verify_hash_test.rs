mod common;

use axum::http::StatusCode;
use common::*;
use payu_hash::application::integrity::ServiceOptions;
use payu_hash::domain::credentials::MerchantCredentials;
use payu_hash::infrastructure::in_memory::StaticCredentialStore;
use serde_json::json;

#[tokio::test]
async fn test_matching_response_is_valid() {
    let request = callback_body("success", SUCCESS_RESPONSE_HASH);
    let (status, body) = send(app(), post_json("/payu-verify-hash", &request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isValid"], true);
    assert_eq!(body["expectedHash"], SUCCESS_RESPONSE_HASH);
    assert_eq!(body["receivedHash"], SUCCESS_RESPONSE_HASH);
}

#[tokio::test]
async fn test_changed_status_is_invalid() {
    let request = callback_body("failure", SUCCESS_RESPONSE_HASH);
    let (status, body) = send(app(), post_json("/payu-verify-hash", &request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isValid"], false);
    assert_ne!(body["expectedHash"], SUCCESS_RESPONSE_HASH);
    assert_eq!(body["receivedHash"], SUCCESS_RESPONSE_HASH);
}

#[tokio::test]
async fn test_numeric_amount_verifies_like_text() {
    let mut request = callback_body("success", SUCCESS_RESPONSE_HASH);
    request["params"]["amount"] = json!(100);

    let (_, body) = send(app(), post_json("/payu-verify-hash", &request)).await;
    assert_eq!(body["isValid"], true);
}

#[tokio::test]
async fn test_missing_required_fields_in_order() {
    let mut request = callback_body("success", SUCCESS_RESPONSE_HASH);
    request["params"].as_object_mut().unwrap().remove("status");
    request["params"].as_object_mut().unwrap().remove("amount");

    let (status, body) = send(app(), post_json("/payu-verify-hash", &request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing field: status");

    let mut request = callback_body("success", "");
    request["params"]["txnid"] = json!(null);
    let (_, body) = send(app(), post_json("/payu-verify-hash", &request)).await;
    assert_eq!(body["error"], "Missing field: hash");
}

#[tokio::test]
async fn test_optional_fields_may_be_absent() {
    let request = json!({
        "params": {
            "hash": SUCCESS_RESPONSE_HASH,
            "status": "success",
            "txnid": "TXN1",
            "amount": "100.00"
        }
    });

    let (status, body) = send(app(), post_json("/payu-verify-hash", &request)).await;
    assert_eq!(status, StatusCode::OK);
    // email, firstname and productinfo now hash as empty segments
    assert_eq!(body["isValid"], false);
}

#[tokio::test]
async fn test_missing_credentials_is_a_server_error() {
    let request = callback_body("success", SUCCESS_RESPONSE_HASH);
    let (status, body) = send(unconfigured_app(), post_json("/payu-verify-hash", &request)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "PayU merchant credentials are not configured");
}

#[tokio::test]
async fn test_expected_hash_can_be_withheld() {
    let app = app_with(
        StaticCredentialStore::new(MerchantCredentials::new(KEY, SALT).unwrap()),
        ServiceOptions {
            expose_expected_hash: false,
        },
    );
    let request = callback_body("success", SUCCESS_RESPONSE_HASH);
    let (status, body) = send(app, post_json("/payu-verify-hash", &request)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isValid"], true);
    assert!(body.get("expectedHash").is_none());
}

#[tokio::test]
async fn test_malformed_json_is_a_server_error() {
    let (status, body) = send(app(), post_raw("/payu-verify-hash", "not json")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
}
