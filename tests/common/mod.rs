#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use payu_hash::application::integrity::{PaymentIntegrityService, ServiceOptions};
use payu_hash::domain::credentials::MerchantCredentials;
use payu_hash::infrastructure::in_memory::StaticCredentialStore;
use payu_hash::interfaces::http::router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub const KEY: &str = "K";
pub const SALT: &str = "S";

/// SHA-512 of `K|TXN1|100.00|Prints|Jane|jane@x.com|||||||||||S`.
pub const CHECKOUT_HASH: &str = "77c46ada4444a4856b4f627654f7e3e0aeede6c53cc26dfe63a97793305125007fa74952658f886de8fdaaf2b6b906fa51f043d778ec07469dca5b5af422f685";

/// SHA-512 of `S|success||||||jane@x.com|Jane|Prints|100.00|TXN1|K`.
pub const SUCCESS_RESPONSE_HASH: &str = "83c15eabb537ec77d142cec5d9dbc2c2824ee0f97b1bc6df5414a4efdf5c5c92178c7c1dbdc45feb9972639957a95b73db0c06e3995b0e617b4b08dc1cb6b02b";

pub fn app() -> Router {
    app_with(
        StaticCredentialStore::new(MerchantCredentials::new(KEY, SALT).unwrap()),
        ServiceOptions::default(),
    )
}

pub fn unconfigured_app() -> Router {
    app_with(StaticCredentialStore::unconfigured(), ServiceOptions::default())
}

pub fn app_with(store: StaticCredentialStore, options: ServiceOptions) -> Router {
    router(Arc::new(PaymentIntegrityService::new(Box::new(store), options)))
}

pub fn post_json(path: &str, body: &Value) -> Request<Body> {
    post_raw(path, body.to_string())
}

pub fn post_raw(path: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn checkout_body() -> Value {
    serde_json::json!({
        "paymentData": {
            "txnid": "TXN1",
            "amount": 100,
            "productinfo": "Prints",
            "firstname": "Jane",
            "email": "jane@x.com"
        }
    })
}

pub fn callback_body(status: &str, hash: &str) -> Value {
    serde_json::json!({
        "params": {
            "hash": hash,
            "status": status,
            "txnid": "TXN1",
            "amount": "100.00",
            "email": "jane@x.com",
            "firstname": "Jane",
            "productinfo": "Prints"
        }
    })
}
