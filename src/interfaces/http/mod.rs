//! HTTP surface: routes, CORS policy, and the error body shape.

pub mod error;
pub mod handlers;

use crate::application::integrity::PaymentIntegrityService;
use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub const GENERATE_HASH_PATH: &str = "/payu-generate-hash";
pub const VERIFY_HASH_PATH: &str = "/payu-verify-hash";
pub const HEALTH_PATH: &str = "/health";

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

pub fn router(service: Arc<PaymentIntegrityService>) -> Router {
    Router::new()
        .route(
            GENERATE_HASH_PATH,
            post(handlers::generate_hash)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            VERIFY_HASH_PATH,
            post(handlers::verify_hash)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(HEALTH_PATH, get(handlers::health))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
