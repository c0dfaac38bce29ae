use super::error::ErrorBody;
use crate::application::integrity::{GeneratedHash, HashVerification, PaymentIntegrityService};
use crate::domain::payment::{CallbackParams, PaymentData};
use crate::error::PaymentError;
use axum::{Json, body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateHashBody {
    payment_data: PaymentData,
}

#[derive(Deserialize)]
struct VerifyHashBody {
    params: CallbackParams,
}

// Bodies are parsed by hand: malformed JSON maps to `PaymentError::MalformedBody`.
pub async fn generate_hash(
    State(service): State<Arc<PaymentIntegrityService>>,
    body: Bytes,
) -> Result<Json<GeneratedHash>, PaymentError> {
    let body: GenerateHashBody = serde_json::from_slice(&body)?;
    Ok(Json(service.generate(body.payment_data).await?))
}

pub async fn verify_hash(
    State(service): State<Arc<PaymentIntegrityService>>,
    body: Bytes,
) -> Result<Json<HashVerification>, PaymentError> {
    let body: VerifyHashBody = serde_json::from_slice(&body)?;
    Ok(Json(service.verify(body.params).await?))
}

pub async fn preflight() -> &'static str {
    "ok"
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("Only POST is allowed")),
    )
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
