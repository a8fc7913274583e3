//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN,
        },
        HeaderMap, StatusCode,
    },
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use donation_core::{
    api::{CheckoutResponse, DonationRequest},
    catalog::{self, Cause},
};
use donation_payments::PaymentError;

use crate::manifest::WebManifest;
use crate::state::AppState;

/// Client-supplied key that makes a resubmitted donation reuse its session
pub const IDEMPOTENCY_KEY_HEADER: &str = "idempotency-key";

const MAX_IDEMPOTENCY_KEY_LEN: usize = 255;

const PREFLIGHT_ALLOW_HEADERS: &str =
    "authorization, x-client-info, apikey, content-type, idempotency-key";

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider: String,
    pub stripe_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.initiator.provider();

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider: provider.name().to_string(),
        stripe_configured: provider.is_configured(),
    })
}

/// `GET /manifest.webmanifest`
pub async fn web_manifest(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/manifest+json")],
        Json(WebManifest::from(&state.config.shell)),
    )
}

/// `GET /api/causes`
pub async fn list_causes() -> Json<&'static [Cause]> {
    Json(catalog::all())
}

/// `GET /api/causes/{id}`
pub async fn get_cause(
    Path(id): Path<String>,
) -> Result<Json<&'static Cause>, (StatusCode, Json<ErrorResponse>)> {
    catalog::get_by_param(&id).map(Json).map_err(|err| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
                code: "CAUSE_NOT_FOUND".into(),
            }),
        )
    })
}

/// CORS preflight for the checkout endpoint: headers only, no body.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_HEADERS, PREFLIGHT_ALLOW_HEADERS),
            (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
        ],
    )
}

/// Create a hosted checkout session for a donation.
///
/// Every failure (malformed body, validation, provider) answers 400 with
/// `{success: false, error}`.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<CheckoutResponse>) {
    let origin = request_origin(&headers).unwrap_or(state.config.public_origin.as_str());
    let idempotency_key = idempotency_key(&headers);

    let result = match serde_json::from_slice::<DonationRequest>(&body) {
        Ok(request) => state.initiator.initiate(&request, origin, idempotency_key).await,
        Err(e) => Err(PaymentError::from(e)),
    };

    match result {
        Ok(session) => (
            StatusCode::OK,
            Json(CheckoutResponse::created(session.id, session.url)),
        ),
        Err(e) => {
            if e.is_provider_failure() {
                tracing::error!(error = %e, "Checkout session creation failed");
            } else {
                tracing::warn!(error = %e, "Donation request rejected");
            }
            (
                StatusCode::BAD_REQUEST,
                Json(CheckoutResponse::failed(e.user_message())),
            )
        }
    }
}

/// `Origin` header when it is a usable http(s) origin
fn request_origin(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ORIGIN)
        .and_then(|v| v.to_str().ok())
        .filter(|origin| origin.starts_with("http://") || origin.starts_with("https://"))
}

fn idempotency_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get(IDEMPOTENCY_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|key| !key.is_empty() && key.len() <= MAX_IDEMPOTENCY_KEY_LEN)
        .map(String::from)
}
