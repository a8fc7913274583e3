//! Router construction

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{
    create_payment_intent, get_cause, health_check, list_causes, preflight, web_manifest,
};
use crate::state::AppState;

pub const CHECKOUT_PATH: &str = "/api/create-payment-intent";

pub fn build_router(state: AppState) -> Router {
    let web_dir = state.config.shell.web_dir.clone();
    // Client-side routes (/causes, /donate/2, ...) all load index.html.
    let web_app = ServeDir::new(&web_dir).fallback(ServeFile::new(web_dir.join("index.html")));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health & app identity
        .route("/health", get(health_check))
        .route("/manifest.webmanifest", get(web_manifest))

        // Catalog
        .route("/api/causes", get(list_causes))
        .route("/api/causes/{id}", get(get_cause))

        // Checkout
        .route(CHECKOUT_PATH, post(create_payment_intent).options(preflight))

        // Static files (WASM frontend)
        .fallback_service(web_app)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
