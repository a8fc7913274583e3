//! DonateNow HTTP Server
//!
//! Axum-based server for the donation app: the checkout-session
//! endpoint, the cause catalog API, the web-app manifest, and the
//! compiled WASM front-end.

mod app;
mod config;
mod handlers;
mod manifest;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use donation_payments::{
    CheckoutInitiator, CheckoutProvider, DisabledProvider, MockCheckoutProvider, StripeClient,
};

use crate::app::{build_router, CHECKOUT_PATH};
use crate::config::{Config, ProviderKind};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Initialize payments
    let provider: Arc<dyn CheckoutProvider> = match (config.provider, &config.stripe_secret_key) {
        (ProviderKind::Mock, _) => {
            tracing::warn!("⚠ Using in-memory checkout provider - no real payments");
            Arc::new(MockCheckoutProvider::new())
        }
        (ProviderKind::Stripe, Some(key)) => {
            tracing::info!("✓ Stripe configured");
            Arc::new(StripeClient::new(key))
        }
        (ProviderKind::Stripe, None) => {
            tracing::warn!("⚠ Stripe not configured - donations will fail");
            tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
            Arc::new(DisabledProvider)
        }
    };

    let initiator = CheckoutInitiator::new(provider, config.provider_timeout);

    let bind_addr = config.bind_addr.clone();
    let state = AppState {
        initiator: Arc::new(initiator),
        config: Arc::new(config),
    };

    tracing::info!(
        app_id = %state.config.shell.app_id,
        web_dir = %state.config.shell.web_dir.display(),
        timeout_secs = state.config.provider_timeout.as_secs(),
        "Serving web app"
    );

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("DonateNow server running on http://{}", bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                - Health check");
    tracing::info!("  GET  /api/causes            - Cause catalog");
    tracing::info!("  GET  /api/causes/{{id}}       - Single cause");
    tracing::info!("  POST {}  - Create checkout session", CHECKOUT_PATH);
    tracing::info!("  GET  /manifest.webmanifest  - Web app manifest");

    axum::serve(listener, app).await?;

    Ok(())
}
