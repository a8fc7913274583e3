//! Application State

use std::sync::Arc;

use donation_payments::CheckoutInitiator;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout session initiator (stateless, provider behind a trait)
    pub initiator: Arc<CheckoutInitiator>,

    /// Loaded configuration
    pub config: Arc<Config>,
}
