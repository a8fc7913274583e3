//! Checkout Providers
//!
//! Abstractions and implementations for hosted-checkout payment providers.

mod mock;
mod stripe;

pub use mock::MockCheckoutProvider;
pub use self::stripe::StripeClient;

use async_trait::async_trait;

use crate::checkout::{CheckoutRequest, CheckoutSession};
use crate::error::{PaymentError, Result};

/// Checkout provider trait (Strategy pattern)
///
/// Each call creates one new hosted session on the provider side.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a hosted checkout session
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession>;

    /// Whether this provider can actually take payments
    fn is_configured(&self) -> bool {
        true
    }

    /// Provider name
    fn name(&self) -> &str;
}

/// Stand-in used when no provider credentials are configured.
///
/// Every session creation fails with a configuration error.
#[derive(Debug, Default)]
pub struct DisabledProvider;

#[async_trait]
impl CheckoutProvider for DisabledProvider {
    async fn create_checkout_session(&self, _request: &CheckoutRequest) -> Result<CheckoutSession> {
        Err(PaymentError::Config("STRIPE_SECRET_KEY not set".into()))
    }

    fn is_configured(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "disabled"
    }
}
