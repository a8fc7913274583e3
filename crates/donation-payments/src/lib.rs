//! # donation-payments
//!
//! Checkout session initiation for DonateNow.
//!
//! ## Hosted checkout flow
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │ Donate form │────▶│  Stripe Hosted  │────▶│  /confirmation   │
//! │  (intake)   │     │  Checkout Page  │     │  (success URL)   │
//! └─────────────┘     └─────────────────┘     └──────────────────┘
//!                              │ cancel
//!                              ▼
//!                         /causes
//! ```
//!
//! The initiator never sees card data. It validates the donation,
//! converts the amount to cents and asks the provider for a session; the
//! donor is then redirected to the returned URL.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use donation_payments::{CheckoutInitiator, StripeClient, DEFAULT_PROVIDER_TIMEOUT};
//!
//! let initiator = CheckoutInitiator::new(
//!     Arc::new(StripeClient::new("sk_test_xxx")),
//!     DEFAULT_PROVIDER_TIMEOUT,
//! );
//!
//! let session = initiator
//!     .initiate(&request, "https://donate.example", Some(idempotency_key))
//!     .await?;
//!
//! // Redirect donor to: session.url
//! ```

mod checkout;
mod error;
mod initiator;
mod provider;

pub use checkout::{
    cancel_url, success_url, CheckoutRequest, CheckoutSession, PaymentMethod,
    SESSION_ID_PLACEHOLDER,
};
pub use error::{PaymentError, Result};
pub use initiator::{CheckoutInitiator, ValidatedDonation, DEFAULT_PROVIDER_TIMEOUT};
pub use provider::{CheckoutProvider, DisabledProvider, MockCheckoutProvider, StripeClient};
