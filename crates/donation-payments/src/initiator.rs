//! Checkout Session Initiator
//!
//! Validates a donation request and turns it into exactly one hosted
//! checkout session on the configured provider.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use donation_core::api::DonationRequest;
use donation_core::catalog::CauseId;
use donation_core::money;
use rust_decimal::Decimal;

use crate::checkout::{self, CheckoutRequest, CheckoutSession, PaymentMethod};
use crate::error::{PaymentError, Result};
use crate::provider::CheckoutProvider;

/// Default bound on the provider call
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(20);

/// A donation request that passed validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedDonation {
    pub amount: Decimal,
    pub amount_minor: i64,
    pub cause_id: CauseId,
    pub cause_name: String,
    pub donor_name: String,
    pub donor_email: String,
}

impl ValidatedDonation {
    /// Check a request in order: amount first, then the required fields.
    pub fn from_request(request: &DonationRequest) -> Result<Self> {
        let amount = request
            .amount
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or(PaymentError::InvalidAmount)?;
        let amount_minor = money::to_minor_units(amount)
            .filter(|minor| *minor >= 1)
            .ok_or(PaymentError::InvalidAmount)?;

        let cause_name = required(request.cause_name.as_deref(), "causeName")?;
        let donor_name = required(request.donor_name.as_deref(), "donorName")?;
        let donor_email = required(request.donor_email.as_deref(), "donorEmail")?;
        let cause_id = request
            .cause_id
            .ok_or_else(|| PaymentError::MissingFields("causeId".into()))?;

        Ok(Self {
            amount,
            amount_minor,
            cause_id,
            cause_name,
            donor_name,
            donor_email,
        })
    }

    /// Provider request for this donation; redirects point at `origin`.
    pub fn checkout_request(&self, origin: &str, idempotency_key: Option<String>) -> CheckoutRequest {
        let metadata = BTreeMap::from([
            ("causeId".to_string(), self.cause_id.to_string()),
            ("causeName".to_string(), self.cause_name.clone()),
            ("donorName".to_string(), self.donor_name.clone()),
            ("donorEmail".to_string(), self.donor_email.clone()),
        ]);

        CheckoutRequest {
            product_name: self.cause_name.clone(),
            product_description: format!("Don pour: {}", self.cause_name),
            unit_amount: self.amount_minor,
            currency: money::CURRENCY.to_string(),
            payment_methods: vec![PaymentMethod::Card, PaymentMethod::Paypal],
            success_url: checkout::success_url(
                origin,
                &self.amount.normalize().to_string(),
                &self.cause_name,
                &self.donor_name,
            ),
            cancel_url: checkout::cancel_url(origin),
            customer_email: self.donor_email.clone(),
            metadata,
            idempotency_key,
        }
    }
}

fn required(value: Option<&str>, field: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .ok_or_else(|| PaymentError::MissingFields(field.into()))
}

/// Stateless initiator shared by all requests
#[derive(Clone)]
pub struct CheckoutInitiator {
    provider: Arc<dyn CheckoutProvider>,
    timeout: Duration,
}

impl CheckoutInitiator {
    pub fn new(provider: Arc<dyn CheckoutProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn provider(&self) -> &dyn CheckoutProvider {
        self.provider.as_ref()
    }

    /// Validate `request` and create one checkout session.
    ///
    /// Nothing reaches the provider when validation fails. No retry is
    /// attempted; a timeout is reported as a provider failure.
    pub async fn initiate(
        &self,
        request: &DonationRequest,
        origin: &str,
        idempotency_key: Option<String>,
    ) -> Result<CheckoutSession> {
        let donation = ValidatedDonation::from_request(request)?;
        let checkout = donation.checkout_request(origin, idempotency_key);

        tracing::info!(
            provider = self.provider.name(),
            cause_id = donation.cause_id,
            amount = %donation.amount,
            amount_minor = donation.amount_minor,
            idempotent = checkout.idempotency_key.is_some(),
            "Creating checkout session"
        );

        let session = tokio::time::timeout(
            self.timeout,
            self.provider.create_checkout_session(&checkout),
        )
        .await
        .map_err(|_| PaymentError::Timeout(self.timeout))??;

        tracing::info!(
            session_id = %session.id,
            cause_id = donation.cause_id,
            "Checkout session created"
        );

        Ok(session)
    }
}
