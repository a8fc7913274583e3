//! Stripe Checkout Integration
//!
//! Hosted checkout: the donor leaves the site for Stripe's payment page
//! and comes back through the success or cancel URL.

use std::collections::HashMap;

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionPaymentMethodTypes, Currency, RequestStrategy,
};

use super::CheckoutProvider;
use crate::checkout::{CheckoutRequest, CheckoutSession, PaymentMethod};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
#[derive(Clone)]
pub struct StripeClient {
    client: Client,
}

impl StripeClient {
    /// Create a new Stripe client
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Client for one call, carrying the idempotency key when present
    fn client_for(&self, request: &CheckoutRequest) -> Client {
        match &request.idempotency_key {
            Some(key) => self
                .client
                .clone()
                .with_strategy(RequestStrategy::Idempotent(key.clone())),
            None => self.client.clone(),
        }
    }
}

fn currency(code: &str) -> Result<Currency> {
    match code {
        "eur" => Ok(Currency::EUR),
        other => Err(PaymentError::Config(format!("Unsupported currency: {other}"))),
    }
}

const fn payment_method_type(method: PaymentMethod) -> CreateCheckoutSessionPaymentMethodTypes {
    match method {
        PaymentMethod::Card => CreateCheckoutSessionPaymentMethodTypes::Card,
        PaymentMethod::Paypal => CreateCheckoutSessionPaymentMethodTypes::Paypal,
    }
}

#[async_trait]
impl CheckoutProvider for StripeClient {
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        let currency = currency(&request.currency)?;

        let mut params = CreateCheckoutSession::new();
        params.customer_email = Some(&request.customer_email);
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.mode = Some(CheckoutSessionMode::Payment);
        params.payment_method_types = Some(
            request
                .payment_methods
                .iter()
                .copied()
                .map(payment_method_type)
                .collect(),
        );
        params.metadata = Some(
            request
                .metadata
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<HashMap<_, _>>(),
        );

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency,
                unit_amount: Some(request.unit_amount),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: request.product_name.clone(),
                    description: Some(request.product_description.clone()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client_for(request), params)
            .await
            .map_err(|e| PaymentError::Provider(e.to_string()))?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Provider("No checkout URL returned".into()))?;

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
        })
    }

    fn name(&self) -> &str {
        "stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use donation_core::money;

    #[test]
    fn test_currency_mapping() {
        assert!(matches!(currency(money::CURRENCY), Ok(Currency::EUR)));
        assert!(matches!(currency("usd"), Err(PaymentError::Config(_))));
    }

    #[test]
    fn test_payment_method_mapping() {
        assert!(matches!(
            payment_method_type(PaymentMethod::Paypal),
            CreateCheckoutSessionPaymentMethodTypes::Paypal
        ));
    }
}
