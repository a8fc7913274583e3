//! Checkout session requests
//!
//! Provider-neutral description of one hosted checkout session, plus the
//! redirect URLs the provider sends the donor back to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Placeholder the provider substitutes with the real session id.
/// Must reach the provider unencoded.
pub const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Payment method offered on the hosted page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Paypal,
}

/// Request to create a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Line item name (the cause)
    pub product_name: String,

    /// Line item description
    pub product_description: String,

    /// Unit amount in minor units (cents)
    pub unit_amount: i64,

    /// Lowercase ISO 4217 code
    pub currency: String,

    /// Payment methods enabled on the hosted page
    pub payment_methods: Vec<PaymentMethod>,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,

    /// Pre-filled customer email
    pub customer_email: String,

    /// Reconciliation metadata
    pub metadata: BTreeMap<String, String>,

    /// Forwarded to the provider so a retried submit reuses the session
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider session ID
    pub id: String,

    /// Hosted checkout page to redirect the donor to
    pub url: String,
}

/// `{origin}/confirmation?session_id={CHECKOUT_SESSION_ID}&amount=..&cause=..&donor=..`
pub fn success_url(origin: &str, amount: &str, cause_name: &str, donor_name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("amount", amount)
        .append_pair("cause", cause_name)
        .append_pair("donor", donor_name)
        .finish();

    format!(
        "{}/confirmation?session_id={SESSION_ID_PLACEHOLDER}&{query}",
        origin.trim_end_matches('/')
    )
}

/// `{origin}/causes`
pub fn cancel_url(origin: &str) -> String {
    format!("{}/causes", origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_url_encoding() {
        let url = success_url("https://don.example/", "25", "Aide alimentaire", "Jean Dupont & fils");
        assert_eq!(
            url,
            "https://don.example/confirmation?session_id={CHECKOUT_SESSION_ID}\
             &amount=25&cause=Aide+alimentaire&donor=Jean+Dupont+%26+fils"
        );
    }

    #[test]
    fn test_cancel_url() {
        assert_eq!(cancel_url("http://localhost:3000"), "http://localhost:3000/causes");
    }
}
