//! Mock Checkout Provider
//!
//! For tests and local demos. Records every request and answers with a
//! fake hosted-checkout URL instead of calling a payment provider.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::CheckoutProvider;
use crate::checkout::{CheckoutRequest, CheckoutSession, SESSION_ID_PLACEHOLDER};
use crate::error::{PaymentError, Result};

/// Calls and keyed sessions kept, oldest dropped first
pub const MAX_RECORDED: usize = 256;

#[derive(Debug, Default)]
pub struct MockCheckoutProvider {
    calls: Mutex<VecDeque<CheckoutRequest>>,
    sessions_by_key: Mutex<VecDeque<(CheckoutRequest, CheckoutSession)>>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockCheckoutProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a provider error carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// Every call waits `delay` before answering
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Most recent requests, oldest first
    pub fn calls(&self) -> Vec<CheckoutRequest> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn new_session(request: &CheckoutRequest) -> CheckoutSession {
        let id = format!("cs_test_{}", uuid::Uuid::new_v4().simple());
        // Mimic the provider's success redirect so demos reach the confirmation page.
        let url = request.success_url.replace(SESSION_ID_PLACEHOLDER, &id);
        CheckoutSession { id, url }
    }
}

#[async_trait]
impl CheckoutProvider for MockCheckoutProvider {
    async fn create_checkout_session(&self, request: &CheckoutRequest) -> Result<CheckoutSession> {
        push_bounded(
            &mut self.calls.lock().unwrap_or_else(PoisonError::into_inner),
            request.clone(),
        );

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.failure {
            return Err(PaymentError::Provider(message.clone()));
        }

        let Some(key) = &request.idempotency_key else {
            return Ok(Self::new_session(request));
        };

        let mut sessions = self
            .sessions_by_key
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = sessions
            .iter()
            .find(|(sent, _)| sent.idempotency_key.as_ref() == Some(key));

        match previous {
            Some((sent, session)) if sent == request => Ok(session.clone()),
            // Same rule as Stripe: a key is bound to the parameters it was first used with.
            Some(_) => Err(PaymentError::Provider(format!(
                "Idempotency key {key} was already used with different parameters"
            ))),
            None => {
                let session = Self::new_session(request);
                push_bounded(&mut sessions, (request.clone(), session.clone()));
                Ok(session)
            }
        }
    }

    /// Test double: never takes real payments.
    fn is_configured(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn push_bounded<T>(items: &mut VecDeque<T>, item: T) {
    if items.len() >= MAX_RECORDED {
        items.pop_front();
    }
    items.push_back(item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn request(key: Option<&str>) -> CheckoutRequest {
        CheckoutRequest {
            product_name: "Aide alimentaire".into(),
            product_description: "Don pour: Aide alimentaire".into(),
            unit_amount: 2500,
            currency: "eur".into(),
            payment_methods: Vec::new(),
            success_url: format!("http://localhost/confirmation?session_id={SESSION_ID_PLACEHOLDER}"),
            cancel_url: "http://localhost/causes".into(),
            customer_email: "jean@example.com".into(),
            metadata: BTreeMap::new(),
            idempotency_key: key.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_records_calls() {
        let provider = MockCheckoutProvider::new();
        let session = provider.create_checkout_session(&request(None)).await.unwrap();

        assert!(session.id.starts_with("cs_test_"));
        assert!(session.url.ends_with(&session.id));
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_idempotency_key_reuses_session() {
        let provider = MockCheckoutProvider::new();
        let first = provider.create_checkout_session(&request(Some("k1"))).await.unwrap();
        let second = provider.create_checkout_session(&request(Some("k1"))).await.unwrap();
        let other = provider.create_checkout_session(&request(None)).await.unwrap();

        assert_eq!(first, second);
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn test_idempotency_key_bound_to_parameters() {
        let provider = MockCheckoutProvider::new();
        provider.create_checkout_session(&request(Some("k1"))).await.unwrap();

        let changed = CheckoutRequest {
            unit_amount: 5000,
            ..request(Some("k1"))
        };
        let err = provider.create_checkout_session(&changed).await.unwrap_err();
        assert!(matches!(err, PaymentError::Provider(msg) if msg.contains("k1")));
    }

    #[tokio::test]
    async fn test_history_is_bounded() {
        let provider = MockCheckoutProvider::new();
        for i in 0..MAX_RECORDED + 10 {
            let key = format!("k{i}");
            provider.create_checkout_session(&request(Some(&key))).await.unwrap();
        }

        assert_eq!(provider.call_count(), MAX_RECORDED);
        assert_eq!(provider.calls()[0].idempotency_key.as_deref(), Some("k10"));
        assert_eq!(provider.sessions_by_key.lock().unwrap().len(), MAX_RECORDED);
    }

    #[test]
    fn test_not_reported_as_configured() {
        assert!(!MockCheckoutProvider::new().is_configured());
        assert_eq!(MockCheckoutProvider::new().name(), "mock");
    }

    #[tokio::test]
    async fn test_failing_provider() {
        let provider = MockCheckoutProvider::failing("card_declined");
        let err = provider.create_checkout_session(&request(None)).await.unwrap_err();
        assert!(matches!(err, PaymentError::Provider(msg) if msg == "card_declined"));
    }
}
