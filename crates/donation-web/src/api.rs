//! API Client

use donation_core::api::{CheckoutResponse, DonationRequest};

const CHECKOUT_PATH: &str = "/api/create-payment-intent";

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Ask the server for a hosted checkout session; returns its URL.
///
/// `idempotency_key` is reused when the same form is resubmitted.
pub async fn create_payment_intent(
    request: &DonationRequest,
    idempotency_key: &str,
) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}{CHECKOUT_PATH}", origin()))
        .header("Idempotency-Key", idempotency_key)
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let body: CheckoutResponse = response.json().await.map_err(|e| e.to_string())?;
    body.into_redirect()
}

/// Full navigation away from the app (to the hosted checkout page).
pub fn redirect_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No browser window")?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("Navigation failed: {e:?}"))
}
