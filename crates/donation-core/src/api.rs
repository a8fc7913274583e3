//! Wire types of the checkout-session endpoint
//!
//! `DonationRequest` is the JSON body the intake form posts, and
//! `CheckoutResponse` is what comes back.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::CauseId;

/// Body of `POST /api/create-payment-intent`
///
/// Every field is optional on the wire; the server decides what is
/// missing. A non-numeric `amount` deserializes as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    #[serde(
        default,
        deserialize_with = "lenient_amount",
        serialize_with = "rust_decimal::serde::float_option::serialize"
    )]
    pub amount: Option<Decimal>,

    #[serde(default)]
    pub cause_id: Option<CauseId>,

    #[serde(default)]
    pub cause_name: Option<String>,

    #[serde(default)]
    pub donor_name: Option<String>,

    #[serde(default)]
    pub donor_email: Option<String>,
}

/// Accepts a JSON number or a numeric string.
fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(&s),
        _ => None,
    }))
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Response of the checkout-session endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckoutResponse {
    pub fn created(session_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            success: true,
            session_id: Some(session_id.into()),
            url: Some(url.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// The hosted checkout URL to navigate to, or the message to show.
    pub fn into_redirect(self) -> std::result::Result<String, String> {
        if !self.success {
            return Err(self
                .error
                .unwrap_or_else(|| "Une erreur est survenue lors du paiement".into()));
        }
        match self.url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err("URL de paiement non reçue".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = DonationRequest {
            amount: Some(dec!(25)),
            cause_id: Some(2),
            cause_name: Some("Aide alimentaire".into()),
            donor_name: Some("Jean Dupont".into()),
            donor_email: Some("jean@example.com".into()),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], json!(25.0));
        assert_eq!(json["causeId"], 2);
        assert_eq!(json["donorEmail"], "jean@example.com");
    }

    #[test]
    fn test_lenient_amount() {
        let parsed: DonationRequest = serde_json::from_str(r#"{"amount": 19.995}"#).unwrap();
        assert_eq!(parsed.amount, Some(dec!(19.995)));

        let parsed: DonationRequest = serde_json::from_str(r#"{"amount": "12.50"}"#).unwrap();
        assert_eq!(parsed.amount, Some(dec!(12.5)));

        let parsed: DonationRequest = serde_json::from_str(r#"{"amount": "abc"}"#).unwrap();
        assert_eq!(parsed.amount, None);

        let parsed: DonationRequest = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(parsed.amount, None);

        let parsed: DonationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, DonationRequest::default());
    }

    #[test]
    fn test_response_shape() {
        let ok = serde_json::to_value(CheckoutResponse::created("cs_1", "https://pay")).unwrap();
        assert_eq!(ok, json!({"success": true, "sessionId": "cs_1", "url": "https://pay"}));

        let failed = serde_json::to_value(CheckoutResponse::failed("Montant invalide")).unwrap();
        assert_eq!(failed, json!({"success": false, "error": "Montant invalide"}));
    }

    #[test]
    fn test_into_redirect() {
        assert_eq!(
            CheckoutResponse::created("cs_1", "https://pay").into_redirect(),
            Ok("https://pay".to_string())
        );
        assert_eq!(
            CheckoutResponse::failed("Montant invalide").into_redirect(),
            Err("Montant invalide".to_string())
        );
        let no_url = CheckoutResponse { success: true, ..Default::default() };
        assert_eq!(no_url.into_redirect(), Err("URL de paiement non reçue".to_string()));
    }
}
