//! Donation Intake Form validation
//!
//! Runs in the browser before anything is sent to the server: a form
//! that fails here never produces a network call.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::api::DonationRequest;
use crate::catalog::Cause;
use crate::error::{DonationError, Result};

/// Quick-pick amounts shown above the custom amount field
pub const SUGGESTED_AMOUNTS: [u32; 4] = [10, 25, 50, 100];

/// Parse the amount field. Accepts a comma as decimal separator.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let input = input.replace(',', ".");
    Decimal::from_str(&input)
        .or_else(|_| Decimal::from_scientific(&input))
        .ok()
}

/// Minimal `local@domain.tld` shape check; the provider validates for real.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Validate the raw form fields for `cause`.
///
/// Checks run in order: amount, then empty name/email, then email shape.
pub fn validate_form(cause: &Cause, amount: &str, name: &str, email: &str) -> Result<DonationRequest> {
    let parsed = parse_amount(amount)
        .filter(|value| *value > Decimal::ZERO)
        .ok_or_else(|| DonationError::InvalidAmount(amount.to_string()))?;

    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(DonationError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(DonationError::InvalidEmail(email.to_string()));
    }

    Ok(DonationRequest {
        amount: Some(parsed),
        cause_id: Some(cause.id),
        cause_name: Some(cause.title.to_string()),
        donor_name: Some(name.to_string()),
        donor_email: Some(email.to_string()),
    })
}

/// Idempotency key of the intake form.
///
/// Resubmitting the same request reuses the key; once the donor changes
/// anything a fresh key is minted, so a session is never replayed for a
/// different donation.
#[derive(Clone, Debug, Default)]
pub struct SubmissionKey {
    last: Option<(DonationRequest, String)>,
}

impl SubmissionKey {
    pub fn key_for(&mut self, request: &DonationRequest, mint: impl FnOnce() -> String) -> String {
        if let Some((sent, key)) = &self.last {
            if sent == request {
                return key.clone();
            }
        }
        let key = mint();
        self.last = Some((request.clone(), key.clone()));
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use rust_decimal_macros::dec;

    fn cause() -> &'static Cause {
        catalog::find(2).unwrap()
    }

    #[test]
    fn test_valid_form() {
        let request = validate_form(cause(), "25", " Jean Dupont ", "jean@example.com").unwrap();
        assert_eq!(request.amount, Some(dec!(25)));
        assert_eq!(request.cause_id, Some(2));
        assert_eq!(request.cause_name.as_deref(), Some("Aide alimentaire"));
        assert_eq!(request.donor_name.as_deref(), Some("Jean Dupont"));
    }

    #[test]
    fn test_rejects_bad_amounts() {
        for amount in ["0", "", "   ", "-5", "abc", "0.00"] {
            let err = validate_form(cause(), amount, "Jean", "jean@example.com").unwrap_err();
            assert!(matches!(err, DonationError::InvalidAmount(_)), "amount {amount:?}");
        }
    }

    #[test]
    fn test_rejects_missing_fields() {
        assert_eq!(
            validate_form(cause(), "25", "", "jean@example.com"),
            Err(DonationError::MissingFields)
        );
        assert_eq!(validate_form(cause(), "25", "Jean", ""), Err(DonationError::MissingFields));
        assert_eq!(validate_form(cause(), "25", "  ", "  "), Err(DonationError::MissingFields));
    }

    #[test]
    fn test_amount_checked_before_fields() {
        assert!(matches!(
            validate_form(cause(), "0", "", ""),
            Err(DonationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["jean", "jean@", "@example.com", "jean@example", "je an@example.com", "a@b@c.fr"] {
            let err = validate_form(cause(), "25", "Jean", email).unwrap_err();
            assert!(matches!(err, DonationError::InvalidEmail(_)), "email {email:?}");
        }
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12,50"), Some(dec!(12.5)));
        assert_eq!(parse_amount(" 100 "), Some(dec!(100)));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1e2"), Some(dec!(100)));
        assert_eq!(parse_amount("2.5E1"), Some(dec!(25)));
    }

    #[test]
    fn test_exponent_amount_accepted_by_form() {
        let request = validate_form(cause(), "1e2", "Jean", "jean@example.com").unwrap();
        assert_eq!(request.amount, Some(dec!(100)));
    }

    #[test]
    fn test_submission_key_reused_for_same_request() {
        let mut keys = SubmissionKey::default();
        let request = validate_form(cause(), "25", "Jean", "jean@example.com").unwrap();
        let mut minted = 0;
        let mut mint = || {
            minted += 1;
            format!("key-{minted}")
        };

        let first = keys.key_for(&request, &mut mint);
        let retry = keys.key_for(&request, &mut mint);
        assert_eq!(first, "key-1");
        assert_eq!(retry, first);
    }

    #[test]
    fn test_submission_key_renewed_when_request_changes() {
        let mut keys = SubmissionKey::default();
        let at_25 = validate_form(cause(), "25", "Jean", "jean@example.com").unwrap();
        let at_50 = validate_form(cause(), "50", "Jean", "jean@example.com").unwrap();
        let renamed = validate_form(cause(), "50", "Marie", "jean@example.com").unwrap();

        let first = keys.key_for(&at_25, || "key-1".into());
        let second = keys.key_for(&at_50, || "key-2".into());
        let third = keys.key_for(&renamed, || "key-3".into());
        assert_eq!((first.as_str(), second.as_str(), third.as_str()), ("key-1", "key-2", "key-3"));

        // Going back to an earlier request still gets a new key.
        assert_eq!(keys.key_for(&at_25, || "key-4".into()), "key-4");
    }
}
