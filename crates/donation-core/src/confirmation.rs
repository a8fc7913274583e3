//! Confirmation View
//!
//! Builds the thank-you summary from the query parameters the payment
//! provider appends to the success redirect. The values are displayed as
//! received; the session itself is not checked against the provider.

use rust_decimal::Decimal;

use crate::error::{DonationError, Result};
use crate::intake::parse_amount;
use crate::money;

pub const PARAM_AMOUNT: &str = "amount";
pub const PARAM_CAUSE: &str = "cause";
pub const PARAM_DONOR: &str = "donor";
pub const PARAM_SESSION_ID: &str = "session_id";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation {
    pub amount: Decimal,
    pub cause: String,
    pub donor: String,
    pub session_id: String,
}

impl Confirmation {
    /// Read the four redirect parameters through `lookup`.
    ///
    /// A parameter that is absent or blank yields `MissingParameter`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(DonationError::MissingParameter(name))
        };

        let raw_amount = required(PARAM_AMOUNT)?;
        let cause = required(PARAM_CAUSE)?;
        let donor = required(PARAM_DONOR)?;
        let session_id = required(PARAM_SESSION_ID)?;

        let amount = parse_amount(&raw_amount)
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or(DonationError::InvalidParameter {
                name: PARAM_AMOUNT,
                value: raw_amount,
            })?;

        Ok(Self {
            amount,
            cause,
            donor,
            session_id,
        })
    }

    /// `"25.00€"`
    pub fn amount_display(&self) -> String {
        money::format_eur(self.amount)
    }

    /// `"Merci Jean !"`
    pub fn greeting(&self) -> String {
        format!("Merci {} !", self.donor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn parse(map: &HashMap<String, String>) -> Result<Confirmation> {
        Confirmation::from_lookup(|key| map.get(key).cloned())
    }

    const FULL: [(&str, &str); 4] = [
        ("amount", "25"),
        ("cause", "Test"),
        ("donor", "Jean"),
        ("session_id", "abc"),
    ];

    #[test]
    fn test_renders_summary() {
        let confirmation = parse(&params(&FULL)).unwrap();
        assert_eq!(confirmation.amount, dec!(25));
        assert_eq!(confirmation.amount_display(), "25.00€");
        assert_eq!(confirmation.cause, "Test");
        assert!(confirmation.greeting().contains("Jean"));
        assert_eq!(confirmation.session_id, "abc");
    }

    #[test]
    fn test_any_missing_parameter_is_rejected() {
        for skip in FULL.iter().map(|(k, _)| *k) {
            let partial: Vec<_> = FULL.iter().copied().filter(|(k, _)| *k != skip).collect();
            assert_eq!(
                parse(&params(&partial)),
                Err(DonationError::MissingParameter(skip)),
                "without {skip}"
            );
        }
    }

    #[test]
    fn test_invalid_amount() {
        let mut map = params(&FULL);
        map.insert("amount".into(), "0".into());
        assert!(matches!(parse(&map), Err(DonationError::InvalidParameter { .. })));

        map.insert("amount".into(), "abc".into());
        assert!(matches!(parse(&map), Err(DonationError::InvalidParameter { .. })));
    }

    #[test]
    fn test_fractional_amount() {
        let mut map = params(&FULL);
        map.insert("amount".into(), "19.995".into());
        assert_eq!(parse(&map).unwrap().amount_display(), "20.00€");
    }
}
