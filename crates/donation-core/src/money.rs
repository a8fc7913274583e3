//! Money Handling
//!
//! Amounts are euros held as `Decimal`. Payment providers want integer
//! minor units (cents); the conversion rounds half away from zero at two
//! decimal places, so `19.995` becomes `2000` and `19.994` becomes `1999`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currency code sent to the payment provider
pub const CURRENCY: &str = "eur";

/// Currency symbol used in display strings
pub const CURRENCY_SYMBOL: &str = "€";

const MINOR_UNIT_DP: u32 = 2;

/// Round to cents, half away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MINOR_UNIT_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert an amount to integer minor units.
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    round_to_cents(amount)
        .checked_mul(Decimal::ONE_HUNDRED)?
        .to_i64()
}

/// `25` → `"25.00€"`
pub fn format_eur(amount: Decimal) -> String {
    format!("{:.2}{CURRENCY_SYMBOL}", round_to_cents(amount))
}

/// French grouped display of whole euros: `12450` → `"12 450 €"`.
///
/// Groups are separated by a narrow no-break space, as `fr-FR` does.
pub fn format_eur_grouped(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(ch);
    }

    let sign = if whole.is_sign_negative() && !whole.is_zero() { "-" } else { "" };
    format!("{sign}{grouped}\u{a0}{CURRENCY_SYMBOL}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minor_units_whole_amount() {
        assert_eq!(to_minor_units(dec!(25)), Some(2500));
        assert_eq!(to_minor_units(dec!(0.01)), Some(1));
    }

    #[test]
    fn test_minor_units_round_half_up() {
        assert_eq!(to_minor_units(dec!(19.995)), Some(2000));
        assert_eq!(to_minor_units(dec!(19.994)), Some(1999));
        assert_eq!(to_minor_units(dec!(10.005)), Some(1001));
        assert_eq!(to_minor_units(dec!(0.004)), Some(0));
    }

    #[test]
    fn test_minor_units_overflow() {
        assert_eq!(to_minor_units(Decimal::MAX), None);
    }

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(dec!(25)), "25.00€");
        assert_eq!(format_eur(dec!(12.5)), "12.50€");
        assert_eq!(format_eur(dec!(19.995)), "20.00€");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_eur_grouped(dec!(12450)), "12\u{202f}450\u{a0}€");
        assert_eq!(format_eur_grouped(dec!(950)), "950\u{a0}€");
        assert_eq!(format_eur_grouped(dec!(1250000)), "1\u{202f}250\u{202f}000\u{a0}€");
    }
}
