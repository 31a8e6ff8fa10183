//! Rounding helpers shared by the tax and contribution calculations.
//!
//! Amounts are whole Ariary. Every percentage application rounds half away
//! from zero to the currency unit at the point it is computed.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Percentage;

/// Rounds a decimal amount to the nearest currency unit, halves away from zero.
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::round_to_unit;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_unit(Decimal::new(25, 1)), 3);
/// assert_eq!(round_to_unit(Decimal::new(249, 2)), 2);
/// assert_eq!(round_to_unit(Decimal::new(5, 2)), 0);
/// ```
pub fn round_to_unit(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Applies a percentage to an amount and rounds to the currency unit.
///
/// The result never exceeds `amount` in magnitude because rates are capped
/// at 100%.
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::percent_of;
/// use irsa_payroll::models::Percentage;
///
/// let five = Percentage::whole(5).unwrap();
/// assert_eq!(percent_of(50_000, five), 2_500);
/// assert_eq!(percent_of(1, five), 0);
/// assert_eq!(percent_of(10, five), 1);
/// ```
pub fn percent_of(amount: i64, rate: Percentage) -> i64 {
    if rate.is_zero() || amount == 0 {
        return 0;
    }
    round_to_unit(Decimal::from(amount) * rate.value() / Decimal::ONE_HUNDRED)
}

/// Computes `part / whole * 100` rounded half-up to two decimals.
///
/// Returns zero when `whole` is not positive.
pub fn ratio_percent(part: i64, whole: i64) -> Decimal {
    if whole <= 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
