//! Progressive tax computation results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Percentage;

/// The tax levied on the slice of income that fell in one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    /// Inclusive lower bound of the bracket.
    pub lower_bound: i64,
    /// Inclusive upper bound of the bracket, `None` when unbounded.
    pub upper_bound: Option<i64>,
    /// The bracket rate.
    pub rate: Percentage,
    /// The bracket's descriptor, copied for display.
    pub label: String,
    /// Portion of the taxable amount absorbed by this bracket.
    pub amount_taxed: i64,
    /// Tax for this bracket, rounded half-up to the currency unit.
    pub tax: i64,
}

/// The full breakdown of a progressive tax computation.
///
/// # Example
///
/// ```
/// use irsa_payroll::calculation::{compute_tax, get_bracket_table};
///
/// let result = compute_tax(450_000, &get_bracket_table());
/// assert_eq!(result.total_tax, 7_500);
/// assert_eq!(result.breakdown.len(), 3);
/// assert_eq!(result.effective_rate.to_string(), "1.67");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    /// The amount the schedule was applied to.
    pub taxable_amount: i64,
    /// One entry per bracket that absorbed a non-zero amount, ascending.
    pub breakdown: Vec<BracketTax>,
    /// Sum of the individually rounded per-bracket taxes.
    pub total_tax: i64,
    /// `total_tax / taxable_amount * 100`, rounded to two decimals.
    pub effective_rate: Decimal,
}

impl TaxComputationResult {
    /// The result for a non-positive taxable amount.
    pub fn zero(taxable_amount: i64) -> Self {
        Self {
            taxable_amount,
            breakdown: Vec::new(),
            total_tax: 0,
            effective_rate: Decimal::ZERO,
        }
    }

    /// Rate of the highest bracket reached, if any income was taxed.
    pub fn marginal_rate(&self) -> Option<Percentage> {
        self.breakdown.last().map(|entry| entry.rate)
    }

    /// Sum of the amounts absorbed by every bracket.
    pub fn amount_covered(&self) -> i64 {
        self.breakdown.iter().map(|entry| entry.amount_taxed).sum()
    }
}
