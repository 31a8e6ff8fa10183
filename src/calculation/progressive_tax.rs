//! Progressive income tax (IRSA) calculation.
//!
//! This module applies a [`TaxBracketTable`] to a taxable amount and returns
//! the per-bracket breakdown. Rounding happens per bracket: the total is the
//! sum of individually rounded bracket taxes, which can differ by a unit
//! from rounding the exact total once.

use crate::models::{BracketTax, TaxBracketTable, TaxComputationResult};

use super::rounding::{percent_of, ratio_percent};

/// Computes the progressive tax owed on `taxable_amount`.
///
/// Brackets are walked in ascending order. Each bracket absorbs the slice of
/// income between the previous bracket's upper bound and its own, taxed at
/// its rate and rounded half-up to the currency unit. The walk stops as soon
/// as the whole amount has been absorbed.
///
/// This function never fails: zero or negative amounts produce an empty
/// zero-tax result.
///
/// # Arguments
///
/// * `taxable_amount` - The income to tax, in whole currency units
/// * `table` - The schedule to apply
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::{compute_tax, get_bracket_table};
///
/// let table = get_bracket_table();
///
/// let result = compute_tax(700_000, &table);
/// assert_eq!(result.total_tax, 47_500);
/// assert_eq!(result.breakdown.len(), 5);
///
/// let exempt = compute_tax(350_000, &table);
/// assert_eq!(exempt.total_tax, 0);
/// ```
pub fn compute_tax(taxable_amount: i64, table: &TaxBracketTable) -> TaxComputationResult {
    if taxable_amount <= 0 {
        return TaxComputationResult::zero(taxable_amount);
    }

    let mut remaining = taxable_amount;
    let mut breakdown = Vec::with_capacity(table.len());

    for bracket in table {
        if remaining == 0 {
            break;
        }

        let amount_taxed = match bracket.capacity() {
            Some(capacity) => remaining.min(capacity),
            None => remaining,
        };
        if amount_taxed == 0 {
            continue;
        }

        breakdown.push(BracketTax {
            lower_bound: bracket.lower_bound,
            upper_bound: bracket.upper_bound,
            rate: bracket.rate,
            label: bracket.label.clone(),
            amount_taxed,
            tax: percent_of(amount_taxed, bracket.rate),
        });
        remaining -= amount_taxed;
    }

    let total_tax = breakdown.iter().map(|entry| entry.tax).sum();

    TaxComputationResult {
        taxable_amount,
        breakdown,
        total_tax,
        effective_rate: ratio_percent(total_tax, taxable_amount),
    }
}
