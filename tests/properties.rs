//! Property-based tests for the tax calculator and payroll composer.
//!
//! Uses proptest to check the identities that must hold for every input,
//! against both the built-in IRSA 2024 schedule and generated schedules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use irsa_payroll::calculation::{
    IRSA_EXEMPTION_THRESHOLD, compute_payroll, compute_tax, default_contribution_schemes,
    get_bracket_table,
};
use irsa_payroll::models::{
    ContributionScheme, ContributionSchemes, Percentage, TaxBracket, TaxBracketTable,
};

const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Builds a contiguous table from bracket widths and one more rate than
/// widths for the open-ended top bracket.
fn table_from(widths: &[i64], rates: &[u8]) -> TaxBracketTable {
    let mut brackets = Vec::with_capacity(rates.len());
    let mut lower = 0;

    for (width, rate) in widths.iter().zip(rates) {
        let upper = lower + width;
        brackets.push(TaxBracket {
            lower_bound: lower,
            upper_bound: Some(upper),
            rate: Percentage::whole(*rate).unwrap(),
            label: String::new(),
        });
        lower = upper + 1;
    }

    brackets.push(TaxBracket {
        lower_bound: lower,
        upper_bound: None,
        rate: Percentage::whole(rates[widths.len()]).unwrap(),
        label: String::new(),
    });

    TaxBracketTable::new(brackets).unwrap()
}

fn arb_table() -> impl Strategy<Value = TaxBracketTable> {
    (1usize..6).prop_flat_map(|bounded| {
        (
            prop::collection::vec(1i64..2_000_000, bounded),
            prop::collection::vec(0u8..=100, bounded + 1),
        )
            .prop_map(|(widths, rates)| table_from(&widths, &rates))
    })
}

fn schemes(pension: (u8, u8), health: (u8, u8), health_active: bool) -> ContributionSchemes {
    let health = ContributionScheme::new(
        "OSTIE",
        Percentage::whole(health.0).unwrap(),
        Percentage::whole(health.1).unwrap(),
    );
    ContributionSchemes {
        pension: ContributionScheme::new(
            "CNAPS",
            Percentage::whole(pension.0).unwrap(),
            Percentage::whole(pension.1).unwrap(),
        ),
        health: if health_active {
            health
        } else {
            health.deactivated()
        },
    }
}

// =============================================================================
// Progressive tax
// =============================================================================

proptest! {
    /// Non-positive amounts are the zero-tax state.
    #[test]
    fn prop_non_positive_amount_is_untaxed(amount in i64::MIN..=0) {
        let result = compute_tax(amount, &get_bracket_table());
        prop_assert_eq!(result.total_tax, 0);
        prop_assert_eq!(result.effective_rate, Decimal::ZERO);
        prop_assert!(result.breakdown.is_empty());
    }

    /// Everything inside the 0% bracket owes nothing.
    #[test]
    fn prop_first_bracket_is_untaxed(amount in 0i64..=IRSA_EXEMPTION_THRESHOLD) {
        prop_assert_eq!(compute_tax(amount, &get_bracket_table()).total_tax, 0);
    }

    /// More income never means less tax.
    #[test]
    fn prop_tax_is_monotonic(a in 0i64..MAX_AMOUNT, b in 0i64..MAX_AMOUNT) {
        let table = get_bracket_table();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_tax(low, &table).total_tax <= compute_tax(high, &table).total_tax);
    }

    /// The slices taxed per bracket add back up to the taxable amount, and
    /// the total is the sum of the per-bracket taxes.
    #[test]
    fn prop_breakdown_sums_to_amount(amount in 1i64..MAX_AMOUNT) {
        let result = compute_tax(amount, &get_bracket_table());
        let covered: i64 = result.breakdown.iter().map(|b| b.amount_taxed).sum();
        let tax: i64 = result.breakdown.iter().map(|b| b.tax).sum();
        prop_assert_eq!(covered, amount);
        prop_assert_eq!(tax, result.total_tax);
    }

    /// The effective rate never exceeds the top marginal rate.
    #[test]
    fn prop_effective_rate_bounded_by_top_rate(amount in 1i64..MAX_AMOUNT) {
        let table = get_bracket_table();
        let result = compute_tax(amount, &table);
        prop_assert!(result.effective_rate >= Decimal::ZERO);
        prop_assert!(result.effective_rate <= table.top_rate().value());
    }

    /// Repeated calls give identical results.
    #[test]
    fn prop_tax_is_idempotent(amount in any::<i64>()) {
        let table = get_bracket_table();
        prop_assert_eq!(compute_tax(amount, &table), compute_tax(amount, &table));
    }

    /// Generated schedules keep the sum identity and monotonicity.
    #[test]
    fn prop_generated_tables_are_consistent(
        table in arb_table(),
        a in 0i64..50_000_000,
        b in 0i64..50_000_000,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_result = compute_tax(low, &table);
        let high_result = compute_tax(high, &table);

        prop_assert!(low_result.total_tax <= high_result.total_tax);
        if high > 0 {
            let covered: i64 = high_result.breakdown.iter().map(|b| b.amount_taxed).sum();
            prop_assert_eq!(covered, high);
        }
    }
}

// =============================================================================
// Payroll composer
// =============================================================================

proptest! {
    /// Net salary plus employee deductions is always the gross salary.
    #[test]
    fn prop_payroll_identity(
        gross in 0i64..MAX_AMOUNT,
        pension in (0u8..=100, 0u8..=100),
        health in (0u8..=100, 0u8..=100),
        health_active in any::<bool>(),
    ) {
        let payroll = compute_payroll(
            gross,
            &schemes(pension, health, health_active),
            &get_bracket_table(),
        )
        .unwrap();

        prop_assert_eq!(payroll.net_salary + payroll.total_employee_deductions, gross);
        prop_assert_eq!(
            payroll.total_employer_cost,
            gross + payroll.total_employer_contributions
        );
        prop_assert_eq!(
            payroll.taxable_income,
            gross - payroll.total_employee_contributions()
        );
    }

    /// Repeated calls give identical results.
    #[test]
    fn prop_payroll_is_idempotent(gross in 0i64..MAX_AMOUNT) {
        let schemes = default_contribution_schemes();
        let table = get_bracket_table();
        prop_assert_eq!(
            compute_payroll(gross, &schemes, &table).unwrap(),
            compute_payroll(gross, &schemes, &table).unwrap()
        );
    }

    /// Negative gross salaries are always rejected.
    #[test]
    fn prop_negative_gross_is_rejected(gross in i64::MIN..0) {
        let result = compute_payroll(gross, &default_contribution_schemes(), &get_bracket_table());
        prop_assert!(result.is_err());
    }
}
