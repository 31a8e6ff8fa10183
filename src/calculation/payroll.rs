//! Gross-to-net payroll composition.
//!
//! This module combines a gross salary, the two contribution schemes and the
//! progressive tax calculator into a single [`PayrollCalculation`].

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ContributionSchemes, Employee, EmployeePayroll, PayrollCalculation, TaxBracketTable,
};

use super::contributions::compute_contribution;
use super::progressive_tax::compute_tax;

/// Computes the full payroll breakdown for one gross salary.
///
/// Steps:
/// 1. Each active scheme withholds `gross * employee_rate` and charges the
///    employer `gross * employer_rate`, both rounded half-up.
/// 2. Taxable income is gross minus the employee contributions. It may be
///    zero or negative, which is a valid zero-tax state.
/// 3. IRSA is computed on the taxable income.
/// 4. Net salary is taxable income minus IRSA; employer cost is gross plus
///    employer contributions.
///
/// # Errors
///
/// Returns `InvalidAmount` if `gross_salary` is negative, and
/// `CalculationError` if a total overflows.
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::{
///     compute_payroll, default_contribution_schemes, get_bracket_table,
/// };
///
/// let payroll = compute_payroll(
///     1_000_000,
///     &default_contribution_schemes(),
///     &get_bracket_table(),
/// )
/// .unwrap();
///
/// assert_eq!(payroll.taxable_income, 980_000);
/// assert_eq!(payroll.tax.total_tax, 103_500);
/// assert_eq!(payroll.net_salary, 876_500);
/// assert_eq!(payroll.total_employer_cost, 1_180_000);
/// ```
pub fn compute_payroll(
    gross_salary: i64,
    schemes: &ContributionSchemes,
    table: &TaxBracketTable,
) -> EngineResult<PayrollCalculation> {
    if gross_salary < 0 {
        return Err(EngineError::InvalidAmount {
            field: "gross_salary".to_string(),
            message: format!("must not be negative, got {}", gross_salary),
        });
    }

    let pension = compute_contribution(gross_salary, &schemes.pension);
    let health = compute_contribution(gross_salary, &schemes.health);

    let employee_contributions = checked(
        pension
            .employee_contribution
            .checked_add(health.employee_contribution),
        "employee contributions",
    )?;
    let total_employer_contributions = checked(
        pension
            .employer_contribution
            .checked_add(health.employer_contribution),
        "employer contributions",
    )?;

    let taxable_income = checked(
        gross_salary.checked_sub(employee_contributions),
        "taxable income",
    )?;
    let tax = compute_tax(taxable_income, table);

    let total_employee_deductions = checked(
        employee_contributions.checked_add(tax.total_tax),
        "employee deductions",
    )?;
    let net_salary = checked(taxable_income.checked_sub(tax.total_tax), "net salary")?;
    let total_employer_cost = checked(
        gross_salary.checked_add(total_employer_contributions),
        "employer cost",
    )?;

    Ok(PayrollCalculation {
        gross_salary,
        pension,
        health,
        taxable_income,
        tax,
        total_employee_deductions,
        total_employer_contributions,
        net_salary,
        total_employer_cost,
    })
}

/// Computes payroll for an employee whose gross is base salary plus allowances.
///
/// # Errors
///
/// Returns `InvalidEmployee` for negative salary components, plus any error
/// from [`compute_payroll`].
pub fn compute_employee_payroll(
    employee: &Employee,
    schemes: &ContributionSchemes,
    table: &TaxBracketTable,
) -> EngineResult<EmployeePayroll> {
    let allowances_total = employee.allowances_total()?;
    let gross_salary = employee.gross_salary()?;
    let payroll = compute_payroll(gross_salary, schemes, table)?;

    Ok(EmployeePayroll {
        employee_id: employee.id.clone(),
        name: employee.name.clone(),
        position: employee.position.clone(),
        department: employee.department.clone(),
        base_salary: employee.base_salary,
        allowances: employee.allowances.clone(),
        allowances_total,
        payroll,
    })
}

fn checked(value: Option<i64>, what: &str) -> EngineResult<i64> {
    value.ok_or_else(|| EngineError::CalculationError {
        message: format!("{} overflowed", what),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{default_contribution_schemes, get_bracket_table};
    use crate::models::{Allowance, ContributionScheme, Percentage};

    fn schemes() -> ContributionSchemes {
        default_contribution_schemes()
    }

    /// PR-001: reference scenario with both schemes active
    #[test]
    fn test_one_million_gross() {
        let payroll = compute_payroll(1_000_000, &schemes(), &get_bracket_table()).unwrap();

        assert_eq!(payroll.pension.employee_contribution, 10_000);
        assert_eq!(payroll.health.employee_contribution, 10_000);
        assert_eq!(payroll.total_employee_contributions(), 20_000);
        assert_eq!(payroll.taxable_income, 980_000);
        assert_eq!(payroll.tax.total_tax, 103_500);
        assert_eq!(payroll.net_salary, 876_500);
        assert_eq!(payroll.pension.employer_contribution, 130_000);
        assert_eq!(payroll.health.employer_contribution, 50_000);
        assert_eq!(payroll.total_employer_contributions, 180_000);
        assert_eq!(payroll.total_employee_deductions, 123_500);
        assert_eq!(payroll.total_employer_cost, 1_180_000);
    }

    #[test]
    fn test_net_plus_deductions_equals_gross() {
        for gross in [0, 1, 357_000, 450_000, 612_345, 2_500_000] {
            let payroll = compute_payroll(gross, &schemes(), &get_bracket_table()).unwrap();
            assert_eq!(
                payroll.net_salary + payroll.total_employee_deductions,
                gross,
                "gross {}",
                gross
            );
        }
    }

    #[test]
    fn test_inactive_scheme_is_excluded_from_taxable_income() {
        let mut schemes = schemes();
        schemes.health = schemes.health.deactivated();

        let payroll = compute_payroll(1_000_000, &schemes, &get_bracket_table()).unwrap();

        assert_eq!(payroll.health.employee_contribution, 0);
        assert_eq!(payroll.health.employer_contribution, 0);
        assert_eq!(payroll.taxable_income, 990_000);
        // 27,500 + 390,000 * 20%
        assert_eq!(payroll.tax.total_tax, 105_500);
        assert_eq!(payroll.total_employer_cost, 1_130_000);
    }

    #[test]
    fn test_zero_gross() {
        let payroll = compute_payroll(0, &schemes(), &get_bracket_table()).unwrap();

        assert_eq!(payroll.taxable_income, 0);
        assert_eq!(payroll.tax.total_tax, 0);
        assert_eq!(payroll.net_salary, 0);
        assert_eq!(payroll.total_employer_cost, 0);
    }

    #[test]
    fn test_negative_gross_is_rejected() {
        match compute_payroll(-1, &schemes(), &get_bracket_table()) {
            Err(EngineError::InvalidAmount { field, .. }) => assert_eq!(field, "gross_salary"),
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_taxable_income_is_zero_tax_not_error() {
        let heavy = ContributionSchemes {
            pension: ContributionScheme::new(
                "P",
                Percentage::whole(60).unwrap(),
                Percentage::ZERO,
            ),
            health: ContributionScheme::new(
                "H",
                Percentage::whole(60).unwrap(),
                Percentage::ZERO,
            ),
        };

        let payroll = compute_payroll(100_000, &heavy, &get_bracket_table()).unwrap();

        assert_eq!(payroll.taxable_income, -20_000);
        assert_eq!(payroll.tax.total_tax, 0);
        assert_eq!(payroll.net_salary, -20_000);
        assert_eq!(payroll.total_employee_deductions, 120_000);
    }

    #[test]
    fn test_gross_below_threshold_pays_contributions_only() {
        let payroll = compute_payroll(300_000, &schemes(), &get_bracket_table()).unwrap();

        assert_eq!(payroll.taxable_income, 294_000);
        assert_eq!(payroll.tax.total_tax, 0);
        assert_eq!(payroll.net_salary, 294_000);
    }

    #[test]
    fn test_employer_cost_overflow_is_reported() {
        let result = compute_payroll(i64::MAX, &schemes(), &get_bracket_table());
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_employee_payroll_folds_allowances_into_gross() {
        let employee = Employee {
            id: "emp_010".to_string(),
            name: "Rabe Hery".to_string(),
            position: "Enseignant".to_string(),
            department: "College".to_string(),
            base_salary: 900_000,
            allowances: vec![
                Allowance::Transport { amount: 60_000 },
                Allowance::Housing { amount: 40_000 },
            ],
        };

        let result = compute_employee_payroll(&employee, &schemes(), &get_bracket_table()).unwrap();

        assert_eq!(result.employee_id, "emp_010");
        assert_eq!(result.allowances_total, 100_000);
        assert_eq!(result.payroll.gross_salary, 1_000_000);
        assert_eq!(result.payroll.net_salary, 876_500);
    }

    #[test]
    fn test_employee_payroll_rejects_negative_allowance() {
        let employee = Employee {
            id: "emp_011".to_string(),
            name: "Bad Data".to_string(),
            position: String::new(),
            department: String::new(),
            base_salary: 500_000,
            allowances: vec![Allowance::Meal { amount: -5 }],
        };

        let result = compute_employee_payroll(&employee, &schemes(), &get_bracket_table());
        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
    }
}
