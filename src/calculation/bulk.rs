//! Bulk payroll runs over a list of employees.
//!
//! Each employee is computed independently, so the run is spread over the
//! rayon thread pool. Results always come back in input order.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ContributionSchemes, Employee, EmployeePayroll, PayrollRunTotals, TaxBracketTable,
};

use super::payroll::compute_employee_payroll;

/// Runs payroll for every employee, preserving input order.
///
/// # Errors
///
/// If any employee fails validation, the error for the earliest such
/// employee in input order is returned and no results are produced.
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::{
///     default_contribution_schemes, get_bracket_table, run_bulk_payroll,
/// };
/// use irsa_payroll::models::Employee;
///
/// let employees: Vec<Employee> = (1..=3)
///     .map(|i| Employee {
///         id: format!("emp_{:03}", i),
///         name: format!("Employee {}", i),
///         position: String::new(),
///         department: String::new(),
///         base_salary: 400_000 * i,
///         allowances: vec![],
///     })
///     .collect();
///
/// let results = run_bulk_payroll(
///     &employees,
///     &default_contribution_schemes(),
///     &get_bracket_table(),
/// )
/// .unwrap();
///
/// let ids: Vec<&str> = results.iter().map(|r| r.employee_id.as_str()).collect();
/// assert_eq!(ids, vec!["emp_001", "emp_002", "emp_003"]);
/// ```
pub fn run_bulk_payroll(
    employees: &[Employee],
    schemes: &ContributionSchemes,
    table: &TaxBracketTable,
) -> EngineResult<Vec<EmployeePayroll>> {
    debug!(employees = employees.len(), "Running bulk payroll");

    let results: Vec<EngineResult<EmployeePayroll>> = employees
        .par_iter()
        .map(|employee| compute_employee_payroll(employee, schemes, table))
        .collect();

    results.into_iter().collect()
}

/// Sums a completed run into its totals.
///
/// # Errors
///
/// Returns `CalculationError` if any total overflows.
pub fn summarize_run(payrolls: &[EmployeePayroll]) -> EngineResult<PayrollRunTotals> {
    payrolls.iter().try_fold(
        PayrollRunTotals::default(),
        |totals, entry| {
            let payroll = &entry.payroll;
            Ok(PayrollRunTotals {
                headcount: totals.headcount + 1,
                gross_salary: add(totals.gross_salary, payroll.gross_salary)?,
                employee_contributions: add(
                    totals.employee_contributions,
                    payroll.total_employee_contributions(),
                )?,
                employer_contributions: add(
                    totals.employer_contributions,
                    payroll.total_employer_contributions,
                )?,
                income_tax: add(totals.income_tax, payroll.tax.total_tax)?,
                net_salary: add(totals.net_salary, payroll.net_salary)?,
                employer_cost: add(totals.employer_cost, payroll.total_employer_cost)?,
            })
        },
    )
}

fn add(a: i64, b: i64) -> EngineResult<i64> {
    a.checked_add(b).ok_or_else(|| EngineError::CalculationError {
        message: "payroll run totals overflowed".to_string(),
    })
}
