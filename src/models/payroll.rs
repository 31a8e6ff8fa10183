//! Payroll calculation results.
//!
//! [`PayrollCalculation`] is the gross-to-net breakdown for one salary.
//! [`EmployeePayroll`] pairs it with the identification fields a payslip or
//! export row needs.

use serde::{Deserialize, Serialize};

use super::{Allowance, SchemeContribution, TaxComputationResult};

/// The complete gross-to-net breakdown for one gross salary.
///
/// Built fresh for every request and never mutated afterwards. The identity
/// `net_salary + total_employee_deductions == gross_salary` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollCalculation {
    /// Pre-deduction pay.
    pub gross_salary: i64,
    /// Pension scheme (CNAPS) contributions.
    pub pension: SchemeContribution,
    /// Health scheme (OSTIE) contributions.
    pub health: SchemeContribution,
    /// Gross salary minus employee contributions; may be zero or negative.
    pub taxable_income: i64,
    /// IRSA computed on the taxable income.
    pub tax: TaxComputationResult,
    /// Employee contributions plus income tax.
    pub total_employee_deductions: i64,
    /// Sum of employer contributions.
    pub total_employer_contributions: i64,
    /// Taxable income minus income tax.
    pub net_salary: i64,
    /// Gross salary plus employer contributions.
    pub total_employer_cost: i64,
}

impl PayrollCalculation {
    /// Sum of the employee-side contributions of both schemes.
    pub fn total_employee_contributions(&self) -> i64 {
        self.pension.employee_contribution + self.health.employee_contribution
    }
}

/// A payroll calculation for an identified employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayroll {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee display name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department.
    pub department: String,
    /// Base salary before allowances.
    pub base_salary: i64,
    /// The allowance lines folded into gross salary.
    pub allowances: Vec<Allowance>,
    /// Sum of all allowance lines.
    pub allowances_total: i64,
    /// The gross-to-net breakdown.
    pub payroll: PayrollCalculation,
}

/// Aggregates across every employee of a bulk run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRunTotals {
    /// Number of employees in the run.
    pub headcount: usize,
    /// Sum of gross salaries.
    pub gross_salary: i64,
    /// Sum of employee-side contributions across both schemes.
    pub employee_contributions: i64,
    /// Sum of employer-side contributions across both schemes.
    pub employer_contributions: i64,
    /// Sum of IRSA withheld.
    pub income_tax: i64,
    /// Sum of net salaries.
    pub net_salary: i64,
    /// Sum of employer costs.
    pub employer_cost: i64,
}
