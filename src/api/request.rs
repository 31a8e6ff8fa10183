//! Request types for the payroll engine API.

use serde::{Deserialize, Serialize};

use crate::models::{ContributionSchemes, Employee, PayPeriod};

/// Request body for `POST /tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRequest {
    /// The amount to apply the IRSA schedule to.
    pub taxable_amount: i64,
}

/// Request body for `POST /payroll`.
///
/// Exactly one of `gross_salary` or `employee` must be provided. When
/// `schemes` is omitted the configured contribution schemes apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// A bare gross salary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_salary: Option<i64>,
    /// An employee whose gross is base salary plus allowances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
    /// Contribution schemes from the caller's settings store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<ContributionSchemes>,
}

/// The salary source named by a [`PayrollRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayrollSubject {
    /// A bare gross salary.
    Gross(i64),
    /// An employee record.
    Employee(Employee),
}

impl PayrollRequest {
    /// Resolves which salary source the request names.
    ///
    /// Returns a validation message when both or neither are present.
    pub fn subject(&self) -> Result<PayrollSubject, String> {
        match (&self.gross_salary, &self.employee) {
            (Some(gross), None) => Ok(PayrollSubject::Gross(*gross)),
            (None, Some(employee)) => Ok(PayrollSubject::Employee(employee.clone())),
            (Some(_), Some(_)) => {
                Err("provide either gross_salary or employee, not both".to_string())
            }
            (None, None) => Err("missing field: gross_salary or employee".to_string()),
        }
    }
}

/// Request body for `POST /payroll/bulk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPayrollRequest {
    /// The pay period the run is for.
    pub pay_period: PayPeriod,
    /// Employees to pay, in the order results should be returned.
    pub employees: Vec<Employee>,
    /// Contribution schemes from the caller's settings store.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schemes: Option<ContributionSchemes>,
}
