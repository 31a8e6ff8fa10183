//! Social contribution scheme models (CNAPS pension, OSTIE health).

use serde::{Deserialize, Serialize};

use super::Percentage;

fn default_active() -> bool {
    true
}

/// Configuration of one social-insurance scheme.
///
/// # Example
///
/// ```
/// use irsa_payroll::models::{ContributionScheme, Percentage};
///
/// let scheme: ContributionScheme = serde_json::from_str(
///     r#"{"name": "CNAPS", "employee_rate": 1, "employer_rate": 13}"#,
/// )
/// .unwrap();
///
/// assert!(scheme.is_active);
/// assert_eq!(scheme.employer_rate, Percentage::whole(13).unwrap());
/// assert!(scheme.ceiling.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionScheme {
    /// Scheme name shown on payslips (e.g., "CNAPS").
    pub name: String,
    /// Share withheld from the employee's gross salary.
    pub employee_rate: Percentage,
    /// Share paid by the employer on top of gross salary.
    pub employer_rate: Percentage,
    /// Declared cap on the contribution base.
    ///
    /// Currently inert: contributions are computed on the full gross salary.
    #[serde(default)]
    pub ceiling: Option<i64>,
    /// An inactive scheme contributes zero on both sides.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl ContributionScheme {
    /// Creates an active scheme without a ceiling.
    pub fn new(name: impl Into<String>, employee_rate: Percentage, employer_rate: Percentage) -> Self {
        Self {
            name: name.into(),
            employee_rate,
            employer_rate,
            ceiling: None,
            is_active: true,
        }
    }

    /// Returns a copy of this scheme switched off.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// The pair of schemes every payroll calculation applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSchemes {
    /// Pension-like scheme (CNAPS).
    pub pension: ContributionScheme,
    /// Health-like scheme (OSTIE).
    pub health: ContributionScheme,
}

impl ContributionSchemes {
    /// Both schemes, pension first.
    pub fn as_array(&self) -> [&ContributionScheme; 2] {
        [&self.pension, &self.health]
    }
}

/// The contribution amounts one scheme produced for one gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeContribution {
    /// Scheme name.
    pub name: String,
    /// Whether the scheme was active for this calculation.
    pub is_active: bool,
    /// Amount withheld from the employee.
    pub employee_contribution: i64,
    /// Amount paid by the employer.
    pub employer_contribution: i64,
    /// Employee plus employer contribution.
    pub total: i64,
}
