//! Employee model and allowance line items.
//!
//! Gross salary is never an open-ended bag of extras: it is the base salary
//! plus an enumerated list of [`Allowance`] lines, so the total is always a
//! checked sum of named components.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A named allowance added to base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Allowance {
    /// Transport allowance.
    Transport {
        /// Allowance amount.
        amount: i64,
    },
    /// Housing allowance.
    Housing {
        /// Allowance amount.
        amount: i64,
    },
    /// Meal allowance.
    Meal {
        /// Allowance amount.
        amount: i64,
    },
    /// Any other allowance, described by its label.
    Other {
        /// Description shown on payslips.
        label: String,
        /// Allowance amount.
        amount: i64,
    },
}

impl Allowance {
    /// Returns the allowance amount.
    pub fn amount(&self) -> i64 {
        match self {
            Allowance::Transport { amount }
            | Allowance::Housing { amount }
            | Allowance::Meal { amount }
            | Allowance::Other { amount, .. } => *amount,
        }
    }

    /// Returns the payslip label.
    pub fn label(&self) -> &str {
        match self {
            Allowance::Transport { .. } => "Transport",
            Allowance::Housing { .. } => "Housing",
            Allowance::Meal { .. } => "Meal",
            Allowance::Other { label, .. } => label,
        }
    }
}

/// An employee whose pay is run through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title (e.g., "Enseignant").
    #[serde(default)]
    pub position: String,
    /// Department (e.g., "Primaire").
    #[serde(default)]
    pub department: String,
    /// Monthly base salary in Ariary.
    pub base_salary: i64,
    /// Allowance lines added to base salary.
    #[serde(default)]
    pub allowances: Vec<Allowance>,
}

impl Employee {
    /// Sum of all allowance lines.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if any allowance is negative or the sum
    /// overflows.
    pub fn allowances_total(&self) -> EngineResult<i64> {
        self.allowances.iter().try_fold(0i64, |total, allowance| {
            if allowance.amount() < 0 {
                return Err(self.invalid(format!(
                    "allowance '{}' must not be negative",
                    allowance.label()
                )));
            }
            total
                .checked_add(allowance.amount())
                .ok_or_else(|| self.invalid("allowances total overflows"))
        })
    }

    /// Gross salary: base salary plus every allowance line.
    ///
    /// # Examples
    ///
    /// ```
    /// use irsa_payroll::models::{Allowance, Employee};
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Rakoto Jean".to_string(),
    ///     position: "Enseignant".to_string(),
    ///     department: "Primaire".to_string(),
    ///     base_salary: 800_000,
    ///     allowances: vec![
    ///         Allowance::Transport { amount: 50_000 },
    ///         Allowance::Meal { amount: 30_000 },
    ///     ],
    /// };
    /// assert_eq!(employee.gross_salary().unwrap(), 880_000);
    /// ```
    pub fn gross_salary(&self) -> EngineResult<i64> {
        if self.base_salary < 0 {
            return Err(self.invalid("base salary must not be negative"));
        }
        self.base_salary
            .checked_add(self.allowances_total()?)
            .ok_or_else(|| self.invalid("gross salary overflows"))
    }

    fn invalid(&self, message: impl Into<String>) -> EngineError {
        EngineError::InvalidEmployee {
            employee_id: self.id.clone(),
            message: message.into(),
        }
    }
}
