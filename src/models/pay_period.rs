//! Pay period model.
//!
//! A [`PayPeriod`] labels a bulk payroll run. It plays no part in the
//! arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use irsa_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// };
///
/// assert!(pay_period.validate().is_ok());
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// assert_eq!(pay_period.label(), "2024-03-01..2024-03-31");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Rejects periods that end before they start.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPayPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }

    /// Checks if a given date falls within this pay period, inclusively.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Key used when persisting records per employee and period.
    pub fn label(&self) -> String {
        format!("{}..{}", self.start_date, self.end_date)
    }
}
