//! Validated percentage type.
//!
//! Every rate in the engine (bracket rates, contribution rates) is a
//! [`Percentage`], which guarantees the value lies within `0..=100`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A percentage between 0 and 100 inclusive.
///
/// Deserialization goes through [`Percentage::new`], so out-of-range values
/// in configuration files or requests are rejected when they are read.
///
/// # Example
///
/// ```
/// use irsa_payroll::models::Percentage;
/// use rust_decimal::Decimal;
///
/// let rate = Percentage::new(Decimal::new(125, 1)).unwrap();
/// assert_eq!(rate.to_string(), "12.5%");
///
/// assert!(Percentage::new(Decimal::from(101)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Percentage(Decimal);

impl Percentage {
    /// The zero rate.
    pub const ZERO: Percentage = Percentage(Decimal::ZERO);

    /// Creates a percentage, rejecting values outside `0..=100`.
    pub fn new(value: Decimal) -> EngineResult<Self> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidRate {
                value: value.to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(Self(value))
    }

    /// Creates a percentage from a whole number of percent.
    pub fn whole(percent: u8) -> EngineResult<Self> {
        Self::new(Decimal::from(percent))
    }

    /// Whole-number constructor for schedules known to be in range.
    pub(crate) fn whole_unchecked(percent: u8) -> Self {
        Self(Decimal::from(percent))
    }

    /// Returns the percentage as a decimal number of percent (5% is `5`).
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true for a 0% rate.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Percentage {
    type Error = EngineError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for Decimal {
    fn from(percentage: Percentage) -> Self {
        percentage.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
