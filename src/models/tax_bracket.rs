//! Progressive tax bracket models.
//!
//! This module contains the [`TaxBracket`] and [`TaxBracketTable`] types. A
//! table can only be obtained through [`TaxBracketTable::new`], which checks
//! that the schedule is a contiguous progression terminated by a single
//! unbounded bracket, so calculations never have to re-validate it.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Percentage;

/// A single progressive tax bracket.
///
/// Bounds are inclusive integer currency amounts. An `upper_bound` of `None`
/// marks the open-ended top bracket.
///
/// # Example
///
/// ```
/// use irsa_payroll::models::{Percentage, TaxBracket};
///
/// let bracket = TaxBracket {
///     lower_bound: 350_001,
///     upper_bound: Some(400_000),
///     rate: Percentage::whole(5).unwrap(),
///     label: "350 001 - 400 000 Ar".to_string(),
/// };
/// assert_eq!(bracket.capacity(), Some(50_000));
/// assert!(bracket.contains(400_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound.
    pub lower_bound: i64,
    /// Inclusive upper bound, or `None` for the unbounded top bracket.
    #[serde(default)]
    pub upper_bound: Option<i64>,
    /// Rate applied to the slice of income falling in this bracket.
    pub rate: Percentage,
    /// Human-readable descriptor. Not used in computation.
    #[serde(default)]
    pub label: String,
}

impl TaxBracket {
    /// Returns true if this is the open-ended top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.upper_bound.is_none()
    }

    /// Returns the number of currency units this bracket can absorb.
    ///
    /// The bracket starting at zero covers the income slice `(0, upper]`;
    /// every later bracket covers `[lower, upper]`. Returns `None` for the
    /// unbounded bracket.
    pub fn capacity(&self) -> Option<i64> {
        self.upper_bound.map(|upper| {
            if self.lower_bound == 0 {
                upper
            } else {
                upper - self.lower_bound + 1
            }
        })
    }

    /// Returns true if `amount` falls within this bracket's inclusive bounds.
    pub fn contains(&self, amount: i64) -> bool {
        amount >= self.lower_bound && self.upper_bound.is_none_or(|upper| amount <= upper)
    }
}

/// An ordered, validated progressive tax schedule.
///
/// Tables are immutable once built and safe to share between threads.
///
/// # Example
///
/// ```
/// use irsa_payroll::models::{Percentage, TaxBracket, TaxBracketTable};
///
/// let table = TaxBracketTable::new(vec![
///     TaxBracket {
///         lower_bound: 0,
///         upper_bound: Some(100_000),
///         rate: Percentage::ZERO,
///         label: "exempt".to_string(),
///     },
///     TaxBracket {
///         lower_bound: 100_001,
///         upper_bound: None,
///         rate: Percentage::whole(10).unwrap(),
///         label: "standard".to_string(),
///     },
/// ])
/// .unwrap();
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.bracket_for(250_000).unwrap().label, "standard");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    /// Builds a table, failing fast on any malformed schedule.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBracketTable` if:
    /// - the table is empty
    /// - the first bracket does not start at 0
    /// - a bracket's upper bound is below its lower bound
    /// - consecutive brackets overlap or leave a gap
    /// - an unbounded bracket is not last, or the last bracket is bounded
    pub fn new(brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let Some(last_index) = brackets.len().checked_sub(1) else {
            return Err(invalid(0, "table must contain at least one bracket"));
        };

        for (index, bracket) in brackets.iter().enumerate() {
            if index == 0 && bracket.lower_bound != 0 {
                return Err(invalid(
                    index,
                    format!("first bracket must start at 0, found {}", bracket.lower_bound),
                ));
            }

            match bracket.upper_bound {
                Some(upper) if upper < bracket.lower_bound => {
                    return Err(invalid(
                        index,
                        format!(
                            "upper bound {} is below lower bound {}",
                            upper, bracket.lower_bound
                        ),
                    ));
                }
                Some(_) if index == last_index => {
                    return Err(invalid(index, "last bracket must be unbounded"));
                }
                None if index != last_index => {
                    return Err(invalid(index, "only the last bracket may be unbounded"));
                }
                _ => {}
            }

            if index > 0 {
                // Earlier brackets are bounded, checked on the previous iteration.
                let previous_upper = brackets[index - 1].upper_bound.unwrap_or(i64::MAX);
                if bracket.lower_bound <= previous_upper {
                    return Err(invalid(
                        index,
                        format!(
                            "lower bound {} overlaps previous bracket ending at {}",
                            bracket.lower_bound, previous_upper
                        ),
                    ));
                }
                if previous_upper.checked_add(1) != Some(bracket.lower_bound) {
                    return Err(invalid(
                        index,
                        format!(
                            "gap between previous bracket ending at {} and lower bound {}",
                            previous_upper, bracket.lower_bound
                        ),
                    ));
                }
            }
        }

        Ok(Self { brackets })
    }

    /// Builds a table from a schedule that is known to be well formed.
    pub(crate) fn new_unchecked(brackets: Vec<TaxBracket>) -> Self {
        Self { brackets }
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Iterates over the brackets in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaxBracket> {
        self.brackets.iter()
    }

    /// Returns the number of brackets.
    pub fn len(&self) -> usize {
        self.brackets.len()
    }

    /// Always false for a constructed table; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.brackets.is_empty()
    }

    /// Finds the bracket containing `amount`, i.e. its marginal bracket.
    ///
    /// Returns `None` for negative amounts.
    pub fn bracket_for(&self, amount: i64) -> Option<&TaxBracket> {
        self.brackets.iter().find(|bracket| bracket.contains(amount))
    }

    /// Returns the rate of the unbounded top bracket.
    pub fn top_rate(&self) -> Percentage {
        self.brackets
            .last()
            .map(|bracket| bracket.rate)
            .unwrap_or(Percentage::ZERO)
    }
}

impl TryFrom<Vec<TaxBracket>> for TaxBracketTable {
    type Error = EngineError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<TaxBracketTable> for Vec<TaxBracket> {
    fn from(table: TaxBracketTable) -> Self {
        table.brackets
    }
}

impl<'a> IntoIterator for &'a TaxBracketTable {
    type Item = &'a TaxBracket;
    type IntoIter = std::slice::Iter<'a, TaxBracket>;

    fn into_iter(self) -> Self::IntoIter {
        self.brackets.iter()
    }
}

fn invalid(index: usize, message: impl Into<String>) -> EngineError {
    EngineError::InvalidBracketTable {
        index,
        message: message.into(),
    }
}
