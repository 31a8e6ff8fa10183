//! The Madagascar IRSA 2024 schedule.

use crate::models::{Percentage, TaxBracket, TaxBracketTable};

/// Monthly income below or at this amount is exempt from IRSA.
pub const IRSA_EXEMPTION_THRESHOLD: i64 = 350_000;

/// `(lower, upper, rate %)` rows of the 2024 schedule.
const IRSA_2024: [(i64, Option<i64>, u8); 5] = [
    (0, Some(350_000), 0),
    (350_001, Some(400_000), 5),
    (400_001, Some(500_000), 10),
    (500_001, Some(600_000), 15),
    (600_001, None, 20),
];

/// Returns the Madagascar IRSA 2024 progressive schedule.
///
/// | Lower bound | Upper bound | Rate |
/// |---|---|---|
/// | 0 | 350,000 | 0% |
/// | 350,001 | 400,000 | 5% |
/// | 400,001 | 500,000 | 10% |
/// | 500,001 | 600,000 | 15% |
/// | 600,001 | unbounded | 20% |
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::get_bracket_table;
///
/// let table = get_bracket_table();
/// assert_eq!(table.len(), 5);
/// assert!(table.brackets()[4].is_unbounded());
/// ```
pub fn get_bracket_table() -> TaxBracketTable {
    let brackets = IRSA_2024
        .iter()
        .map(|&(lower_bound, upper_bound, rate)| TaxBracket {
            lower_bound,
            upper_bound,
            rate: Percentage::whole_unchecked(rate),
            label: bracket_label(lower_bound, upper_bound, rate),
        })
        .collect();

    TaxBracketTable::new_unchecked(brackets)
}

fn bracket_label(lower_bound: i64, upper_bound: Option<i64>, rate: u8) -> String {
    match upper_bound {
        Some(upper) => format!("{} - {} Ar : {}%", lower_bound, upper, rate),
        None => format!("Plus de {} Ar : {}%", lower_bound - 1, rate),
    }
}
