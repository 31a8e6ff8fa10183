//! Social contribution calculation (CNAPS, OSTIE).

use crate::models::{ContributionScheme, ContributionSchemes, Percentage, SchemeContribution};

use super::rounding::percent_of;

/// Computes one scheme's employee and employer contributions on a gross salary.
///
/// Inactive schemes contribute zero on both sides. The scheme's `ceiling` is
/// not applied: contributions are always computed on the full gross salary.
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::{compute_contribution, default_contribution_schemes};
///
/// let schemes = default_contribution_schemes();
/// let cnaps = compute_contribution(1_000_000, &schemes.pension);
///
/// assert_eq!(cnaps.employee_contribution, 10_000);
/// assert_eq!(cnaps.employer_contribution, 130_000);
/// assert_eq!(cnaps.total, 140_000);
/// ```
pub fn compute_contribution(gross_salary: i64, scheme: &ContributionScheme) -> SchemeContribution {
    let (employee_contribution, employer_contribution) = if scheme.is_active {
        (
            percent_of(gross_salary, scheme.employee_rate),
            percent_of(gross_salary, scheme.employer_rate),
        )
    } else {
        (0, 0)
    };

    SchemeContribution {
        name: scheme.name.clone(),
        is_active: scheme.is_active,
        employee_contribution,
        employer_contribution,
        total: employee_contribution.saturating_add(employer_contribution),
    }
}

/// Returns the standard Madagascar schemes: CNAPS 1% / 13% and OSTIE 1% / 5%.
pub fn default_contribution_schemes() -> ContributionSchemes {
    ContributionSchemes {
        pension: ContributionScheme::new(
            "CNAPS",
            Percentage::whole_unchecked(1),
            Percentage::whole_unchecked(13),
        ),
        health: ContributionScheme::new(
            "OSTIE",
            Percentage::whole_unchecked(1),
            Percentage::whole_unchecked(5),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_scheme_contributes_both_sides() {
        let schemes = default_contribution_schemes();
        let ostie = compute_contribution(1_000_000, &schemes.health);

        assert_eq!(ostie.name, "OSTIE");
        assert!(ostie.is_active);
        assert_eq!(ostie.employee_contribution, 10_000);
        assert_eq!(ostie.employer_contribution, 50_000);
        assert_eq!(ostie.total, 60_000);
    }

    #[test]
    fn test_inactive_scheme_contributes_zero() {
        let scheme = default_contribution_schemes().pension.deactivated();
        let result = compute_contribution(1_000_000, &scheme);

        assert!(!result.is_active);
        assert_eq!(result.employee_contribution, 0);
        assert_eq!(result.employer_contribution, 0);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn test_contributions_round_half_up() {
        let schemes = default_contribution_schemes();
        // 1% of 123,450 = 1,234.5; 13% = 16,048.5
        let cnaps = compute_contribution(123_450, &schemes.pension);

        assert_eq!(cnaps.employee_contribution, 1_235);
        assert_eq!(cnaps.employer_contribution, 16_049);
    }

    #[test]
    fn test_ceiling_is_not_applied() {
        let mut scheme = default_contribution_schemes().pension;
        scheme.ceiling = Some(500_000);

        let result = compute_contribution(2_000_000, &scheme);

        assert_eq!(result.employee_contribution, 20_000);
        assert_eq!(result.employer_contribution, 260_000);
    }

    #[test]
    fn test_zero_gross_contributes_zero() {
        let schemes = default_contribution_schemes();
        assert_eq!(compute_contribution(0, &schemes.pension).total, 0);
    }
}
