//! Audit trace for payroll calculations.
//!
//! Turns a finished [`PayrollCalculation`] into the sequence of decisions
//! that produced it, so a payslip can be explained line by line.

use serde_json::json;

use crate::models::{AuditStep, PayrollCalculation, SchemeContribution};

/// Reference tag for income tax steps.
pub const IRSA_REFERENCE: &str = "IRSA";

/// Builds the ordered audit trace for a payroll calculation.
///
/// Steps, in order: one per contribution scheme, taxable income, one per
/// taxed bracket, total IRSA, net salary and employer cost. Step numbers
/// start at 1.
///
/// # Examples
///
/// ```
/// use irsa_payroll::calculation::{
///     build_audit_trace, compute_payroll, default_contribution_schemes, get_bracket_table,
/// };
///
/// let payroll = compute_payroll(
///     450_000,
///     &default_contribution_schemes(),
///     &get_bracket_table(),
/// )
/// .unwrap();
/// let steps = build_audit_trace(&payroll);
///
/// assert_eq!(steps[0].rule_id, "social_contribution");
/// assert_eq!(steps.last().unwrap().rule_id, "employer_cost");
/// ```
pub fn build_audit_trace(payroll: &PayrollCalculation) -> Vec<AuditStep> {
    let mut steps = Vec::with_capacity(payroll.tax.breakdown.len() + 6);
    let next_step = |steps: &Vec<AuditStep>| steps.len() as u32 + 1;

    for scheme in [&payroll.pension, &payroll.health] {
        steps.push(contribution_step(next_step(&steps), payroll.gross_salary, scheme));
    }

    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "taxable_income".to_string(),
        rule_name: "Taxable Income".to_string(),
        reference: IRSA_REFERENCE.to_string(),
        input: json!({
            "gross_salary": payroll.gross_salary,
            "employee_contributions": payroll.total_employee_contributions()
        }),
        output: json!({ "taxable_income": payroll.taxable_income }),
        reasoning: format!(
            "{} Ar - {} Ar = {} Ar",
            payroll.gross_salary,
            payroll.total_employee_contributions(),
            payroll.taxable_income
        ),
    });

    for entry in &payroll.tax.breakdown {
        let upper = entry
            .upper_bound
            .map(|upper| upper.to_string())
            .unwrap_or_else(|| "unbounded".to_string());
        steps.push(AuditStep {
            step_number: next_step(&steps),
            rule_id: "irsa_bracket".to_string(),
            rule_name: "IRSA Bracket".to_string(),
            reference: IRSA_REFERENCE.to_string(),
            input: json!({
                "lower_bound": entry.lower_bound,
                "upper_bound": entry.upper_bound,
                "rate": entry.rate.value().normalize().to_string(),
                "amount_taxed": entry.amount_taxed
            }),
            output: json!({ "tax": entry.tax }),
            reasoning: format!(
                "{} Ar in [{}, {}] x {} = {} Ar",
                entry.amount_taxed, entry.lower_bound, upper, entry.rate, entry.tax
            ),
        });
    }

    let irsa_reasoning = if payroll.tax.breakdown.is_empty() {
        format!(
            "Taxable income {} Ar is not positive - no IRSA due",
            payroll.taxable_income
        )
    } else {
        format!(
            "Sum of bracket taxes = {} Ar (effective rate {}%)",
            payroll.tax.total_tax, payroll.tax.effective_rate
        )
    };
    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "irsa_total".to_string(),
        rule_name: "IRSA Total".to_string(),
        reference: IRSA_REFERENCE.to_string(),
        input: json!({ "taxable_income": payroll.taxable_income }),
        output: json!({
            "total_tax": payroll.tax.total_tax,
            "effective_rate": payroll.tax.effective_rate.to_string()
        }),
        reasoning: irsa_reasoning,
    });

    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        reference: IRSA_REFERENCE.to_string(),
        input: json!({
            "taxable_income": payroll.taxable_income,
            "total_tax": payroll.tax.total_tax
        }),
        output: json!({ "net_salary": payroll.net_salary }),
        reasoning: format!(
            "{} Ar - {} Ar = {} Ar",
            payroll.taxable_income, payroll.tax.total_tax, payroll.net_salary
        ),
    });

    steps.push(AuditStep {
        step_number: next_step(&steps),
        rule_id: "employer_cost".to_string(),
        rule_name: "Employer Cost".to_string(),
        reference: format!("{}/{}", payroll.pension.name, payroll.health.name),
        input: json!({
            "gross_salary": payroll.gross_salary,
            "employer_contributions": payroll.total_employer_contributions
        }),
        output: json!({ "total_employer_cost": payroll.total_employer_cost }),
        reasoning: format!(
            "{} Ar + {} Ar = {} Ar",
            payroll.gross_salary,
            payroll.total_employer_contributions,
            payroll.total_employer_cost
        ),
    });

    steps
}

fn contribution_step(step_number: u32, gross_salary: i64, scheme: &SchemeContribution) -> AuditStep {
    let reasoning = if scheme.is_active {
        format!(
            "{} Ar gross: employee {} Ar, employer {} Ar",
            gross_salary, scheme.employee_contribution, scheme.employer_contribution
        )
    } else {
        format!("{} is inactive - no contribution", scheme.name)
    };

    AuditStep {
        step_number,
        rule_id: "social_contribution".to_string(),
        rule_name: format!("{} Contribution", scheme.name),
        reference: scheme.name.clone(),
        input: json!({
            "gross_salary": gross_salary,
            "is_active": scheme.is_active
        }),
        output: json!({
            "employee_contribution": scheme.employee_contribution,
            "employer_contribution": scheme.employer_contribution,
            "total": scheme.total
        }),
        reasoning,
    }
}
