//! Calculation logic for the payroll engine.
//!
//! This module contains the IRSA bracket schedule, the progressive tax
//! calculator, CNAPS/OSTIE contribution calculation, the gross-to-net
//! payroll composer, bulk payroll runs, and the audit trace builder.
//!
//! Every function here is pure: the bracket table and contribution schemes
//! are passed in explicitly and nothing is cached between calls.

mod audit;
mod bracket_table;
mod bulk;
mod contributions;
mod payroll;
mod progressive_tax;
mod rounding;

pub use audit::{IRSA_REFERENCE, build_audit_trace};
pub use bracket_table::{IRSA_EXEMPTION_THRESHOLD, get_bracket_table};
pub use bulk::{run_bulk_payroll, summarize_run};
pub use contributions::{compute_contribution, default_contribution_schemes};
pub use payroll::{compute_employee_payroll, compute_payroll};
pub use progressive_tax::compute_tax;
pub use rounding::{percent_of, ratio_percent, round_to_unit};
