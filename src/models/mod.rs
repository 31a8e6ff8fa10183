//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod contribution;
mod employee;
mod pay_period;
mod payroll;
mod percentage;
mod tax_bracket;
mod tax_result;

pub use audit::AuditStep;
pub use contribution::{ContributionScheme, ContributionSchemes, SchemeContribution};
pub use employee::{Allowance, Employee};
pub use pay_period::PayPeriod;
pub use payroll::{EmployeePayroll, PayrollCalculation, PayrollRunTotals};
pub use percentage::Percentage;
pub use tax_bracket::{TaxBracket, TaxBracketTable};
pub use tax_result::{BracketTax, TaxComputationResult};
