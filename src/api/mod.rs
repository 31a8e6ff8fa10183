//! HTTP API module for the payroll engine.
//!
//! This module exposes the bracket schedule, the progressive tax calculator,
//! and the payroll composer as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BulkPayrollRequest, PayrollRequest, PayrollSubject, TaxRequest};
pub use response::{
    ApiError, AuditTrace, BracketsResponse, BulkPayrollResponse, EmployeeSummary,
    PayrollResponse,
};
pub use state::AppState;
