//! Response types for the payroll engine API.
//!
//! This module defines the success payloads, the error response structure,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ScheduleMetadata;
use crate::error::EngineError;
use crate::models::{
    AuditStep, EmployeePayroll, PayPeriod, PayrollCalculation, PayrollRunTotals, TaxBracketTable,
};

/// Response body for `GET /brackets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketsResponse {
    /// Which schedule is configured.
    pub schedule: ScheduleMetadata,
    /// The brackets, ascending.
    pub brackets: TaxBracketTable,
}

/// Identification fields echoed back for an employee payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department.
    pub department: String,
    /// Base salary before allowances.
    pub base_salary: i64,
    /// Sum of allowance lines.
    pub allowances_total: i64,
}

impl From<&EmployeePayroll> for EmployeeSummary {
    fn from(entry: &EmployeePayroll) -> Self {
        Self {
            id: entry.employee_id.clone(),
            name: entry.name.clone(),
            position: entry.position.clone(),
            department: entry.department.clone(),
            base_salary: entry.base_salary,
            allowances_total: entry.allowances_total,
        }
    }
}

/// The audit trace attached to a single payroll response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Response body for `POST /payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the schedule that was applied.
    pub schedule_code: String,
    /// Present when the request named an employee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeSummary>,
    /// The gross-to-net breakdown.
    pub payroll: PayrollCalculation,
    /// How the breakdown was reached.
    pub audit_trace: AuditTrace,
}

/// Response body for `POST /payroll/bulk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkPayrollResponse {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Code of the schedule that was applied.
    pub schedule_code: String,
    /// The pay period of the run.
    pub pay_period: PayPeriod,
    /// One entry per employee, in request order.
    pub payrolls: Vec<EmployeePayroll>,
    /// Aggregates over the run.
    pub totals: PayrollRunTotals,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidBracketTable { index, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid tax bracket schedule",
                    format!("Bracket {}: {}", index, message),
                ),
            },
            EngineError::InvalidRate { value, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_RATE",
                    format!("Invalid rate {}: {}", value, message),
                    "Rates are percentages between 0 and 100",
                ),
            ),
            EngineError::InvalidAmount { field, message } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_AMOUNT",
                    format!("Invalid amount for '{}': {}", field, message),
                    "Amounts are non-negative whole Ariary",
                ),
            ),
            EngineError::InvalidEmployee {
                employee_id,
                message,
            } => ApiErrorResponse::bad_request(ApiError::with_details(
                "INVALID_EMPLOYEE",
                format!("Invalid employee '{}': {}", employee_id, message),
                "The employee data contains invalid information",
            )),
            EngineError::InvalidPayPeriod { message } => ApiErrorResponse::bad_request(
                ApiError::new("INVALID_PAY_PERIOD", format!("Invalid pay period: {}", message)),
            ),
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_amount_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidAmount {
            field: "gross_salary".to_string(),
            message: "must not be negative".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_AMOUNT");
        assert!(api_error.error.message.contains("gross_salary"));
    }

    #[test]
    fn test_bracket_table_error_maps_to_server_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidBracketTable {
            index: 3,
            message: "gap".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_invalid_employee_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidEmployee {
            employee_id: "emp_9".to_string(),
            message: "negative allowance".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_EMPLOYEE");
    }
}
