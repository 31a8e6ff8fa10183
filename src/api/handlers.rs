//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_audit_trace, compute_employee_payroll, compute_payroll, compute_tax, run_bulk_payroll,
    summarize_run,
};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::ContributionSchemes;

use super::request::{BulkPayrollRequest, PayrollRequest, PayrollSubject, TaxRequest};
use super::response::{
    ApiError, ApiErrorResponse, AuditTrace, BracketsResponse, BulkPayrollResponse,
    EmployeeSummary, PayrollResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/brackets", get(brackets_handler))
        .route("/tax", post(tax_handler))
        .route("/payroll", post(payroll_handler))
        .route("/payroll/bulk", post(bulk_payroll_handler))
        .with_state(state)
}

/// Handler for GET /brackets.
async fn brackets_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    info!(
        schedule = %config.metadata().code,
        brackets = config.table().len(),
        "Serving bracket schedule"
    );

    json_response(
        StatusCode::OK,
        BracketsResponse {
            schedule: config.metadata().clone(),
            brackets: config.table().clone(),
        },
    )
}

/// Handler for POST /tax.
///
/// Applies the configured schedule to a taxable amount. Negative amounts
/// are rejected here even though the calculator itself treats them as zero.
async fn tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<TaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing tax request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.taxable_amount < 0 {
        return error_response(
            correlation_id,
            EngineError::InvalidAmount {
                field: "taxable_amount".to_string(),
                message: format!("must not be negative, got {}", request.taxable_amount),
            },
        );
    }

    let result = compute_tax(request.taxable_amount, state.config().table());
    info!(
        correlation_id = %correlation_id,
        taxable_amount = result.taxable_amount,
        total_tax = result.total_tax,
        effective_rate = %result.effective_rate,
        "Tax computed"
    );

    json_response(StatusCode::OK, result)
}

/// Handler for POST /payroll.
///
/// Accepts either a bare gross salary or an employee record and returns the
/// gross-to-net breakdown with its audit trace.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let subject = match request.subject() {
        Ok(subject) => subject,
        Err(message) => {
            warn!(correlation_id = %correlation_id, error = %message, "Invalid payroll request");
            return json_response(StatusCode::BAD_REQUEST, ApiError::validation_error(message));
        }
    };

    match perform_payroll(
        correlation_id,
        subject,
        request.schemes.as_ref(),
        state.config(),
    ) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                gross_salary = response.payroll.gross_salary,
                net_salary = response.payroll.net_salary,
                income_tax = response.payroll.tax.total_tax,
                duration_us = response.audit_trace.duration_us,
                "Payroll completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /payroll/bulk.
///
/// The run is CPU bound and fans out over rayon, so it is moved off the
/// async runtime with `spawn_blocking`.
async fn bulk_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<BulkPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing bulk payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.pay_period.validate() {
        return error_response(correlation_id, err);
    }

    let config = state.shared_config();
    let result = tokio::task::spawn_blocking(move || {
        perform_bulk_payroll(correlation_id, request, &config)
    })
    .await
    .unwrap_or_else(|join_error| {
        Err(EngineError::CalculationError {
            message: format!("bulk payroll task failed: {}", join_error),
        })
    });

    match result {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                pay_period = %response.pay_period.label(),
                headcount = response.totals.headcount,
                net_salary = response.totals.net_salary,
                duration_us = response.duration_us,
                "Bulk payroll completed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Computes a single payroll and its audit trace.
fn perform_payroll(
    calculation_id: Uuid,
    subject: PayrollSubject,
    schemes: Option<&ContributionSchemes>,
    config: &ConfigLoader,
) -> EngineResult<PayrollResponse> {
    let start_time = Instant::now();
    let schemes = schemes.unwrap_or(config.schemes());

    let (employee, payroll) = match subject {
        PayrollSubject::Gross(gross_salary) => {
            (None, compute_payroll(gross_salary, schemes, config.table())?)
        }
        PayrollSubject::Employee(employee) => {
            let entry = compute_employee_payroll(&employee, schemes, config.table())?;
            (Some(EmployeeSummary::from(&entry)), entry.payroll)
        }
    };

    let steps = build_audit_trace(&payroll);

    Ok(PayrollResponse {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_code: config.metadata().code.clone(),
        employee,
        payroll,
        audit_trace: AuditTrace {
            steps,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    })
}

/// Computes a bulk run and its totals.
fn perform_bulk_payroll(
    calculation_id: Uuid,
    request: BulkPayrollRequest,
    config: &ConfigLoader,
) -> EngineResult<BulkPayrollResponse> {
    let start_time = Instant::now();
    let schemes = request.schemes.as_ref().unwrap_or(config.schemes());

    let payrolls = run_bulk_payroll(&request.employees, schemes, config.table())?;
    let totals = summarize_run(&payrolls)?;

    Ok(BulkPayrollResponse {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        schedule_code: config.metadata().code.clone(),
        pay_period: request.pay_period,
        payrolls,
        totals,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message is only in the body text
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaxComputationResult;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        create_router(AppState::new(ConfigLoader::builtin()))
    }

    async fn send(router: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_brackets_returns_configured_schedule() {
        let (status, body) = send(create_test_router(), "GET", "/brackets", "").await;

        assert_eq!(status, StatusCode::OK);
        let response: BracketsResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.schedule.code, "IRSA-2024");
        assert_eq!(response.brackets.len(), 5);
    }

    #[tokio::test]
    async fn test_tax_returns_breakdown() {
        let (status, body) = send(
            create_test_router(),
            "POST",
            "/tax",
            r#"{"taxable_amount": 450000}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let result: TaxComputationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.total_tax, 7_500);
        assert_eq!(result.breakdown.len(), 3);
    }

    #[tokio::test]
    async fn test_tax_rejects_negative_amount() {
        let (status, body) = send(
            create_test_router(),
            "POST",
            "/tax",
            r#"{"taxable_amount": -1}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_AMOUNT");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = send(create_test_router(), "POST", "/payroll", "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_payroll_with_both_sources_is_a_validation_error() {
        let body = r#"{
            "gross_salary": 1000000,
            "employee": {"id": "e1", "name": "Rabe", "base_salary": 1000000}
        }"#;
        let (status, body) = send(create_test_router(), "POST", "/payroll", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_payroll_calculation_id_is_fresh_per_request() {
        let body = r#"{"gross_salary": 600000}"#;
        let (_, first) = send(create_test_router(), "POST", "/payroll", body).await;
        let (_, second) = send(create_test_router(), "POST", "/payroll", body).await;

        let first: PayrollResponse = serde_json::from_slice(&first).unwrap();
        let second: PayrollResponse = serde_json::from_slice(&second).unwrap();
        assert_ne!(first.calculation_id, second.calculation_id);
        assert_eq!(first.payroll, second.payroll);
    }
}
