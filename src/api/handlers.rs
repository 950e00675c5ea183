//! HTTP request handlers for the Benefits Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{BenefitsError, BenefitsResult};
use crate::models::Employee;
use crate::services::WriteOutcome;

use super::request::EmployeeRequest;
use super::response::{
    ApiError, ApiErrorResponse, ApiResponse, DependentResponse, EmployeeResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/employees",
            get(list_employees_handler).post(add_or_update_employee_handler),
        )
        .route("/api/v1/employees/:id", get(get_employee_handler))
        .route("/api/v1/employees/:id/paycheck", get(get_paycheck_handler))
        .route("/api/v1/dependents", get(list_dependents_handler))
        .route("/api/v1/dependents/:id", get(get_dependent_handler))
        .with_state(state)
}

/// Handler for GET /api/v1/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    let employees = state.employees();
    match run_blocking(correlation_id, move || employees.get_all_employees()).await {
        Ok(employees) if employees.is_empty() => {
            ApiErrorResponse::not_found(ApiError::new("NO_EMPLOYEES", "No employees found"))
                .into_response()
        }
        Ok(employees) => {
            let data: Vec<EmployeeResponse> = employees.into_iter().map(Into::into).collect();
            json_response(StatusCode::OK, ApiResponse::ok(data))
        }
        Err(response) => response,
    }
}

/// Handler for GET /api/v1/employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(correlation_id, id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, employee_id = id, "Fetching employee");

    let employees = state.employees();
    match run_blocking(correlation_id, move || employees.get_employee(id)).await {
        Ok(Some(employee)) => json_response(
            StatusCode::OK,
            ApiResponse::ok(EmployeeResponse::from(employee)),
        ),
        Ok(None) => ApiErrorResponse::not_found(ApiError::employee_not_found(id)).into_response(),
        Err(response) => response,
    }
}

/// Handler for GET /api/v1/employees/:id/paycheck.
async fn get_paycheck_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(correlation_id, id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, employee_id = id, "Calculating paycheck");

    let employees = state.employees();
    let as_of = state.today();
    match run_blocking(correlation_id, move || employees.get_paycheck(id, as_of)).await {
        Ok(Some(paycheck)) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = id,
                gross_pay = %paycheck.gross_pay,
                deductions = %paycheck.deductions,
                net_pay = %paycheck.net_pay,
                "Paycheck calculated"
            );
            json_response(StatusCode::OK, ApiResponse::ok(paycheck))
        }
        Ok(None) => ApiErrorResponse::not_found(ApiError::employee_not_found(id)).into_response(),
        Err(response) => response,
    }
}

/// Handler for POST /api/v1/employees.
///
/// Adds the employee or replaces the stored record with the same id.
/// Responds 201 for a new employee and 200 for a replaced one.
async fn add_or_update_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing add-or-update request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(json_rejection_error(correlation_id, rejection))
                .into_response();
        }
    };

    let employee = match Employee::try_from(request) {
        Ok(employee) => employee,
        Err(err) => return error_response(correlation_id, err),
    };

    let employees = state.employees();
    let record = employee.clone();
    match run_blocking(correlation_id, move || employees.add_or_update_employee(record)).await {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = employee.id,
                dependents_count = employee.dependents.len(),
                outcome = ?outcome,
                "Employee saved"
            );
            let (status, message) = match outcome {
                WriteOutcome::Created => (StatusCode::CREATED, "Employee added successfully."),
                WriteOutcome::Updated => (StatusCode::OK, "Employee updated successfully."),
            };
            json_response(
                status,
                ApiResponse::with_message(EmployeeResponse::from(employee), message),
            )
        }
        Err(response) => response,
    }
}

/// Handler for GET /api/v1/dependents.
async fn list_dependents_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing dependents");

    let dependents = state.dependents();
    match run_blocking(correlation_id, move || dependents.get_all_dependents()).await {
        Ok(dependents) if dependents.is_empty() => {
            ApiErrorResponse::not_found(ApiError::new("NO_DEPENDENTS", "No dependents found"))
                .into_response()
        }
        Ok(dependents) => {
            let data: Vec<DependentResponse> = dependents.into_iter().map(Into::into).collect();
            json_response(StatusCode::OK, ApiResponse::ok(data))
        }
        Err(response) => response,
    }
}

/// Handler for GET /api/v1/dependents/:id.
async fn get_dependent_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let id = match path_id(correlation_id, id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    info!(correlation_id = %correlation_id, dependent_id = id, "Fetching dependent");

    let dependents = state.dependents();
    match run_blocking(correlation_id, move || dependents.get_dependent(id)).await {
        Ok(Some(dependent)) => json_response(
            StatusCode::OK,
            ApiResponse::ok(DependentResponse::from(dependent)),
        ),
        Ok(None) => {
            ApiErrorResponse::not_found(ApiError::dependent_not_found(id)).into_response()
        }
        Err(response) => response,
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: BenefitsError) -> Response {
    if err.is_client_error() {
        warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
    } else {
        warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    }
    ApiErrorResponse::from(err).into_response()
}

/// Runs a service call on the blocking pool.
///
/// Services read and write the store with `std::fs` and hold a `std::sync`
/// lock while writing, so they must stay off the async worker threads.
async fn run_blocking<T, F>(correlation_id: Uuid, call: F) -> Result<T, Response>
where
    F: FnOnce() -> BenefitsResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(error_response(correlation_id, err)),
        Err(join_err) => {
            warn!(correlation_id = %correlation_id, error = %join_err, "Service task failed");
            Err(ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", "The request could not be completed"),
            )
            .into_response())
        }
    }
}

fn path_id(correlation_id: Uuid, id: Result<Path<i32>, PathRejection>) -> Result<i32, Response> {
    match id {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "Invalid path id");
            Err(ApiErrorResponse::bad_request(ApiError::invalid_id(body_text)).into_response())
        }
    }
}

fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
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
    }
}
