//! Response types for the Benefits Engine API.
//!
//! This module defines the success envelope, the employee and dependent
//! response DTOs, and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BenefitsError;
use crate::models::{Dependent, Employee, Relationship};

/// Envelope wrapping every successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// The payload.
    pub data: T,
    /// Always true for a successful response.
    pub success: bool,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload.
    pub fn ok(data: T) -> Self {
        Self {
            data,
            success: true,
            message: None,
        }
    }

    /// Wraps a payload with a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: Some(message.into()),
        }
    }
}

/// Employee as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Unique identifier for the employee.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Annual salary.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Covered dependents.
    pub dependents: Vec<DependentResponse>,
}

/// Dependent as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependentResponse {
    /// Identifier, unique within the owning employee.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// Relationship to the employee.
    pub relationship: Relationship,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            salary: employee.salary,
            date_of_birth: employee.date_of_birth,
            dependents: employee.dependents.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Dependent> for DependentResponse {
    fn from(dependent: Dependent) -> Self {
        Self {
            id: dependent.id,
            first_name: dependent.first_name,
            last_name: dependent.last_name,
            date_of_birth: dependent.date_of_birth,
            relationship: dependent.relationship,
        }
    }
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

    /// Creates an invalid path id error response.
    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::new("INVALID_ID", message)
    }

    /// Creates an employee not found error response.
    pub fn employee_not_found(id: i32) -> Self {
        Self::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id))
    }

    /// Creates a dependent not found error response.
    pub fn dependent_not_found(id: i32) -> Self {
        Self::new("DEPENDENT_NOT_FOUND", format!("Dependent not found: {}", id))
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
    /// Creates an error response with the given status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 404 response.
    pub fn not_found(error: ApiError) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<BenefitsError> for ApiErrorResponse {
    fn from(error: BenefitsError) -> Self {
        let message = error.to_string();
        match error {
            BenefitsError::ConfigNotFound { .. }
            | BenefitsError::ConfigParseError { .. }
            | BenefitsError::InvalidPolicy { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            BenefitsError::DataUnavailable { .. }
            | BenefitsError::DataParseError { .. }
            | BenefitsError::DataWriteError { .. } => ApiErrorResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::with_details(
                    "DATA_UNAVAILABLE",
                    "Employee data is currently unavailable",
                    message,
                ),
            ),
            BenefitsError::IneligibleDependents => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INELIGIBLE_DEPENDENTS",
                    message,
                    "Remove either the spouse or the domestic partner and resubmit",
                ),
            ),
            BenefitsError::InvalidEmployee { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            ),
        }
    }
}
