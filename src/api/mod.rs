//! HTTP API module for the Benefits Engine.
//!
//! This module provides the REST endpoints for reading employees and
//! dependents, adding or updating employees, and calculating paychecks.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DependentRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse, ApiResponse, DependentResponse, EmployeeResponse};
pub use state::AppState;
