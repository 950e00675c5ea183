//! Request types for the Benefits Engine API.
//!
//! This module defines the JSON request structures for the add-or-update
//! endpoint and their conversion into domain types.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BenefitsError;
use crate::models::{Dependent, Employee, Relationship};

/// Request body for `POST /api/v1/employees`.
///
/// The request carries the complete record; it replaces any stored employee
/// with the same id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: i32,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Annual salary.
    pub salary: Decimal,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// Covered dependents.
    #[serde(default)]
    pub dependents: Vec<DependentRequest>,
}

/// Dependent information in an employee request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependentRequest {
    /// Identifier, unique within the employee.
    pub id: i32,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// The dependent's date of birth.
    pub date_of_birth: NaiveDate,
    /// Relationship to the employee.
    pub relationship: Relationship,
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = BenefitsError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        if req.salary < Decimal::ZERO {
            return Err(BenefitsError::InvalidEmployee {
                field: "salary".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for dependent in &req.dependents {
            if !seen.insert(dependent.id) {
                return Err(BenefitsError::InvalidEmployee {
                    field: "dependents".to_string(),
                    message: format!("duplicate dependent id {}", dependent.id),
                });
            }
        }

        Ok(Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
            date_of_birth: req.date_of_birth,
            dependents: req.dependents.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<DependentRequest> for Dependent {
    fn from(req: DependentRequest) -> Self {
        Dependent {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            relationship: req.relationship,
        }
    }
}
