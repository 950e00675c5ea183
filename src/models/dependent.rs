//! Dependent model and relationship categories.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::age::age_on;

/// How a dependent is related to the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// Married spouse.
    Spouse,
    /// Domestic partner.
    DomesticPartner,
    /// Child of the employee.
    Child,
    /// Any other covered person.
    Other,
}

/// A person covered under an employee's benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    /// Identifier, unique within the owning employee's dependents.
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

impl Dependent {
    /// Returns the dependent's age in whole years on the given date.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        age_on(self.date_of_birth, as_of)
    }
}
