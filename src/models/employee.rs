//! Employee model.
//!
//! This module defines the Employee struct, the record persisted by the
//! repository and consumed by the eligibility and paycheck calculations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::age::age_on;
use super::dependent::{Dependent, Relationship};

/// Represents an employee and the dependents covered by their benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
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
    /// Covered dependents. Order carries no meaning.
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl Employee {
    /// Returns the employee's age in whole years on the given date.
    pub fn age_on(&self, as_of: NaiveDate) -> i32 {
        age_on(self.date_of_birth, as_of)
    }

    /// Returns true if any dependent has the given relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefits_engine::models::{Dependent, Employee, Relationship};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     first_name: "LeBron".to_string(),
    ///     last_name: "James".to_string(),
    ///     salary: Decimal::new(7542099, 2),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
    ///     dependents: vec![Dependent {
    ///         id: 1,
    ///         first_name: "Bronny".to_string(),
    ///         last_name: "James".to_string(),
    ///         date_of_birth: NaiveDate::from_ymd_opt(2004, 10, 6).unwrap(),
    ///         relationship: Relationship::Child,
    ///     }],
    /// };
    /// assert!(employee.has_dependent(Relationship::Child));
    /// assert!(!employee.has_dependent(Relationship::Spouse));
    /// ```
    pub fn has_dependent(&self, relationship: Relationship) -> bool {
        self.dependents
            .iter()
            .any(|d| d.relationship == relationship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_employee() -> Employee {
        Employee {
            id: 2,
            first_name: "Ja".to_string(),
            last_name: "Morant".to_string(),
            salary: Decimal::from_str("92365.22").unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 8, 10).unwrap(),
            dependents: vec![
                Dependent {
                    id: 1,
                    first_name: "Spouse".to_string(),
                    last_name: "Morant".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(1998, 3, 3).unwrap(),
                    relationship: Relationship::Spouse,
                },
                Dependent {
                    id: 2,
                    first_name: "Child1".to_string(),
                    last_name: "Morant".to_string(),
                    date_of_birth: NaiveDate::from_ymd_opt(2020, 6, 23).unwrap(),
                    relationship: Relationship::Child,
                },
            ],
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": 1,
            "first_name": "LeBron",
            "last_name": "James",
            "salary": "75420.99",
            "date_of_birth": "1984-12-30",
            "dependents": []
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.first_name, "LeBron");
        assert_eq!(employee.salary, Decimal::new(7542099, 2));
        assert!(employee.dependents.is_empty());
    }

    #[test]
    fn test_deserialize_numeric_salary() {
        let json = r#"{
            "id": 1,
            "salary": 50000,
            "date_of_birth": "1984-12-30"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.salary, Decimal::from(50000));
        assert!(employee.dependents.is_empty());
        assert!(employee.first_name.is_empty());
    }

    #[test]
    fn test_salary_serializes_as_string() {
        let employee = create_test_employee();
        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["salary"].as_str().unwrap(), "92365.22");
    }

    #[test]
    fn test_has_dependent() {
        let employee = create_test_employee();
        assert!(employee.has_dependent(Relationship::Spouse));
        assert!(employee.has_dependent(Relationship::Child));
        assert!(!employee.has_dependent(Relationship::DomesticPartner));
    }

    #[test]
    fn test_employee_age() {
        let employee = create_test_employee();
        let as_of = NaiveDate::from_ymd_opt(2024, 8, 9).unwrap();
        assert_eq!(employee.age_on(as_of), 24);
    }
}
