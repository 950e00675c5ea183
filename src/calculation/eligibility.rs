//! Dependent eligibility rules.
//!
//! An employee may cover a spouse or a domestic partner, but not both at the
//! same time. Any number of children and other dependents is allowed.

use crate::error::{BenefitsError, BenefitsResult};
use crate::models::{Employee, Relationship};

/// Returns false if the employee has both a spouse and a domestic partner.
///
/// Only relationships are inspected; ages, names and the number of children
/// or other dependents play no part.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::is_eligible;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::new(50000, 0),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
/// assert!(is_eligible(&employee));
/// ```
pub fn is_eligible(employee: &Employee) -> bool {
    !(employee.has_dependent(Relationship::Spouse)
        && employee.has_dependent(Relationship::DomesticPartner))
}

/// Checks an employee record before it is written to the store.
///
/// # Errors
///
/// Returns [`BenefitsError::IneligibleDependents`] when [`is_eligible`]
/// is false.
pub fn validate_for_write(employee: &Employee) -> BenefitsResult<()> {
    if is_eligible(employee) {
        Ok(())
    } else {
        Err(BenefitsError::IneligibleDependents)
    }
}
