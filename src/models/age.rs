//! Age derivation shared by employees and dependents.

use chrono::{Datelike, NaiveDate};

/// Returns the age in whole years of someone born on `date_of_birth`,
/// measured on `as_of`.
///
/// Uses calendar-year arithmetic and subtracts one year when the birthday
/// has not yet occurred in the `as_of` year. A person born on 29 February
/// turns a year older on 1 March in non-leap years.
///
/// # Examples
///
/// ```
/// use benefits_engine::models::age_on;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1974, 6, 15).unwrap();
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 49);
/// assert_eq!(age_on(dob, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 50);
/// ```
pub fn age_on(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    let years = as_of.year() - date_of_birth.year();
    if (as_of.month(), as_of.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years - 1
    } else {
        years
    }
}
