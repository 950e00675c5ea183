//! Paycheck model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The result of a paycheck calculation for one pay period.
///
/// All amounts are rounded to two decimal places. `net_pay` is rounded from
/// its own unrounded value, so it may differ by a cent from
/// `gross_pay - deductions`.
///
/// # Example
///
/// ```
/// use benefits_engine::models::PayCheck;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let paycheck = PayCheck {
///     employee_id: 1,
///     gross_pay: Decimal::from_str("1923.08").unwrap(),
///     deductions: Decimal::from_str("461.54").unwrap(),
///     net_pay: Decimal::from_str("1461.54").unwrap(),
/// };
/// assert_eq!(paycheck.employee_id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCheck {
    /// The employee this paycheck belongs to.
    pub employee_id: i32,
    /// Salary for one pay period, before deductions.
    pub gross_pay: Decimal,
    /// Benefit cost for one pay period.
    pub deductions: Decimal,
    /// Gross pay minus deductions.
    pub net_pay: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_serialize_paycheck_amounts_as_strings() {
        let paycheck = PayCheck {
            employee_id: 7,
            gross_pay: Decimal::from_str("4615.38").unwrap(),
            deductions: Decimal::from_str("923.08").unwrap(),
            net_pay: Decimal::from_str("3692.31").unwrap(),
        };

        let json = serde_json::to_value(&paycheck).unwrap();
        assert_eq!(json["employee_id"], 7);
        assert_eq!(json["gross_pay"].as_str().unwrap(), "4615.38");
        assert_eq!(json["deductions"].as_str().unwrap(), "923.08");
        assert_eq!(json["net_pay"].as_str().unwrap(), "3692.31");
    }
}
