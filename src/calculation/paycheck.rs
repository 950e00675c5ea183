//! Paycheck calculation functionality.
//!
//! This module computes gross pay, benefit deductions and net pay for one
//! pay period from an employee's salary and covered dependents.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::BenefitPolicy;
use crate::error::BenefitsResult;
use crate::models::{Dependent, Employee, PayCheck};

/// Number of decimal places paycheck amounts are rounded to.
pub const PAYCHECK_DECIMAL_PLACES: u32 = 2;

/// The annual benefit cost of an employee, before it is split into pay periods.
///
/// Values are unrounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnualCostBreakdown {
    /// The employee's own benefit cost.
    pub base: Decimal,
    /// Sum of the cost of every dependent, senior surcharges included.
    pub dependents: Decimal,
    /// The high-salary surcharge, zero at or below the threshold.
    pub salary_surcharge: Decimal,
    /// `base + dependents + salary_surcharge`.
    pub total: Decimal,
}

/// Computes paychecks against a fixed [`BenefitPolicy`].
///
/// The calculator holds no mutable state; one instance can be shared across
/// threads and called concurrently.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::PaycheckCalculator;
/// use benefits_engine::models::Employee;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: 1,
///     first_name: "LeBron".to_string(),
///     last_name: "James".to_string(),
///     salary: Decimal::new(50000, 0),
///     date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
///     dependents: vec![],
/// };
///
/// let calculator = PaycheckCalculator::default();
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let paycheck = calculator.compute_paycheck(&employee, as_of);
///
/// assert_eq!(paycheck.gross_pay, Decimal::from_str("1923.08").unwrap());
/// assert_eq!(paycheck.deductions, Decimal::from_str("461.54").unwrap());
/// assert_eq!(paycheck.net_pay, Decimal::from_str("1461.54").unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaycheckCalculator {
    policy: BenefitPolicy,
}

impl PaycheckCalculator {
    /// Creates a calculator for the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BenefitsError::InvalidPolicy`] if the policy
    /// fails validation.
    pub fn new(policy: BenefitPolicy) -> BenefitsResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Returns the policy this calculator applies.
    pub fn policy(&self) -> &BenefitPolicy {
        &self.policy
    }

    /// Returns the annual benefit cost of a single dependent.
    ///
    /// Dependents strictly older than the senior age threshold on `as_of`
    /// carry the senior surcharge.
    pub fn dependent_annual_cost(&self, dependent: &Dependent, as_of: NaiveDate) -> Decimal {
        let months = Decimal::from(self.policy.months_per_year);
        let cost = self.policy.dependent_monthly_cost * months;

        if dependent.age_on(as_of) > self.policy.senior_dependent_age {
            cost + self.policy.senior_dependent_monthly_surcharge * months
        } else {
            cost
        }
    }

    /// Returns the unrounded annual benefit cost of an employee.
    pub fn annual_costs(&self, employee: &Employee, as_of: NaiveDate) -> AnnualCostBreakdown {
        let months = Decimal::from(self.policy.months_per_year);
        let base = self.policy.base_monthly_cost * months;

        let dependents: Decimal = employee
            .dependents
            .iter()
            .map(|d| self.dependent_annual_cost(d, as_of))
            .sum();

        let salary_surcharge = if employee.salary > self.policy.high_salary_threshold {
            employee.salary * self.policy.high_salary_surcharge_rate
        } else {
            Decimal::ZERO
        };

        AnnualCostBreakdown {
            base,
            dependents,
            salary_surcharge,
            total: base + dependents + salary_surcharge,
        }
    }

    /// Computes the paycheck for one pay period.
    ///
    /// Gross pay and deductions are the annual salary and annual cost divided
    /// by the number of pay periods. Net pay is taken from the unrounded
    /// values, and each of the three amounts is then rounded on its own to two
    /// decimal places, midpoints away from zero.
    pub fn compute_paycheck(&self, employee: &Employee, as_of: NaiveDate) -> PayCheck {
        let periods = Decimal::from(self.policy.pay_periods_per_year);
        let costs = self.annual_costs(employee, as_of);

        let gross_pay = employee.salary / periods;
        let deductions = costs.total / periods;
        let net_pay = gross_pay - deductions;

        PayCheck {
            employee_id: employee.id,
            gross_pay: round_currency(gross_pay),
            deductions: round_currency(deductions),
            net_pay: round_currency(net_pay),
        }
    }
}

/// Rounds to cents and pads exact results, so `2000` becomes `2000.00`.
fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(PAYCHECK_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PAYCHECK_DECIMAL_PLACES);
    rounded
}
