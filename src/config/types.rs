//! Configuration types for the Benefits Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{BenefitsError, BenefitsResult};

/// Benefit cost policy, loaded from `policy.yaml`.
///
/// The policy is frozen once loaded: the paycheck calculator takes its own
/// copy at construction and never reads it from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitPolicy {
    /// Cost of the employee's own benefits per month.
    pub base_monthly_cost: Decimal,
    /// Cost per dependent per month.
    pub dependent_monthly_cost: Decimal,
    /// Annual salary above which the high-salary surcharge applies.
    pub high_salary_threshold: Decimal,
    /// Fraction of annual salary charged to high earners (0.02 = 2%).
    pub high_salary_surcharge_rate: Decimal,
    /// Number of paychecks per year.
    pub pay_periods_per_year: u32,
    /// Number of months per year.
    pub months_per_year: u32,
    /// Dependents strictly older than this pay the senior surcharge.
    pub senior_dependent_age: i32,
    /// Extra monthly cost for each senior dependent.
    pub senior_dependent_monthly_surcharge: Decimal,
}

impl Default for BenefitPolicy {
    fn default() -> Self {
        Self {
            base_monthly_cost: Decimal::new(1000, 0),
            dependent_monthly_cost: Decimal::new(600, 0),
            high_salary_threshold: Decimal::new(80000, 0),
            high_salary_surcharge_rate: Decimal::new(2, 2),
            pay_periods_per_year: 26,
            months_per_year: 12,
            senior_dependent_age: 50,
            senior_dependent_monthly_surcharge: Decimal::new(200, 0),
        }
    }
}

impl BenefitPolicy {
    /// Checks that the policy can be used for calculations.
    ///
    /// Rejects zero pay periods or months (both are divisors or multipliers
    /// of every cost) and negative amounts.
    pub fn validate(&self) -> BenefitsResult<()> {
        if self.pay_periods_per_year == 0 {
            return Err(invalid_policy(
                "pay_periods_per_year",
                "must be greater than zero",
            ));
        }
        if self.months_per_year == 0 {
            return Err(invalid_policy("months_per_year", "must be greater than zero"));
        }

        let amounts = [
            ("base_monthly_cost", self.base_monthly_cost),
            ("dependent_monthly_cost", self.dependent_monthly_cost),
            ("high_salary_threshold", self.high_salary_threshold),
            ("high_salary_surcharge_rate", self.high_salary_surcharge_rate),
            (
                "senior_dependent_monthly_surcharge",
                self.senior_dependent_monthly_surcharge,
            ),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(invalid_policy(field, "must not be negative"));
            }
        }

        if self.senior_dependent_age < 0 {
            return Err(invalid_policy("senior_dependent_age", "must not be negative"));
        }

        Ok(())
    }
}

fn invalid_policy(field: &str, message: &str) -> BenefitsError {
    BenefitsError::InvalidPolicy {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Service settings, loaded from `service.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Socket address the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Path of the employee JSON store. Relative paths resolve against the
    /// process working directory.
    pub data_path: PathBuf,
}

fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}
