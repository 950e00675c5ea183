//! Calculation logic for the Benefits Engine.
//!
//! This module contains the dependent eligibility rule checked before an
//! employee is written, and the paycheck calculator that turns salary and
//! dependents into gross pay, deductions and net pay.

mod eligibility;
mod paycheck;

pub use eligibility::{is_eligible, validate_for_write};
pub use paycheck::{AnnualCostBreakdown, PAYCHECK_DECIMAL_PLACES, PaycheckCalculator};
