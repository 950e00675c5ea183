//! Application state for the Benefits Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::calculation::PaycheckCalculator;
use crate::config::ConfigLoader;
use crate::error::BenefitsResult;
use crate::repository::{EmployeeRepository, JsonFileRepository};
use crate::services::{DependentService, EmployeeService};

/// Shared application state.
///
/// Holds the services every handler works through, and the date used for
/// dependent ages in paycheck calculations.
#[derive(Clone)]
pub struct AppState {
    employees: Arc<EmployeeService>,
    dependents: Arc<DependentService>,
    /// Overrides the current date; `None` means use the local clock.
    fixed_date: Option<NaiveDate>,
}

impl AppState {
    /// Creates application state over the given repository and calculator.
    pub fn new(repository: Arc<dyn EmployeeRepository>, calculator: PaycheckCalculator) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(repository.clone(), calculator)),
            dependents: Arc::new(DependentService::new(repository)),
            fixed_date: None,
        }
    }

    /// Creates application state backed by the JSON store named in the
    /// configuration, calculating with its policy.
    pub fn from_config(config: &ConfigLoader) -> BenefitsResult<Self> {
        let calculator = PaycheckCalculator::new(config.policy().clone())?;
        let repository = Arc::new(JsonFileRepository::new(&config.service().data_path));
        Ok(Self::new(repository, calculator))
    }

    /// Pins the date used for age calculations.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    /// Returns the date paychecks are calculated for.
    pub fn today(&self) -> NaiveDate {
        self.fixed_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Returns a handle to the employee service.
    ///
    /// The handle is owned so it can be moved onto a blocking task.
    pub fn employees(&self) -> Arc<EmployeeService> {
        Arc::clone(&self.employees)
    }

    /// Returns a handle to the dependent service.
    pub fn dependents(&self) -> Arc<DependentService> {
        Arc::clone(&self.dependents)
    }
}
