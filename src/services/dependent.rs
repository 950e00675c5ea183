//! Dependent lookups across all employees.

use std::sync::Arc;

use crate::error::BenefitsResult;
use crate::models::Dependent;
use crate::repository::EmployeeRepository;

/// Read-only dependent operations over an [`EmployeeRepository`].
pub struct DependentService {
    repository: Arc<dyn EmployeeRepository>,
}

impl DependentService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Returns the first dependent with the given id across all employees.
    ///
    /// Dependent ids are only unique within one employee, so when several
    /// employees use the same id the one stored first wins.
    pub fn get_dependent(&self, id: i32) -> BenefitsResult<Option<Dependent>> {
        let employees = self.repository.load_all()?;
        Ok(employees
            .into_iter()
            .flat_map(|e| e.dependents)
            .find(|d| d.id == id))
    }

    /// Returns every dependent of every employee.
    pub fn get_all_dependents(&self) -> BenefitsResult<Vec<Dependent>> {
        let employees = self.repository.load_all()?;
        Ok(employees.into_iter().flat_map(|e| e.dependents).collect())
    }
}
