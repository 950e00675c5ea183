//! In-memory employee store.

use std::sync::{Mutex, PoisonError};

use crate::error::BenefitsResult;
use crate::models::Employee;

use super::EmployeeRepository;

/// In-memory implementation of EmployeeRepository for testing.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    employees: Mutex<Vec<Employee>>,
}

impl InMemoryRepository {
    /// Create a new empty InMemoryRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new InMemoryRepository with pre-populated employees.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
        }
    }
}

impl EmployeeRepository for InMemoryRepository {
    fn load_all(&self) -> BenefitsResult<Vec<Employee>> {
        Ok(self
            .employees
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn save_all(&self, employees: &[Employee]) -> BenefitsResult<()> {
        *self.employees.lock().unwrap_or_else(PoisonError::into_inner) = employees.to_vec();
        Ok(())
    }
}
