//! Employee operations: lookups, add-or-update, and paychecks.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::calculation::{PaycheckCalculator, validate_for_write};
use crate::error::BenefitsResult;
use crate::models::{Employee, PayCheck};
use crate::repository::EmployeeRepository;

/// Whether an add-or-update created a new record or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No employee had the id; the record was appended.
    Created,
    /// An employee with the id existed and was replaced wholesale.
    Updated,
}

/// Employee operations over an [`EmployeeRepository`].
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
    calculator: PaycheckCalculator,
    // Serializes load-modify-save cycles within this process only.
    write_lock: Mutex<()>,
}

impl EmployeeService {
    /// Creates a service over the given repository and calculator.
    pub fn new(repository: Arc<dyn EmployeeRepository>, calculator: PaycheckCalculator) -> Self {
        Self {
            repository,
            calculator,
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the employee with the given id, or `None` if there is none.
    pub fn get_employee(&self, id: i32) -> BenefitsResult<Option<Employee>> {
        let employees = self.repository.load_all()?;
        Ok(employees.into_iter().find(|e| e.id == id))
    }

    /// Returns every employee.
    pub fn get_all_employees(&self) -> BenefitsResult<Vec<Employee>> {
        self.repository.load_all()
    }

    /// Adds the employee, or replaces the stored record with the same id.
    ///
    /// The record is validated before the store is touched. Replacement is
    /// wholesale: names, salary, date of birth and the full dependent list.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BenefitsError::IneligibleDependents`] if the
    /// employee has both a spouse and a domestic partner, or any error from
    /// the repository.
    pub fn add_or_update_employee(&self, employee: Employee) -> BenefitsResult<WriteOutcome> {
        if let Err(err) = validate_for_write(&employee) {
            warn!(employee_id = employee.id, error = %err, "Rejected employee write");
            return Err(err);
        }

        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut employees = self.repository.load_all()?;
        let outcome = match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => {
                *existing = employee;
                WriteOutcome::Updated
            }
            None => {
                employees.push(employee);
                WriteOutcome::Created
            }
        };

        self.repository.save_all(&employees)?;
        info!(outcome = ?outcome, total = employees.len(), "Employee written");
        Ok(outcome)
    }

    /// Computes the paycheck of the employee with the given id.
    ///
    /// Returns `None` without invoking the calculator if there is no such
    /// employee. Dependent ages are taken on `as_of`.
    pub fn get_paycheck(&self, id: i32, as_of: NaiveDate) -> BenefitsResult<Option<PayCheck>> {
        Ok(self
            .get_employee(id)?
            .map(|employee| self.calculator.compute_paycheck(&employee, as_of)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenefitsError;
    use crate::models::{Dependent, Relationship};
    use crate::repository::{InMemoryRepository, JsonFileRepository};
    use rust_decimal::Decimal;
    use std::fs;
    use std::str::FromStr;
    use std::thread;

    struct UnavailableRepository;

    impl EmployeeRepository for UnavailableRepository {
        fn load_all(&self) -> BenefitsResult<Vec<Employee>> {
            Err(BenefitsError::DataUnavailable {
                path: "employees.json".to_string(),
                message: "missing".to_string(),
            })
        }

        fn save_all(&self, _employees: &[Employee]) -> BenefitsResult<()> {
            Err(BenefitsError::DataWriteError {
                path: "employees.json".to_string(),
                message: "read-only".to_string(),
            })
        }
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn employee(id: i32, first_name: &str, salary: &str) -> Employee {
        Employee {
            id,
            first_name: first_name.to_string(),
            last_name: "James".to_string(),
            salary: dec(salary),
            date_of_birth: NaiveDate::from_ymd_opt(1984, 12, 30).unwrap(),
            dependents: vec![],
        }
    }

    fn dependent(id: i32, relationship: Relationship) -> Dependent {
        Dependent {
            id,
            first_name: "Jane".to_string(),
            last_name: "James".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1960, 1, 1).unwrap(),
            relationship,
        }
    }

    fn service_with(employees: Vec<Employee>) -> (EmployeeService, Arc<InMemoryRepository>) {
        let repo = Arc::new(InMemoryRepository::with_employees(employees));
        let service = EmployeeService::new(repo.clone(), PaycheckCalculator::default());
        (service, repo)
    }

    #[test]
    fn test_get_existing_employee() {
        let (service, _) = service_with(vec![employee(1, "LeBron", "50000")]);

        let found = service.get_employee(1).unwrap().unwrap();
        assert_eq!(found.first_name, "LeBron");
        assert_eq!(found.last_name, "James");
    }

    #[test]
    fn test_get_missing_employee_is_none() {
        let (service, _) = service_with(vec![employee(1, "LeBron", "50000")]);
        assert!(service.get_employee(42).unwrap().is_none());
    }

    #[test]
    fn test_get_all_employees() {
        let (service, _) = service_with(vec![
            employee(1, "LeBron", "50000"),
            employee(2, "Ja", "60000"),
        ]);

        let all = service.get_all_employees().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].first_name, "LeBron");
        assert_eq!(all[1].first_name, "Ja");
    }

    #[test]
    fn test_add_new_employee() {
        let (service, repo) = service_with(vec![employee(1, "LeBron", "50000")]);

        let outcome = service
            .add_or_update_employee(employee(2, "Ja", "60000"))
            .unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        assert_eq!(repo.load_all().unwrap().len(), 2);
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut original = employee(1, "LeBron", "50000");
        original.dependents = vec![dependent(1, Relationship::Spouse)];
        let (service, repo) = service_with(vec![original]);

        let mut replacement = employee(1, "Bronny", "65000");
        replacement.dependents = vec![dependent(7, Relationship::Child)];
        let outcome = service.add_or_update_employee(replacement.clone()).unwrap();

        assert_eq!(outcome, WriteOutcome::Updated);
        let stored = repo.load_all().unwrap();
        assert_eq!(stored, vec![replacement]);
    }

    #[test]
    fn test_ineligible_employee_is_rejected_and_not_saved() {
        let (service, repo) = service_with(vec![employee(1, "LeBron", "50000")]);

        let mut invalid = employee(1, "LeBron", "99999");
        invalid.dependents = vec![
            dependent(1, Relationship::Spouse),
            dependent(2, Relationship::DomesticPartner),
        ];

        let err = service.add_or_update_employee(invalid).unwrap_err();
        assert!(matches!(err, BenefitsError::IneligibleDependents));
        assert_eq!(repo.load_all().unwrap()[0].salary, dec("50000"));
    }

    #[test]
    fn test_paycheck_for_existing_employee() {
        let (service, _) = service_with(vec![employee(1, "LeBron", "50000")]);

        let paycheck = service.get_paycheck(1, as_of()).unwrap().unwrap();
        assert_eq!(paycheck.employee_id, 1);
        assert_eq!(paycheck.gross_pay, dec("1923.08"));
        assert_eq!(paycheck.net_pay, dec("1461.54"));
    }

    #[test]
    fn test_paycheck_with_senior_spouse() {
        let mut lebron = employee(1, "LeBron", "120000");
        lebron.dependents = vec![dependent(1, Relationship::Spouse)];
        let (service, _) = service_with(vec![lebron]);

        let paycheck = service.get_paycheck(1, as_of()).unwrap().unwrap();
        assert_eq!(paycheck.gross_pay, dec("4615.38"));
        assert_eq!(paycheck.deductions, dec("923.08"));
        assert_eq!(paycheck.net_pay, dec("3692.31"));
    }

    #[test]
    fn test_paycheck_for_missing_employee_is_none() {
        let (service, _) = service_with(vec![]);
        assert!(service.get_paycheck(1, as_of()).unwrap().is_none());
    }

    #[test]
    fn test_data_errors_propagate_unchanged() {
        let service = EmployeeService::new(
            Arc::new(UnavailableRepository),
            PaycheckCalculator::default(),
        );

        assert!(matches!(
            service.get_employee(1),
            Err(BenefitsError::DataUnavailable { .. })
        ));
        assert!(matches!(
            service.get_paycheck(1, as_of()),
            Err(BenefitsError::DataUnavailable { .. })
        ));
        assert!(matches!(
            service.add_or_update_employee(employee(1, "LeBron", "1")),
            Err(BenefitsError::DataUnavailable { .. })
        ));
    }

    #[test]
    fn test_validation_runs_before_store_access() {
        let service = EmployeeService::new(
            Arc::new(UnavailableRepository),
            PaycheckCalculator::default(),
        );

        let mut invalid = employee(1, "LeBron", "1");
        invalid.dependents = vec![
            dependent(1, Relationship::DomesticPartner),
            dependent(2, Relationship::Spouse),
        ];

        assert!(matches!(
            service.add_or_update_employee(invalid),
            Err(BenefitsError::IneligibleDependents)
        ));
    }

    #[test]
    fn test_concurrent_writes_are_serialized() {
        const WRITERS: i32 = 16;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        fs::write(&path, "[]").unwrap();
        let repository = Arc::new(JsonFileRepository::new(&path));
        let service = EmployeeService::new(repository.clone(), PaycheckCalculator::default());

        thread::scope(|scope| {
            for id in 1..=WRITERS {
                let service = &service;
                scope.spawn(move || {
                    let outcome = service
                        .add_or_update_employee(employee(id, "Writer", "50000"))
                        .unwrap();
                    assert_eq!(outcome, WriteOutcome::Created);
                });
            }
        });

        let mut ids: Vec<i32> = repository.load_all().unwrap().iter().map(|e| e.id).collect();
        ids.sort();
        assert_eq!(ids, (1..=WRITERS).collect::<Vec<_>>());

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("employees_"))
            .count();
        assert_eq!(backups, WRITERS as usize);
    }
}
