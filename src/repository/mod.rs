//! Storage for employee records.
//!
//! The store is read and written as a whole collection. A load-modify-save
//! cycle is not atomic: two writers interleaving can lose one update. Callers
//! that write concurrently must serialize their cycles themselves.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;

use crate::error::BenefitsResult;
use crate::models::Employee;

/// A storage backend holding the full set of employee records.
pub trait EmployeeRepository: Send + Sync {
    /// Loads every employee record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BenefitsError::DataUnavailable`] if the store
    /// is missing or unreadable, or
    /// [`crate::error::BenefitsError::DataParseError`] if its contents are
    /// not valid.
    fn load_all(&self) -> BenefitsResult<Vec<Employee>>;

    /// Replaces the stored collection with `employees`.
    fn save_all(&self, employees: &[Employee]) -> BenefitsResult<()>;
}
