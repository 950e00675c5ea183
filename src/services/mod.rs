//! Application services sitting between the HTTP layer and the repository.

mod dependent;
mod employee;

pub use dependent::DependentService;
pub use employee::{EmployeeService, WriteOutcome};
