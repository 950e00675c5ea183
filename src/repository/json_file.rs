//! JSON file employee store.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, info};

use crate::error::{BenefitsError, BenefitsResult};
use crate::models::Employee;

use super::EmployeeRepository;

/// Stores employees as a pretty-printed JSON array in a single file.
///
/// Every save first renames the current file to
/// `<stem>_<YYYYmmddHHMMSS>.json` in the same directory, so the previous
/// state survives as a recovery point.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    /// Picks a backup path that does not exist yet.
    fn backup_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "employees".to_string());
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        let timestamp = Local::now().format("%Y%m%d%H%M%S");

        let mut candidate = dir.join(format!("{}_{}.json", stem, timestamp));
        let mut n = 1;
        while candidate.exists() {
            candidate = dir.join(format!("{}_{}_{}.json", stem, timestamp, n));
            n += 1;
        }
        candidate
    }

    fn write_error(&self, path: &Path, e: impl ToString) -> BenefitsError {
        BenefitsError::DataWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    }
}

impl EmployeeRepository for JsonFileRepository {
    fn load_all(&self) -> BenefitsResult<Vec<Employee>> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| BenefitsError::DataUnavailable {
                path: self.path_str(),
                message: e.to_string(),
            })?;

        let employees: Vec<Employee> =
            serde_json::from_str(&content).map_err(|e| BenefitsError::DataParseError {
                path: self.path_str(),
                message: e.to_string(),
            })?;

        debug!(path = %self.path.display(), count = employees.len(), "Loaded employees");
        Ok(employees)
    }

    fn save_all(&self, employees: &[Employee]) -> BenefitsResult<()> {
        let json =
            serde_json::to_string_pretty(employees).map_err(|e| self.write_error(&self.path, e))?;

        if self.path.exists() {
            let backup = self.backup_path();
            fs::rename(&self.path, &backup).map_err(|e| self.write_error(&backup, e))?;
            info!(
                path = %self.path.display(),
                backup = %backup.display(),
                "Backed up employee data"
            );
        }

        fs::write(&self.path, json).map_err(|e| self.write_error(&self.path, e))?;
        info!(path = %self.path.display(), count = employees.len(), "Saved employees");
        Ok(())
    }
}
