//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the benefit
//! policy and service settings from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{BenefitsError, BenefitsResult};

use super::types::{BenefitPolicy, ServiceConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml   # Benefit cost policy
/// └── service.yaml  # Bind address and data store path
/// ```
///
/// # Example
///
/// ```no_run
/// use benefits_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/default").unwrap();
/// println!("Pay periods per year: {}", config.policy().pay_periods_per_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: BenefitPolicy,
    service: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or the policy fails [`BenefitPolicy::validate`].
    pub fn load<P: AsRef<Path>>(path: P) -> BenefitsResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<BenefitPolicy>(&path.join("policy.yaml"))?;
        policy.validate()?;

        let service = Self::load_yaml::<ServiceConfig>(&path.join("service.yaml"))?;

        Ok(Self { policy, service })
    }

    /// Builds a loader from values already in memory.
    pub fn from_parts(policy: BenefitPolicy, service: ServiceConfig) -> BenefitsResult<Self> {
        policy.validate()?;
        Ok(Self { policy, service })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> BenefitsResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BenefitsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| BenefitsError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the benefit cost policy.
    pub fn policy(&self) -> &BenefitPolicy {
        &self.policy
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }

    /// Replaces the bind address, e.g. from a command-line override.
    pub fn set_bind_address(&mut self, bind_address: impl Into<String>) {
        self.service.bind_address = bind_address.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_default_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy(), &BenefitPolicy::default());
        assert_eq!(
            loader.service().data_path,
            PathBuf::from("data/employees.json")
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(BenefitsError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_service_file_returns_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("policy.yaml"),
            serde_yaml::to_string(&BenefitPolicy::default()).unwrap(),
        )
        .unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(BenefitsError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("policy.yaml"), "base_monthly_cost: [oops").unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(BenefitsError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_policy_is_rejected_on_load() {
        let dir = tempdir().unwrap();
        let policy = BenefitPolicy {
            pay_periods_per_year: 0,
            ..BenefitPolicy::default()
        };
        fs::write(
            dir.path().join("policy.yaml"),
            serde_yaml::to_string(&policy).unwrap(),
        )
        .unwrap();
        fs::write(dir.path().join("service.yaml"), "data_path: employees.json").unwrap();

        assert!(matches!(
            ConfigLoader::load(dir.path()),
            Err(BenefitsError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn test_custom_policy_loaded() {
        let dir = tempdir().unwrap();
        let policy = BenefitPolicy {
            base_monthly_cost: Decimal::new(1200, 0),
            ..BenefitPolicy::default()
        };
        fs::write(
            dir.path().join("policy.yaml"),
            serde_yaml::to_string(&policy).unwrap(),
        )
        .unwrap();
        fs::write(
            dir.path().join("service.yaml"),
            "bind_address: 0.0.0.0:9000\ndata_path: /srv/employees.json\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.policy().base_monthly_cost, Decimal::new(1200, 0));
        assert_eq!(loader.service().bind_address, "0.0.0.0:9000");
    }

    #[test]
    fn test_set_bind_address_overrides_file_value() {
        let mut loader = ConfigLoader::load(config_path()).unwrap();
        loader.set_bind_address("0.0.0.0:3000");
        assert_eq!(loader.service().bind_address, "0.0.0.0:3000");
    }
}
