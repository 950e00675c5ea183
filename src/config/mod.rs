//! Configuration loading and management for the Benefits Engine.
//!
//! This module loads the benefit cost policy and the service settings from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use benefits_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Employee store: {}", config.service().data_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BenefitPolicy, ServiceConfig};
