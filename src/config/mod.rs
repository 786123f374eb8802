//! Reference data loading and management for the Salary Estimator.
//!
//! This module provides functionality to load the salary table, multipliers,
//! form catalog and spread constants from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_estimator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dach").unwrap();
//! println!("Baseline: {}", config.reference().baseline_country());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CatalogConfig, CatalogEntry, CountryEntry, EstimatorParameters, MultiplierConfig,
    ReferenceData, SalaryBand, SalaryTableConfig,
};
