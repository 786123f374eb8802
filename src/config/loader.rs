//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading reference
//! data from YAML files, or from the copy bundled into the binary.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{EstimatorError, EstimatorResult};

use super::types::{
    CatalogConfig, EstimatorParameters, MultiplierConfig, ReferenceData, SalaryTableConfig,
};

const EMBEDDED_CATALOG: &str = include_str!("../../config/dach/catalog.yaml");
const EMBEDDED_SALARIES: &str = include_str!("../../config/dach/salaries.yaml");
const EMBEDDED_MULTIPLIERS: &str = include_str!("../../config/dach/multipliers.yaml");
const EMBEDDED_PARAMETERS: &str = include_str!("../../config/dach/parameters.yaml");

/// Loads and provides access to reference data.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/dach/
/// ├── catalog.yaml      # Form options and labels
/// ├── salaries.yaml     # Role × level base salaries
/// ├── multipliers.yaml  # Country, city and company-size multipliers
/// └── parameters.yaml   # Spread and day-rate constants (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dach").unwrap();
/// println!("Roles: {}", loader.reference().catalog().roles.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    reference: Arc<ReferenceData>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/dach")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tables do not cover every option the catalog lists
    ///
    /// A missing parameters.yaml falls back to the default constants.
    pub fn load<P: AsRef<Path>>(path: P) -> EstimatorResult<Self> {
        let path = path.as_ref();

        let catalog = Self::load_yaml::<CatalogConfig>(&path.join("catalog.yaml"))?;
        let salaries = Self::load_yaml::<SalaryTableConfig>(&path.join("salaries.yaml"))?;
        let multipliers = Self::load_yaml::<MultiplierConfig>(&path.join("multipliers.yaml"))?;

        let parameters_path = path.join("parameters.yaml");
        let parameters = if parameters_path.exists() {
            Self::load_yaml::<EstimatorParameters>(&parameters_path)?
        } else {
            debug!(path = %parameters_path.display(), "No parameters file, using defaults");
            EstimatorParameters::default()
        };

        let reference = ReferenceData::new(catalog, salaries, multipliers, parameters)?;
        debug!(
            path = %path.display(),
            roles = reference.catalog().roles.len(),
            countries = reference.catalog().countries.len(),
            "Loaded reference data"
        );

        Ok(Self {
            reference: Arc::new(reference),
        })
    }

    /// Loads the DACH reference data compiled into the crate.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_estimator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::embedded().unwrap();
    /// assert_eq!(loader.reference().baseline_country(), "DE");
    /// ```
    pub fn embedded() -> EstimatorResult<Self> {
        let catalog = Self::parse_yaml::<CatalogConfig>("embedded:catalog.yaml", EMBEDDED_CATALOG)?;
        let salaries =
            Self::parse_yaml::<SalaryTableConfig>("embedded:salaries.yaml", EMBEDDED_SALARIES)?;
        let multipliers = Self::parse_yaml::<MultiplierConfig>(
            "embedded:multipliers.yaml",
            EMBEDDED_MULTIPLIERS,
        )?;
        let parameters = Self::parse_yaml::<EstimatorParameters>(
            "embedded:parameters.yaml",
            EMBEDDED_PARAMETERS,
        )?;

        let reference = ReferenceData::new(catalog, salaries, multipliers, parameters)?;
        Ok(Self {
            reference: Arc::new(reference),
        })
    }

    /// Loads from `path` when given, otherwise the embedded data.
    pub fn load_or_embedded<P: AsRef<Path>>(path: Option<P>) -> EstimatorResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::embedded(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EstimatorResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EstimatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&path_str, &content)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(path: &str, content: &str) -> EstimatorResult<T> {
        serde_yaml::from_str(content).map_err(|e| EstimatorError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded reference data.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Returns a shared handle to the reference data.
    pub fn shared(&self) -> Arc<ReferenceData> {
        Arc::clone(&self.reference)
    }
}
