//! Application state for the Salary Estimator API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use crate::calculation::SalaryEstimator;
use crate::config::{ConfigLoader, ReferenceData};

/// Shared application state.
///
/// Holds the estimator, which in turn shares the immutable reference data
/// across all request handlers.
#[derive(Clone)]
pub struct AppState {
    estimator: SalaryEstimator,
}

impl AppState {
    /// Creates a new application state from loaded reference data.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            estimator: SalaryEstimator::new(config.shared()),
        }
    }

    /// Returns the estimator.
    pub fn estimator(&self) -> &SalaryEstimator {
        &self.estimator
    }

    /// Returns the reference data.
    pub fn reference(&self) -> &ReferenceData {
        self.estimator.reference()
    }
}
