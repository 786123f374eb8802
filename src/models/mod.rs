//! Core data models for the Salary Estimator.
//!
//! This module contains all the domain models used throughout the estimator.

mod calculation_input;
mod calculation_result;
mod currency;
mod experience_level;

pub use calculation_input::{CalculationInput, ContractType, MAX_REMOTE_PERCENT, MAX_YEARS};
pub use calculation_result::{
    AdjustmentStep, BaseSalarySource, CalculationResult, EstimateBreakdown,
};
pub use currency::Currency;
pub use experience_level::ExperienceLevel;
