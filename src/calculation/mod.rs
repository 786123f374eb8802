//! Calculation logic for the Salary Estimator.
//!
//! This module contains experience level classification, base salary lookup,
//! country/city/company-size multipliers, the remote adjustment, the salary
//! band and day-rate derivation, and the estimator that chains them.

mod base_salary;
mod estimator;
mod experience_level;
mod multipliers;
mod remote_adjustment;
mod salary_range;

pub use base_salary::{BaseSalaryLookupResult, lookup_base_salary};
pub use estimator::{SalaryEstimator, estimate, estimate_with_breakdown};
pub use experience_level::{
    JUNIOR_MAX_YEARS, LevelClassification, MID_MAX_YEARS, SENIOR_MAX_YEARS, classify_experience,
    years_to_level,
};
pub use multipliers::{MultiplierResult, NEUTRAL_MULTIPLIER, city_factor, country_factor, size_factor};
pub use remote_adjustment::{RemoteAdjustmentResult, apply_remote_adjustment, remote_factor};
pub use salary_range::{SalaryRange, day_rate, salary_range};
