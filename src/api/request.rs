//! Request types for the Salary Estimator API.
//!
//! This module defines the JSON request body shared by the `/estimate`,
//! `/summary` and `/print` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, ContractType};

/// Request body for the estimate endpoints.
///
/// Every field is optional. Missing fields take the form's initial value, so
/// an empty object `{}` estimates the default scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateRequest {
    /// Role key (e.g., "backend").
    pub role: String,
    /// Country code (e.g., "DE").
    pub country: String,
    /// City key within the country.
    pub city: String,
    /// Years of professional experience.
    pub years: u32,
    /// Company size key (e.g., "startup").
    pub company_size: String,
    /// Share of remote work in percent.
    pub remote_percent: u32,
    /// Contract type.
    pub contract: ContractType,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        CalculationInput::default().into()
    }
}

impl From<CalculationInput> for EstimateRequest {
    fn from(input: CalculationInput) -> Self {
        Self {
            role: input.role,
            country: input.country,
            city: input.city,
            years: input.years,
            company_size: input.company_size,
            remote_percent: input.remote_percent,
            contract: input.contract,
        }
    }
}

impl From<EstimateRequest> for CalculationInput {
    fn from(req: EstimateRequest) -> Self {
        CalculationInput {
            role: req.role,
            country: req.country,
            city: req.city,
            years: req.years,
            company_size: req.company_size,
            remote_percent: req.remote_percent,
            contract: req.contract,
        }
    }
}
