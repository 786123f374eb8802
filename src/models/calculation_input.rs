//! Calculation input model.
//!
//! A [`CalculationInput`] is built once per user interaction from the form
//! fields. It is validated at the API/CLI edge; the estimator itself accepts
//! any values.

use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};

/// Upper bound of the experience slider, in years.
pub const MAX_YEARS: u32 = 15;

/// Upper bound of the remote share, in percent.
pub const MAX_REMOTE_PERCENT: u32 = 100;

/// The contract framing the result is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Permanent employment; the salary band is shown.
    Perm,
    /// Freelance or contract work; the day rate is shown.
    Contractor,
}

impl ContractType {
    /// Returns the key used in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Perm => "perm",
            ContractType::Contractor => "contractor",
        }
    }
}

impl std::str::FromStr for ContractType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perm" => Ok(ContractType::Perm),
            "contractor" => Ok(ContractType::Contractor),
            other => Err(EstimatorError::InvalidInput {
                field: "contract".to_string(),
                message: format!("unknown contract type '{}'", other),
            }),
        }
    }
}

/// The seven form fields for one estimate.
///
/// `Default` yields the form's initial state: a mid-level backend role in
/// Berlin at an SME, permanent, 40% remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Role key (e.g., "backend").
    pub role: String,
    /// Country code (e.g., "DE").
    pub country: String,
    /// City key within the country (e.g., "berlin").
    pub city: String,
    /// Years of professional experience.
    pub years: u32,
    /// Company size key (e.g., "sme").
    pub company_size: String,
    /// Share of remote work in percent.
    pub remote_percent: u32,
    /// Contract type.
    pub contract: ContractType,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            role: "backend".to_string(),
            country: "DE".to_string(),
            city: "berlin".to_string(),
            years: 4,
            company_size: "sme".to_string(),
            remote_percent: 40,
            contract: ContractType::Perm,
        }
    }
}

impl CalculationInput {
    /// Checks the numeric fields against the form's bounds.
    ///
    /// Unknown keys are not rejected here; the estimator falls back to
    /// neutral values for them.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_estimator::models::CalculationInput;
    ///
    /// let mut input = CalculationInput::default();
    /// assert!(input.validate().is_ok());
    ///
    /// input.remote_percent = 120;
    /// assert!(input.validate().is_err());
    /// ```
    pub fn validate(&self) -> EstimatorResult<()> {
        if self.years > MAX_YEARS {
            return Err(EstimatorError::InvalidInput {
                field: "years".to_string(),
                message: format!("must be between 0 and {}", MAX_YEARS),
            });
        }

        if self.remote_percent > MAX_REMOTE_PERCENT {
            return Err(EstimatorError::InvalidInput {
                field: "remote_percent".to_string(),
                message: format!("must be between 0 and {}", MAX_REMOTE_PERCENT),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_form_state() {
        let input = CalculationInput::default();
        assert_eq!(input.role, "backend");
        assert_eq!(input.country, "DE");
        assert_eq!(input.city, "berlin");
        assert_eq!(input.years, 4);
        assert_eq!(input.company_size, "sme");
        assert_eq!(input.remote_percent, 40);
        assert_eq!(input.contract, ContractType::Perm);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        let mut input = CalculationInput::default();
        input.years = 0;
        input.remote_percent = 0;
        assert!(input.validate().is_ok());

        input.years = MAX_YEARS;
        input.remote_percent = MAX_REMOTE_PERCENT;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_years_above_max() {
        let input = CalculationInput {
            years: 16,
            ..CalculationInput::default()
        };

        match input.validate() {
            Err(EstimatorError::InvalidInput { field, .. }) => assert_eq!(field, "years"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_remote_above_max() {
        let input = CalculationInput {
            remote_percent: 101,
            ..CalculationInput::default()
        };

        match input.validate() {
            Err(EstimatorError::InvalidInput { field, .. }) => {
                assert_eq!(field, "remote_percent")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_contract_type_parses_keys() {
        assert_eq!("perm".parse::<ContractType>().unwrap(), ContractType::Perm);
        assert_eq!(
            "contractor".parse::<ContractType>().unwrap(),
            ContractType::Contractor
        );
        assert!("freelance".parse::<ContractType>().is_err());
    }

    #[test]
    fn test_contract_type_serializes_as_key() {
        let json = serde_json::to_string(&ContractType::Contractor).unwrap();
        assert_eq!(json, "\"contractor\"");
    }
}
