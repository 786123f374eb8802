//! Response types for the Salary Estimator API.
//!
//! This module defines the success bodies of the JSON endpoints and the
//! error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{CatalogEntry, CountryEntry, EstimatorParameters, ReferenceData};
use crate::error::EstimatorError;
use crate::models::{CalculationInput, CalculationResult, EstimateBreakdown};
use crate::presentation::FormattedAmounts;

/// Response body for `POST /estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Unique identifier for this estimate.
    pub calculation_id: Uuid,
    /// When the estimate was produced.
    pub timestamp: DateTime<Utc>,
    /// Version of the estimator that produced it.
    pub engine_version: String,
    /// The input after validation and city resync.
    pub input: CalculationInput,
    /// The unrounded result.
    pub result: CalculationResult,
    /// The result formatted in the country's currency.
    pub formatted: FormattedAmounts,
    /// The copyable summary text.
    pub summary: String,
    /// How the median was reached.
    pub breakdown: EstimateBreakdown,
    /// Time spent estimating, in microseconds.
    pub duration_us: u64,
}

/// A country in the catalog response, with its cities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCountry {
    /// Country code, label and currency.
    #[serde(flatten)]
    pub country: CountryEntry,
    /// Cities of the country in display order.
    pub cities: Vec<CatalogEntry>,
}

/// Response body for `GET /catalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// Selectable roles.
    pub roles: Vec<CatalogEntry>,
    /// Selectable countries with their cities.
    pub countries: Vec<CatalogCountry>,
    /// Selectable company sizes.
    pub company_sizes: Vec<CatalogEntry>,
    /// Selectable contract types.
    pub contracts: Vec<CatalogEntry>,
    /// Form defaults.
    pub defaults: CalculationInput,
    /// Spread and conversion constants.
    pub parameters: EstimatorParameters,
}

impl CatalogResponse {
    /// Builds the catalog from reference data.
    pub fn new(reference: &ReferenceData) -> Self {
        let catalog = reference.catalog();
        Self {
            roles: catalog.roles.clone(),
            countries: catalog
                .countries
                .iter()
                .map(|country| CatalogCountry {
                    country: country.clone(),
                    cities: reference.cities(&country.key).to_vec(),
                })
                .collect(),
            company_sizes: catalog.company_sizes.clone(),
            contracts: catalog.contracts.clone(),
            defaults: CalculationInput::default(),
            parameters: *reference.parameters(),
        }
    }
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the service is up.
    pub status: String,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing content type error response.
    pub fn missing_content_type() -> Self {
        Self::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EstimatorError> for ApiErrorResponse {
    fn from(error: EstimatorError) -> Self {
        match error {
            EstimatorError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EstimatorError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EstimatorError::InvalidReferenceData { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid reference data", message),
            },
            EstimatorError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input field '{}': {}", field, message),
                    format!("The field '{}' is outside its allowed range", field),
                ),
            },
            EstimatorError::ClipboardError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CLIPBOARD_ERROR", "Clipboard write failed", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let error = EstimatorError::InvalidInput {
            field: "years".to_string(),
            message: "must be between 0 and 15".to_string(),
        };
        let response: ApiErrorResponse = error.into();

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_INPUT");
        assert!(response.error.message.contains("years"));
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let response: ApiErrorResponse = EstimatorError::InvalidReferenceData {
            message: "no cities for AT".to_string(),
        }
        .into();

        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_catalog_response_nests_cities_under_countries() {
        let loader = ConfigLoader::embedded().unwrap();
        let catalog = CatalogResponse::new(loader.reference());
        let json = serde_json::to_value(&catalog).unwrap();

        let countries = json["countries"].as_array().unwrap();
        assert_eq!(countries[0]["key"], "DE");
        assert_eq!(countries[0]["currency"], "EUR");
        assert_eq!(countries[0]["cities"][0]["key"], "berlin");
        assert_eq!(json["defaults"]["company_size"], "sme");
        assert_eq!(json["parameters"]["working_days_per_year"], 220.0);
    }
}
