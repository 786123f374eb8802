//! HTTP request handlers for the Salary Estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::CalculationInput;
use crate::presentation::{FormattedAmounts, PrintDocument, summary_text};

use super::request::EstimateRequest;
use super::response::{
    ApiError, ApiErrorResponse, CatalogResponse, EstimateResponse, HealthResponse,
};
use super::state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/catalog", get(catalog_handler))
        .route("/estimate", post(estimate_handler))
        .route("/summary", post(summary_handler))
        .route("/print", post(print_handler))
        .with_state(state)
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Handler for GET /catalog endpoint.
///
/// Returns every selectable option with its label, plus the form defaults.
async fn catalog_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(CatalogResponse::new(state.reference()))
}

/// Handler for POST /estimate endpoint.
///
/// Accepts an estimate request and returns the result with its formatted
/// amounts, summary text and breakdown.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let input = match prepare_input(&state, payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    let (result, breakdown) = state.estimator().estimate_with_breakdown(&input);
    let duration = start_time.elapsed();

    let reference = state.reference();
    let formatted = FormattedAmounts::new(&result, reference.currency(&input.country));
    let summary = summary_text(&input, &result, reference);

    info!(
        correlation_id = %correlation_id,
        role = %input.role,
        country = %input.country,
        level = %result.level,
        median = result.median,
        duration_us = duration.as_micros(),
        "Estimate completed successfully"
    );

    let response = EstimateResponse {
        calculation_id: correlation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input,
        result,
        formatted,
        summary,
        breakdown,
        duration_us: duration.as_micros() as u64,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /summary endpoint.
///
/// Returns the copyable summary text as plain text.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let input = match prepare_input(&state, payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };

    let result = state.estimator().estimate(&input);
    let summary = summary_text(&input, &result, state.reference());

    (StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], summary).into_response()
}

/// Handler for POST /print endpoint.
///
/// Returns the print document as plain text, stamped with the current year.
async fn print_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing print request");

    let input = match prepare_input(&state, payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };

    let result = state.estimator().estimate(&input);
    let document = PrintDocument::new(&input, &result, state.reference(), Utc::now().year());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, TEXT_PLAIN)],
        document.to_string(),
    )
        .into_response()
}

/// Turns a request body into a validated input with its city resynced to
/// the chosen country.
fn prepare_input(
    state: &AppState,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CalculationInput, ApiErrorResponse> {
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the bad field
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    warn!(correlation_id = %correlation_id, "Missing JSON content type");
                    ApiError::missing_content_type()
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return Err(ApiErrorResponse::bad_request(error));
        }
    };

    let mut input: CalculationInput = request.into();
    if let Err(err) = input.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Input rejected"
        );
        return Err(err.into());
    }

    let city = state.reference().resolve_city(&input.country, &input.city);
    if city != input.city {
        debug!(
            correlation_id = %correlation_id,
            country = %input.country,
            requested = %input.city,
            resolved = %city,
            "City not listed for country, using first listed city"
        );
        input.city = city.to_string();
    }

    Ok(input)
}
