//! HTTP API module for the Salary Estimator.
//!
//! This module provides the REST endpoints for estimating salaries, listing
//! the form catalog, and rendering the summary and print views.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EstimateRequest;
pub use response::{
    ApiError, ApiErrorResponse, CatalogCountry, CatalogResponse, EstimateResponse, HealthResponse,
};
pub use state::AppState;
