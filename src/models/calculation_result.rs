//! Calculation result models for the Salary Estimator.
//!
//! This module contains the [`CalculationResult`] returned by every estimate
//! and the [`EstimateBreakdown`] that records how the median was reached.

use serde::{Deserialize, Serialize};

use super::ExperienceLevel;

/// The outcome of one estimate.
///
/// All amounts are annual (or daily, for `day_rate`) figures in the
/// country's native currency. Nothing is rounded; formatting belongs to the
/// presentation layer.
///
/// # Example
///
/// ```
/// use salary_estimator::models::{CalculationResult, ExperienceLevel};
///
/// let result = CalculationResult {
///     level: ExperienceLevel::Mid,
///     median: 60000.0,
///     p25: 54000.0,
///     p75: 67200.0,
///     day_rate: 395.45454545454544,
/// };
/// assert!(result.p25 < result.median && result.median < result.p75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The experience level derived from years.
    pub level: ExperienceLevel,
    /// The adjusted median salary.
    pub median: f64,
    /// Lower bound of the presented band.
    pub p25: f64,
    /// Upper bound of the presented band.
    pub p75: f64,
    /// Contractor-equivalent day rate.
    pub day_rate: f64,
}

/// Where the base salary of an estimate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseSalarySource {
    /// Looked up in the role/level table.
    Table,
    /// The role was unknown and the default base was used.
    Fallback,
}

/// A single step in the breakdown of an estimate.
///
/// Each step captures the input, output, and reasoning for one lookup or
/// adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The factors and steps behind a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    /// The base salary before any adjustment.
    pub base: f64,
    /// Whether the base came from the table or the fallback.
    pub base_source: BaseSalarySource,
    /// Country multiplier applied.
    pub country_factor: f64,
    /// City multiplier applied.
    pub city_factor: f64,
    /// Company-size multiplier applied.
    pub size_factor: f64,
    /// Remote softening factor applied.
    pub remote_factor: f64,
    /// The ordered steps.
    pub steps: Vec<AdjustmentStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_result() -> CalculationResult {
        CalculationResult {
            level: ExperienceLevel::Lead,
            median: 225720.0,
            p25: 203148.0,
            p75: 252806.4,
            day_rate: 1487.7,
        }
    }

    #[test]
    fn test_calculation_result_serializes_snake_case_fields() {
        let json = serde_json::to_value(create_sample_result()).unwrap();

        assert_eq!(json["level"], "lead");
        assert_eq!(json["median"], 225720.0);
        assert!(json.get("day_rate").is_some());
    }

    #[test]
    fn test_calculation_result_deserializes() {
        let json = r#"{"level":"mid","median":1.0,"p25":0.9,"p75":1.12,"day_rate":0.5}"#;
        let result: CalculationResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.level, ExperienceLevel::Mid);
        assert_eq!(result.p75, 1.12);
    }

    #[test]
    fn test_base_salary_source_serialization() {
        assert_eq!(
            serde_json::to_string(&BaseSalarySource::Fallback).unwrap(),
            "\"fallback\""
        );
    }

    #[test]
    fn test_breakdown_serializes_steps() {
        let breakdown = EstimateBreakdown {
            base: 60000.0,
            base_source: BaseSalarySource::Table,
            country_factor: 1.0,
            city_factor: 0.95,
            size_factor: 1.0,
            remote_factor: 0.988,
            steps: vec![AdjustmentStep {
                step_number: 1,
                rule_id: "experience_level".to_string(),
                rule_name: "Experience Level".to_string(),
                input: serde_json::json!({ "years": 4 }),
                output: serde_json::json!({ "level": "mid" }),
                reasoning: "4 years maps to mid".to_string(),
            }],
        };

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["base_source"], "table");
        assert_eq!(json["steps"][0]["rule_id"], "experience_level");
        assert_eq!(json["steps"][0]["output"]["level"], "mid");
    }
}
