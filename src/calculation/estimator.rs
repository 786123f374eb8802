//! The salary estimator.
//!
//! Chains the base salary lookup with the country, city, company-size and
//! remote factors, then derives the band and day rate from the median. The
//! estimator never fails: every lookup has a neutral fallback.

use std::sync::Arc;

use crate::config::{EstimatorParameters, ReferenceData};
use crate::models::{
    AdjustmentStep, CalculationInput, CalculationResult, EstimateBreakdown, ExperienceLevel,
};

use super::base_salary::lookup_base_salary;
use super::experience_level::{classify_experience, years_to_level};
use super::multipliers::{NEUTRAL_MULTIPLIER, city_factor, country_factor, size_factor};
use super::remote_adjustment::{apply_remote_adjustment, remote_factor};
use super::salary_range::{day_rate, salary_range};

/// Estimates a salary from the raw form fields.
///
/// Pure and deterministic: identical arguments and reference data always
/// produce bit-identical results.
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::estimate;
/// use salary_estimator::config::ConfigLoader;
/// use salary_estimator::models::ExperienceLevel;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let result = estimate(loader.reference(), "devops", "CH", "zurich", 10, "enterprise", 0);
///
/// assert_eq!(result.level, ExperienceLevel::Lead);
/// assert!((result.median - 225720.0).abs() < 1e-6);
/// ```
pub fn estimate(
    reference: &ReferenceData,
    role: &str,
    country: &str,
    city: &str,
    years: u32,
    company_size: &str,
    remote_percent: u32,
) -> CalculationResult {
    let params = reference.parameters();
    let level = years_to_level(years);

    let base = reference
        .base_salary(role, level)
        .unwrap_or_else(|| reference.default_base());
    let country_factor = reference
        .country_multiplier(country)
        .unwrap_or(NEUTRAL_MULTIPLIER);
    let city_factor = reference
        .city_multiplier(country, city)
        .unwrap_or(NEUTRAL_MULTIPLIER);
    let size_factor = reference
        .size_multiplier(company_size)
        .unwrap_or(NEUTRAL_MULTIPLIER);
    let remote_factor = remote_factor(remote_percent, params.remote_softening);

    adjusted_result(
        level,
        [base, country_factor, city_factor, size_factor, remote_factor],
        params,
    )
}

/// Multiplies the base by each factor in order and derives the band and day
/// rate from the resulting median.
///
/// `chain` is `[base, country, city, size, remote]`.
fn adjusted_result(
    level: ExperienceLevel,
    chain: [f64; 5],
    params: &EstimatorParameters,
) -> CalculationResult {
    let [base, country, city, size, remote] = chain;
    let median = base * country * city * size * remote;
    let range = salary_range(median, params);

    CalculationResult {
        level,
        median,
        p25: range.p25,
        p75: range.p75,
        day_rate: day_rate(median, params),
    }
}

/// Estimates a salary and records every lookup and adjustment.
///
/// The result is identical to [`estimate`] for the same arguments.
pub fn estimate_with_breakdown(
    reference: &ReferenceData,
    input: &CalculationInput,
) -> (CalculationResult, EstimateBreakdown) {
    let params = reference.parameters();
    let mut steps: Vec<AdjustmentStep> = Vec::with_capacity(8);

    let classification = classify_experience(input.years, 1);
    let level = classification.level;
    steps.push(classification.adjustment_step);

    let base = lookup_base_salary(&input.role, level, reference, 2);
    steps.push(base.adjustment_step);

    let country = country_factor(&input.country, reference, 3);
    steps.push(country.adjustment_step);

    let city = city_factor(&input.country, &input.city, reference, 4);
    steps.push(city.adjustment_step);

    let size = size_factor(&input.company_size, reference, 5);
    steps.push(size.adjustment_step);

    let remote = apply_remote_adjustment(input.remote_percent, params, 6);
    steps.push(remote.adjustment_step);

    let result = adjusted_result(
        level,
        [base.base, country.factor, city.factor, size.factor, remote.factor],
        params,
    );
    let median = result.median;
    steps.push(AdjustmentStep {
        step_number: 7,
        rule_id: "median".to_string(),
        rule_name: "Adjusted Median".to_string(),
        input: serde_json::json!({
            "base": base.base,
            "country_factor": country.factor,
            "city_factor": city.factor,
            "size_factor": size.factor,
            "remote_factor": remote.factor
        }),
        output: serde_json::json!({ "median": median }),
        reasoning: format!(
            "{} x {} x {} x {} x {} = {}",
            base.base, country.factor, city.factor, size.factor, remote.factor, median
        ),
    });

    steps.push(AdjustmentStep {
        step_number: 8,
        rule_id: "range_and_day_rate".to_string(),
        rule_name: "Range and Day Rate".to_string(),
        input: serde_json::json!({
            "median": median,
            "p25_factor": params.p25_factor,
            "p75_factor": params.p75_factor,
            "day_rate_markup": params.day_rate_markup,
            "working_days_per_year": params.working_days_per_year
        }),
        output: serde_json::json!({
            "p25": result.p25,
            "p75": result.p75,
            "day_rate": result.day_rate
        }),
        reasoning: format!(
            "Band {} to {}; day rate ({} x {}) / {} = {}",
            result.p25,
            result.p75,
            median,
            params.day_rate_markup,
            params.working_days_per_year,
            result.day_rate
        ),
    });

    let breakdown = EstimateBreakdown {
        base: base.base,
        base_source: base.source,
        country_factor: country.factor,
        city_factor: city.factor,
        size_factor: size.factor,
        remote_factor: remote.factor,
        steps,
    };

    (result, breakdown)
}

/// A stateless estimator over shared, immutable reference data.
///
/// Cloning is cheap and clones may be used from any number of threads.
///
/// # Example
///
/// ```
/// use salary_estimator::calculation::SalaryEstimator;
/// use salary_estimator::config::ConfigLoader;
/// use salary_estimator::models::{CalculationInput, ExperienceLevel};
///
/// let estimator = SalaryEstimator::new(ConfigLoader::embedded().unwrap().shared());
/// let result = estimator.estimate(&CalculationInput::default());
/// assert_eq!(result.level, ExperienceLevel::Mid);
/// ```
#[derive(Debug, Clone)]
pub struct SalaryEstimator {
    reference: Arc<ReferenceData>,
}

impl SalaryEstimator {
    /// Creates an estimator over the given reference data.
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Returns the reference data.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Estimates the salary for a form input.
    pub fn estimate(&self, input: &CalculationInput) -> CalculationResult {
        estimate(
            &self.reference,
            &input.role,
            &input.country,
            &input.city,
            input.years,
            &input.company_size,
            input.remote_percent,
        )
    }

    /// Estimates the salary for a form input and records the breakdown.
    pub fn estimate_with_breakdown(
        &self,
        input: &CalculationInput,
    ) -> (CalculationResult, EstimateBreakdown) {
        estimate_with_breakdown(&self.reference, input)
    }
}
