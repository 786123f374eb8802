//! Location and company-size multiplier lookups.
//!
//! Every lookup falls back to a neutral factor of 1.0 when the key is not
//! in the reference data.

use tracing::debug;

use crate::config::ReferenceData;
use crate::models::AdjustmentStep;

/// The factor used when a multiplier is missing.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// The result of a multiplier lookup, including the breakdown step.
#[derive(Debug, Clone)]
pub struct MultiplierResult {
    /// The factor to apply.
    pub factor: f64,
    /// False when the neutral fallback was used.
    pub found: bool,
    /// The step recording this lookup.
    pub adjustment_step: AdjustmentStep,
}

fn resolve(
    kind: &str,
    key: &str,
    found: Option<f64>,
    step_number: u32,
    input: serde_json::Value,
) -> MultiplierResult {
    let factor = found.unwrap_or(NEUTRAL_MULTIPLIER);
    let reasoning = match found {
        Some(_) => format!("{} multiplier for '{}': {}", kind, key, factor),
        None => {
            debug!(kind = %kind, key = %key, "Unknown key, using neutral multiplier");
            format!("No {} multiplier for '{}', using neutral 1.0", kind.to_lowercase(), key)
        }
    };

    MultiplierResult {
        factor,
        found: found.is_some(),
        adjustment_step: AdjustmentStep {
            step_number,
            rule_id: format!("{}_multiplier", kind.to_lowercase().replace(' ', "_")),
            rule_name: format!("{} Multiplier", kind),
            input,
            output: serde_json::json!({
                "factor": factor,
                "found": found.is_some()
            }),
            reasoning,
        },
    }
}

/// Returns the country multiplier relative to the baseline country.
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::country_factor;
/// use salary_estimator::config::ConfigLoader;
///
/// let loader = ConfigLoader::embedded().unwrap();
/// assert_eq!(country_factor("CH", loader.reference(), 3).factor, 1.9);
/// assert_eq!(country_factor("FR", loader.reference(), 3).factor, 1.0);
/// ```
pub fn country_factor(country: &str, reference: &ReferenceData, step_number: u32) -> MultiplierResult {
    resolve(
        "Country",
        country,
        reference.country_multiplier(country),
        step_number,
        serde_json::json!({ "country": country }),
    )
}

/// Returns the city multiplier within a country.
pub fn city_factor(
    country: &str,
    city: &str,
    reference: &ReferenceData,
    step_number: u32,
) -> MultiplierResult {
    resolve(
        "City",
        city,
        reference.city_multiplier(country, city),
        step_number,
        serde_json::json!({ "country": country, "city": city }),
    )
}

/// Returns the company-size multiplier.
pub fn size_factor(company_size: &str, reference: &ReferenceData, step_number: u32) -> MultiplierResult {
    resolve(
        "Company Size",
        company_size,
        reference.size_multiplier(company_size),
        step_number,
        serde_json::json!({ "company_size": company_size }),
    )
}
