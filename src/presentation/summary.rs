//! Summary text assembly.
//!
//! Builds the multi-line German summary that is shown under the result and
//! copied to the clipboard.

use crate::config::ReferenceData;
use crate::models::{CalculationInput, CalculationResult, ContractType};

use super::currency::format_currency;

/// Builds the summary text for an estimate.
///
/// Labels come from the catalog; a key the catalog does not list is shown
/// as-is. The last line depends on the contract type: the salary band for
/// `perm`, the day rate for `contractor`.
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::SalaryEstimator;
/// use salary_estimator::config::ConfigLoader;
/// use salary_estimator::models::CalculationInput;
/// use salary_estimator::presentation::summary_text;
///
/// let estimator = SalaryEstimator::new(ConfigLoader::embedded().unwrap().shared());
/// let input = CalculationInput::default();
/// let result = estimator.estimate(&input);
///
/// let summary = summary_text(&input, &result, estimator.reference());
/// assert!(summary.starts_with("Rolle: Backend-Entwickler:in\nLevel: MID"));
/// ```
pub fn summary_text(
    input: &CalculationInput,
    result: &CalculationResult,
    reference: &ReferenceData,
) -> String {
    let currency = reference.currency(&input.country);
    let money = |value: f64| format_currency(value, currency);

    let role = reference.role_label(&input.role).unwrap_or(input.role.as_str());
    let city = reference
        .city_label(&input.country, &input.city)
        .unwrap_or(input.city.as_str());
    let country = reference
        .country_label(&input.country)
        .unwrap_or(input.country.as_str());
    let size = reference
        .company_size_label(&input.company_size)
        .unwrap_or(input.company_size.as_str());

    let outcome = match input.contract {
        ContractType::Perm => format!(
            "Zielgehalt (Median): {} (Range: {} – {})",
            money(result.median),
            money(result.p25),
            money(result.p75)
        ),
        ContractType::Contractor => format!(
            "Ziel-Tagessatz: {} (entspricht Median Gehalt: {})",
            money(result.day_rate),
            money(result.median)
        ),
    };

    [
        format!("Rolle: {}", role),
        format!("Level: {}", result.level.label()),
        format!("Standort: {}, {}", city, country),
        format!("Remote: {}%", input.remote_percent),
        format!("Unternehmensgröße: {}", size),
        outcome,
    ]
    .join("\n")
}
