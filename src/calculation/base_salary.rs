//! Base salary lookup functionality.
//!
//! Reads the role × level table. An unknown role degrades to the table's
//! default base instead of failing.

use tracing::debug;

use crate::config::ReferenceData;
use crate::models::{AdjustmentStep, BaseSalarySource, ExperienceLevel};

/// The result of a base salary lookup, including the breakdown step.
#[derive(Debug, Clone)]
pub struct BaseSalaryLookupResult {
    /// The base annual salary in the baseline currency.
    pub base: f64,
    /// Whether the table or the fallback supplied the base.
    pub source: BaseSalarySource,
    /// The step recording this lookup.
    pub adjustment_step: AdjustmentStep,
}

/// Determines the base salary for a role at a level.
///
/// Uses the table entry when the role has a band, otherwise the default base
/// (50000 in the bundled data).
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::lookup_base_salary;
/// use salary_estimator::config::ConfigLoader;
/// use salary_estimator::models::{BaseSalarySource, ExperienceLevel};
///
/// let loader = ConfigLoader::embedded().unwrap();
/// let result = lookup_base_salary("backend", ExperienceLevel::Mid, loader.reference(), 2);
/// assert_eq!(result.base, 60000.0);
/// assert_eq!(result.source, BaseSalarySource::Table);
/// ```
pub fn lookup_base_salary(
    role: &str,
    level: ExperienceLevel,
    reference: &ReferenceData,
    step_number: u32,
) -> BaseSalaryLookupResult {
    let (base, source) = match reference.base_salary(role, level) {
        Some(base) => (base, BaseSalarySource::Table),
        None => {
            debug!(role = %role, "Unknown role, using default base salary");
            (reference.default_base(), BaseSalarySource::Fallback)
        }
    };

    let reasoning = match source {
        BaseSalarySource::Table => format!(
            "Looked up base for role '{}' at level {}: {}",
            role,
            level.label(),
            base
        ),
        BaseSalarySource::Fallback => format!(
            "Role '{}' not in salary table, using default base {}",
            role, base
        ),
    };

    let adjustment_step = AdjustmentStep {
        step_number,
        rule_id: "base_salary_lookup".to_string(),
        rule_name: "Base Salary Lookup".to_string(),
        input: serde_json::json!({
            "role": role,
            "level": level.as_str(),
            "baseline_country": reference.baseline_country()
        }),
        output: serde_json::json!({
            "base": base,
            "source": source
        }),
        reasoning,
    };

    BaseSalaryLookupResult {
        base,
        source,
        adjustment_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn reference() -> ConfigLoader {
        ConfigLoader::embedded().unwrap()
    }

    #[test]
    fn test_table_base_for_each_level() {
        let loader = reference();
        let expected = [
            (ExperienceLevel::Junior, 50000.0),
            (ExperienceLevel::Mid, 70000.0),
            (ExperienceLevel::Senior, 85000.0),
            (ExperienceLevel::Lead, 100000.0),
        ];

        for (level, base) in expected {
            let result = lookup_base_salary("devops", level, loader.reference(), 1);
            assert_eq!(result.base, base);
            assert_eq!(result.source, BaseSalarySource::Table);
        }
    }

    #[test]
    fn test_unknown_role_uses_default_base() {
        let loader = reference();
        let result = lookup_base_salary("astronaut", ExperienceLevel::Lead, loader.reference(), 2);

        assert_eq!(result.base, 50000.0);
        assert_eq!(result.source, BaseSalarySource::Fallback);
        assert_eq!(result.adjustment_step.output["source"], "fallback");
        assert!(result.adjustment_step.reasoning.contains("astronaut"));
    }

    #[test]
    fn test_step_records_lookup() {
        let loader = reference();
        let result = lookup_base_salary("backend", ExperienceLevel::Mid, loader.reference(), 2);

        assert_eq!(result.adjustment_step.step_number, 2);
        assert_eq!(result.adjustment_step.rule_id, "base_salary_lookup");
        assert_eq!(result.adjustment_step.input["role"], "backend");
        assert_eq!(result.adjustment_step.input["level"], "mid");
        assert_eq!(result.adjustment_step.input["baseline_country"], "DE");
        assert_eq!(result.adjustment_step.output["base"], 60000.0);
    }
}
