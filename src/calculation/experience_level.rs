//! Experience level classification.
//!
//! Maps years of experience onto the four salary-band levels by fixed
//! breakpoints.

use crate::models::{AdjustmentStep, ExperienceLevel};

/// Last year still classified as junior.
pub const JUNIOR_MAX_YEARS: u32 = 1;
/// Last year still classified as mid.
pub const MID_MAX_YEARS: u32 = 4;
/// Last year still classified as senior.
pub const SENIOR_MAX_YEARS: u32 = 8;

/// Returns the experience level for a number of years.
///
/// - 0..=1 years: junior
/// - 2..=4 years: mid
/// - 5..=8 years: senior
/// - 9 or more: lead
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::years_to_level;
/// use salary_estimator::models::ExperienceLevel;
///
/// assert_eq!(years_to_level(0), ExperienceLevel::Junior);
/// assert_eq!(years_to_level(4), ExperienceLevel::Mid);
/// assert_eq!(years_to_level(9), ExperienceLevel::Lead);
/// ```
pub fn years_to_level(years: u32) -> ExperienceLevel {
    if years <= JUNIOR_MAX_YEARS {
        ExperienceLevel::Junior
    } else if years <= MID_MAX_YEARS {
        ExperienceLevel::Mid
    } else if years <= SENIOR_MAX_YEARS {
        ExperienceLevel::Senior
    } else {
        ExperienceLevel::Lead
    }
}

/// The result of classifying experience, including the breakdown step.
#[derive(Debug, Clone)]
pub struct LevelClassification {
    /// The derived level.
    pub level: ExperienceLevel,
    /// The step recording this classification.
    pub adjustment_step: AdjustmentStep,
}

/// Classifies years of experience and records the decision.
pub fn classify_experience(years: u32, step_number: u32) -> LevelClassification {
    let level = years_to_level(years);

    let adjustment_step = AdjustmentStep {
        step_number,
        rule_id: "experience_level".to_string(),
        rule_name: "Experience Level".to_string(),
        input: serde_json::json!({ "years": years }),
        output: serde_json::json!({ "level": level.as_str() }),
        reasoning: format!("{} years of experience maps to level {}", years, level.label()),
    };

    LevelClassification {
        level,
        adjustment_step,
    }
}
