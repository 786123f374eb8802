//! Experience level model.

use serde::{Deserialize, Serialize};

/// One of the four ordinal seniority levels a salary band is keyed by.
///
/// Levels order from least to most senior, so `ExperienceLevel::Junior <
/// ExperienceLevel::Lead` holds.
///
/// # Example
///
/// ```
/// use salary_estimator::models::ExperienceLevel;
///
/// assert_eq!(ExperienceLevel::Senior.as_str(), "senior");
/// assert_eq!(ExperienceLevel::Senior.label(), "SENIOR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Up to one year of experience.
    Junior,
    /// Two to four years of experience.
    Mid,
    /// Five to eight years of experience.
    Senior,
    /// Nine or more years of experience.
    Lead,
}

impl ExperienceLevel {
    /// All levels in ascending order.
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::Lead,
    ];

    /// Returns the lowercase key used in reference data.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
        }
    }

    /// Returns the uppercase label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "JUNIOR",
            ExperienceLevel::Mid => "MID",
            ExperienceLevel::Senior => "SENIOR",
            ExperienceLevel::Lead => "LEAD",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
