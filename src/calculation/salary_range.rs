//! Salary band and day-rate derivation.
//!
//! The band around the median is a fixed asymmetric spread and the day rate
//! a fixed conversion; neither is statistically derived.

use crate::config::EstimatorParameters;

/// The presented band around a median.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryRange {
    /// Lower bound (`median * p25_factor`).
    pub p25: f64,
    /// Upper bound (`median * p75_factor`).
    pub p75: f64,
}

/// Returns the band around `median`.
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::salary_range;
/// use salary_estimator::config::EstimatorParameters;
///
/// let range = salary_range(100000.0, &EstimatorParameters::default());
/// assert_eq!(range.p25, 100000.0 * 0.90);
/// assert_eq!(range.p75, 100000.0 * 1.12);
/// ```
pub fn salary_range(median: f64, parameters: &EstimatorParameters) -> SalaryRange {
    SalaryRange {
        p25: median * parameters.p25_factor,
        p75: median * parameters.p75_factor,
    }
}

/// Returns the contractor-equivalent day rate for an annual median.
///
/// `(median * day_rate_markup) / working_days_per_year`.
pub fn day_rate(median: f64, parameters: &EstimatorParameters) -> f64 {
    (median * parameters.day_rate_markup) / parameters.working_days_per_year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_asymmetric() {
        let range = salary_range(60000.0, &EstimatorParameters::default());

        assert!((range.p25 - 54000.0).abs() < 1e-9);
        assert!((range.p75 - 67200.0).abs() < 1e-9);
        assert!(60000.0 - range.p25 < range.p75 - 60000.0);
    }

    #[test]
    fn test_day_rate_for_round_median() {
        let rate = day_rate(220000.0, &EstimatorParameters::default());
        assert!((rate - 1450.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_median() {
        let params = EstimatorParameters::default();
        assert_eq!(salary_range(0.0, &params), SalaryRange { p25: 0.0, p75: 0.0 });
        assert_eq!(day_rate(0.0, &params), 0.0);
    }
}
