//! Remote work adjustment.
//!
//! A high remote share softens the estimate linearly, by up to the
//! configured softening at 100% remote.

use crate::config::EstimatorParameters;
use crate::models::AdjustmentStep;

/// Returns the remote factor `1 - (remote_percent / 100) * softening`.
///
/// Non-increasing in `remote_percent`.
///
/// # Examples
///
/// ```
/// use salary_estimator::calculation::remote_factor;
///
/// assert_eq!(remote_factor(0, 0.03), 1.0);
/// assert!((remote_factor(100, 0.03) - 0.97).abs() < 1e-12);
/// ```
pub fn remote_factor(remote_percent: u32, softening: f64) -> f64 {
    1.0 - (f64::from(remote_percent) / 100.0) * softening
}

/// The result of the remote adjustment, including the breakdown step.
#[derive(Debug, Clone)]
pub struct RemoteAdjustmentResult {
    /// The factor to apply.
    pub factor: f64,
    /// The step recording this adjustment.
    pub adjustment_step: AdjustmentStep,
}

/// Computes the remote factor and records it.
pub fn apply_remote_adjustment(
    remote_percent: u32,
    parameters: &EstimatorParameters,
    step_number: u32,
) -> RemoteAdjustmentResult {
    let factor = remote_factor(remote_percent, parameters.remote_softening);

    RemoteAdjustmentResult {
        factor,
        adjustment_step: AdjustmentStep {
            step_number,
            rule_id: "remote_adjustment".to_string(),
            rule_name: "Remote Adjustment".to_string(),
            input: serde_json::json!({
                "remote_percent": remote_percent,
                "softening": parameters.remote_softening
            }),
            output: serde_json::json!({ "factor": factor }),
            reasoning: format!(
                "1 - ({}% x {}) = {}",
                remote_percent, parameters.remote_softening, factor
            ),
        },
    }
}
