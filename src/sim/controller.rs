//! Control policies applied to each hour of the table.

use super::types::ControlAction;

/// Default demand level above which shedding is triggered (MW).
pub const DEFAULT_PEAK_THRESHOLD_MW: f64 = 150.0;
/// Default amount removed from a shed hour (MW).
pub const DEFAULT_SHED_AMOUNT_MW: f64 = 20.0;

/// Per-hour control policy.
///
/// Implementations see one hour's demand at a time and carry no state
/// between hours, so the pipeline can swap policies without changing the
/// control loop.
pub trait Controller {
    /// Decides the action for an hour with the given raw demand.
    fn decide(&self, demand_mw: f64) -> ControlAction;

    /// One-line human-readable description of the rule.
    fn describe(&self) -> String;
}

/// Fixed threshold rule: shed a constant amount from any hour above the threshold.
///
/// # Examples
///
/// ```
/// use load_shed_sim::sim::controller::{Controller, StaticThresholdController};
/// use load_shed_sim::sim::types::ControlAction;
///
/// let c = StaticThresholdController::default();
/// assert_eq!(c.decide(150.0), ControlAction::Hold);
/// assert_eq!(c.decide(160.0), ControlAction::Shed { amount_mw: 20.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticThresholdController {
    /// Demand strictly above this value is shed (MW).
    pub peak_threshold_mw: f64,
    /// Amount subtracted from a shed hour (MW). Applied in full, never clamped.
    pub shed_amount_mw: f64,
}

impl StaticThresholdController {
    /// Creates a controller with the given threshold and shed amount.
    pub fn new(peak_threshold_mw: f64, shed_amount_mw: f64) -> Self {
        Self {
            peak_threshold_mw,
            shed_amount_mw,
        }
    }
}

impl Default for StaticThresholdController {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_THRESHOLD_MW, DEFAULT_SHED_AMOUNT_MW)
    }
}

impl Controller for StaticThresholdController {
    fn decide(&self, demand_mw: f64) -> ControlAction {
        if demand_mw > self.peak_threshold_mw {
            ControlAction::Shed {
                amount_mw: self.shed_amount_mw,
            }
        } else {
            ControlAction::Hold
        }
    }

    fn describe(&self) -> String {
        format!(
            "Rule: If Demand > {:.2} MW, shed {:.2} MW.",
            self.peak_threshold_mw, self.shed_amount_mw
        )
    }
}
