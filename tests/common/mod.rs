//! Shared test fixtures for integration tests.

use load_shed_sim::profile::DemandProfile;
use load_shed_sim::sim::controller::StaticThresholdController;
use load_shed_sim::sim::pipeline::Pipeline;
use load_shed_sim::sim::types::HOURS_PER_DAY;

/// Hours of the embedded day whose demand is strictly above 150 MW.
pub const EMBEDDED_SHED_HOURS: [usize; 5] = [9, 10, 16, 17, 18];

/// Baseline pipeline: embedded day, 150 MW threshold, 20 MW shed.
pub fn default_pipeline() -> Pipeline<StaticThresholdController> {
    Pipeline::new(
        DemandProfile::embedded(),
        StaticThresholdController::default(),
    )
}

/// Fixed profile of `fill_mw` everywhere except the given `(hour, mw)` overrides.
pub fn profile_with(fill_mw: f64, overrides: &[(usize, f64)]) -> DemandProfile {
    let mut day = [fill_mw; HOURS_PER_DAY];
    for &(hour, mw) in overrides {
        day[hour] = mw;
    }
    DemandProfile::Fixed(day)
}
