//! Load → control → summarize pipeline over one day's table.

use tracing::{debug, info, warn};

use crate::profile::DemandProfile;

use super::controller::Controller;
use super::summary::PeakSummary;
use super::types::{ControlStep, EnergyTable};

/// Populates a fresh table from the profile, hours 0→23.
pub fn load_table(profile: &DemandProfile) -> EnergyTable {
    info!(source = profile.kind(), "loading demand profile");
    let table = EnergyTable::from_demand(&profile.hourly_demand_mw());
    for r in &table {
        debug!(hour = r.hour, demand_mw = r.demand_mw, "loaded");
    }
    table
}

/// Runs the controller over every hour and records the adjusted load.
///
/// Each record's `adjusted_load_mw` is written exactly once. Negative
/// results are logged but left as computed.
pub fn apply_control<C: Controller>(controller: &C, table: &mut EnergyTable) -> Vec<ControlStep> {
    info!(rule = %controller.describe(), "applying control");
    let mut steps = Vec::with_capacity(table.len());
    for hour in 0..table.len() {
        let demand_mw = table.record(hour).demand_mw;
        let action = controller.decide(demand_mw);
        let adjusted_load_mw = action.apply(demand_mw);
        table.set_adjusted_load(hour, adjusted_load_mw);

        if adjusted_load_mw < 0.0 {
            warn!(hour, demand_mw, adjusted_load_mw, "shed drove load negative");
        }
        debug!(hour, demand_mw, action = action.label(), adjusted_load_mw, "controlled");

        steps.push(ControlStep {
            hour,
            demand_mw,
            action,
            adjusted_load_mw,
        });
    }
    steps
}

/// Everything produced by one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    /// Table after the control phase.
    pub table: EnergyTable,
    /// Per-hour control decisions in hour order.
    pub control_steps: Vec<ControlStep>,
    /// Peak summary over the final table.
    pub summary: PeakSummary,
}

/// Owns a demand profile and a controller and runs the three phases in order.
///
/// Generic over `C: Controller` for static dispatch. `run` borrows `self`
/// immutably, so repeated runs see identical inputs and produce identical
/// results.
#[derive(Debug, Clone)]
pub struct Pipeline<C: Controller> {
    profile: DemandProfile,
    controller: C,
}

impl<C: Controller> Pipeline<C> {
    /// Creates a pipeline over `profile` using `controller`.
    pub fn new(profile: DemandProfile, controller: C) -> Self {
        Self {
            profile,
            controller,
        }
    }

    /// Executes load, control, and summary, returning all outputs.
    pub fn run(&self) -> PipelineRun {
        let mut table = load_table(&self.profile);
        let control_steps = apply_control(&self.controller, &mut table);
        let summary = PeakSummary::from_table(&table, &control_steps);
        info!(
            original_peak_mw = summary.original_peak_mw,
            optimized_peak_mw = summary.optimized_peak_mw,
            peak_reduction_mw = summary.peak_reduction_mw,
            "summary computed"
        );
        PipelineRun {
            table,
            control_steps,
            summary,
        }
    }

    /// Returns the controller (for report headers).
    pub fn controller(&self) -> &C {
        &self.controller
    }

    /// Returns the demand profile.
    pub fn profile(&self) -> &DemandProfile {
        &self.profile
    }
}
