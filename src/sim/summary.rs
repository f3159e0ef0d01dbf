//! Post-hoc peak summary computed from a fully processed table.

use std::fmt;

use super::types::{ControlStep, EnergyTable};

/// Peak-reduction figures for one simulated day.
///
/// Computed after the control phase so the reported numbers always agree
/// with the table contents.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakSummary {
    /// Highest raw demand (MW).
    pub original_peak_mw: f64,
    /// First hour reaching `original_peak_mw`, if any record exceeded zero.
    pub original_peak_hour: Option<usize>,
    /// Highest post-control load (MW).
    pub optimized_peak_mw: f64,
    /// First hour reaching `optimized_peak_mw`, if any record exceeded zero.
    pub optimized_peak_hour: Option<usize>,
    /// `original_peak_mw - optimized_peak_mw`.
    pub peak_reduction_mw: f64,
    /// Number of hours where load was shed.
    pub shed_hours: usize,
    /// Total energy shed over the day (MWh, one-hour steps).
    pub energy_shed_mwh: f64,
}

impl PeakSummary {
    /// Scans the table once for the raw and adjusted maxima.
    ///
    /// Both accumulators start at zero, so a table whose values are all
    /// non-positive reports a zero peak and no peak hour.
    ///
    /// # Arguments
    ///
    /// * `table` - Table after the control phase
    /// * `steps` - Control decisions, used for the shed counters
    pub fn from_table(table: &EnergyTable, steps: &[ControlStep]) -> Self {
        let mut original_peak = 0.0_f64;
        let mut original_hour = None;
        let mut optimized_peak = 0.0_f64;
        let mut optimized_hour = None;

        for r in table {
            if r.demand_mw > original_peak {
                original_peak = r.demand_mw;
                original_hour = Some(r.hour);
            }
            if r.adjusted_load_mw > optimized_peak {
                optimized_peak = r.adjusted_load_mw;
                optimized_hour = Some(r.hour);
            }
        }

        let mut shed_hours = 0_usize;
        let mut energy_shed = 0.0_f64;
        for s in steps {
            let shed = s.action.shed_mw();
            if shed > 0.0 {
                shed_hours += 1;
                energy_shed += shed;
            }
        }

        Self {
            original_peak_mw: original_peak,
            original_peak_hour: original_hour,
            optimized_peak_mw: optimized_peak,
            optimized_peak_hour: optimized_hour,
            peak_reduction_mw: original_peak - optimized_peak,
            shed_hours,
            energy_shed_mwh: energy_shed,
        }
    }
}

impl fmt::Display for PeakSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original Peak Demand: {:.2} MW", self.original_peak_mw)?;
        writeln!(f, "Optimized Peak Demand: {:.2} MW", self.optimized_peak_mw)?;
        writeln!(
            f,
            "\nPeak Reduction Achieved: {:.2} MW",
            self.peak_reduction_mw
        )?;
        write!(
            f,
            "Hours Shed: {} ({:.2} MWh total)",
            self.shed_hours, self.energy_shed_mwh
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::types::{ControlAction, HOURS_PER_DAY};

    fn table_with(demand: f64, adjusted: f64) -> EnergyTable {
        let mut table = EnergyTable::from_demand(&[demand; HOURS_PER_DAY]);
        for h in 0..HOURS_PER_DAY {
            table.set_adjusted_load(h, adjusted);
        }
        table
    }

    #[test]
    fn peaks_and_reduction() {
        let mut demand = [100.0; HOURS_PER_DAY];
        demand[17] = 180.0;
        let mut table = EnergyTable::from_demand(&demand);
        for h in 0..HOURS_PER_DAY {
            table.set_adjusted_load(h, demand[h]);
        }
        table.set_adjusted_load(17, 160.0);

        let summary = PeakSummary::from_table(&table, &[]);
        assert_eq!(summary.original_peak_mw, 180.0);
        assert_eq!(summary.original_peak_hour, Some(17));
        assert_eq!(summary.optimized_peak_mw, 160.0);
        assert_eq!(summary.optimized_peak_hour, Some(17));
        assert_eq!(summary.peak_reduction_mw, 20.0);
    }

    #[test]
    fn first_hour_wins_on_ties() {
        let table = table_with(90.0, 90.0);
        let summary = PeakSummary::from_table(&table, &[]);
        assert_eq!(summary.original_peak_hour, Some(0));
        assert_eq!(summary.optimized_peak_hour, Some(0));
    }

    #[test]
    fn all_negative_table_reports_zero_peak() {
        // Zero accumulator: negative values never beat the initial maximum.
        let table = table_with(-5.0, -25.0);
        let summary = PeakSummary::from_table(&table, &[]);
        assert_eq!(summary.original_peak_mw, 0.0);
        assert_eq!(summary.optimized_peak_mw, 0.0);
        assert_eq!(summary.original_peak_hour, None);
        assert_eq!(summary.peak_reduction_mw, 0.0);
    }

    #[test]
    fn shed_counters() {
        let table = table_with(160.0, 140.0);
        let steps: Vec<ControlStep> = (0..3)
            .map(|hour| ControlStep {
                hour,
                demand_mw: 160.0,
                action: if hour == 1 {
                    ControlAction::Hold
                } else {
                    ControlAction::Shed { amount_mw: 20.0 }
                },
                adjusted_load_mw: 140.0,
            })
            .collect();
        let summary = PeakSummary::from_table(&table, &steps);
        assert_eq!(summary.shed_hours, 2);
        assert_eq!(summary.energy_shed_mwh, 40.0);
    }

    #[test]
    fn display_contains_summary_lines() {
        let table = table_with(180.0, 160.0);
        let s = format!("{}", PeakSummary::from_table(&table, &[]));
        assert!(s.contains("Original Peak Demand: 180.00 MW"));
        assert!(s.contains("Optimized Peak Demand: 160.00 MW"));
        assert!(s.contains("Peak Reduction Achieved: 20.00 MW"));
    }

    #[test]
    fn display_keeps_peak_lines_in_order() {
        let table = table_with(180.0, 160.0);
        let s = format!("{}", PeakSummary::from_table(&table, &[]));
        let lines: Vec<&str> = s.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines[0], "Original Peak Demand: 180.00 MW");
        assert_eq!(lines[1], "Optimized Peak Demand: 160.00 MW");
        assert_eq!(lines[2], "Peak Reduction Achieved: 20.00 MW");
        assert_eq!(lines[3], "Hours Shed: 0 (0.00 MWh total)");
    }
}
