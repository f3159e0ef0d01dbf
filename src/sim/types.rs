//! Core simulation types: the hourly table, control actions, and step records.

use std::fmt;

/// Number of hourly records in one simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// One hour's raw demand and post-control load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRecord {
    /// Hour of the day (0–23), equal to the record's index in the table.
    pub hour: usize,
    /// Raw demand (MW). Immutable after load.
    pub demand_mw: f64,
    /// Load after the control phase (MW). Zero until the controller runs.
    pub adjusted_load_mw: f64,
}

impl HourlyRecord {
    /// Creates a freshly loaded record with no adjusted load yet.
    pub fn new(hour: usize, demand_mw: f64) -> Self {
        Self {
            hour,
            demand_mw,
            adjusted_load_mw: 0.0,
        }
    }
}

impl fmt::Display for HourlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hour {:02}: Initial Demand = {:.2} MW",
            self.hour, self.demand_mw
        )
    }
}

/// Fixed-length table of one day's hourly records, indexed by hour.
///
/// The table always holds exactly [`HOURS_PER_DAY`] records with dense,
/// contiguous hours. Only `adjusted_load_mw` can change after construction.
///
/// # Examples
///
/// ```
/// use load_shed_sim::sim::types::{EnergyTable, HOURS_PER_DAY};
///
/// let table = EnergyTable::from_demand(&[100.0; HOURS_PER_DAY]);
/// assert_eq!(table.len(), 24);
/// assert_eq!(table.record(5).hour, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyTable {
    records: [HourlyRecord; HOURS_PER_DAY],
}

impl EnergyTable {
    /// Builds a table from one demand value per hour, in hour order.
    pub fn from_demand(demand_mw: &[f64; HOURS_PER_DAY]) -> Self {
        Self {
            records: std::array::from_fn(|hour| HourlyRecord::new(hour, demand_mw[hour])),
        }
    }

    /// Number of records (always [`HOURS_PER_DAY`]).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the record for `hour`.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= HOURS_PER_DAY`.
    pub fn record(&self, hour: usize) -> &HourlyRecord {
        &self.records[hour]
    }

    /// Iterates records in ascending hour order.
    pub fn iter(&self) -> impl Iterator<Item = &HourlyRecord> {
        self.records.iter()
    }

    /// Records the post-control load for `hour`.
    ///
    /// # Panics
    ///
    /// Panics if `hour >= HOURS_PER_DAY`.
    pub fn set_adjusted_load(&mut self, hour: usize, adjusted_load_mw: f64) {
        self.records[hour].adjusted_load_mw = adjusted_load_mw;
    }
}

impl<'a> IntoIterator for &'a EnergyTable {
    type Item = &'a HourlyRecord;
    type IntoIter = std::slice::Iter<'a, HourlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Decision taken by a controller for a single hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Leave demand untouched.
    Hold,
    /// Subtract `amount_mw` from demand.
    Shed {
        /// Amount removed from the hour's demand (MW).
        amount_mw: f64,
    },
}

impl ControlAction {
    /// Amount shed by this action (MW); zero for `Hold`.
    pub fn shed_mw(&self) -> f64 {
        match self {
            Self::Hold => 0.0,
            Self::Shed { amount_mw } => *amount_mw,
        }
    }

    /// Short label used in reports and CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hold => "HOLD",
            Self::Shed { .. } => "SHED",
        }
    }

    /// Load that results from applying this action to `demand_mw`.
    ///
    /// Not clamped: a shed larger than demand yields a negative load.
    pub fn apply(&self, demand_mw: f64) -> f64 {
        demand_mw - self.shed_mw()
    }
}

/// Complete record of one hour of the control phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlStep {
    /// Hour index.
    pub hour: usize,
    /// Raw demand seen by the controller (MW).
    pub demand_mw: f64,
    /// Action taken.
    pub action: ControlAction,
    /// Resulting load (MW).
    pub adjusted_load_mw: f64,
}

impl fmt::Display for ControlStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hour {:02}: Demand={:.2} MW", self.hour, self.demand_mw)?;
        match self.action {
            ControlAction::Shed { amount_mw } => write!(
                f,
                " | ACTION: SHED {:.2} MW | New Load={:.2} MW",
                amount_mw, self.adjusted_load_mw
            ),
            ControlAction::Hold => write!(
                f,
                " | ACTION: HOLD            | New Load={:.2} MW",
                self.adjusted_load_mw
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_hours_match_indices() {
        let mut demand = [0.0; HOURS_PER_DAY];
        for (h, d) in demand.iter_mut().enumerate() {
            *d = h as f64 * 10.0;
        }
        let table = EnergyTable::from_demand(&demand);
        assert_eq!(table.len(), HOURS_PER_DAY);
        for (i, r) in table.iter().enumerate() {
            assert_eq!(r.hour, i);
            assert_eq!(r.demand_mw, i as f64 * 10.0);
            assert_eq!(r.adjusted_load_mw, 0.0);
        }
    }

    #[test]
    fn set_adjusted_load_only_touches_one_record() {
        let mut table = EnergyTable::from_demand(&[100.0; HOURS_PER_DAY]);
        table.set_adjusted_load(3, 80.0);
        assert_eq!(table.record(3).adjusted_load_mw, 80.0);
        assert_eq!(table.record(3).demand_mw, 100.0);
        assert_eq!(table.record(4).adjusted_load_mw, 0.0);
    }

    #[test]
    fn action_apply_is_not_clamped() {
        let action = ControlAction::Shed { amount_mw: 20.0 };
        assert_eq!(action.apply(155.0), 135.0);
        assert_eq!(action.apply(5.0), -15.0);
        assert_eq!(ControlAction::Hold.apply(5.0), 5.0);
    }

    #[test]
    fn record_display_format() {
        let r = HourlyRecord::new(7, 130.0);
        assert_eq!(format!("{r}"), "Hour 07: Initial Demand = 130.00 MW");
    }

    #[test]
    fn step_display_formats() {
        let shed = ControlStep {
            hour: 17,
            demand_mw: 180.0,
            action: ControlAction::Shed { amount_mw: 20.0 },
            adjusted_load_mw: 160.0,
        };
        assert_eq!(
            format!("{shed}"),
            "Hour 17: Demand=180.00 MW | ACTION: SHED 20.00 MW | New Load=160.00 MW"
        );

        let hold = ControlStep {
            hour: 8,
            demand_mw: 150.0,
            action: ControlAction::Hold,
            adjusted_load_mw: 150.0,
        };
        assert_eq!(
            format!("{hold}"),
            "Hour 08: Demand=150.00 MW | ACTION: HOLD            | New Load=150.00 MW"
        );
    }
}
