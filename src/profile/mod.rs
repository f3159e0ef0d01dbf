//! Daily demand profile sources feeding the load phase.

/// Seeded sinusoidal profile generator.
pub mod synthetic;

pub use synthetic::SyntheticProfile;

use crate::sim::types::HOURS_PER_DAY;

/// The embedded peak-heavy demand day (MW), in hour order.
pub const EMBEDDED_DEMAND_MW: [f64; HOURS_PER_DAY] = [
    100.0, 90.0, 80.0, 70.0, 75.0, 85.0, 110.0, 130.0, 150.0, 160.0, 155.0, 140.0, //
    135.0, 130.0, 140.0, 150.0, 170.0, 180.0, 160.0, 140.0, 120.0, 110.0, 105.0, 100.0,
];

/// Source of one day's hourly demand values.
#[derive(Debug, Clone, PartialEq)]
pub enum DemandProfile {
    /// A fixed list of hourly values.
    Fixed([f64; HOURS_PER_DAY]),
    /// Generated from a seeded sinusoid.
    Synthetic(SyntheticProfile),
}

impl DemandProfile {
    /// The embedded demand day.
    pub fn embedded() -> Self {
        Self::Fixed(EMBEDDED_DEMAND_MW)
    }

    /// Builds a fixed profile from an arbitrary slice.
    ///
    /// Returns `None` when the slice length is not [`HOURS_PER_DAY`].
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let day: [f64; HOURS_PER_DAY] = values.try_into().ok()?;
        Some(Self::Fixed(day))
    }

    /// Short name of the source, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fixed(_) => "fixed",
            Self::Synthetic(_) => "synthetic",
        }
    }

    /// Produces the day's demand values in hour order.
    pub fn hourly_demand_mw(&self) -> [f64; HOURS_PER_DAY] {
        match self {
            Self::Fixed(day) => *day,
            Self::Synthetic(p) => p.hourly_demand_mw(),
        }
    }
}

impl Default for DemandProfile {
    fn default() -> Self {
        Self::embedded()
    }
}
