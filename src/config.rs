//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::profile::{DemandProfile, EMBEDDED_DEMAND_MW, SyntheticProfile};
use crate::sim::controller::{
    DEFAULT_PEAK_THRESHOLD_MW, DEFAULT_SHED_AMOUNT_MW, StaticThresholdController,
};
use crate::sim::types::HOURS_PER_DAY;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Simulation timing parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Demand profile source.
    #[serde(default)]
    pub profile: ProfileConfig,
    /// Static controller parameters.
    #[serde(default)]
    pub controller: ControllerConfig,
}

/// Simulation timing parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Hours in the simulated day (must equal the table length, 24).
    pub hours_per_day: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hours_per_day: HOURS_PER_DAY,
        }
    }
}

/// Demand profile source and its parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileConfig {
    /// Source: `"embedded"`, `"inline"` or `"synthetic"`.
    pub source: String,
    /// Hourly demand (MW) for the inline source.
    pub demand_mw: Vec<f64>,
    /// Mean demand for the synthetic source (MW).
    pub base_mw: f64,
    /// Daily swing amplitude for the synthetic source (MW).
    pub amp_mw: f64,
    /// Phase offset for the synthetic source (radians).
    pub phase_rad: f64,
    /// Noise standard deviation for the synthetic source (MW).
    pub noise_std: f64,
    /// Noise seed for the synthetic source.
    pub seed: u64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            source: "embedded".to_string(),
            demand_mw: Vec::new(),
            base_mw: 125.0,
            amp_mw: 45.0,
            phase_rad: -3.0,
            noise_std: 5.0,
            seed: 42,
        }
    }
}

/// Static controller parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Demand strictly above this level is shed (MW).
    pub peak_threshold_mw: f64,
    /// Amount removed from each shed hour (MW, >= 0).
    pub shed_amount_mw: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            peak_threshold_mw: DEFAULT_PEAK_THRESHOLD_MW,
            shed_amount_mw: DEFAULT_SHED_AMOUNT_MW,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.hours_per_day"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: embedded day, 150 MW threshold, 20 MW shed.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the synthetic preset: seeded sinusoidal day with noise.
    pub fn synthetic() -> Self {
        Self {
            profile: ProfileConfig {
                source: "synthetic".to_string(),
                ..ProfileConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the aggressive preset: embedded day, lower threshold, deeper shed.
    pub fn aggressive() -> Self {
        Self {
            controller: ControllerConfig {
                peak_threshold_mw: 130.0,
                shed_amount_mw: 30.0,
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "synthetic", "aggressive"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "synthetic" => Ok(Self::synthetic()),
            "aggressive" => Ok(Self::aggressive()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let hours = self.simulation.hours_per_day;
        if hours != HOURS_PER_DAY {
            errors.push(ConfigError::new(
                "simulation.hours_per_day",
                format!("must be {HOURS_PER_DAY} (table length), got {hours}"),
            ));
        }

        let p = &self.profile;
        match p.source.as_str() {
            "embedded" => {
                if EMBEDDED_DEMAND_MW.len() != hours {
                    errors.push(ConfigError::new(
                        "profile.source",
                        format!(
                            "embedded profile has {} values, simulation.hours_per_day is {hours}",
                            EMBEDDED_DEMAND_MW.len()
                        ),
                    ));
                }
            }
            "inline" => {
                if p.demand_mw.len() != hours {
                    errors.push(ConfigError::new(
                        "profile.demand_mw",
                        format!(
                            "must contain {hours} values (simulation.hours_per_day), got {}",
                            p.demand_mw.len()
                        ),
                    ));
                }
                if p.demand_mw.iter().any(|v| !v.is_finite()) {
                    errors.push(ConfigError::new(
                        "profile.demand_mw",
                        "values must be finite",
                    ));
                }
                if p.demand_mw.iter().any(|v| *v < 0.0) {
                    errors.push(ConfigError::new("profile.demand_mw", "values must be >= 0"));
                }
            }
            "synthetic" => {
                if p.noise_std.is_nan() || p.noise_std < 0.0 {
                    errors.push(ConfigError::new("profile.noise_std", "must be >= 0"));
                }
                if ![p.base_mw, p.amp_mw, p.phase_rad].iter().all(|v| v.is_finite()) {
                    errors.push(ConfigError::new(
                        "profile",
                        "base_mw, amp_mw and phase_rad must be finite",
                    ));
                }
            }
            other => errors.push(ConfigError::new(
                "profile.source",
                format!("must be \"embedded\", \"inline\" or \"synthetic\", got \"{other}\""),
            )),
        }

        let c = &self.controller;
        if !c.peak_threshold_mw.is_finite() {
            errors.push(ConfigError::new(
                "controller.peak_threshold_mw",
                "must be finite",
            ));
        }
        if !c.shed_amount_mw.is_finite() || c.shed_amount_mw < 0.0 {
            errors.push(ConfigError::new(
                "controller.shed_amount_mw",
                "must be finite and >= 0",
            ));
        }

        errors
    }

    /// Builds the demand profile described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an unknown source or an inline list of
    /// the wrong length. Call [`ScenarioConfig::validate`] first for a
    /// complete error report.
    pub fn demand_profile(&self) -> Result<DemandProfile, ConfigError> {
        let p = &self.profile;
        match p.source.as_str() {
            "embedded" => Ok(DemandProfile::embedded()),
            "inline" => DemandProfile::from_values(&p.demand_mw).ok_or_else(|| {
                ConfigError::new(
                    "profile.demand_mw",
                    format!("must contain {HOURS_PER_DAY} values"),
                )
            }),
            "synthetic" => Ok(DemandProfile::Synthetic(SyntheticProfile::new(
                p.base_mw,
                p.amp_mw,
                p.phase_rad,
                p.noise_std,
                p.seed,
            ))),
            other => Err(ConfigError::new(
                "profile.source",
                format!("unknown source \"{other}\""),
            )),
        }
    }

    /// Builds the static controller described by this configuration.
    pub fn controller(&self) -> StaticThresholdController {
        StaticThresholdController::new(
            self.controller.peak_threshold_mw,
            self.controller.shed_amount_mw,
        )
    }
}
