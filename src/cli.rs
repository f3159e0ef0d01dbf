use std::path::PathBuf;

use clap::Parser;

/// Single-day load-shedding simulator.
///
/// With no arguments, runs the baseline scenario: the embedded demand day,
/// 150 MW threshold, 20 MW shed.
#[derive(Debug, Parser)]
#[command(name = "load-shed-sim", version)]
pub struct CliArgs {
    /// Load scenario from TOML config file
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (baseline, synthetic, aggressive)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override the peak threshold (MW)
    #[arg(long, value_name = "MW", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Override the shed amount (MW)
    #[arg(long, value_name = "MW")]
    pub shed: Option<f64>,

    /// Override the synthetic profile seed
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Export the processed table to CSV
    #[arg(long, value_name = "PATH")]
    pub telemetry_out: Option<PathBuf>,
}
