//! Load-shedding simulator entry point — CLI wiring and config-driven pipeline construction.

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::CliArgs;
use load_shed_sim::config::ScenarioConfig;
use load_shed_sim::io::export::export_csv;
use load_shed_sim::report::print_report;
use load_shed_sim::sim::controller::Controller;
use load_shed_sim::sim::pipeline::Pipeline;

/// Resolves the scenario: --scenario takes priority, then --preset, then baseline.
fn load_scenario(cli: &CliArgs) -> Result<ScenarioConfig> {
    let mut scenario = if let Some(ref path) = cli.scenario {
        ScenarioConfig::from_toml_file(path)?
    } else if let Some(ref name) = cli.preset {
        ScenarioConfig::from_preset(name)?
    } else {
        ScenarioConfig::baseline()
    };

    if let Some(threshold) = cli.threshold {
        scenario.controller.peak_threshold_mw = threshold;
    }
    if let Some(shed) = cli.shed {
        scenario.controller.shed_amount_mw = shed;
    }
    if let Some(seed) = cli.seed {
        scenario.profile.seed = seed;
    }

    Ok(scenario)
}

fn run(cli: &CliArgs) -> Result<()> {
    let scenario = load_scenario(cli)?;

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        anyhow::bail!("invalid scenario ({} errors)", errors.len());
    }

    let pipeline = Pipeline::new(scenario.demand_profile()?, scenario.controller());
    info!(
        source = %scenario.profile.source,
        profile = pipeline.profile().kind(),
        "scenario ready"
    );
    let run = pipeline.run();

    print_report(&pipeline.controller().describe(), &run).context("failed to write report")?;

    if let Some(ref path) = cli.telemetry_out {
        export_csv(&run.control_steps, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        info!(path = %path.display(), "telemetry written");
        eprintln!("Telemetry written to {}", path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = CliArgs::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
