use molsim::{bench_forces, bench_step_curve};
use molsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it is an existing path
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the number of steps from the scenario
    #[arg(long)]
    steps: Option<u64>,

    /// Run the force and step benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(args: &Args) -> Result<ScenarioConfig> {
    let config_path = scenario_path(&args.file_name);
    let mut scenario_cfg = ScenarioConfig::from_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    if let Some(steps) = args.steps {
        scenario_cfg.run.steps = steps;
    }
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_forces()?;
        bench_step_curve()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    let summary = scenario.run();

    info!(
        "finished {} steps, t = {:.4}, kinetic energy = {:.6e}",
        summary.steps, summary.time, summary.kinetic_energy
    );

    Ok(())
}
