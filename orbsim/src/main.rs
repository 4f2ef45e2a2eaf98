use orbsim::{Scenario, ScenarioConfig, Method, EnergyReport, SimError};
use orbsim::{bench_methods, bench_convergence_curve};

use clap::Parser;
use anyhow::{Context, Result};
use tracing::{info, error};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` when it is not a path
    #[arg(short, long, default_value = "earth.yaml")]
    file_name: String,

    /// Override the integrator named in the scenario
    #[arg(long)]
    method: Option<Method>,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.bench {
        bench_methods();
        bench_convergence_curve();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(method) = args.method {
        scenario_cfg.engine.integrator = method;
    }

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let trajectory = match scenario.run() {
        Ok(t) => t,
        Err(SimError::NumericalInstability { step, body, last_valid }) => {
            error!(step, %body, "run diverged");
            for b in last_valid.iter() {
                info!(body = %b.name, x = ?b.x, "last valid position");
            }
            anyhow::bail!("simulation diverged at step {step}");
        }
        Err(e) => return Err(e.into()),
    };

    let g = scenario.engine.force_law().G;
    if let Some(report) = EnergyReport::from_trajectory(&trajectory, g) {
        info!(
            method = %scenario.engine.method,
            initial = report.initial_energy,
            last = report.final_energy,
            final_drift = report.final_drift,
            max_drift = report.max_drift,
            "energy budget"
        );
    }

    if let Some(last) = trajectory.last() {
        for b in last {
            info!(body = %b.name, x = ?b.x, v = ?b.v, "final state");
        }
    }

    Ok(())
}
