use gravlab::{bench_integrators, bench_timestep};
use gravlab::{Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Run the integrator comparison benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_integrators()?;
        bench_timestep()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg);

    let t_end = scenario.parameters.t_end;
    let mut simulation = scenario.simulation;
    info!(
        "running to t = {t_end} with dt = {}, {} particles",
        simulation.dt(),
        simulation.latest().num_particles()
    );

    simulation.step_until(t_end)?;

    // Diagnostics summary over the stored history
    let times = simulation.times();
    let momentum_mags = simulation.momentum_magnitudes();
    let energies = simulation.energies();

    println!("states stored: {}", simulation.num_states());
    println!(
        "time:     {:e} -> {:e}",
        times.first().copied().unwrap_or(0.0),
        times.last().copied().unwrap_or(0.0)
    );
    println!(
        "|p|:      {:e} -> {:e}",
        momentum_mags.first().copied().unwrap_or(0.0),
        momentum_mags.last().copied().unwrap_or(0.0)
    );
    println!(
        "energy:   {:e} -> {:e}",
        energies.first().copied().unwrap_or(0.0),
        energies.last().copied().unwrap_or(0.0)
    );

    Ok(())
}
