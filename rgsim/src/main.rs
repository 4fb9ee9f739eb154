use rgsim::{build_simulator, run_3d, ScenarioConfig};
use rgsim::{bench_field_curve, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run without a window for `steps` ticks and print the final state
    #[arg(long)]
    headless: bool,

    #[arg(long, default_value_t = 600)]
    steps: usize,

    /// Fixed frame time used in headless mode
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Print step timings instead of simulating
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        env_logger::init();
        bench_step();
        bench_field_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;

    if args.headless {
        env_logger::init();
        let mut sim = build_simulator(&scenario_cfg)?;
        for _ in 0..args.steps {
            sim.step(args.dt);
        }
        info!("ran {} ticks, t = {:.3}", sim.ticks(), sim.time());

        for b in sim.bodies() {
            println!("{} {:?} x = {:?} v = {:?}", b.id, b.kind, b.x.as_slice(), b.v.as_slice());
        }
        for p in sim.photons() {
            println!("{} x = {:?} dir = {:?} trail = {}", p.id, p.x.as_slice(), p.dir.as_slice(), p.trail.len());
        }
        return Ok(());
    }

    // the viewer installs its own logger
    let sim = build_simulator(&scenario_cfg)?;
    run_3d(sim);

    Ok(())
}
