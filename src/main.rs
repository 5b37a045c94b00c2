use bhmerge::{load_scenario_config, Scenario, ScenarioConfig, BodySlot};
use bhmerge::{bench_disk_update, bench_tick};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<usize>,

    /// Run the timing harness instead of the scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = load_scenario_config(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let frames = args.frames.unwrap_or(scenario_cfg.engine.frames);

    if args.bench {
        bench_disk_update();
        bench_tick(frames);
        return Ok(());
    }

    let frame_dt = scenario_cfg.engine.frame_dt;
    let mut scenario = Scenario::build_scenario(scenario_cfg);
    info!(frames, frame_dt, "running headless");

    for frame in 0..frames {
        let Some(report) = scenario.advance(frame_dt) else {
            continue;
        };

        if frame % 500 == 0 {
            let info = scenario.system_info();
            info!(
                frame,
                phase = %report.phase,
                progress = report.progress,
                total_mass = info.total_mass,
                separation = ?info.separation,
                period = ?info.orbital_period,
                "status"
            );
        }
    }

    let state = scenario.state();
    let remnant = state.body(BodySlot::Remnant);
    println!(
        "phase = {}, progress = {:.3}, remnant mass = {:.2}, remnant disk alive = {}",
        state.phase,
        state.progress,
        remnant.m(),
        state.disk(BodySlot::Remnant).active_count()
    );

    Ok(())
}
