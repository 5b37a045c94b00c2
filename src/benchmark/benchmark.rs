use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::disk::DiskParticleSystem;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3};

/// Time one disk update (with tidal forcing) for a range of ensemble sizes
pub fn bench_disk_update() {
    // Different ensemble sizes to test
    let ns = [1_000, 5_000, 10_000, 20_000, 40_000, 80_000];
    let steps = 10;
    let params = Parameters::default();

    let body = Body::new(params.primary_mass, NVec3::new(22.2, 0.0, 0.0), NVec3::zeros());
    let other = Body::new(9.6, NVec3::new(-27.8, 0.0, 0.0), NVec3::zeros());

    for n in ns {
        let mut rng = ChaChaRng::seed_from_u64(params.seed);
        let mut disk = DiskParticleSystem::new(n);
        disk.initialize(&body, &mut rng);

        // Warm up
        disk.update(&body, 0.016, params.G, Some(&other));

        let t0 = Instant::now();
        for _ in 0..steps {
            disk.update(&body, 0.016, params.G, Some(&other));
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:6}, disk step = {:8.6} s, alive = {}", per_step, disk.active_count());
    }
}

/// Time whole ticks of the default scenario through every phase.
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick(frames: usize) {
    let mut scenario = Scenario::build_scenario(ScenarioConfig::default());

    println!("frame,phase,ms");

    for frame in 0..frames {
        let t0 = Instant::now();
        let report = scenario.advance(0.016);
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        // Only every 100th frame and the transitions, to keep output short
        if let Some(report) = report {
            if frame % 100 == 0 || report.entered.is_some() {
                println!("{},{},{:.6}", frame, report.phase, ms);
            }
        }
    }
}
