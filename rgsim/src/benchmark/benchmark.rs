use std::time::Instant;

use crate::simulation::curvature::CurvatureField;
use crate::simulation::engine::Simulator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, NVec3};

/// Helper to build a simulator with `n` bodies and `n / 10` photons
/// deterministic positions, no rand needed
fn make_simulator(n: usize) -> Simulator {
    let mut sim = Simulator::new(Parameters::default());

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 50.0,
            0.0,
            (i_f * 0.07).cos() * 50.0,
        );
        sim.add_body(1.0, 0.1, x, NVec3::zeros(), BodyKind::Particle)
            .expect("benchmark body is valid");
    }
    for i in 0..n / 10 {
        let z = i as f64 - (n / 20) as f64;
        sim.add_photon(NVec3::new(-100.0, 0.0, z), NVec3::new(1.0, 0.0, 0.0))
            .expect("benchmark photon is valid");
    }

    sim
}

/// Time one full tick (bodies, photons, field) for growing n
pub fn bench_step() {
    let ns = [10, 20, 40, 80, 160];
    let steps = 20;
    let dt = 1.0 / 60.0;

    for n in ns {
        let mut sim = make_simulator(n);

        // Warm up
        sim.step(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step(dt);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:4}, step = {:8.6} s ({:.1} fps budget)", per_step, 1.0 / per_step);
    }
}

/// Time the curvature recompute alone; it dominates the tick
/// Paste output directly into a spreadsheet to graph
pub fn bench_field_curve() {
    println!("N,field_ms");

    for n in (10..=200).step_by(10) {
        let sim = make_simulator(n);
        let mut field = CurvatureField::new(sim.parameters().field.clone());

        let t0 = Instant::now();
        field.recompute(sim.bodies());
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", n, ms);
    }
}
