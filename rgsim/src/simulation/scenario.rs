//! Build fully-initialized simulators and populate them
//!
//! - [`build_simulator`] maps a YAML-facing [`ScenarioConfig`] into a
//!   runtime [`Simulator`], validating every body and photon on the way
//! - [`default_scene`] / [`reset_to_default`] give the star + planet setup
//! - [`Spawner`] drops new orbiting bodies and edge photons at random,
//!   reproducibly from the configured seed

use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use crate::configuration::config::{vec3, BodyConfig, PhotonConfig, ScenarioConfig};
use crate::simulation::engine::Simulator;
use crate::simulation::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyHandle, BodyKind, NVec3, PhotonHandle};

/// Mass assumed for the centre when no body sits at x = 0, z = 0
const FALLBACK_CENTRAL_MASS: f64 = 100.0;
/// Scales the real-constant orbital speed up to something visible
const ORBIT_SPEED_SCALE: f64 = 50.0;
const SPAWN_MIN_DISTANCE: f64 = 15.0;
const SPAWN_DISTANCE_SPREAD: f64 = 15.0;

/// Build a simulator from a scenario; the first invalid entity aborts the build
pub fn build_simulator(cfg: &ScenarioConfig) -> SimResult<Simulator> {
    let mut sim = Simulator::new(cfg.to_parameters()?);

    for bc in &cfg.bodies {
        add_body_from_config(&mut sim, bc)?;
    }
    for pc in &cfg.photons {
        add_photon_from_config(&mut sim, pc)?;
    }

    info!(
        "scenario built: {} bodies, {} photons",
        sim.bodies().len(),
        sim.photons().len()
    );
    Ok(sim)
}

fn add_body_from_config(sim: &mut Simulator, bc: &BodyConfig) -> SimResult<BodyHandle> {
    sim.add_body(bc.m, bc.radius, vec3(&bc.x)?, vec3(&bc.v)?, bc.kind)
}

fn add_photon_from_config(sim: &mut Simulator, pc: &PhotonConfig) -> SimResult<PhotonHandle> {
    sim.add_photon(vec3(&pc.x)?, vec3(&pc.dir)?)
}

/// Add the stationary star and the orbiting planet
fn add_default_bodies(sim: &mut Simulator) -> SimResult<(BodyHandle, BodyHandle)> {
    let star = sim.add_body(100.0, 2.0, NVec3::zeros(), NVec3::zeros(), BodyKind::Star)?;
    let planet = sim.add_body(
        10.0,
        0.5,
        NVec3::new(10.0, 0.0, 0.0),
        NVec3::new(0.0, 0.0, 3.0),
        BodyKind::Planet,
    )?;
    Ok((star, planet))
}

/// Star, planet and two photons passing the star along +x
pub fn default_scene(parameters: Parameters) -> SimResult<Simulator> {
    let mut sim = Simulator::new(parameters);
    add_default_bodies(&mut sim)?;
    sim.add_photon(NVec3::new(-20.0, 0.0, 2.0), NVec3::new(1.0, 0.0, 0.0))?;
    sim.add_photon(NVec3::new(-20.0, 0.0, 4.0), NVec3::new(1.0, 0.0, 0.0))?;
    Ok(sim)
}

/// Clear everything, then bring back the star and planet (photons stay gone)
pub fn reset_to_default(sim: &mut Simulator) -> SimResult<(BodyHandle, BodyHandle)> {
    sim.reset();
    add_default_bodies(sim)
}

// =========================================================================================
// Random spawning
// =========================================================================================

/// Seeded source for randomly placed bodies and photons
pub struct Spawner {
    rng: ChaCha8Rng,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Drop a body 15..30 units from the centre on a tangential orbit
    pub fn spawn_orbiting_body(&mut self, sim: &mut Simulator, m: f64, radius: f64, kind: BodyKind) -> SimResult<BodyHandle> {
        let angle = self.rng.gen_range(0.0..TAU);
        let distance = SPAWN_MIN_DISTANCE + self.rng.gen::<f64>() * SPAWN_DISTANCE_SPREAD;
        let x = NVec3::new(angle.cos() * distance, 0.0, angle.sin() * distance);

        // unit vector toward the centre, turned 90 degrees in the x/z plane
        let to_centre = (-x).normalize();
        let tangent = NVec3::new(-to_centre.z, 0.0, to_centre.x);

        let central_mass = sim
            .bodies()
            .iter()
            .find(|b| b.x.x == 0.0 && b.x.z == 0.0)
            .map(|b| b.m)
            .unwrap_or(FALLBACK_CENTRAL_MASS);
        let speed = (sim.parameters().G_phys * central_mass / distance).sqrt() * ORBIT_SPEED_SCALE;

        let id = sim.add_body(m, radius, x, tangent * speed, kind)?;
        info!("spawned {id} ({kind:?}) at distance {distance:.2}, speed {speed:.3e}");
        Ok(id)
    }

    /// Launch a photon from a random point on one edge of the grid, heading inward
    pub fn spawn_edge_photon(&mut self, sim: &mut Simulator) -> SimResult<PhotonHandle> {
        let size = sim.parameters().field.simulation_size;
        let half = size / 2.0;
        let along = self.rng.gen::<f64>() * size - half;
        let lateral = self.rng.gen::<f64>() * 2.0 - 1.0;

        let (x, dir) = match self.rng.gen_range(0..4) {
            0 => (NVec3::new(along, 0.0, -half), NVec3::new(lateral, 0.0, 1.0)), // top
            1 => (NVec3::new(half, 0.0, along), NVec3::new(-1.0, 0.0, lateral)), // right
            2 => (NVec3::new(along, 0.0, half), NVec3::new(lateral, 0.0, -1.0)), // bottom
            _ => (NVec3::new(-half, 0.0, along), NVec3::new(1.0, 0.0, lateral)), // left
        };

        let id = sim.add_photon(x, dir)?;
        info!("spawned {id} at {:?}", x.as_slice());
        Ok(id)
    }
}
