//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]     – curvature grid geometry, photon speed, trail length
//! - [`ParametersConfig`] – tuned and physical constants, spawner seed
//! - [`BodyConfig`]       – initial state for each massive body
//! - [`PhotonConfig`]     – initial state for each photon
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every `engine` and `parameters` key is optional; missing keys take the
//! values of [`Parameters::default`]. `max_trail_points: 0` is rejected.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   simulation_size: 1000.0   # side of the curvature grid
//!   divisions: 150            # grid subdivisions per axis
//!   photon_speed: 3.0
//!   max_trail_points: 1000
//!
//! parameters:
//!   G: 0.1                    # simulation gravitational constant
//!   K: 90.0                   # rs-like correction divisor
//!   eps: 0.1
//!   G_phys: 6.67430e-11       # used for light bending only
//!   c: 3.0e8
//!   seed: 42
//!
//! bodies:
//!   - x: [ 0.0, 0.0, 0.0 ]
//!     v: [ 0.0, 0.0, 0.0 ]
//!     m: 100.0
//!     radius: 2.0
//!     kind: star
//!
//! photons:
//!   - x: [ -20.0, 0.0, 2.0 ]
//!     dir: [ 1.0, 0.0, 0.0 ]
//! ```

use serde::Deserialize;

use crate::simulation::error::{SimError, SimResult};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyKind, NVec3};

/// Grid and photon settings
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub simulation_size: Option<f64>,
    pub divisions: Option<usize>,
    pub photon_speed: Option<f64>,
    pub max_trail_points: Option<usize>,
}

/// Force-law constants and the spawner seed
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: Option<f64>,
    pub K: Option<f64>,
    pub eps: Option<f64>,
    pub G_phys: Option<f64>,
    pub c: Option<f64>,
    pub seed: Option<u64>,
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position
    #[serde(default)]
    pub v: Vec<f64>, // Initial velocity, at rest if omitted
    pub m: f64,      // Mass, must be >= 0
    pub radius: f64, // Radius, must be > 0
    #[serde(default)]
    pub kind: BodyKind,
}

/// Configuration for a single photon
#[derive(Deserialize, Debug, Clone)]
pub struct PhotonConfig {
    pub x: Vec<f64>,   // Start position
    pub dir: Vec<f64>, // Heading, normalized on load
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub photons: Vec<PhotonConfig>,
}

impl ScenarioConfig {
    /// Runtime parameters with defaults filled in
    pub fn to_parameters(&self) -> SimResult<Parameters> {
        let mut p = Parameters::default();
        let e = &self.engine;
        let c = &self.parameters;

        if let Some(size) = e.simulation_size { p.field.simulation_size = size; }
        if let Some(div) = e.divisions { p.field.divisions = div; }
        if let Some(speed) = e.photon_speed { p.photon_speed = speed; }
        if let Some(n) = e.max_trail_points {
            if n == 0 {
                return Err(SimError::InvalidTrailCapacity);
            }
            p.max_trail_points = n;
        }

        if let Some(g) = c.G { p.G = g; }
        if let Some(k) = c.K { p.K = k; }
        if let Some(eps) = c.eps { p.eps = eps; }
        if let Some(g) = c.G_phys { p.G_phys = g; }
        if let Some(light) = c.c { p.c = light; }
        if let Some(seed) = c.seed { p.seed = seed; }

        Ok(p)
    }
}

/// Read a YAML list as a 3-vector; an empty list is the zero vector
pub fn vec3(values: &[f64]) -> SimResult<NVec3> {
    match values {
        [] => Ok(NVec3::zeros()),
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        other => Err(SimError::InvalidVector(other.len())),
    }
}
