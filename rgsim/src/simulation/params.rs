//! Tuned constants for the simulation
//!
//! `Parameters` holds runtime settings:
//! - simulation-scaled gravity for massive bodies (`G`, `K`, `eps`),
//! - physical constants for light bending (`G_phys`, `c`),
//! - photon speed and trail length,
//! - curvature grid geometry and shaping constants,
//! - the seed for random spawners

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // simulation gravitational constant
    pub K: f64, // divisor in the rs-like correction term
    pub eps: f64, // keeps the correction finite at zero distance
    pub G_phys: f64, // real gravitational constant, used for photons only
    pub c: f64, // real speed of light, used for photons only
    pub photon_speed: f64, // distance per time unit along the photon direction
    pub max_trail_points: usize, // trail capacity per photon
    pub field: FieldParameters,
    pub seed: u64, // deterministic seed for spawners
}

/// Curvature grid geometry and shaping
#[derive(Debug, Clone)]
pub struct FieldParameters {
    pub simulation_size: f64, // side of the square domain
    pub divisions: usize, // subdivisions per axis
    pub hole_factor: f64, // samples closer than radius * hole_factor become a hole
    pub hole_depth: f64, // height written into hole samples
    pub offset: f64, // keeps the falloff finite at zero distance
    pub exponent: f64, // falloff exponent
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            simulation_size: 1000.0,
            divisions: 150,
            hole_factor: 1.5,
            hole_depth: -10.0,
            offset: 5.0,
            exponent: 1.5,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 0.1,
            K: 90.0,
            eps: 0.1,
            G_phys: 6.67430e-11,
            c: 3e8,
            photon_speed: 3.0,
            max_trail_points: super::trail::DEFAULT_TRAIL_POINTS,
            field: FieldParameters::default(),
            seed: 42,
        }
    }
}
