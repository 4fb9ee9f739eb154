//! Acceleration contributors for the engine
//!
//! Two deliberately different force laws live here:
//! - [`RelativisticGravity`] acts between massive bodies and uses
//!   simulation-scaled constants with an rs-like correction term
//! - [`PhotonDeflection`] bends photons using real-world `G` and `c`

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body3, NVec3, Photon};

/// Collection of acceleration terms acting on massive bodies
/// Each term implements [`Acceleration3`] and their contributions are summed
pub struct AccelSet3 {
    terms: Vec<Box<dyn Acceleration3 + Send + Sync>>,
}

impl AccelSet3 {
    /// Constructor
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration3 + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total acceleration on `bodies[i]` from every term
    pub fn acceleration_on(&self, t: f64, bodies: &[Body3], i: usize) -> NVec3 {
        self.terms
            .iter()
            .fold(NVec3::zeros(), |acc, term| acc + term.acceleration_on(t, bodies, i))
    }

    /// Frozen-state accelerations for all bodies
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, bodies: &[Body3], out: &mut [NVec3]) {
        for (i, a) in out.iter_mut().enumerate().take(bodies.len()) {
            *a = self.acceleration_on(t, bodies, i);
        }
    }
}

impl Default for AccelSet3 {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources acting on one body of a body list
pub trait Acceleration3 {
    fn acceleration_on(&self, t: f64, bodies: &[Body3], i: usize) -> NVec3;
}

/// Pseudo-relativistic gravity, direct n^2 sum
///
/// The correction uses the *source* body's mass only, so the pull of A on B
/// and of B on A are generally not equal and opposite.
#[derive(Debug, Clone)]
pub struct RelativisticGravity {
    pub G: f64,
    pub K: f64,
    pub eps: f64,
}

impl RelativisticGravity {
    pub fn from_parameters(p: &Parameters) -> Self {
        Self {
            G: p.G,
            K: p.K,
            eps: p.eps,
        }
    }

    /// Acceleration that `source` imparts on `target`
    /// Returns `None` when the pair is inside the proximity exclusion
    pub fn pair_acceleration(&self, target: &Body3, source: &Body3) -> Option<NVec3> {
        // d points from target to source
        let d = source.x - target.x;
        let dist = d.norm();

        // bodies touching or overlapping: no contribution
        if dist < target.radius + source.radius {
            return None;
        }

        // Unit vector towards the source
        let dir_hat = d / dist;

        // rs-like term from the source mass; K keeps it small at sim scale
        let rs = 2.0 * source.m * self.G / self.K;
        // Correction grows as 1/dist, eps keeps it bounded near contact
        let correction = 1.0 + 3.0 * rs / (dist + self.eps);
        // Newtonian magnitude G * m_src / dist^2, then corrected.
        // The target mass cancels: this is an acceleration, not a force
        let force_mag = self.G * source.m / (dist * dist) * correction;

        Some(dir_hat * force_mag)
    }
}

impl Acceleration3 for RelativisticGravity {
    fn acceleration_on(&self, _t: f64, bodies: &[Body3], i: usize) -> NVec3 {
        let target = &bodies[i];
        let mut acc = NVec3::zeros();

        // Direct sum over every other body, no spatial partitioning
        for (j, source) in bodies.iter().enumerate() {
            // No self-interaction
            if i == j {
                continue;
            }
            // Excluded pairs simply add nothing
            if let Some(a) = self.pair_acceleration(target, source) {
                acc += a;
            }
        }
        acc
    }
}

// =========================================================================================
// Light bending
// =========================================================================================

/// Deflection of photons by massive bodies
///
/// Uses the real gravitational constant and speed of light, so at simulation
/// masses the bending is many orders of magnitude below anything visible.
#[derive(Debug, Clone)]
pub struct PhotonDeflection {
    pub G_phys: f64,
    pub c: f64,
}

impl PhotonDeflection {
    pub fn from_parameters(p: &Parameters) -> Self {
        Self {
            G_phys: p.G_phys,
            c: p.c,
        }
    }

    /// Deflection contributed by one body, `None` if the photon is inside it
    pub fn deflection_by(&self, photon: &Photon, body: &Body3) -> Option<NVec3> {
        let d = body.x - photon.x;
        let dist = d.norm();
        if dist < body.radius {
            return None;
        }

        // Schwarzschild radius with the real constants
        let rs = 2.0 * body.m * self.G_phys / (self.c * self.c);
        // Falls off as 1/dist^2
        let deflection_factor = 2.0 * rs / (dist * dist);

        // perpendicular to travel and to the body; zero when they are parallel
        let to_body = d / dist;
        let perp = photon
            .dir
            .cross(&to_body)
            .try_normalize(0.0)
            .unwrap_or_else(NVec3::zeros);

        Some(perp * deflection_factor)
    }

    /// Sum of deflections from every body
    pub fn deflection_on(&self, photon: &Photon, bodies: &[Body3]) -> NVec3 {
        bodies
            .iter()
            .filter_map(|b| self.deflection_by(photon, b))
            .fold(NVec3::zeros(), |acc, a| acc + a)
    }
}
