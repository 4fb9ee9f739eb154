//! The simulation engine driven once per frame
//!
//! A tick is: integrate bodies -> integrate photons -> recompute the field.
//! Every mutation from outside (adding, removing or dragging bodies) goes
//! through [`Simulator`], which keeps the curvature field in sync.

use bevy::prelude::Resource;
use log::{debug, info, warn};

use crate::simulation::curvature::CurvatureField;
use crate::simulation::error::SimResult;
use crate::simulation::forces::{AccelSet3, PhotonDeflection, RelativisticGravity};
use crate::simulation::integrator::{advance_photons, semi_implicit_euler};
use crate::simulation::params::Parameters;
use crate::simulation::registry::Registry;
use crate::simulation::states::{Body3, BodyHandle, BodyKind, NVec3, Photon, PhotonHandle};

pub const TEST_PARTICLE_MASS: f64 = 0.001;
pub const TEST_PARTICLE_RADIUS: f64 = 0.1;

#[derive(Resource)]
pub struct Simulator {
    parameters: Parameters,
    registry: Registry,
    field: CurvatureField,
    forces: AccelSet3,
    deflection: PhotonDeflection,
    t: f64, // simulated time
    ticks: u64,
}

impl Simulator {
    pub fn new(parameters: Parameters) -> Self {
        let forces = AccelSet3::new().with(RelativisticGravity::from_parameters(&parameters));
        let deflection = PhotonDeflection::from_parameters(&parameters);
        let registry = Registry::new(parameters.max_trail_points);
        let field = CurvatureField::new(parameters.field.clone());

        Self {
            parameters,
            registry,
            field,
            forces,
            deflection,
            t: 0.0,
            ticks: 0,
        }
    }

    /// Advance everything by one frame of `dt` time units
    pub fn step(&mut self, dt: f64) {
        if !dt.is_finite() {
            warn!("skipping tick with non-finite dt {dt}");
            return;
        }

        let (bodies, photons) = self.registry.split_mut();
        semi_implicit_euler(self.t, bodies, &self.forces, dt);
        advance_photons(photons, bodies, &self.deflection, self.parameters.photon_speed, dt);
        self.field.recompute(bodies);

        self.t += dt;
        self.ticks += 1;
    }

    // =====================================================================================
    // Registry operations
    // =====================================================================================

    pub fn add_body(&mut self, m: f64, radius: f64, x: NVec3, v: NVec3, kind: BodyKind) -> SimResult<BodyHandle> {
        let id = self.registry.add_body(m, radius, x, v, kind)?;
        self.refresh_field();
        Ok(id)
    }

    /// Near-massless probe body
    pub fn add_test_particle(&mut self, x: NVec3, v: NVec3) -> SimResult<BodyHandle> {
        self.add_body(TEST_PARTICLE_MASS, TEST_PARTICLE_RADIUS, x, v, BodyKind::Particle)
    }

    pub fn add_photon(&mut self, x: NVec3, dir: NVec3) -> SimResult<PhotonHandle> {
        self.registry.add_photon(x, dir)
    }

    pub fn remove_body(&mut self, id: BodyHandle) -> SimResult<()> {
        self.registry.remove_body(id)?;
        self.refresh_field();
        Ok(())
    }

    pub fn remove_photon(&mut self, id: PhotonHandle) -> SimResult<()> {
        self.registry.remove_photon(id).map(|_| ())
    }

    pub fn clear_photons(&mut self) {
        self.registry.clear_photons();
    }

    /// Drop every entity and flatten the field
    pub fn reset(&mut self) {
        info!(
            "reset: dropping {} bodies and {} photons",
            self.registry.bodies().len(),
            self.registry.photons().len()
        );
        self.registry.clear();
        self.refresh_field();
    }

    // =====================================================================================
    // Interaction entry points
    // =====================================================================================

    /// Move a body; the field follows if the position changed
    pub fn set_position(&mut self, id: BodyHandle, x: NVec3) -> SimResult<()> {
        let body = self.registry.body_mut(id)?;
        if body.x != x {
            body.x = x;
            self.refresh_field();
        }
        Ok(())
    }

    pub fn set_velocity(&mut self, id: BodyHandle, v: NVec3) -> SimResult<()> {
        self.registry.body_mut(id)?.v = v;
        Ok(())
    }

    /// Drag step: place the body and hold it still
    pub fn drag_body(&mut self, id: BodyHandle, x: NVec3) -> SimResult<()> {
        self.set_position(id, x)?;
        self.set_velocity(id, NVec3::zeros())?;
        debug!("dragged {id} to {:?}", x.as_slice());
        Ok(())
    }

    // =====================================================================================
    // Read access
    // =====================================================================================

    pub fn bodies(&self) -> &[Body3] {
        self.registry.bodies()
    }

    pub fn photons(&self) -> &[Photon] {
        self.registry.photons()
    }

    pub fn body(&self, id: BodyHandle) -> SimResult<&Body3> {
        self.registry.body(id)
    }

    pub fn photon(&self, id: PhotonHandle) -> SimResult<&Photon> {
        self.registry.photon(id)
    }

    pub fn field(&self) -> &CurvatureField {
        &self.field
    }

    /// Field heights, row-major
    pub fn field_heights(&self) -> &[f64] {
        self.field.heights()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn forces(&self) -> &AccelSet3 {
        &self.forces
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    fn refresh_field(&mut self) {
        self.field.recompute(self.registry.bodies());
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Parameters::default())
    }
}
