//! Entity registry: the single owner of bodies and photons.
//!
//! Both the integrators and the interaction layer mutate entities through
//! this type, so every write lands on the same tick boundary.

use log::debug;

use super::error::{SimError, SimResult};
use super::states::{Body3, BodyHandle, BodyKind, NVec3, Photon, PhotonHandle};
use super::trail::TrailBuffer;

#[derive(Debug, Clone)]
pub struct Registry {
    bodies: Vec<Body3>,
    photons: Vec<Photon>,
    next_id: u64, // shared counter, handles are never reused
    trail_capacity: usize,
}

impl Registry {
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            bodies: Vec::new(),
            photons: Vec::new(),
            next_id: 0,
            trail_capacity,
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Validate and append a massive body
    pub fn add_body(&mut self, m: f64, radius: f64, x: NVec3, v: NVec3, kind: BodyKind) -> SimResult<BodyHandle> {
        // written so that NaN fails both checks
        if !(m >= 0.0) {
            return Err(SimError::InvalidMass(m));
        }
        if !(radius > 0.0) {
            return Err(SimError::InvalidRadius(radius));
        }

        let id = BodyHandle(self.next_id());
        self.bodies.push(Body3 { id, x, v, m, radius, kind });
        debug!("added {id} ({kind:?}, m = {m}, r = {radius})");
        Ok(id)
    }

    /// Normalize `dir` and append a photon with an empty trail
    pub fn add_photon(&mut self, x: NVec3, dir: NVec3) -> SimResult<PhotonHandle> {
        // try_normalize lets a NaN norm through
        if !dir.iter().all(|c| c.is_finite()) {
            return Err(SimError::InvalidDirection);
        }
        let dir = dir.try_normalize(0.0).ok_or(SimError::InvalidDirection)?;

        let id = PhotonHandle(self.next_id());
        self.photons.push(Photon {
            id,
            x,
            dir,
            trail: TrailBuffer::with_capacity(self.trail_capacity),
        });
        debug!("added {id} at {:?}", x.as_slice());
        Ok(id)
    }

    pub fn remove_body(&mut self, id: BodyHandle) -> SimResult<Body3> {
        let idx = self
            .bodies
            .iter()
            .position(|b| b.id == id)
            .ok_or(SimError::UnknownBody(id))?;
        debug!("removed {id}");
        Ok(self.bodies.remove(idx))
    }

    pub fn remove_photon(&mut self, id: PhotonHandle) -> SimResult<Photon> {
        let idx = self
            .photons
            .iter()
            .position(|p| p.id == id)
            .ok_or(SimError::UnknownPhoton(id))?;
        debug!("removed {id}");
        Ok(self.photons.remove(idx))
    }

    pub fn clear_photons(&mut self) {
        debug!("cleared {} photons", self.photons.len());
        self.photons.clear();
    }

    /// Drop every body and photon
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.photons.clear();
    }

    pub fn body(&self, id: BodyHandle) -> SimResult<&Body3> {
        self.bodies.iter().find(|b| b.id == id).ok_or(SimError::UnknownBody(id))
    }

    pub fn body_mut(&mut self, id: BodyHandle) -> SimResult<&mut Body3> {
        self.bodies.iter_mut().find(|b| b.id == id).ok_or(SimError::UnknownBody(id))
    }

    pub fn photon(&self, id: PhotonHandle) -> SimResult<&Photon> {
        self.photons.iter().find(|p| p.id == id).ok_or(SimError::UnknownPhoton(id))
    }

    pub fn bodies(&self) -> &[Body3] {
        &self.bodies
    }

    pub fn photons(&self) -> &[Photon] {
        &self.photons
    }

    /// Split borrow for the integrators: bodies read-only, photons mutable
    pub(crate) fn split_mut(&mut self) -> (&mut Vec<Body3>, &mut Vec<Photon>) {
        (&mut self.bodies, &mut self.photons)
    }
}
