//! Core state types for the simulation.
//!
//! - `Body3`  massive entity that sources and receives gravity
//! - `Photon` light ray that is only deflected, never a source
//!
//! Entities are addressed by opaque handles, never by index, since the
//! registry collections shrink when entities are removed.

use nalgebra::Vector3;
use serde::Deserialize;
use std::fmt;

use super::trail::TrailBuffer;

pub type NVec3 = Vector3<f64>;

/// Stable id of a massive body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u64);

/// Stable id of a photon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotonHandle(pub(crate) u64);

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

impl fmt::Display for PhotonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "photon#{}", self.0)
    }
}

/// What a body looks like. The engine treats every kind the same way.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    #[default]
    Planet,
    BlackHole,
    Particle,
}

#[derive(Debug, Clone)]
pub struct Body3 {
    pub id: BodyHandle, // registry handle
    pub x: NVec3, // 3d position
    pub v: NVec3, // 3d velocity
    pub m: f64, // mass, >= 0
    pub radius: f64, // size, also the proximity-exclusion threshold
    pub kind: BodyKind,
}

#[derive(Debug, Clone)]
pub struct Photon {
    pub id: PhotonHandle, // registry handle
    pub x: NVec3, // 3d position
    pub dir: NVec3, // unit direction of travel
    pub trail: TrailBuffer, // past positions, oldest first
}
