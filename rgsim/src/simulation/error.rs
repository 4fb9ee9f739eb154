//! Validation failures surfaced at the engine boundary

use super::states::{BodyHandle, PhotonHandle};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("invalid mass {0}: mass must be >= 0")]
    InvalidMass(f64),
    #[error("invalid radius {0}: radius must be > 0")]
    InvalidRadius(f64),
    #[error("photon direction is zero or not finite")]
    InvalidDirection,
    #[error("unknown {0}")]
    UnknownBody(BodyHandle),
    #[error("unknown {0}")]
    UnknownPhoton(PhotonHandle),
    #[error("expected a 3-component vector, got {0} components")]
    InvalidVector(usize),
    #[error("max_trail_points must be >= 1")]
    InvalidTrailCapacity,
}

pub type SimResult<T> = Result<T, SimError>;
