//! Variable-step time integrators
//!
//! Both integrators take the frame's `dt` as-is. They are first-order
//! accurate only: a long frame gives a visibly larger error, and there is no
//! fixed-step accumulator smoothing that out.

use super::forces::{AccelSet3, PhotonDeflection};
use super::states::{Body3, Photon};

/// Advance massive bodies by one semi-implicit Euler step.
///
/// Bodies are updated in list order and in place, so body `i` already sees
/// the new positions of bodies `0..i`.
pub fn semi_implicit_euler(t: f64, bodies: &mut [Body3], forces: &AccelSet3, dt: f64) {
    for i in 0..bodies.len() {
        // Acceleration from the current list: bodies 0..i have already moved
        // this step, bodies i.. have not
        let a = forces.acceleration_on(t, bodies, i);

        let b = &mut bodies[i];
        // Kick first: v_n+1 = v_n + dt * a_n
        b.v += a * dt;
        // then drift with the new velocity: x_n+1 = x_n + dt * v_n+1
        b.x += b.v * dt;
    }
}

/// Advance every photon by one step and record its new position.
///
/// Direction is re-projected onto the unit sphere after each update; that
/// re-projection is what keeps the speed of light constant.
pub fn advance_photons(photons: &mut [Photon], bodies: &[Body3], deflection: &PhotonDeflection, speed: f64, dt: f64) {
    for photon in photons.iter_mut() {
        // Sideways nudge from every body, bodies already at their new positions
        let a = deflection.deflection_on(photon, bodies);

        // Bend the heading: dir_n+1 = normalize(dir_n + dt * a)
        // keep the old heading if the update degenerates to zero
        if let Some(dir) = (photon.dir + a * dt).try_normalize(0.0) {
            photon.dir = dir;
        }

        // Move along the new heading at the fixed photon speed
        photon.x += photon.dir * (dt * speed);
        // Trail records where the photon is after the move
        photon.trail.push(photon.x);
    }
}
