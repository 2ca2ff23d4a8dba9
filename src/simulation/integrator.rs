//! Fixed-step time integrator for the orbital system
//!
//! Semi-implicit (explicit per-force) Euler, driven by `AccelSet` and
//! `Parameters`. Energy is not conserved exactly, so orbits drift slowly
//! over many periods; that behavior is deliberate, no symplectic scheme or
//! stabilization is layered on top.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one fixed step `params.dt`.
///
/// Two phases over the whole collection, in order:
/// 1. every body's velocity is kicked from accelerations evaluated at the
///    current position snapshot,
/// 2. every body's position is advanced with the new velocity, saving
///    `prev_x` first so the renderer can draw the last-step trail segment.
///
/// No position moves before all velocities are updated, and no body update
/// depends on another body's update within the step.
pub fn euler_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.dt;

    // a_n from x_n at time t_n, one entry per body
    let mut accels = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accels);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies.iter_mut().zip(accels.iter()) {
        b.v += dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1, keeping x_n for trail drawing
    for b in sys.bodies.iter_mut() {
        b.prev_x = b.x;
        b.x += dt * b.v;
    }

    // Advance time: t_n+1 = t_n + dt
    sys.t += dt;
}
