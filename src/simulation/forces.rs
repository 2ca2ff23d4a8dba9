//! Force / acceleration contributors for the orbital engine
//!
//! Defines the [`Acceleration`] trait and the single gravity term used here:
//! a one-directional inverse-square pull from the attractor onto each
//! orbiter. There is no mutual N-body interaction and no reciprocal force
//! on the attractor.

use crate::simulation::states::{BodyRole, NVec2, System};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Inverse-square gravity from the single attractor.
///
/// For each orbiter, with `r` the displacement toward the attractor at
/// distance `d`:
///
///   force = G * M * m / d^2
///   a     = force * r / d / m      (direction normalized, mass cancels)
///
/// No softening is applied: an orbiter at exactly zero separation divides
/// by zero and its state becomes non-finite from then on. Initial
/// conditions never produce zero separation and there is no collision
/// resolution, so the singularity is left as-is.
#[allow(non_snake_case)]
pub struct CentralGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for CentralGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let Some(ai) = sys.attractor_index() else {
            return;
        };
        let ax = sys.bodies[ai].x; // attractor position
        let am = sys.bodies[ai].m; // attractor mass

        for (i, b) in sys.bodies.iter().enumerate() {
            if b.role != BodyRole::Orbiter {
                continue;
            }

            // Displacement from the orbiter toward the attractor
            let r = ax - b.x;
            let dist_sq = r.dot(&r);
            let dist = dist_sq.sqrt();

            let force = self.G * am * b.m / dist_sq;

            // a = force * r_hat / m; the orbiter mass cancels out
            out[i] += (force / dist / b.m) * r;
        }
    }
}
