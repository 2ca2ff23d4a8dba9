//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet` with central gravity)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems. It is also directly steppable
//! without a display, which is how the tests drive it.

use bevy::prelude::Resource;

use crate::configuration::config::{named_color, ScenarioConfig};
use crate::simulation::forces::{AccelSet, CentralGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyRole, NVec2, System};

/// Fully-initialized runtime scenario: parameters, system state, and the
/// active force set, plus the starfield size for the background pass.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub star_count: u32,
}

impl Scenario {
    /// Map a [`ScenarioConfig`] into the runtime bundle.
    ///
    /// The attractor is placed at the origin with zero velocity and never
    /// moves. Each orbiter starts on the +x baseline at its configured
    /// distance `d`, with speed `sqrt(G * M / d)` (the circular-orbit speed
    /// for a test body around a point mass) directed along -y, so all bodies
    /// orbit in the same direction.
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            G: p_cfg.G,
            year_length: p_cfg.year_length,
        };

        let a_cfg = &cfg.attractor;
        let mut bodies = vec![Body::new(
            NVec2::zeros(),
            a_cfg.mass,
            named_color(&a_cfg.color),
            &a_cfg.name,
            NVec2::zeros(),
            BodyRole::Attractor,
        )];

        for oc in &cfg.orbiters {
            let speed = (parameters.G * a_cfg.mass / oc.distance).sqrt();
            bodies.push(Body::new(
                NVec2::new(oc.distance, 0.0),
                oc.mass,
                named_color(&oc.color),
                &oc.name,
                NVec2::new(0.0, -speed),
                BodyRole::Orbiter,
            ));
        }

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Forces: construct an AccelSet and register central gravity
        let forces = AccelSet::new().with(CentralGravity { G: parameters.G });

        Self {
            parameters,
            system,
            forces,
            star_count: p_cfg.star_count,
        }
    }

    /// Advance the simulation by one fixed timestep.
    ///
    /// The Bevy driver calls this once per frame, forever; callers without a
    /// display (tests) call it in a loop with whatever stop condition they
    /// need.
    pub fn step(&mut self) {
        euler_integrator(&mut self.system, &self.forces, &self.parameters);
    }
}
