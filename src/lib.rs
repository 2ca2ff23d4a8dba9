pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, BodyRole, NVec2, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{AccelSet, Acceleration, CentralGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    named_color, AttractorConfig, OrbiterConfig, ParametersConfig, ScenarioConfig,
};

pub use visualization::vis2d::{format_time_readout, run_2d, view_scale};
