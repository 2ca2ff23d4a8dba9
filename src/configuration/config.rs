//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`AttractorConfig`]  – the single central body
//! - [`OrbiterConfig`]    – initial state for each orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 0.1              # fixed step size
//!   G: 0.1               # gravitational constant
//!   year_length: 232.7   # simulated time per Earth year
//!   star_count: 500      # background starfield dots
//!
//! attractor:
//!   name: Sun
//!   color: yellow
//!   mass: 20000.0
//!
//! orbiters:
//!   - name: Earth
//!     color: blue
//!     distance: 140.0    # baseline distance from the attractor
//!     mass: 6.0
//! ```
//!
//! Orbiter velocities are not configured: each body starts on the baseline
//! axis with the circular-orbit speed for its distance, computed when the
//! runtime scenario is built.

use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_dt")]
    pub dt: f64, // fixed step size
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_year_length")]
    pub year_length: f64, // simulated time per Earth year
    #[serde(default = "default_star_count")]
    pub star_count: u32, // background starfield dots
}

fn default_dt() -> f64 {
    0.1
}

fn default_g() -> f64 {
    0.1
}

fn default_year_length() -> f64 {
    232.7
}

fn default_star_count() -> u32 {
    500
}

/// Configuration for the central body
#[derive(Deserialize, Debug, Clone)]
pub struct AttractorConfig {
    pub name: String,
    pub color: String, // named color, see [`named_color`]
    pub mass: f64,
}

/// Configuration for a single orbiting body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct OrbiterConfig {
    pub name: String,
    pub color: String, // named color, see [`named_color`]
    pub distance: f64, // baseline distance from the attractor
    pub mass: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub attractor: AttractorConfig,   // the central body
    pub orbiters: Vec<OrbiterConfig>, // bodies orbiting it
}

impl ScenarioConfig {
    /// The built-in solar system: eight planets around a central sun,
    /// used when no scenario file is given on the command line.
    pub fn solar_system() -> Self {
        let orbiter = |name: &str, color: &str, distance: f64, mass: f64| OrbiterConfig {
            name: name.to_string(),
            color: color.to_string(),
            distance,
            mass,
        };

        Self {
            parameters: ParametersConfig {
                dt: default_dt(),
                G: default_g(),
                year_length: default_year_length(),
                star_count: default_star_count(),
            },
            attractor: AttractorConfig {
                name: "Sun".to_string(),
                color: "yellow".to_string(),
                mass: 20000.0,
            },
            orbiters: vec![
                orbiter("Mercury", "gray", 60.0, 1.0),
                orbiter("Venus", "orange", 90.0, 5.0),
                orbiter("Earth", "blue", 140.0, 6.0),
                orbiter("Mars", "red", 200.0, 3.0),
                orbiter("Jupiter", "brown", 350.0, 600.0),
                orbiter("Saturn", "tan", 500.0, 450.0),
                orbiter("Uranus", "lightblue", 650.0, 150.0),
                orbiter("Neptune", "darkblue", 750.0, 130.0),
            ],
        }
    }
}

/// Resolve a CSS-style color name to sRGB components.
/// Unknown names fall back to white.
pub fn named_color(name: &str) -> [f32; 3] {
    match name {
        "yellow" => [1.0, 1.0, 0.0],
        "gray" => [0.502, 0.502, 0.502],
        "orange" => [1.0, 0.647, 0.0],
        "blue" => [0.0, 0.0, 1.0],
        "red" => [1.0, 0.0, 0.0],
        "brown" => [0.647, 0.165, 0.165],
        "tan" => [0.824, 0.706, 0.549],
        "lightblue" => [0.678, 0.847, 0.902],
        "darkblue" => [0.0, 0.0, 0.545],
        _ => [1.0, 1.0, 1.0],
    }
}
