//! Core state types for the orbital simulation.
//!
//! Defines the body/system structs:
//! - `Body` with position, previous position (for trail segments),
//!   velocity, mass and display attributes
//! - `System` holding the body collection and the current simulation time `t`
//!
//! Bodies carry a [`BodyRole`]: exactly one attractor exerts gravity,
//! orbiters only receive it. Behavior differs only in force participation,
//! not structure, so a tag is used instead of separate types.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Force participation of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    Attractor, // exerts gravity, receives none, never moves
    Orbiter,   // receives gravity from the attractor
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub prev_x: NVec2, // position at the previous step, trail segment start
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // display radius, derived from mass at construction
    pub color: [f32; 3], // display color (sRGB)
    pub name: String, // display name
    pub role: BodyRole,
}

impl Body {
    /// Construct a body with its display radius derived as `ln(m) * 1.5`.
    ///
    /// The radius is monotonic in mass but not physically proportional, and
    /// is fixed for the body's lifetime. Mass is trusted: non-positive mass
    /// yields a non-finite radius.
    pub fn new(x: NVec2, m: f64, color: [f32; 3], name: &str, v: NVec2, role: BodyRole) -> Self {
        Self {
            x,
            prev_x: x,
            v,
            m,
            radius: m.ln() * 1.5,
            color,
            name: name.to_string(),
            role,
        }
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, attractor included
    pub t: f64, // accumulated simulated time
}

impl System {
    /// Index of the attractor body, if any.
    pub fn attractor_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.role == BodyRole::Attractor)
    }

    /// Outermost orbiter distance plus its radius, in simulation units.
    /// Drives the view transform so the whole system fits on screen.
    pub fn max_extent(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.role == BodyRole::Orbiter)
            .map(|b| b.x.norm() + b.radius)
            .fold(0.0, f64::max)
    }
}
