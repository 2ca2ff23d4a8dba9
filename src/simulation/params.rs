//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt`,
//! - gravitational constant `G`,
//! - simulated-time length of one Earth year, used by the time readout

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub G: f64, // gravitational constant
    pub year_length: f64, // simulated time per Earth year
}
