//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - which gravitational interactions are honored
//!
//! `G` is fixed by the unit system (solar masses, AU, years).

use std::f64::consts::PI;

/// Gravitational constant in astronomical units: 4π² AU³ / (M☉ yr²)
pub const G: f64 = 4.0 * PI * PI;

/// Which body pairs attract each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interactions {
    /// Every pair interacts
    #[default]
    All,
    /// Only pairs that include a central body interact
    CentralOnly,
}

impl Interactions {
    pub fn from_allowed(allowed: bool) -> Self {
        if allowed {
            Interactions::All
        } else {
            Interactions::CentralOnly
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size (years)
    pub t_max: f64, // time end (years)
    pub interactions: Interactions, // interaction mode handed to the force law
}
