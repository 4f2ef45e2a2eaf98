//! Core state types for the N-body simulation.
//!
//! Defines the 3D `Body` and the `Snapshot` / `Trajectory` containers:
//! - `Body` holds the static orbital parameters and the kinematic state (`x`, `v`)
//! - `Snapshot` is the ordered list of bodies at one instant
//! - `Trajectory` is the full time series returned by the engine
//!
//! Units: solar masses, AU and years throughout.

use std::f64::consts::PI;

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// One point mass.
///
/// Equality is by `name` only, so names must be unique within a system
/// (see [`crate::simulation::scenario::validate_bodies`]).
#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,          // identity, equality key
    pub m: f64,                // mass (solar masses)
    pub period: f64,           // orbital period (years)
    pub inclination: f64,      // inclination (radians)
    pub orbital_radius: f64,   // nominal orbital radius (AU)
    pub central: bool,         // star / primary at the reference center
    pub color: Option<String>, // hex color code, display only
    pub x: NVec3,              // position
    pub v: NVec3,              // velocity
}

/// All bodies at one instant, order stable across a run
pub type Snapshot = Vec<Body>;

/// Time series produced by the engine.
/// `snapshots[k]` is the system state at `times[k]`.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub snapshots: Vec<Snapshot>,
    pub times: Vec<f64>,
}

impl Body {
    /// Build an orbiting body on the +x axis with a circular-orbit velocity.
    ///
    /// `inclination_deg` tilts the velocity out of the xy plane about the x axis.
    pub fn planet(
        name: impl Into<String>,
        m: f64,
        period: f64,
        inclination_deg: f64,
        orbital_radius: f64,
        color: Option<&str>,
    ) -> Self {
        let mut body = Self {
            name: name.into(),
            m,
            period,
            inclination: inclination_deg.to_radians(),
            orbital_radius,
            central: false,
            color: color.map(str::to_owned),
            x: NVec3::new(orbital_radius, 0.0, 0.0),
            v: NVec3::zeros(),
        };
        body.v = body.initial_velocity();
        body
    }

    /// Build the central body of a system, at rest at the origin.
    pub fn central(name: impl Into<String>, m: f64, color: Option<&str>) -> Self {
        let mut body = Self::planet(name, m, 1.0, 0.0, 0.0, color);
        body.central = true;
        body
    }

    /// Circular-orbit velocity for the current position:
    /// speed 2πr/T, perpendicular to the radius vector, tilted by the inclination.
    pub fn initial_velocity(&self) -> NVec3 {
        let s = 2.0 * PI * self.distance_from_origin() / self.period;
        NVec3::new(0.0, -s * self.inclination.cos(), s * self.inclination.sin())
    }

    /// Deep copy of static parameters and current state.
    pub fn rebuild(&self) -> Self {
        self.clone()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.x - other.x).norm()
    }

    /// Distance from the coordinate origin (the system's reference center)
    pub fn distance_from_origin(&self) -> f64 {
        self.x.norm()
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }

    /// Gravitational potential energy relative to `parent`, zero against itself.
    pub fn potential_energy(&self, parent: &Body, g: f64) -> f64 {
        if self == parent {
            return 0.0;
        }
        -g * self.m * parent.m / self.distance_to(parent)
    }

    pub fn net_energy(&self, parent: &Body, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(parent, g)
    }

    /// Magnitude of the orbital angular momentum about `parent`.
    pub fn angular_momentum(&self, parent: &Body) -> f64 {
        (self.x - parent.x).cross(&(self.m * self.v)).norm()
    }

    /// True when position and velocity are free of NaN/Inf
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

impl PartialEq for Body {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// State at the last grid point
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Position history of the body at `index`, one entry per snapshot
    pub fn positions_of(&self, index: usize) -> Vec<NVec3> {
        self.snapshots.iter().map(|s| s[index].x).collect()
    }
}
