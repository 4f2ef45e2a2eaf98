//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and interaction mode
//! - [`ParametersConfig`] – step size and end time
//! - [`SystemConfig`]     – either a named preset or an explicit body list
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # euler | improved_euler | heun | rk3 | rk4 | ab2 | ab3
//!   interactions: true      # false -> only the central body attracts
//!
//! parameters:
//!   dt: 0.0027397260273972603   # one day, in years
//!   t_max: 1.0                  # total simulation time (years)
//!
//! system:
//!   bodies:
//!     - name: "Sun"
//!       mass: 1.0
//!       central: true
//!     - name: "Earth"
//!       mass: 3.0e-6
//!       period: 1.0         # years
//!       inclination: 0.0    # degrees
//!       radius: 1.0         # AU
//!       color: "#00A544"
//! ```
//!
//! `system: { preset: "solar" }` selects one of the built-in systems instead.
//! The engine maps this configuration into its runtime [`crate::Scenario`].

use serde::Deserialize;

use crate::simulation::integrator::Method;

/// Integrator and force-law configuration
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    pub integrator: Method, // time integrator used for advancing the system state
    #[serde(default = "default_interactions")]
    pub interactions: bool, // `false` - non-central pairs do not attract
}

fn default_interactions() -> bool {
    true
}

/// Step size and end time for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,    // time step size (years)
    pub t_max: f64, // time end (years)
}

/// Configuration for a single body
///
/// Orbital fields are ignored for a central body, which always starts at
/// rest at the origin.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // unique within the scenario
    pub mass: f64,    // solar masses
    #[serde(default = "default_period")]
    pub period: f64, // orbital period (years)
    #[serde(default)]
    pub inclination: f64, // degrees, relative to the ecliptic
    #[serde(default)]
    pub radius: f64, // orbital radius (AU)
    #[serde(default)]
    pub central: bool, // star / primary
    #[serde(default)]
    pub color: Option<String>, // hex color code
}

fn default_period() -> f64 {
    1.0
}

/// Where the bodies come from: a preset name or an explicit list
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SystemConfig {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub bodies: Option<Vec<BodyConfig>>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // integrator and interaction mode
    pub parameters: ParametersConfig, // step size and end time
    pub system: SystemConfig, // bodies that define the initial state of the system
}
