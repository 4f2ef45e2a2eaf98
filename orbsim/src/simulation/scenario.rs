//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`
//! containing:
//! - the engine (integrator + `Parameters`)
//! - the validated initial bodies at t = 0

use std::collections::HashSet;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::params::{Interactions, Parameters};
use crate::simulation::presets;
use crate::simulation::states::{Body, Trajectory};

/// Runtime bundle constructed from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub bodies: Vec<Body>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: a preset, or map `BodyConfig` -> runtime `Body`
        let bodies = match (cfg.system.preset, cfg.system.bodies) {
            (Some(name), None) => presets::by_name(&name).ok_or_else(|| {
                SimError::invalid(format!(
                    "unknown preset '{name}', expected one of {:?}",
                    presets::PRESET_NAMES
                ))
            })?,
            (None, Some(list)) => list.iter().map(body_from_config).collect(),
            (Some(_), Some(_)) => {
                return Err(SimError::invalid("system sets both 'preset' and 'bodies'"))
            }
            (None, None) => {
                return Err(SimError::invalid("system needs either 'preset' or 'bodies'"))
            }
        };
        validate_bodies(&bodies)?;

        let parameters = Parameters {
            dt: cfg.parameters.dt,
            t_max: cfg.parameters.t_max,
            interactions: Interactions::from_allowed(cfg.engine.interactions),
        };
        let engine = Engine::new(cfg.engine.integrator, parameters);

        Ok(Self { engine, bodies })
    }

    pub fn run(&self) -> Result<Trajectory, SimError> {
        self.engine.run(&self.bodies)
    }
}

fn body_from_config(bc: &BodyConfig) -> Body {
    let color = bc.color.as_deref();
    if bc.central {
        Body::central(bc.name.clone(), bc.mass, color)
    } else {
        Body::planet(bc.name.clone(), bc.mass, bc.period, bc.inclination, bc.radius, color)
    }
}

/// Check a body list before a run: non-empty, unique names, positive
/// finite masses and finite states.
pub fn validate_bodies(bodies: &[Body]) -> Result<(), SimError> {
    if bodies.is_empty() {
        return Err(SimError::invalid("system has no bodies"));
    }

    let mut seen = HashSet::with_capacity(bodies.len());
    for b in bodies {
        if !seen.insert(b.name.as_str()) {
            return Err(SimError::invalid(format!("duplicate body name '{}'", b.name)));
        }
        if !(b.m.is_finite() && b.m > 0.0) {
            return Err(SimError::invalid(format!(
                "body '{}' must have a positive mass, got {}",
                b.name, b.m
            )));
        }
        if !b.is_finite() {
            return Err(SimError::invalid(format!(
                "body '{}' has a non-finite initial state",
                b.name
            )));
        }
    }
    Ok(())
}
