//! Simulation driver
//!
//! `Engine` pairs an integrator with the run parameters and advances a body
//! list across the time grid, bootstrapping multi-step methods with rk4.

use tracing::{debug, info, warn};

use super::error::SimError;
use super::forces::{ForceLaw, NewtonianGravity};
use super::integrator::Method;
use super::params::{Interactions, Parameters};
use super::scenario::validate_bodies;
use super::states::{Body, Snapshot, Trajectory};

#[derive(Debug, Clone)]
pub struct Engine {
    pub method: Method, // integrator chosen for the run
    pub parameters: Parameters, // dt, t_max, interactions
}

/// Run `method` over `bodies` from t = 0 to `t_max` with step `dt`.
pub fn simulate(
    bodies: &[Body],
    dt: f64,
    t_max: f64,
    method: Method,
    interactions: Interactions,
) -> Result<Trajectory, SimError> {
    let parameters = Parameters {
        dt,
        t_max,
        interactions,
    };
    Engine::new(method, parameters).run(bodies)
}

/// Upper bound on grid points for one run
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Number of grid points, t = 0 included: `floor(t_max / dt)`.
///
/// A ratio within a relative 1e-9 of an integer counts as that integer,
/// so `0.3 / 0.1` gives 3 rather than 2. A non-positive ratio gives 0; a
/// ratio above [`MAX_GRID_POINTS`] (or an infinite one) is rejected.
pub fn time_grid_len(dt: f64, t_max: f64) -> Result<usize, SimError> {
    let ratio = t_max / dt;
    if ratio.is_nan() || ratio <= 0.0 {
        return Ok(0);
    }
    let nearest = ratio.round();
    let points = if (ratio - nearest).abs() <= 1e-9 * nearest.max(1.0) {
        nearest
    } else {
        ratio.floor()
    };
    if points > MAX_GRID_POINTS as f64 {
        return Err(SimError::invalid(format!(
            "t_max / dt = {ratio:e} exceeds the limit of {MAX_GRID_POINTS} grid points"
        )));
    }
    Ok(points as usize)
}

impl Engine {
    pub fn new(method: Method, parameters: Parameters) -> Self {
        Self { method, parameters }
    }

    /// Force law the run uses
    pub fn force_law(&self) -> NewtonianGravity {
        NewtonianGravity::new(self.parameters.interactions)
    }

    /// Integrate `bodies` over the whole grid.
    ///
    /// Aborts at the first step that leaves a body with a non-finite state;
    /// the error carries that step index and the last valid snapshot.
    pub fn run(&self, bodies: &[Body]) -> Result<Trajectory, SimError> {
        self.run_with(bodies, &self.force_law())
    }

    /// Same as [`Engine::run`] with a caller-supplied force law
    pub fn run_with(&self, bodies: &[Body], law: &dyn ForceLaw) -> Result<Trajectory, SimError> {
        let Parameters { dt, t_max, .. } = self.parameters;
        self.validate()?;
        validate_bodies(bodies)?;

        let n = time_grid_len(dt, t_max)?;
        if n == 0 {
            return Err(SimError::invalid(format!(
                "time grid is empty: t_max = {t_max} is shorter than dt = {dt}"
            )));
        }

        let depth = self.method.history_depth();
        info!(
            method = %self.method,
            bodies = bodies.len(),
            steps = n - 1,
            dt,
            "starting simulation"
        );

        // live state, replaced wholesale after every step
        let mut current: Snapshot = bodies.to_vec();
        let mut snapshots: Vec<Snapshot> = Vec::new();
        snapshots.push(current.clone());

        for step in 1..n {
            let next = if step < depth {
                debug!(step, method = %self.method, "bootstrapping with rk4");
                Method::Rk4.step(&current, dt, &[], law)?
            } else {
                let len = snapshots.len();
                let history = &snapshots[len - depth..len - 1];
                self.method.step(&current, dt, history, law)?
            };

            if let Some(bad) = next.iter().find(|b| !b.is_finite()) {
                warn!(step, body = %bad.name, "non-finite state, aborting run");
                return Err(SimError::NumericalInstability {
                    step,
                    body: bad.name.clone(),
                    last_valid: Box::new(current),
                });
            }

            current.clone_from(&next);
            snapshots.push(next);
        }

        let times = (0..n).map(|k| k as f64 * dt).collect();
        info!(snapshots = snapshots.len(), "simulation finished");

        Ok(Trajectory { snapshots, times })
    }

    fn validate(&self) -> Result<(), SimError> {
        let Parameters { dt, t_max, .. } = self.parameters;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::invalid(format!("dt must be positive and finite, got {dt}")));
        }
        if !(t_max.is_finite() && t_max > 0.0) {
            return Err(SimError::invalid(format!(
                "t_max must be positive and finite, got {t_max}"
            )));
        }
        Ok(())
    }
}
