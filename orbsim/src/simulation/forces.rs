//! Force / acceleration law for the n-body engine
//!
//! Defines the [`ForceLaw`] trait and direct-summation Newtonian gravity.
//! Every evaluation reads its interaction partners from a frozen slice; the
//! integrators never hand a partially-updated system to a force law.

use crate::simulation::params::{Interactions, G};
use crate::simulation::states::{Body, NVec3};

/// Trait for pairwise force sources operating on [`Body`] slices
pub trait ForceLaw: Send + Sync {
    /// Force on `on` exerted by `from`
    fn force(&self, on: &Body, from: &Body) -> NVec3;

    /// Sum of [`ForceLaw::force`] over `partners`. A partner with the same
    /// name as `on` is `on` itself and contributes nothing.
    fn net_force(&self, on: &Body, partners: &[Body]) -> NVec3 {
        partners
            .iter()
            .fold(NVec3::zeros(), |acc, p| acc + self.force(on, p))
    }

    /// Newton's second law: net force / mass
    fn acceleration(&self, on: &Body, partners: &[Body]) -> NVec3 {
        self.net_force(on, partners) / on.m
    }

    /// Compute accelerations for every body in `bodies` against the same system
    /// - `out[i]` will be set to the acceleration of `bodies[i]`
    fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        for (a, b) in out.iter_mut().zip(bodies.iter()) {
            *a = self.acceleration(b, bodies);
        }
    }

    /// Gravitational constant used for energy diagnostics
    fn g(&self) -> f64;
}

/// Newtonian gravity, no softening, pairwise direct sum.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub interactions: Interactions, // which pairs attract
}

impl NewtonianGravity {
    pub fn new(interactions: Interactions) -> Self {
        Self { G, interactions }
    }

    fn pair_allowed(&self, on: &Body, from: &Body) -> bool {
        match self.interactions {
            Interactions::All => true,
            Interactions::CentralOnly => on.central || from.central,
        }
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(Interactions::All)
    }
}

impl ForceLaw for NewtonianGravity {
    fn force(&self, on: &Body, from: &Body) -> NVec3 {
        if on == from || !self.pair_allowed(on, from) {
            return NVec3::zeros();
        }

        // r points from `on` toward `from`
        let r = from.x - on.x;
        let d = r.norm();

        // |F| = G m1 m2 / d^2 along r / d.
        // Coincident bodies give 0/0 = NaN, caught by the engine after the step.
        (self.G * on.m * from.m / (d * d)) * (r / d)
    }

    fn g(&self) -> f64 {
        self.G
    }
}
