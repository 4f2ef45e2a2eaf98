//! Adams–Bashforth multi-step integrators.
//!
//! `y_n+1 = y_n + Σ β_j · f(y_n-j)·dt`, with `f = (v, a)` evaluated at the
//! current state and at each prior snapshot. A prior stage is evaluated
//! against that snapshot's own bodies, never against the current system.

use super::error::SimError;
use super::forces::ForceLaw;
use super::integrator::{Delta, Method};
use super::states::{Body, Snapshot};

/// `β` coefficients, current state first
pub(crate) const AB2: [f64; 2] = [1.5, -0.5];
pub(crate) const AB3: [f64; 3] = [23.0 / 12.0, -16.0 / 12.0, 5.0 / 12.0];

/// Advance `bodies` one step with the Adams–Bashforth weights `beta`.
///
/// `history` is most-recent-last; the last `beta.len() - 1` entries are used.
pub(crate) fn adams_bashforth(
    method: Method,
    beta: &[f64],
    bodies: &[Body],
    dt: f64,
    history: &[Snapshot],
    law: &dyn ForceLaw,
) -> Result<Snapshot, SimError> {
    let required = beta.len() - 1;
    if history.len() < required {
        return Err(SimError::InsufficientHistory {
            method,
            required,
            available: history.len(),
        });
    }

    // prior[0] is the previous step, prior[1] the one before it
    let prior: Vec<&Snapshot> = history.iter().rev().take(required).collect();
    if let Some(bad) = prior.iter().find(|s| s.len() != bodies.len()) {
        return Err(SimError::invalid(format!(
            "history snapshot has {} bodies, current system has {}",
            bad.len(),
            bodies.len()
        )));
    }

    let next = bodies
        .iter()
        .enumerate()
        .map(|(i, body)| {
            let mut next = body.rebuild();

            let k0 = Delta::eval(body, bodies, dt, law);
            next.x += beta[0] * k0.dx;
            next.v += beta[0] * k0.dv;

            for (b, snap) in beta[1..].iter().zip(prior.iter()) {
                let k = Delta::eval(&snap[i], snap, dt, law);
                next.x += *b * k.dx;
                next.v += *b * k.dv;
            }
            next
        })
        .collect();

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_are_consistent() {
        // consistency: weights of an Adams–Bashforth scheme sum to one
        assert!((AB2.iter().sum::<f64>() - 1.0).abs() < 1e-15);
        assert!((AB3.iter().sum::<f64>() - 1.0).abs() < 1e-15);
    }
}
