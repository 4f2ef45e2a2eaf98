//! Fixed-step time integrators for the N-body system
//!
//! Provides the seven stepping methods behind [`Method`]: five explicit
//! Runge–Kutta schemes driven by a small Butcher tableau and the two
//! Adams–Bashforth schemes in [`super::multistep`].
//!
//! Every method reads a frozen slice of bodies and returns a freshly
//! allocated [`Snapshot`]; the input is never mutated.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::error::SimError;
use super::forces::ForceLaw;
use super::multistep::{adams_bashforth, AB2, AB3};
use super::states::{Body, NVec3, Snapshot};

/// Which integrator the engine steps with
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    #[serde(rename = "euler")] // forward Euler, first order
    Euler,

    #[serde(rename = "improved_euler")] // trapezoidal predictor-corrector, second order
    ImprovedEuler,

    #[serde(rename = "heun")] // two-stage, second stage at 2/3 step, second order
    Heun,

    #[serde(rename = "rk3")] // Kutta's third-order method
    Rk3,

    #[serde(rename = "rk4")] // classical fourth-order Runge–Kutta
    Rk4,

    #[serde(rename = "ab2")] // two-step Adams–Bashforth, bootstrapped with rk4
    Ab2,

    #[serde(rename = "ab3")] // three-step Adams–Bashforth, bootstrapped with rk4
    Ab3,
}

/// Per-stage increment: `dx = v·dt`, `dv = a·dt`
#[derive(Debug, Clone, Copy)]
pub(crate) struct Delta {
    pub dx: NVec3,
    pub dv: NVec3,
}

impl Delta {
    /// Evaluate the derivative of `body` against `partners`, scaled by `dt`
    pub(crate) fn eval(body: &Body, partners: &[Body], dt: f64, law: &dyn ForceLaw) -> Self {
        Self {
            dx: body.v * dt,
            dv: law.acceleration(body, partners) * dt,
        }
    }
}

/// Explicit Runge–Kutta coefficients.
/// `a[j - 1]` builds stage `j` from the earlier stages; `b` weights the final update.
struct Tableau {
    a: &'static [&'static [f64]],
    b: &'static [f64],
}

const EULER: Tableau = Tableau {
    a: &[],
    b: &[1.0],
};

const IMPROVED_EULER: Tableau = Tableau {
    a: &[&[1.0]],
    b: &[0.5, 0.5],
};

const HEUN: Tableau = Tableau {
    a: &[&[2.0 / 3.0]],
    b: &[0.25, 0.75],
};

const RK3: Tableau = Tableau {
    a: &[&[0.5], &[-1.0, 2.0]],
    b: &[1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0],
};

const RK4: Tableau = Tableau {
    a: &[&[0.5], &[0.0, 0.5], &[0.0, 0.0, 1.0]],
    b: &[1.0 / 6.0, 2.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0],
};

impl Method {
    pub const ALL: [Method; 7] = [
        Method::Euler,
        Method::ImprovedEuler,
        Method::Heun,
        Method::Rk3,
        Method::Rk4,
        Method::Ab2,
        Method::Ab3,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::ImprovedEuler => "improved_euler",
            Method::Heun => "heun",
            Method::Rk3 => "rk3",
            Method::Rk4 => "rk4",
            Method::Ab2 => "ab2",
            Method::Ab3 => "ab3",
        }
    }

    /// Nominal global error order
    pub fn order(&self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::ImprovedEuler | Method::Heun | Method::Ab2 => 2,
            Method::Rk3 | Method::Ab3 => 3,
            Method::Rk4 => 4,
        }
    }

    /// Number of snapshots (current included) a step reads.
    /// The engine bootstraps the first `history_depth() - 1` steps with rk4.
    pub fn history_depth(&self) -> usize {
        match self {
            Method::Ab2 => 2,
            Method::Ab3 => 3,
            _ => 1,
        }
    }

    pub fn is_multistep(&self) -> bool {
        self.history_depth() > 1
    }

    /// Advance `bodies` by one step of size `dt`.
    ///
    /// `history` holds the prior snapshots, most recent last. Single-step
    /// methods ignore it; Adams–Bashforth needs `history_depth() - 1` of them.
    pub fn step(
        &self,
        bodies: &[Body],
        dt: f64,
        history: &[Snapshot],
        law: &dyn ForceLaw,
    ) -> Result<Snapshot, SimError> {
        let next = match self {
            Method::Euler => runge_kutta(&EULER, bodies, dt, law),
            Method::ImprovedEuler => runge_kutta(&IMPROVED_EULER, bodies, dt, law),
            Method::Heun => runge_kutta(&HEUN, bodies, dt, law),
            Method::Rk3 => runge_kutta(&RK3, bodies, dt, law),
            Method::Rk4 => runge_kutta(&RK4, bodies, dt, law),
            Method::Ab2 => adams_bashforth(*self, &AB2, bodies, dt, history, law)?,
            Method::Ab3 => adams_bashforth(*self, &AB3, bodies, dt, history, law)?,
        };
        Ok(next)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Method::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| SimError::invalid(format!("unknown integrator '{s}'")))
    }
}

/// One explicit Runge–Kutta step over the whole system.
///
/// Stage `j` is a fresh snapshot `base[i] + Σ a_jl·k_l[i]` for every body;
/// all increments of that stage are evaluated against the same stage
/// snapshot before the next one is built. The input is never touched.
fn runge_kutta(tableau: &Tableau, bodies: &[Body], dt: f64, law: &dyn ForceLaw) -> Snapshot {
    let stages = tableau.b.len();

    // ks[j][i]: increment of body i at stage j
    let mut ks: Vec<Vec<Delta>> = Vec::with_capacity(stages);
    for j in 0..stages {
        let k = if j == 0 {
            eval_stage(bodies, dt, law)
        } else {
            let stage = advance(bodies, tableau.a[j - 1], &ks);
            eval_stage(&stage, dt, law)
        };
        ks.push(k);
    }

    advance(bodies, tableau.b, &ks)
}

/// Increments of every body, partners taken from the same frozen `stage`
fn eval_stage(stage: &[Body], dt: f64, law: &dyn ForceLaw) -> Vec<Delta> {
    stage
        .iter()
        .map(|b| Delta::eval(b, stage, dt, law))
        .collect()
}

/// `base[i] + Σ w_l·k_l[i]` as a new snapshot
fn advance(base: &[Body], weights: &[f64], ks: &[Vec<Delta>]) -> Snapshot {
    base.iter()
        .enumerate()
        .map(|(i, b)| {
            let mut next = b.rebuild();
            for (w, k) in weights.iter().zip(ks.iter()) {
                next.x += *w * k[i].dx;
                next.v += *w * k[i].dv;
            }
            next
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tableau_weights_sum_to_one() {
        for t in [&EULER, &IMPROVED_EULER, &HEUN, &RK3, &RK4] {
            let sum: f64 = t.b.iter().sum();
            assert!((sum - 1.0).abs() < 1e-15);
            assert_eq!(t.a.len() + 1, t.b.len());
        }
    }

    #[test]
    fn method_names_parse_back() {
        for m in Method::ALL {
            assert_eq!(m.name().parse::<Method>().unwrap(), m);
        }
        assert_eq!("Improved-Euler".parse::<Method>().unwrap(), Method::ImprovedEuler);
        assert!("verlet".parse::<Method>().is_err());
    }

    #[test]
    fn history_depth_follows_order_for_multistep() {
        assert_eq!(Method::Ab2.history_depth(), 2);
        assert_eq!(Method::Ab3.history_depth(), 3);
        for m in [Method::Euler, Method::ImprovedEuler, Method::Heun, Method::Rk3, Method::Rk4] {
            assert_eq!(m.history_depth(), 1);
            assert!(!m.is_multistep());
        }
    }
}
