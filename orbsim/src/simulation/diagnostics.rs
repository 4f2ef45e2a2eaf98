//! Conservation diagnostics for a finished run.
//!
//! Energy and angular momentum are taken per orbiting body with respect to
//! the central body and summed. Drift is measured against the first snapshot.

use super::states::{Body, Snapshot, Trajectory};

/// Parent for energy / momentum sums: the first central body, else the first body
fn parent_of(snapshot: &[Body]) -> Option<&Body> {
    snapshot.iter().find(|b| b.central).or_else(|| snapshot.first())
}

/// Sum of `net_energy` over every body other than the parent, with respect to the parent
pub fn total_energy(snapshot: &[Body], g: f64) -> f64 {
    let Some(parent) = parent_of(snapshot) else {
        return 0.0;
    };
    snapshot
        .iter()
        .filter(|b| !b.central && *b != parent)
        .map(|b| b.net_energy(parent, g))
        .sum()
}

/// Sum of orbital angular momentum magnitudes about the parent, same bodies as [`total_energy`]
pub fn total_angular_momentum(snapshot: &[Body]) -> f64 {
    let Some(parent) = parent_of(snapshot) else {
        return 0.0;
    };
    snapshot
        .iter()
        .filter(|b| !b.central && *b != parent)
        .map(|b| b.angular_momentum(parent))
        .sum()
}

/// Energy drift for each snapshot: |E - E₀| / |E₀|, or |E - E₀| when E₀ ≈ 0
pub fn energy_drift(trajectory: &Trajectory, g: f64) -> Vec<f64> {
    let energies: Vec<f64> = trajectory
        .snapshots
        .iter()
        .map(|s| total_energy(s, g))
        .collect();
    let Some(&e0) = energies.first() else {
        return Vec::new();
    };
    energies
        .iter()
        .map(|&e| {
            if e0.abs() > 1e-12 {
                (e - e0).abs() / e0.abs()
            } else {
                (e - e0).abs()
            }
        })
        .collect()
}

/// Summary of the energy budget of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub initial_energy: f64,
    pub final_energy: f64,
    pub final_drift: f64,
    pub max_drift: f64,
}

impl EnergyReport {
    pub fn from_trajectory(trajectory: &Trajectory, g: f64) -> Option<Self> {
        let first: &Snapshot = trajectory.snapshots.first()?;
        let last: &Snapshot = trajectory.snapshots.last()?;
        let drift = energy_drift(trajectory, g);

        Some(Self {
            initial_energy: total_energy(first, g),
            final_energy: total_energy(last, g),
            final_drift: drift.last().copied().unwrap_or(0.0),
            max_drift: drift.iter().copied().fold(0.0, f64::max),
        })
    }
}
