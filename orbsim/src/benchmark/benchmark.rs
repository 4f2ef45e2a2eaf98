use std::f64::consts::PI;
use std::hint::black_box;
use std::time::Instant;

use crate::simulation::engine::simulate;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::Method;
use crate::simulation::params::Interactions;
use crate::simulation::presets::EARTH_MASS;
use crate::simulation::states::{Body, NVec3};

/// Build a star plus `n` planets on spread-out circular orbits
fn make_system(n: usize) -> Vec<Body> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(Body::central("Star", 1.0, None));

    for i in 0..n {
        let i_f = i as f64;
        // deterministic orbits, no rand needed; Kepler's third law for the period
        let r = 0.5 + 0.25 * i_f;
        let incl = (i_f * 0.37).sin() * 5.0;
        bodies.push(Body::planet(
            format!("P{i}"),
            EARTH_MASS,
            r.powf(1.5),
            incl,
            r,
            None,
        ));
    }

    bodies
}

/// Time one step of every method for a range of system sizes
pub fn bench_methods() {
    let ns = [8, 16, 32, 64, 128, 256];
    let steps = 5; // number of integrator steps per method (tune as needed)
    let law = NewtonianGravity::new(Interactions::All);
    let dt = 1.0 / 365.0;

    for n in ns {
        let bodies = make_system(n);
        // two prior snapshots are enough for every method
        let history = vec![bodies.clone(), bodies.clone()];

        let mut row = format!("N = {n:4}");
        for method in Method::ALL {
            // Warm up; a method that cannot step on this system is skipped
            if black_box(method.step(&bodies, dt, &history, &law)).is_err() {
                row.push_str(&format!(", {} = failed", method));
                continue;
            }

            let t0 = Instant::now();
            for _ in 0..steps {
                let next = method.step(black_box(&bodies), dt, &history, &law).ok();
                black_box(next);
            }
            let per_step = t0.elapsed().as_secs_f64() / steps as f64;
            row.push_str(&format!(", {} = {:9.6} s", method, per_step));
        }
        println!("{row}");
    }
}

/// Position error after half an orbit of a test particle around a unit-mass
/// star, for each method and a halving series of step sizes.
/// Paste output directly into a spreadsheet to graph
pub fn bench_convergence_curve() {
    let header: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
    println!("dt,{}", header.join(","));

    for k in 5..=10 {
        let dt = 1.0 / f64::from(1u32 << k);
        let mut row = vec![format!("{dt:.8}")];
        for method in Method::ALL {
            let err = half_orbit_error(method, dt).unwrap_or(f64::NAN);
            row.push(format!("{err:.3e}"));
        }
        println!("{}", row.join(","));
    }
}

/// Distance between the simulated and exact test-particle position at the last grid point
fn half_orbit_error(method: Method, dt: f64) -> Option<f64> {
    let bodies = vec![
        Body::central("Star", 1.0, None),
        Body::planet("Particle", 1e-12, 1.0, 0.0, 1.0, None),
    ];
    let traj = simulate(&bodies, dt, 0.5, method, Interactions::All).ok()?;
    let t = *traj.times.last()?;
    let x = traj.last()?[1].x;
    let exact = NVec3::new((2.0 * PI * t).cos(), -(2.0 * PI * t).sin(), 0.0);
    Some((x - exact).norm())
}
