use std::f64::consts::PI;

use approx::assert_relative_eq;

use orbsim::{Body, ForceLaw, Interactions, NewtonianGravity, NVec3, G};
use orbsim::{total_angular_momentum, total_energy};

/// Build a star plus two planets on the +x axis
pub fn three_body_system() -> Vec<Body> {
    vec![
        Body::central("Sun", 1.0, None),
        Body::planet("Earth", 3e-6, 1.0, 0.0, 1.0, None),
        Body::planet("Jupiter", 9.5e-4, 11.862, 1.303, 5.2038, None),
    ]
}

/// Build a simple 2-body system separated along the x axis at distance `dist`
pub fn two_body_system(dist: f64, m1: f64, m2: f64) -> Vec<Body> {
    let mut a = Body::central("A", m1, None);
    let mut b = Body::central("B", m2, None);
    a.x = NVec3::new(-dist / 2.0, 0.0, 0.0);
    b.x = NVec3::new(dist / 2.0, 0.0, 0.0);
    vec![a, b]
}

// ==================================================================================
// Body tests
// ==================================================================================

#[test]
fn planet_starts_on_x_axis_with_circular_velocity() {
    let p = Body::planet("Mars", 3e-7, 1.88, 30.0, 1.5, Some("#FF5516"));
    let s = 2.0 * PI * 1.5 / 1.88;

    assert_eq!(p.x, NVec3::new(1.5, 0.0, 0.0));
    assert_relative_eq!(p.v.x, 0.0);
    assert_relative_eq!(p.v.y, -s * 30f64.to_radians().cos(), max_relative = 1e-12);
    assert_relative_eq!(p.v.z, s * 30f64.to_radians().sin(), max_relative = 1e-12);
    assert_relative_eq!(p.speed(), s, max_relative = 1e-12);
    assert_eq!(p.color.as_deref(), Some("#FF5516"));
    assert!(!p.central);
}

#[test]
fn central_body_rests_at_origin() {
    let sun = Body::central("Sun", 1.0, None);
    assert!(sun.central);
    assert_eq!(sun.x, NVec3::zeros());
    assert_eq!(sun.v, NVec3::zeros());
    assert_eq!(sun.distance_from_origin(), 0.0);
}

#[test]
fn rebuild_is_an_independent_copy() {
    let earth = Body::planet("Earth", 3e-6, 1.0, 0.0, 1.0, None);
    let mut copy = earth.rebuild();

    assert_eq!(copy.x, earth.x);
    assert_eq!(copy.v, earth.v);

    copy.x += NVec3::new(0.5, 0.5, 0.5);
    copy.v *= 2.0;
    copy.name.push_str(" (copy)");

    assert_eq!(earth.x, NVec3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(earth.v.y, -2.0 * PI, max_relative = 1e-12);
    assert_eq!(earth.name, "Earth");
}

#[test]
fn equality_is_by_name() {
    let a = Body::planet("Io", 1e-8, 0.005, 2.2, 0.0028, None);
    let mut moved = a.rebuild();
    moved.x = NVec3::new(9.0, 9.0, 9.0);
    let other = Body::planet("Europa", 1e-8, 0.005, 2.2, 0.0028, None);

    assert_eq!(a, moved);
    assert_ne!(a, other);
}

#[test]
fn distances() {
    let sys = two_body_system(3.0, 1.0, 1.0);
    assert_relative_eq!(sys[0].distance_to(&sys[1]), 3.0);
    assert_relative_eq!(sys[1].distance_from_origin(), 1.5);
}

#[test]
fn energies_of_a_circular_orbit() {
    let sun = Body::central("Sun", 1.0, None);
    let m = 3e-6;
    let earth = Body::planet("Earth", m, 1.0, 0.0, 1.0, None);

    // v = 2π, G = 4π²: KE = 2π²m, PE = -4π²m
    assert_relative_eq!(earth.kinetic_energy(), 2.0 * PI * PI * m, max_relative = 1e-12);
    assert_relative_eq!(earth.potential_energy(&sun, G), -G * m, max_relative = 1e-12);
    assert_relative_eq!(earth.net_energy(&sun, G), -2.0 * PI * PI * m, max_relative = 1e-12);
    assert_eq!(sun.potential_energy(&sun, G), 0.0);
    assert_relative_eq!(earth.angular_momentum(&sun), 2.0 * PI * m, max_relative = 1e-12);

    let sys = vec![sun, earth];
    assert_relative_eq!(total_energy(&sys, G), -2.0 * PI * PI * m, max_relative = 1e-12);
    assert_relative_eq!(total_angular_momentum(&sys), 2.0 * PI * m, max_relative = 1e-12);
}

#[test]
fn energy_sums_skip_the_parent_without_a_central_body() {
    // no central flag: the first body is the parent and is left out of both sums
    let sys = vec![
        Body::planet("A", 0.5, 1.0, 0.0, 1.0, None),
        Body::planet("B", 0.2, 2.0, 0.0, 1.6, None),
    ];
    let expected_energy = sys[1].net_energy(&sys[0], G);
    let parent_ke = sys[0].kinetic_energy();
    assert!(parent_ke > 0.0);

    assert_relative_eq!(total_energy(&sys, G), expected_energy, max_relative = 1e-12);
    assert_relative_eq!(
        total_angular_momentum(&sys),
        sys[1].angular_momentum(&sys[0]),
        max_relative = 1e-12
    );
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn self_force_is_zero() {
    let law = NewtonianGravity::default();
    for b in three_body_system() {
        assert_eq!(law.force(&b, &b), NVec3::zeros());

        // a displaced copy is still the same body
        let mut ghost = b.rebuild();
        ghost.x += NVec3::new(0.1, 0.0, 0.0);
        assert_eq!(law.force(&ghost, &b), NVec3::zeros());
    }
}

#[test]
fn gravity_newton_third_law() {
    let sys = two_body_system(1.0, 2.0, 3.0);
    let law = NewtonianGravity::default();

    let f12 = law.force(&sys[0], &sys[1]);
    let f21 = law.force(&sys[1], &sys[0]);
    assert!((f12 + f21).norm() < 1e-12, "forces not equal and opposite: {f12:?} {f21:?}");

    let mut acc = vec![NVec3::zeros(); 2];
    law.accumulate_accels(&sys, &mut acc);
    let net = acc[0] * sys[0].m + acc[1] * sys[1].m;
    assert!(net.norm() < 1e-12, "Net momentum change not zero: {:?}", net);
}

#[test]
fn gravity_points_toward_other_body() {
    let sys = two_body_system(2.0, 1.0, 1.0);
    let law = NewtonianGravity::default();

    let dx = sys[1].x - sys[0].x;
    let a1 = law.acceleration(&sys[0], &sys);

    assert!(a1.dot(&dx) > 0.0, "Acceleration is not toward second body");
    // m1 = m2 = 1, d = 2: |a| = G / 4
    assert_relative_eq!(a1.norm(), G / 4.0, max_relative = 1e-12);
}

#[test]
fn gravity_inverse_square_law() {
    let sys_r = two_body_system(1.0, 1.0, 1.0);
    let sys_2r = two_body_system(2.0, 1.0, 1.0);
    let law = NewtonianGravity::default();

    let ratio = law.acceleration(&sys_r[0], &sys_r).norm()
        / law.acceleration(&sys_2r[0], &sys_2r).norm();

    assert!((ratio - 4.0).abs() < 1e-12, "Expected 4x, got {}", ratio);
}

#[test]
fn net_force_sums_pairs() {
    let sys = three_body_system();
    let law = NewtonianGravity::default();
    let expected = law.force(&sys[1], &sys[0]) + law.force(&sys[1], &sys[2]);
    assert_eq!(law.net_force(&sys[1], &sys), expected);
    assert_relative_eq!(
        law.acceleration(&sys[1], &sys).norm(),
        expected.norm() / sys[1].m,
        max_relative = 1e-12
    );
}

#[test]
fn central_only_ignores_planet_planet_pulls() {
    let sys = three_body_system();
    let mut perturbed = sys.clone();
    perturbed[2].x = NVec3::new(1.2, 0.3, -0.1);

    let central_only = NewtonianGravity::new(Interactions::CentralOnly);
    let a = central_only.acceleration(&sys[1], &sys);
    let a_perturbed = central_only.acceleration(&sys[1], &perturbed);
    assert_eq!(a, a_perturbed);
    assert_eq!(a, central_only.acceleration(&sys[1], &sys[..1]));

    // the star still pulls and is pulled
    assert_ne!(central_only.force(&sys[1], &sys[0]), NVec3::zeros());
    assert_ne!(central_only.force(&sys[0], &sys[1]), NVec3::zeros());
    assert_eq!(central_only.force(&sys[1], &sys[2]), NVec3::zeros());

    // with all interactions the perturbation is felt
    let all = NewtonianGravity::new(Interactions::All);
    assert_ne!(all.acceleration(&sys[1], &sys), all.acceleration(&sys[1], &perturbed));
}
