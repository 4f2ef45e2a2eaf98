//! Named preset systems.
//!
//! Circular-orbit approximations of the solar system and of Jupiter's
//! Galilean moons. Masses in solar masses, periods in years, radii in AU,
//! inclinations in degrees relative to the ecliptic.

use super::states::Body;

/// Length of a day in years
pub const DAY: f64 = 1.0 / 365.0;
/// Mass of the Earth in solar masses
pub const EARTH_MASS: f64 = 3e-6;
/// One kilometre in AU
pub const KM: f64 = 6.6846e-9;

pub const PRESET_NAMES: [&str; 5] = ["solar", "inner", "mid", "outer", "jupiter_moons"];

/// Sun plus the eight planets
pub fn solar() -> Vec<Body> {
    let m = EARTH_MASS;
    vec![
        Body::central("Sun", 1.0, Some("#FFF6AA")),
        Body::planet("Mercury", 0.055 * m, 87.9691 * DAY, 7.005, 0.387098, Some("#AFAFAF")),
        Body::planet("Venus", 0.815 * m, 224.701 * DAY, 3.39458, 0.723332, Some("#FFCE79")),
        Body::planet("Earth", m, 365.0 * DAY, 0.0, 1.0, Some("#00A544")),
        Body::planet("Mars", 0.107 * m, 686.98 * DAY, 1.85, 1.523681, Some("#FF5516")),
        Body::planet("Jupiter", 317.8 * m, 11.862, 1.303, 5.2038, Some("#DD8665")),
        Body::planet("Saturn", 95.159 * m, 29.4475, 2.485, 9.5826, Some("#FFC175")),
        Body::planet("Uranus", 14.536 * m, 84.0205, 0.773, 19.19126, Some("#ACEAFF")),
        Body::planet("Neptune", 17.147 * m, 164.8, 1.77, 30.07, Some("#0072D1")),
    ]
}

/// Sun through Mars
pub fn inner() -> Vec<Body> {
    solar().into_iter().take(5).collect()
}

/// Sun plus Venus through Jupiter
pub fn mid() -> Vec<Body> {
    let s = solar();
    std::iter::once(s[0].clone()).chain(s[2..6].iter().cloned()).collect()
}

/// Sun plus Jupiter through Neptune
pub fn outer() -> Vec<Body> {
    let s = solar();
    std::iter::once(s[0].clone()).chain(s[5..].iter().cloned()).collect()
}

/// Jupiter and its Galilean moons, Jupiter as the central body
pub fn jupiter_moons() -> Vec<Body> {
    let m = EARTH_MASS;
    vec![
        Body::central("Jupiter", 317.8 * m, Some("#DD8665")),
        Body::planet("Io", 0.015 * m, 1.769 * DAY, 2.213, 0.0028189, Some("#EEC600")),
        Body::planet("Europa", 0.008 * m, 3.5512 * DAY, 1.791, 670900.0 * KM, Some("#80A0B1")),
        Body::planet("Ganymede", 0.025 * m, 7.1546 * DAY, 2.214, 1.07e6 * KM, Some("#AFAFAF")),
        Body::planet("Callisto", 0.018 * m, 16.689 * DAY, 2.017, 1.883e6 * KM, Some("#A0B9A1")),
    ]
}

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<Vec<Body>> {
    match name {
        "solar" => Some(solar()),
        "inner" => Some(inner()),
        "mid" => Some(mid()),
        "outer" => Some(outer()),
        "jupiter_moons" => Some(jupiter_moons()),
        _ => None,
    }
}
