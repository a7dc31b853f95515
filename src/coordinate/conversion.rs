//! Closed-form conversions between geocentric and geodetic coordinates
//!
//! Both functions are total over finite input with `a > 0` and
//! `0 <= f < 1`; neither iterates, so the cost per point is constant.

use std::f64::consts::{FRAC_PI_2, PI};

/// Squared axis distance, relative to a², below which a point is on the pole
const POLE_THRESHOLD: f64 = 1e-32;

/// Transform geocentric cartesian coordinates to geodetic coordinates
///
/// Uses Fukushima's transformation accelerated by Halley's method
/// (J. Geodesy (2006) 79(12): 689-693): one Newton step on a modified
/// quartic plus one Halley correction, with coefficients rescaled by `a`.
///
/// # Arguments
/// * `a` - Semi-major axis in meters
/// * `f` - Flattening
/// * `x`, `y`, `z` - Geocentric coordinates in meters
///
/// # Returns
/// `(latitude, longitude, height)` in radians, radians and meters
pub fn cartesian_to_geodetic(a: f64, f: f64, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let e2 = (2.0 - f) * f;
    let e4t = e2 * e2 * 1.5;
    let ep2 = 1.0 - e2;
    let ep = ep2.sqrt();
    let aep = a * ep;

    let p2 = x * x + y * y;

    let mut longitude = if p2 != 0.0 { y.atan2(x) } else { 0.0 };
    // atan2 gives -π for y = -0.0 on the negative x axis
    if longitude == -PI {
        longitude = PI;
    }

    // Work in the northern hemisphere; the sign is restored at the end
    let absz = z.abs();

    let (latitude, height) = if p2 > a * a * POLE_THRESHOLD {
        let p = p2.sqrt();

        // Normalize by a
        let s0 = absz / a;
        let pn = p / a;
        let zp = ep * s0;

        // Newton correction factors
        let c0 = ep * pn;
        let c02 = c0 * c0;
        let c03 = c02 * c0;
        let s02 = s0 * s0;
        let s03 = s02 * s0;
        let a02 = c02 + s02;
        let a0 = a02.sqrt();
        let a03 = a02 * a0;
        let d0 = zp * a03 + e2 * s03;
        let f0 = pn * a03 - e2 * c03;

        // Halley correction factor
        let b0 = e4t * s02 * c02 * pn * (a0 - ep);
        let s1 = d0 * f0 - b0 * s0;
        let cp = ep * (f0 * f0 - b0 * c0);

        let s12 = s1 * s1;
        let cp2 = cp * cp;
        let latitude = (s1 / cp).atan();
        let height = (p * cp + absz * s1 - a * (ep2 * s12 + cp2).sqrt()) / (s12 + cp2).sqrt();

        (latitude, height)
    } else {
        // On the rotation axis
        (FRAC_PI_2, absz - aep)
    };

    let latitude = if z < 0.0 { -latitude } else { latitude };

    (latitude, longitude, height)
}

/// Transform geodetic coordinates to geocentric cartesian coordinates
///
/// # Arguments
/// * `a` - Semi-major axis in meters
/// * `f` - Flattening
/// * `latitude`, `longitude` - Geodetic angles in radians
/// * `height` - Ellipsoidal height in meters
///
/// # Returns
/// `(x, y, z)` in meters
pub fn geodetic_to_cartesian(a: f64, f: f64, latitude: f64, longitude: f64, height: f64) -> (f64, f64, f64) {
    let e2 = 2.0 * f - f * f;
    geodetic_to_cartesian_e2(a, e2, latitude, longitude, height)
}

/// Same as [`geodetic_to_cartesian`] with eccentricity² given directly
pub(crate) fn geodetic_to_cartesian_e2(a: f64, e2: f64, latitude: f64, longitude: f64, height: f64) -> (f64, f64, f64) {
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let (sin_lon, cos_lon) = longitude.sin_cos();

    // Radius of curvature in the prime vertical
    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    let x = (n + height) * cos_lat * cos_lon;
    let y = (n + height) * cos_lat * sin_lon;
    let z = ((1.0 - e2) * n + height) * sin_lat;

    (x, y, z)
}
