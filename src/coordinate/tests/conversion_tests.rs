//! Tests for the cartesian/geodetic conversions

use std::f64::consts::{FRAC_PI_2, PI};
use approx::assert_abs_diff_eq;

use crate::coordinate::{
    cartesian_to_geodetic, geodetic_to_cartesian, CartesianPoint, CoordinateTransformer, GeodeticPoint,
};
use crate::ellipsoid::Ellipsoid;

const A: f64 = 6378137.0;
const F_GRS80: f64 = 1.0 / 298.25722210088;

// Wettzell (TIGO) station
const WETTZELL: (f64, f64, f64) = (4075579.496, 931853.192, 4801569.002);

#[test]
fn test_wettzell_reference_case() {
    let (x, y, z) = WETTZELL;
    let (phi, lambda, h) = cartesian_to_geodetic(A, F_GRS80, x, y, z);

    assert_abs_diff_eq!(phi, 0.857728298603, epsilon = 1e-9);
    assert_abs_diff_eq!(lambda, 0.224779294628, epsilon = 1e-9);
    assert_abs_diff_eq!(h, 665.9207, epsilon = 1e-3);
}

#[test]
fn test_southern_hemisphere_mirrors_latitude() {
    let (x, y, z) = WETTZELL;
    let (phi_n, lambda_n, h_n) = cartesian_to_geodetic(A, F_GRS80, x, y, z);
    let (phi_s, lambda_s, h_s) = cartesian_to_geodetic(A, F_GRS80, x, y, -z);

    assert_eq!(phi_s, -phi_n);
    assert_eq!(lambda_s, lambda_n);
    assert_eq!(h_s, h_n);
}

#[test]
fn test_north_pole() {
    let e2 = F_GRS80 * (2.0 - F_GRS80);
    let z = 6400000.0;
    let (phi, lambda, h) = cartesian_to_geodetic(A, F_GRS80, 0.0, 0.0, z);

    assert_eq!(phi, FRAC_PI_2);
    assert_eq!(lambda, 0.0);
    assert_abs_diff_eq!(h, z - A * (1.0 - e2).sqrt(), epsilon = 1e-9);
}

#[test]
fn test_south_pole() {
    let e2 = F_GRS80 * (2.0 - F_GRS80);
    let z = -6356000.0;
    let (phi, lambda, h) = cartesian_to_geodetic(A, F_GRS80, 0.0, 0.0, z);

    assert_eq!(phi, -FRAC_PI_2);
    assert_eq!(lambda, 0.0);
    assert_abs_diff_eq!(h, z.abs() - A * (1.0 - e2).sqrt(), epsilon = 1e-9);
}

#[test]
fn test_near_axis_uses_pole_branch() {
    // Axis distance far below a * 1e-16 but not zero
    let (phi, lambda, h) = cartesian_to_geodetic(A, F_GRS80, 1e-10, 0.0, 6356852.0);

    assert_eq!(phi, FRAC_PI_2);
    assert_eq!(lambda, 0.0);
    assert_abs_diff_eq!(h, 6356852.0 - A * (1.0 - F_GRS80), epsilon = 1e-6);
}

#[test]
fn test_equator_on_sphere() {
    let (phi, lambda, h) = cartesian_to_geodetic(A, 0.0, A, 0.0, 0.0);

    assert_abs_diff_eq!(phi, 0.0, epsilon = 1e-15);
    assert_eq!(lambda, 0.0);
    assert_abs_diff_eq!(h, 0.0, epsilon = 1e-9);
}

#[test]
fn test_equator_on_ellipsoid() {
    let (phi, lambda, h) = cartesian_to_geodetic(A, F_GRS80, 0.0, A + 250.0, 0.0);

    assert_abs_diff_eq!(phi, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(lambda, FRAC_PI_2, epsilon = 1e-15);
    assert_abs_diff_eq!(h, 250.0, epsilon = 1e-8);
}

#[test]
fn test_longitude_second_quadrant() {
    let (x, y, z) = WETTZELL;
    let (_, lambda, _) = cartesian_to_geodetic(A, F_GRS80, -x, y, z);

    assert!(lambda > FRAC_PI_2 && lambda <= PI);
    assert_abs_diff_eq!(lambda, PI - 0.224779294628, epsilon = 1e-9);

    // On the negative x axis longitude is exactly π
    let (_, lambda, _) = cartesian_to_geodetic(A, F_GRS80, -A, 0.0, 0.0);
    assert_eq!(lambda, PI);
}

#[test]
fn test_negative_zero_y_on_negative_x_axis_gives_plus_pi() {
    let (_, lambda, _) = cartesian_to_geodetic(A, F_GRS80, -A, -0.0, 0.0);
    assert_eq!(lambda, PI);

    let (x, _, z) = WETTZELL;
    let (_, lambda, _) = cartesian_to_geodetic(A, F_GRS80, -x, -0.0, z);
    assert_eq!(lambda, PI);
}

#[test]
fn test_geodetic_to_cartesian_known_points() {
    let (x, y, z) = geodetic_to_cartesian(A, F_GRS80, 0.0, 0.0, 0.0);
    assert_eq!((x, y, z), (A, 0.0, 0.0));

    let b = A * (1.0 - F_GRS80);
    let (x, y, z) = geodetic_to_cartesian(A, F_GRS80, FRAC_PI_2, 0.0, 10.0);
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-6);
    assert_eq!(y, 0.0);
    assert_abs_diff_eq!(z, b + 10.0, epsilon = 1e-6);

    let (x, y, z) = geodetic_to_cartesian(A, F_GRS80, 0.857728298603, 0.224779294628, 665.9207);
    assert_abs_diff_eq!(x, WETTZELL.0, epsilon = 1e-3);
    assert_abs_diff_eq!(y, WETTZELL.1, epsilon = 1e-3);
    assert_abs_diff_eq!(z, WETTZELL.2, epsilon = 1e-3);
}

#[test]
fn test_round_trip_grid() {
    let heights = [-100.0, 0.0, 665.9207, 4000.0, 10000.0];

    for lat_deg in (-89..=89).step_by(7) {
        for lon_deg in (-179..=179).step_by(11) {
            for &h in &heights {
                let lat = (lat_deg as f64).to_radians();
                let lon = (lon_deg as f64).to_radians();

                let (x, y, z) = geodetic_to_cartesian(A, F_GRS80, lat, lon, h);
                let (lat2, lon2, h2) = cartesian_to_geodetic(A, F_GRS80, x, y, z);

                assert_abs_diff_eq!(lat2, lat, epsilon = 1e-9);
                assert_abs_diff_eq!(lon2, lon, epsilon = 1e-9);
                assert_abs_diff_eq!(h2, h, epsilon = 1e-6);
            }
        }
    }
}

#[test]
fn test_transformer_carries_label() {
    let transformer = CoordinateTransformer::new(Ellipsoid::grs80());
    let (x, y, z) = WETTZELL;

    let geodetic = transformer.to_geodetic(&CartesianPoint::new(x, y, z).with_label("WTZR"));
    assert_eq!(geodetic.label.as_deref(), Some("WTZR"));
    assert_abs_diff_eq!(geodetic.latitude, 0.857728298603, epsilon = 1e-9);

    let cartesian = transformer.to_cartesian(&geodetic);
    assert_eq!(cartesian.label.as_deref(), Some("WTZR"));
    assert_abs_diff_eq!(cartesian.x, x, epsilon = 1e-6);
    assert_abs_diff_eq!(cartesian.y, y, epsilon = 1e-6);
    assert_abs_diff_eq!(cartesian.z, z, epsilon = 1e-6);
}

#[test]
fn test_transformer_matches_parametric_form() {
    let wgs84 = Ellipsoid::try_from_name("WGS84").unwrap();
    let transformer = CoordinateTransformer::new(wgs84.clone());
    let point = GeodeticPoint::from_degrees(-33.9, 151.2, 42.0);

    let cartesian = transformer.to_cartesian(&point);
    let (x, y, z) = geodetic_to_cartesian(
        wgs84.semi_major_axis(),
        wgs84.flattening(),
        point.latitude,
        point.longitude,
        point.height,
    );

    assert_abs_diff_eq!(cartesian.x, x, epsilon = 1e-8);
    assert_abs_diff_eq!(cartesian.y, y, epsilon = 1e-8);
    assert_abs_diff_eq!(cartesian.z, z, epsilon = 1e-8);
    assert!(cartesian.label.is_none());
}
