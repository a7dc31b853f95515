//! Coordinate transformation on a selected reference ellipsoid

use super::conversion::{cartesian_to_geodetic, geodetic_to_cartesian_e2};
use super::point::{CartesianPoint, GeodeticPoint};
use crate::ellipsoid::Ellipsoid;

/// Transformer between geocentric and geodetic coordinates
///
/// The ellipsoid is chosen once at construction and used for every point.
#[derive(Debug, Clone, Default)]
pub struct CoordinateTransformer {
    ellipsoid: Ellipsoid,
}

impl CoordinateTransformer {
    /// Create a transformer for the given ellipsoid
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        CoordinateTransformer { ellipsoid }
    }

    /// The ellipsoid this transformer works on
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Convert a cartesian point to geodetic coordinates
    pub fn to_geodetic(&self, point: &CartesianPoint) -> GeodeticPoint {
        let (latitude, longitude, height) = cartesian_to_geodetic(
            self.ellipsoid.semi_major_axis(),
            self.ellipsoid.flattening(),
            point.x,
            point.y,
            point.z,
        );

        GeodeticPoint {
            latitude,
            longitude,
            height,
            label: point.label.clone(),
        }
    }

    /// Convert a geodetic point to cartesian coordinates
    pub fn to_cartesian(&self, point: &GeodeticPoint) -> CartesianPoint {
        let (x, y, z) = geodetic_to_cartesian_e2(
            self.ellipsoid.semi_major_axis(),
            self.ellipsoid.eccentricity_squared(),
            point.latitude,
            point.longitude,
            point.height,
        );

        CartesianPoint {
            x,
            y,
            z,
            label: point.label.clone(),
        }
    }
}
