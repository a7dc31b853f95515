//! Coordinate handling for geodetic data
//!
//! This module provides point structures, angle unit conversions and the
//! transforms between geocentric cartesian and geodetic coordinates.

pub mod angle;
mod conversion;
mod point;
mod transform;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::angle::{
    AngleUnit, Sexagesimal, decimal_degrees_to_radians, radians_to_decimal_degrees,
    radians_to_sexagesimal, sexagesimal_to_radians,
};
pub use self::conversion::{cartesian_to_geodetic, geodetic_to_cartesian};
pub use self::point::{CartesianPoint, GeodeticPoint};
pub use self::transform::CoordinateTransformer;
