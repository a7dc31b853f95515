pub mod errors;
pub mod ellipsoid;
pub mod coordinate;
pub mod io;
pub mod utils;
pub mod commands;
pub mod cli;

pub use errors::{GeoError, GeoResult};
pub use ellipsoid::{Ellipsoid, EllipsoidLookup};
pub use coordinate::{
    cartesian_to_geodetic, geodetic_to_cartesian, AngleUnit, CartesianPoint, CoordinateTransformer, GeodeticPoint,
    Sexagesimal,
};
