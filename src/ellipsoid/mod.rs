//! Reference ellipsoids
//!
//! This module provides the ellipsoid model used by the coordinate
//! transforms and the catalog of named ellipsoids.

pub mod catalog;
mod model;

pub use self::catalog::available_ellipsoids;
pub use self::model::{Ellipsoid, EllipsoidLookup, USER_DEFINED, GRS80_FLATTENING, GRS80_SEMI_MAJOR_AXIS};
