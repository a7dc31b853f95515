//! Reference ellipsoid model

use std::fmt;
use std::str::FromStr;
use log::{debug, warn};
use crate::errors::{GeoError, GeoResult};
use super::catalog;

/// Name tag for ellipsoids built from explicit parameters
pub const USER_DEFINED: &str = "USER-DEFINED";

/// Semi-major axis of GRS80 in meters
pub const GRS80_SEMI_MAJOR_AXIS: f64 = 6378137.0;

/// Flattening of GRS80
pub const GRS80_FLATTENING: f64 = 1.0 / 298.25722210088;

/// A reference ellipsoid defined by semi-major axis and flattening
///
/// Derived quantities are computed on demand from the two defining
/// parameters. Values are never modified after construction, except
/// through [`Ellipsoid::set_from_model`] which replaces all fields at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis in meters
    semi_major_axis: f64,
    /// Flattening (dimensionless)
    flattening: f64,
    /// Catalog name or `USER-DEFINED`
    name: String,
}

/// Outcome of a permissive catalog lookup
#[derive(Debug, Clone, PartialEq)]
pub enum EllipsoidLookup {
    /// The name was found in the catalog
    Found(Ellipsoid),
    /// The name was unknown and GRS80 was substituted
    Substituted {
        /// The name that was asked for
        requested: String,
        /// The substituted ellipsoid (GRS80)
        ellipsoid: Ellipsoid,
    },
}

impl EllipsoidLookup {
    /// The usable ellipsoid, whether found or substituted
    pub fn into_ellipsoid(self) -> Ellipsoid {
        match self {
            EllipsoidLookup::Found(ellipsoid) => ellipsoid,
            EllipsoidLookup::Substituted { ellipsoid, .. } => ellipsoid,
        }
    }

    /// Whether the fallback ellipsoid was used
    pub fn is_substituted(&self) -> bool {
        matches!(self, EllipsoidLookup::Substituted { .. })
    }
}

impl Ellipsoid {
    /// The GRS80 ellipsoid
    pub fn grs80() -> Self {
        Ellipsoid {
            semi_major_axis: GRS80_SEMI_MAJOR_AXIS,
            flattening: GRS80_FLATTENING,
            name: "GRS80".to_string(),
        }
    }

    /// Create an ellipsoid from explicit parameters
    ///
    /// No range validation is performed; callers must ensure `a > 0` and
    /// `0 <= f < 1`.
    pub fn from_parameters(semi_major_axis: f64, flattening: f64) -> Self {
        Ellipsoid {
            semi_major_axis,
            flattening,
            name: USER_DEFINED.to_string(),
        }
    }

    /// Look up an ellipsoid by name, substituting GRS80 if it is unknown
    ///
    /// The substitution is reported through the returned
    /// [`EllipsoidLookup`] and logged as a warning.
    pub fn from_name(name: &str) -> EllipsoidLookup {
        match Self::try_from_name(name) {
            Ok(ellipsoid) => EllipsoidLookup::Found(ellipsoid),
            Err(_) => {
                warn!("Unknown ellipsoid/datum: {}; using GRS80", name);
                EllipsoidLookup::Substituted {
                    requested: name.to_string(),
                    ellipsoid: Self::grs80(),
                }
            },
        }
    }

    /// Look up an ellipsoid by name, failing if it is unknown
    pub fn try_from_name(name: &str) -> GeoResult<Self> {
        let (canonical, entry) = catalog::lookup(name)
            .ok_or_else(|| GeoError::UnknownEllipsoid(name.to_string()))?;

        debug!("Resolved ellipsoid {} (a={}, f={})", canonical, entry.semi_major_axis, entry.flattening);

        Ok(Ellipsoid {
            semi_major_axis: entry.semi_major_axis,
            flattening: entry.flattening,
            name: canonical,
        })
    }

    /// Replace this ellipsoid with a catalog model
    ///
    /// On failure `self` is left untouched.
    pub fn set_from_model(&mut self, name: &str) -> GeoResult<()> {
        *self = Self::try_from_name(name)?;
        Ok(())
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// 1/f; infinite for a sphere
    pub fn inverse_flattening(&self) -> f64 {
        1.0 / self.flattening
    }

    /// b = a(1 - f)
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// e² = 2f - f²
    pub fn eccentricity_squared(&self) -> f64 {
        2.0 * self.flattening - self.flattening * self.flattening
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::grs80()
    }
}

impl FromStr for Ellipsoid {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_name(s)
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
