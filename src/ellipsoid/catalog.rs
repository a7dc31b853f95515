//! Catalog of named reference ellipsoids
//!
//! The catalog is an embedded TOML document mapping canonical ellipsoid
//! names to their defining parameters. It is parsed once on first use.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use log::error;
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the embedded TOML catalog on first lookup
    static ref ELLIPSOID_CATALOG: EllipsoidCatalog = {
        let content = include_str!("../../ellipsoids.toml");
        EllipsoidCatalog::parse(content).unwrap_or_else(|e| {
            error!("Failed to parse ellipsoid catalog: {}", e);
            EllipsoidCatalog::default()
        })
    };
}

/// Defining parameters of a catalog ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    /// Semi-major axis in meters
    pub semi_major_axis: f64,
    /// Flattening (dimensionless)
    pub flattening: f64,
}

/// Container for named ellipsoid definitions
#[derive(Debug, Default)]
pub struct EllipsoidCatalog {
    // Keyed by canonical upper-case name
    entries: BTreeMap<String, CatalogEntry>,
}

impl EllipsoidCatalog {
    /// Parse a catalog from a TOML string
    ///
    /// Every top-level table is one ellipsoid and must carry
    /// `semi_major_axis` and `inverse_flattening`. An inverse flattening
    /// of zero denotes a sphere.
    pub fn parse(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::CatalogError(format!("Failed to parse TOML: {}", e))),
        };

        let root = toml_value.as_table()
            .ok_or_else(|| GeoError::CatalogError("Catalog root is not a table".to_string()))?;

        let mut catalog = EllipsoidCatalog::default();

        for (name, definition) in root {
            let semi_major_axis = Self::read_number(definition, "semi_major_axis")
                .ok_or_else(|| GeoError::CatalogError(format!("{}: missing semi_major_axis", name)))?;
            let inverse_flattening = Self::read_number(definition, "inverse_flattening")
                .ok_or_else(|| GeoError::CatalogError(format!("{}: missing inverse_flattening", name)))?;

            let flattening = if inverse_flattening == 0.0 { 0.0 } else { 1.0 / inverse_flattening };

            catalog.entries.insert(canonical_name(name), CatalogEntry { semi_major_axis, flattening });
        }

        Ok(catalog)
    }

    /// Accept both TOML floats and integers
    fn read_number(definition: &toml::Value, key: &str) -> Option<f64> {
        let value = definition.get(key)?;
        value.as_float().or_else(|| value.as_integer().map(|i| i as f64))
    }

    /// Look up an ellipsoid by (case-insensitive) name
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(&canonical_name(name))
    }

    /// Names of all ellipsoids in the catalog, sorted
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

/// Normalize a user-supplied name to its catalog key
pub fn canonical_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Look up a name in the built-in catalog
///
/// Returns the canonical name together with the parameters.
pub fn lookup(name: &str) -> Option<(String, CatalogEntry)> {
    ELLIPSOID_CATALOG.get(name).map(|entry| (canonical_name(name), *entry))
}

/// Names of all ellipsoids in the built-in catalog
pub fn available_ellipsoids() -> Vec<String> {
    ELLIPSOID_CATALOG.names().into_iter().map(str::to_string).collect()
}
